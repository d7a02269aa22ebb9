use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use crate::domain::entities::gesture::{GestureState, Point, SwipeDirection, SwipeEvent};
use crate::usecase::ports::haptics::HapticFeedback;

pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;
pub const DEFAULT_HAPTIC_PULSE: Duration = Duration::from_millis(50);

/// Turns one touch-start / touch-move* / touch-end sequence into at most one
/// swipe. The decision is taken only at touch-end.
pub struct SwipeGestureRecognizer {
    threshold: f64,
    pulse: Duration,
    haptics: Option<Arc<dyn HapticFeedback>>,
    gesture: Option<GestureState>,
}

impl Default for SwipeGestureRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl std::fmt::Debug for SwipeGestureRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeGestureRecognizer")
            .field("threshold", &self.threshold)
            .field("pulse", &self.pulse)
            .field("haptics", &self.haptics.is_some())
            .field("gesture", &self.gesture)
            .finish()
    }
}

impl SwipeGestureRecognizer {
    /// Negative or NaN thresholds are treated as zero so a tap still never
    /// classifies.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.max(0.0),
            pulse: DEFAULT_HAPTIC_PULSE,
            haptics: None,
            gesture: None,
        }
    }

    pub fn with_haptics(mut self, haptics: Arc<dyn HapticFeedback>, pulse: Duration) -> Self {
        self.haptics = Some(haptics);
        self.pulse = pulse;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_tracking(&self) -> bool {
        self.gesture.is_some_and(|gesture| gesture.active)
    }

    pub fn gesture(&self) -> Option<&GestureState> {
        self.gesture.as_ref()
    }

    /// Starts tracking. A gesture already in flight is dropped.
    pub fn touch_start(&mut self, position: Point) {
        if self.gesture.is_some() {
            trace!("touch-start while tracking, restarting gesture");
        }
        self.gesture = Some(GestureState::start(position));
    }

    pub fn touch_move(&mut self, position: Point) {
        match self.gesture.as_mut() {
            Some(gesture) => gesture.last_position = position,
            None => trace!("touch-move without touch-start ignored"),
        }
    }

    pub fn touch_end(&mut self) -> Option<SwipeEvent> {
        let Some(gesture) = self.gesture.take() else {
            trace!("touch-end without touch-start ignored");
            return None;
        };

        let direction = classify(&gesture, self.threshold)?;
        debug!(?direction, "swipe recognised");
        if direction.is_horizontal() {
            if let Some(haptics) = &self.haptics {
                haptics.pulse(self.pulse);
            }
        }
        Some(SwipeEvent { direction })
    }

    /// Platform cancelled the touch; nothing is emitted.
    pub fn touch_cancel(&mut self) {
        self.gesture = None;
    }
}

/// Picks the dominant axis, then requires its displacement to be strictly
/// beyond `threshold`. A tie between axes counts as vertical.
pub fn classify(gesture: &GestureState, threshold: f64) -> Option<SwipeDirection> {
    let (dx, dy) = gesture.delta();
    if dx.abs() > dy.abs() {
        if dx > threshold {
            Some(SwipeDirection::Left)
        } else if dx < -threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    } else if dy > threshold {
        Some(SwipeDirection::Up)
    } else if dy < -threshold {
        Some(SwipeDirection::Down)
    } else {
        None
    }
}

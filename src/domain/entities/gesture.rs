#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    pub fn is_horizontal(self) -> bool {
        matches!(self, SwipeDirection::Left | SwipeDirection::Right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwipeEvent {
    pub direction: SwipeDirection,
}

/// Per-gesture tracking data, alive from touch-start to touch-end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub origin: Point,
    pub last_position: Point,
    pub active: bool,
}

impl GestureState {
    pub fn start(origin: Point) -> Self {
        Self {
            origin,
            last_position: origin,
            active: true,
        }
    }

    /// Displacement measured as origin minus latest position, so a finger
    /// moving left yields a positive `dx`.
    pub fn delta(&self) -> (f64, f64) {
        (
            self.origin.x - self.last_position.x,
            self.origin.y - self.last_position.y,
        )
    }
}

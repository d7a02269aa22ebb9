use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::entities::gesture::{Point, SwipeEvent};
use crate::usecase::ports::haptics::NoHaptics;
use crate::usecase::services::swipe::SwipeGestureRecognizer;

pub fn first_touch_point(evt: &TouchEvent) -> Option<Point> {
    evt.touches().first().map(|touch| {
        let coordinates = touch.client_coordinates();
        Point::new(coordinates.x, coordinates.y)
    })
}

/// Signal-backed recognizer for one touch target. `tracking` mirrors the
/// recognizer so the view can restyle a row while it is being swiped.
#[derive(Clone, Copy)]
pub struct SwipeHandle {
    recognizer: Signal<SwipeGestureRecognizer>,
    tracking: Signal<bool>,
}

pub fn use_swipe(threshold: f64, pulse: Duration) -> SwipeHandle {
    SwipeHandle {
        recognizer: use_signal(|| {
            SwipeGestureRecognizer::new(threshold).with_haptics(Arc::new(NoHaptics), pulse)
        }),
        tracking: use_signal(|| false),
    }
}

impl SwipeHandle {
    pub fn is_tracking(&self) -> bool {
        *self.tracking.read()
    }

    pub fn touch_start(&mut self, evt: &TouchEvent) {
        if let Some(position) = first_touch_point(evt) {
            self.recognizer.write().touch_start(position);
            self.tracking.set(true);
        }
    }

    pub fn touch_move(&mut self, evt: &TouchEvent) {
        if let Some(position) = first_touch_point(evt) {
            self.recognizer.write().touch_move(position);
        }
    }

    pub fn touch_end(&mut self) -> Option<SwipeEvent> {
        let event = self.recognizer.write().touch_end();
        self.tracking.set(false);
        event
    }

    pub fn touch_cancel(&mut self) {
        self.recognizer.write().touch_cancel();
        self.tracking.set(false);
    }
}

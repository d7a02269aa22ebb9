use std::time::Duration;

/// Fire-and-forget tactile pulse on the host platform.
pub trait HapticFeedback: Send + Sync {
    fn pulse(&self, duration: Duration);
}

/// For hosts without a vibration motor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn pulse(&self, _duration: Duration) {}
}

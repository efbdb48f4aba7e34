//! Hardware abstraction traits for timekeeping, input and power.
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Clock`] | Monotonic time source in milliseconds |
//! | [`SleepButton`] | Push button polled once per tick |
//! | [`PowerControl`] | Irreversible low-power halt |
//!
//! For testing and desktop development, use the mock implementations
//! from [`crate::hal::mock`]. For ESP32 hardware, use the
//! implementations from `hal::esp32` (requires `esp32` feature).

/// Time source trait for `no_std` compatibility.
///
/// Provides monotonic time in milliseconds for tick scheduling and
/// marker animation. On embedded, use a hardware timer.
///
/// # Example
///
/// ```rust
/// use torn_travel::traits::Clock;
/// use torn_travel::hal::MockClock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.advance(100);
/// assert_eq!(clock.now_ms(), 100);
/// ```
pub trait Clock {
    /// Returns current time in milliseconds since an arbitrary epoch.
    ///
    /// Must be monotonically increasing.
    fn now_ms(&self) -> u64;
}

/// Button that requests the device to go to sleep.
///
/// Polled once per tick, before the countdown is touched.
pub trait SleepButton {
    /// Returns true while the button is held down.
    fn is_pressed(&mut self) -> bool;
}

/// Low-power control.
///
/// # Implementation Notes
///
/// - Hardware implementations enter deep sleep with no wakeup source and
///   never return; only a reset brings the device back
/// - Test doubles record the call and return
pub trait PowerControl {
    /// Halts the device.
    fn halt(&mut self);
}

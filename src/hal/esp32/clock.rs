//! Monotonic clock for the travel loop, backed by `esp_timer`.

use crate::traits::Clock;

/// Milliseconds since boot from the 64-bit `esp_timer`.
///
/// Feeds [`TickSchedule`](crate::TickSchedule) deadlines and the marker
/// animation. The timer keeps counting through WiFi and HTTP activity, so a
/// blocking fetch shows up as elapsed time rather than being lost.
///
/// # Example
///
/// ```ignore
/// use torn_travel::hal::esp32::Esp32Clock;
/// use torn_travel::traits::Clock;
/// use torn_travel::TickSchedule;
///
/// let clock = Esp32Clock::new();
/// let schedule = TickSchedule::new(1000, 500, clock.now_ms());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Esp32Clock;

impl Esp32Clock {
    /// Creates a new ESP32 clock instance.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for Esp32Clock {
    #[inline]
    fn now_ms(&self) -> u64 {
        // Safe: plain read of the free-running timer
        let micros = unsafe { esp_idf_hal::sys::esp_timer_get_time() };
        u64::try_from(micros / 1000).unwrap_or(0)
    }
}

//! Sleep button and deep-sleep power control for ESP32.
//!
//! # Wiring
//!
//! - Button between GPIO10 and GND (internal pull-up, active low)

use crate::traits::{PowerControl, SleepButton};
use esp_idf_hal::gpio::{Input, InputPin, OutputPin, PinDriver, Pull};
use esp_idf_hal::peripheral::Peripheral;
use log::info;

/// Momentary push button that puts the device to sleep.
///
/// # Example
///
/// ```ignore
/// use torn_travel::hal::esp32::Esp32SleepButton;
/// use torn_travel::traits::SleepButton;
///
/// let peripherals = Peripherals::take()?;
/// let mut button = Esp32SleepButton::new(peripherals.pins.gpio10)?;
/// if button.is_pressed() {
///     // clear display, sleep
/// }
/// ```
pub struct Esp32SleepButton<'d, P>
where
    P: InputPin + OutputPin,
{
    pin: PinDriver<'d, P, Input>,
}

impl<'d, P> Esp32SleepButton<'d, P>
where
    P: InputPin + OutputPin,
{
    /// Configures the pin as an input with the internal pull-up enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO initialization fails.
    pub fn new(pin: impl Peripheral<P = P> + 'd) -> Result<Self, esp_idf_hal::sys::EspError> {
        let mut pin = PinDriver::input(pin)?;
        pin.set_pull(Pull::Up)?;
        Ok(Self { pin })
    }
}

impl<P> SleepButton for Esp32SleepButton<'_, P>
where
    P: InputPin + OutputPin,
{
    fn is_pressed(&mut self) -> bool {
        // Active low
        self.pin.is_low()
    }
}

/// Deep sleep with no wakeup source configured.
///
/// The chip only comes back through a reset.
#[derive(Debug, Default)]
pub struct Esp32Power;

impl Esp32Power {
    /// Creates the power controller.
    pub fn new() -> Self {
        Self
    }
}

impl PowerControl for Esp32Power {
    fn halt(&mut self) {
        info!("[Power] Entering deep sleep");
        // Safe: no wakeup sources are armed, so this call does not return
        unsafe { esp_idf_hal::sys::esp_deep_sleep_start() }
    }
}

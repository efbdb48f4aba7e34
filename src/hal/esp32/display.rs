//! SSD1306 OLED display implementation for ESP32.
//!
//! Draws [`TravelView`]s into the driver's frame buffer with
//! [`crate::render`] and flushes after each call.
//!
//! # Wiring
//!
//! - SDA → GPIO8 (also has onboard LED)
//! - SCL → GPIO9 (also shared with BOOT button)
//! - VCC → 3.3V
//! - GND → GND

use crate::render::{draw_marker, draw_message, draw_view};
use crate::traits::TravelDisplay;
use crate::view::{Marker, TravelView};
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use esp_idf_hal::i2c::I2cDriver;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

/// SSD1306 display type alias for cleaner code.
type DisplayDriver<'d> = Ssd1306<
    I2CInterface<I2cDriver<'d>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// SSD1306 OLED display for ESP32.
///
/// Uses I2C on GPIO8 (SDA) and GPIO9 (SCL) to communicate with a 128x64 OLED.
/// The buffer survives between renders, so only an explicit
/// [`clear`](TravelDisplay::clear) wipes leftover text. A clear touches the
/// buffer alone and the following render flushes the finished frame, so the
/// panel never shows an empty frame in between.
pub struct Esp32Display<'d> {
    display: DisplayDriver<'d>,
}

impl<'d> Esp32Display<'d> {
    /// Creates a new display instance.
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C driver configured for GPIO8/9
    pub fn new(i2c: I2cDriver<'d>) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self { display }
    }
}

impl TravelDisplay for Esp32Display<'_> {
    type Error = DisplayError;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.display.init()?;
        self.blank()
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.display.clear(BinaryColor::Off)?;
        Ok(())
    }

    fn blank(&mut self) -> Result<(), Self::Error> {
        self.clear()?;
        self.display.flush()?;
        Ok(())
    }

    fn render(&mut self, view: &TravelView<'_>) -> Result<(), Self::Error> {
        draw_view(&mut self.display, view)?;
        self.display.flush()?;
        Ok(())
    }

    fn render_marker(&mut self, marker: &Marker) -> Result<(), Self::Error> {
        draw_marker(&mut self.display, marker)?;
        self.display.flush()?;
        Ok(())
    }

    fn show_message(&mut self, line1: &str, line2: Option<&str>) -> Result<(), Self::Error> {
        draw_message(&mut self.display, line1, line2)?;
        self.display.flush()?;
        Ok(())
    }
}

/// Display error type.
#[derive(Debug)]
pub struct DisplayError;

impl From<display_interface::DisplayError> for DisplayError {
    fn from(_: display_interface::DisplayError) -> Self {
        DisplayError
    }
}

//! ESP32-C3 SuperMini hardware abstraction layer for the travel display.
//!
//! This module provides hardware implementations for an ESP32-C3 SuperMini
//! board driving a 128x64 OLED and polling a single sleep button.
//!
//! # Hardware Configuration
//!
//! - **MCU**: ESP32-C3 SuperMini (RISC-V 160MHz, 4MB Flash)
//! - **Display**: SSD1306 128x64 OLED (I2C)
//! - **Input**: Momentary push button to GND
//!
//! # Pin Assignments
//!
//! See the [`pins`] module for GPIO assignments matching the SuperMini layout.

mod button;
mod clock;

pub use button::{Esp32Power, Esp32SleepButton};
pub use clock::Esp32Clock;

#[cfg(feature = "display")]
mod display;
#[cfg(feature = "display")]
pub use display::{DisplayError, Esp32Display};

#[cfg(feature = "wifi")]
mod wifi;
#[cfg(feature = "wifi")]
pub use wifi::Esp32Wifi;

#[cfg(feature = "esp32-http")]
mod http;
#[cfg(feature = "esp32-http")]
pub use http::Esp32HttpClient;

/// Pin assignments for SuperMini ESP32-C3.
pub mod pins {
    // =========================================================================
    // I2C Display (SSD1306)
    // =========================================================================

    /// I2C data line (also has onboard blue LED - will flicker during I2C)
    pub const I2C_SDA: i32 = 8;

    /// I2C clock line (also shared with BOOT button - only affects programming)
    pub const I2C_SCL: i32 = 9;

    /// Default I2C address for SSD1306 OLED
    pub const OLED_I2C_ADDR: u8 = 0x3C;

    // =========================================================================
    // Sleep Button
    // =========================================================================

    /// Sleep button (active low, internal pull-up)
    pub const SLEEP_BUTTON: i32 = 10;
}

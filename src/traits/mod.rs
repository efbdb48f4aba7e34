//! Trait definitions for hardware abstraction and networking.
//!
//! This module defines the seams that let torn-travel:
//! - Run on the ESP32 or on a desktop with mocks
//! - Swap the HTTP transport without touching the fetch/parse logic
//! - Render the same [`TravelView`](crate::TravelView) on any display
//!
//! # Submodules
//!
//! - `hardware`: Clock, sleep button, power control
//! - `network`: HTTP client and status source traits
//! - `display`: Display rendering trait
//!
//! # Hardware Abstraction
//!
//! - [`Clock`]: Monotonic millisecond time source
//! - [`SleepButton`]: Button that halts the device
//! - [`PowerControl`]: Low-power halt
//!
//! # Networking
//!
//! - [`HttpClient`]: One blocking GET, returns status and body
//! - [`StatusSource`]: Anything that yields a fresh [`TravelStatus`](crate::TravelStatus)

pub mod display;
pub mod hardware;
pub mod network;

pub use display::*;
pub use hardware::*;
pub use network::*;

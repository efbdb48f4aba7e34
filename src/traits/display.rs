//! Display abstraction for travel status visualization.
//!
//! This module defines the [`TravelDisplay`] trait for rendering a
//! [`TravelView`] to various display devices (OLED, simulated, etc.).

use crate::view::{Marker, TravelView};

/// Display trait for rendering travel status.
///
/// Implementors keep their frame between calls: [`render`](Self::render)
/// overwrites the regions it owns without wiping the rest of the screen.
/// Stale text left behind by a layout change is removed only by an explicit
/// [`clear`](Self::clear), which the monitor issues when the fetched record
/// or the layout changes. `clear` wipes the frame being composed and must not
/// show anything on its own; the next `render` presents the result in one
/// step. [`blank`](Self::blank) is the visible variant used before a halt.
///
/// # Example
///
/// ```ignore
/// use torn_travel::traits::TravelDisplay;
/// use torn_travel::{Marker, TravelView};
///
/// struct MyDisplay { /* ... */ }
///
/// impl TravelDisplay for MyDisplay {
///     type Error = ();
///
///     fn init(&mut self) -> Result<(), ()> { Ok(()) }
///     fn clear(&mut self) -> Result<(), ()> { Ok(()) }
///     fn blank(&mut self) -> Result<(), ()> { Ok(()) }
///     fn render(&mut self, view: &TravelView<'_>) -> Result<(), ()> {
///         // Draw header, countdown or status label...
///         Ok(())
///     }
///     fn render_marker(&mut self, marker: &Marker) -> Result<(), ()> { Ok(()) }
///     fn show_message(&mut self, line1: &str, line2: Option<&str>) -> Result<(), ()> {
///         Ok(())
///     }
/// }
/// ```
pub trait TravelDisplay {
    /// Error type for display operations.
    type Error: core::fmt::Debug;

    /// Initializes the display hardware.
    ///
    /// Called once at startup, before the splash message.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Wipes the frame being composed.
    ///
    /// Always followed by [`render`](Self::render); buffered panels should
    /// not push the empty frame out, or every change would flash blank.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Wipes the panel and shows the empty frame immediately.
    fn blank(&mut self) -> Result<(), Self::Error>;

    /// Renders the full reconciled view.
    ///
    /// Called once per tick. Implementations should draw:
    /// - The header (destination, arrival text or error)
    /// - The countdown and marker while travelling
    /// - The status label while idle
    fn render(&mut self, view: &TravelView<'_>) -> Result<(), Self::Error>;

    /// Redraws only the direction marker band.
    ///
    /// Called on the animation sub-tick between full renders.
    fn render_marker(&mut self, marker: &Marker) -> Result<(), Self::Error>;

    /// Shows a simple message (e.g., for startup or WiFi status).
    ///
    /// # Arguments
    ///
    /// * `line1` - First line of text
    /// * `line2` - Optional second line of text
    fn show_message(&mut self, line1: &str, line2: Option<&str>) -> Result<(), Self::Error>;
}

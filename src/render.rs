//! Frame rendering with embedded-graphics.
//!
//! Draws a [`TravelView`] onto any monochrome [`DrawTarget`]: the SSD1306
//! buffer on hardware, an in-memory framebuffer in tests.
//!
//! Each row is erased and redrawn in place, so a full render never blanks the
//! screen. Rows that a different layout leaves untouched keep their old
//! pixels until the caller clears the target.
//!
//! # Layout (128x64)
//!
//! | Rows | Travelling | Idle |
//! |------|------------|------|
//! | 0-9 | header, centered | header, centered |
//! | 12-21 | | "No travel detected :(" (home only) |
//! | 20-39 | countdown, 10x20 font, centered | |
//! | 26-35 | | "Status:" |
//! | 38-57 | | status label, 10x20 font |
//! | 46-57 | marker band | |

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoFont, MonoTextStyle, MonoTextStyleBuilder,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, Triangle},
    text::{Baseline, Text},
};

use crate::status::{format_countdown, TravelDirection};
use crate::view::{Body, Marker, TravelView, STATUS_LABEL};

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

const HEADER_Y: i32 = 0;
const SUBTITLE_Y: i32 = 12;
const COUNTDOWN_Y: i32 = 20;
const STATUS_LABEL_Y: i32 = 26;
const STATUS_Y: i32 = 38;

/// Horizontal band the direction marker sweeps across.
pub const MARKER_BAND: Rectangle = Rectangle::new(Point::new(4, 46), Size::new(120, 12));

/// Marker triangle width and height.
const MARKER_SIZE: u32 = 10;

fn text_style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(BinaryColor::On)
        .background_color(BinaryColor::Off)
        .build()
}

/// Width in pixels of `text` drawn in `font`.
pub fn text_width(text: &str, font: &MonoFont<'_>) -> u32 {
    let chars = text.chars().count() as u32;
    chars * (font.character_size.width + font.character_spacing)
}

/// X offset that centers `width` pixels on the screen; 0 if it does not fit.
pub fn centered_x(width: u32) -> i32 {
    if width >= SCREEN_WIDTH {
        0
    } else {
        ((SCREEN_WIDTH - width) / 2) as i32
    }
}

/// Erases one text row across the full width and draws `text` in it.
fn draw_row<D>(
    target: &mut D,
    text: &str,
    font: &'static MonoFont<'static>,
    y: i32,
    centered: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let row = Rectangle::new(
        Point::new(0, y),
        Size::new(SCREEN_WIDTH, font.character_size.height),
    );
    target.fill_solid(&row, BinaryColor::Off)?;

    let x = if centered {
        centered_x(text_width(text, font))
    } else {
        0
    };
    Text::with_baseline(text, Point::new(x, y), text_style(font), Baseline::Top).draw(target)?;
    Ok(())
}

/// Draws a full view.
///
/// # Errors
///
/// Returns the target's error if any draw call fails.
pub fn draw_view<D>(target: &mut D, view: &TravelView<'_>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_row(target, &view.header.text(), &FONT_6X10, HEADER_Y, true)?;

    if let Some(subtitle) = view.subtitle {
        draw_row(target, subtitle, &FONT_6X10, SUBTITLE_Y, true)?;
    }

    match &view.body {
        Body::Countdown {
            seconds_remaining,
            marker,
        } => {
            let countdown = format_countdown(*seconds_remaining);
            draw_row(target, countdown.as_str(), &FONT_10X20, COUNTDOWN_Y, true)?;
            draw_marker(target, marker)?;
        }
        Body::Status(state) => {
            draw_row(target, STATUS_LABEL, &FONT_6X10, STATUS_LABEL_Y, false)?;
            draw_row(target, state, &FONT_10X20, STATUS_Y, false)?;
        }
    }

    Ok(())
}

/// Erases the marker band and draws the marker at its slot.
///
/// Outbound markers point right, returning markers point left.
pub fn draw_marker<D>(target: &mut D, marker: &Marker) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.fill_solid(&MARKER_BAND, BinaryColor::Off)?;

    let slots = u32::from(marker.positions.max(1));
    let travel = MARKER_BAND.size.width - MARKER_SIZE;
    let offset = if slots > 1 {
        let last = marker.positions.max(1) - 1;
        travel * u32::from(marker.position.min(last)) / (slots - 1)
    } else {
        0
    };

    let left = MARKER_BAND.top_left.x + offset as i32;
    let right = left + MARKER_SIZE as i32 - 1;
    let top = MARKER_BAND.top_left.y + 1;
    let bottom = top + MARKER_SIZE as i32 - 1;
    let middle = (top + bottom) / 2;

    let triangle = match marker.direction {
        TravelDirection::Outbound => Triangle::new(
            Point::new(left, top),
            Point::new(left, bottom),
            Point::new(right, middle),
        ),
        TravelDirection::Returning => Triangle::new(
            Point::new(right, top),
            Point::new(right, bottom),
            Point::new(left, middle),
        ),
    };

    triangle
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target)
}

/// Clears the target and draws one or two lines of plain text.
pub fn draw_message<D>(target: &mut D, line1: &str, line2: Option<&str>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    let style = text_style(&FONT_6X10);
    Text::new(line1, Point::new(4, 24), style).draw(target)?;

    if let Some(l2) = line2 {
        Text::new(l2, Point::new(4, 40), style).draw(target)?;
    }

    Ok(())
}

// src/ui/surface.rs
//! Drawing-surface helpers over an embedded-graphics `DrawTarget`
//!
//! Every widget draws through these few primitives so that float geometry is
//! snapped to pixels in exactly one place.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use super::geometry::{Rect, Vec2};

/// Fill a rectangle with a solid color
pub fn fill_rect<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    rect: Rect,
    color: Rgb565,
) -> Result<(), D::Error> {
    rect.to_rectangle()
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
}

/// Outline a rectangle
pub fn stroke_rect<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    rect: Rect,
    color: Rgb565,
    width: u32,
) -> Result<(), D::Error> {
    rect.to_rectangle()
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
}

/// Fill a rectangle with rounded corners
pub fn fill_rounded_rect<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    rect: Rect,
    radius: u32,
    color: Rgb565,
) -> Result<(), D::Error> {
    RoundedRectangle::with_equal_corners(rect.to_rectangle(), Size::new(radius, radius))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
}

/// Draw a straight line
pub fn line<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    start: Vec2,
    end: Vec2,
    color: Rgb565,
    width: u32,
) -> Result<(), D::Error> {
    Line::new(start.to_point(), end.to_point())
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
}

/// Fill a circle given its center and radius
pub fn fill_circle<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    center: Vec2,
    radius: u32,
    color: Rgb565,
) -> Result<(), D::Error> {
    Circle::with_center(center.to_point(), radius * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
}

/// Draw text with its top-left corner at `position`
pub fn text<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    content: &str,
    position: Vec2,
    color: Rgb565,
) -> Result<(), D::Error> {
    let style = MonoTextStyle::new(&FONT_6X10, color);
    Text::with_baseline(content, position.to_point(), style, Baseline::Top).draw(display)?;
    Ok(())
}

/// Draw text centered inside a rectangle
pub fn text_centered<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    content: &str,
    rect: Rect,
    color: Rgb565,
) -> Result<(), D::Error> {
    let style = MonoTextStyle::new(&FONT_6X10, color);
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();

    Text::with_text_style(content, rect.center().to_point(), style, text_style).draw(display)?;
    Ok(())
}

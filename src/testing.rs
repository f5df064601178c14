// src/testing.rs
//! Draw-target test double
//!
//! Counts the pixels it receives and remembers the last color written at each
//! in-bounds coordinate, which is enough to assert that something was drawn
//! where it should be.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::geometry::Canvas;

pub struct CountingTarget {
    width: u32,
    height: u32,
    pixels: Vec<Option<Rgb565>>,
    pub drawn: usize,
}

impl CountingTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; (width * height) as usize],
            drawn: 0,
        }
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::of(self)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize]
    }
}

impl OriginDimensions for CountingTarget {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for CountingTarget {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.drawn += 1;
            if coord.x >= 0
                && coord.y >= 0
                && (coord.x as u32) < self.width
                && (coord.y as u32) < self.height
            {
                let index = (coord.y as u32 * self.width + coord.x as u32) as usize;
                self.pixels[index] = Some(color);
            }
        }
        Ok(())
    }
}

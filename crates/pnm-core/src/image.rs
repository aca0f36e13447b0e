/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The decoded image representation
use crate::errors::CoreError;
use crate::format::FormatTag;
use crate::rotation::Rotation;

/// A pixel, always three components in `0..=255`.
///
/// Bilevel and grayscale images store the same value
/// in all three components.
pub type Pixel = [u8; 3];

pub const BLACK: Pixel = [0, 0, 0];
pub const WHITE: Pixel = [255, 255, 255];

/// A fully decoded Netpbm image.
///
/// Pixels are stored row major, `width * height` of them,
/// so every row has exactly `width` pixels.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageRecord
{
    format_tag:      FormatTag,
    width:           usize,
    height:          usize,
    max_color_value: u32,
    pixels:          Vec<Pixel>
}

impl ImageRecord
{
    /// Create a new image record
    ///
    /// # Errors
    /// - Zero width, height or max color value
    /// - `pixels.len()` not equal to `width * height`
    pub fn new(
        format_tag: FormatTag, width: usize, height: usize, max_color_value: u32,
        pixels: Vec<Pixel>
    ) -> Result<ImageRecord, CoreError>
    {
        if width == 0 || height == 0
        {
            return Err(CoreError::ZeroDimensions { width, height });
        }
        if max_color_value == 0
        {
            return Err(CoreError::ZeroMaxValue);
        }
        if width.checked_mul(height) != Some(pixels.len())
        {
            return Err(CoreError::InvalidGrid {
                width,
                height,
                found: pixels.len()
            });
        }
        Ok(ImageRecord {
            format_tag,
            width,
            height,
            max_color_value,
            pixels
        })
    }

    /// The tag the image was decoded from
    pub const fn format_tag(&self) -> FormatTag
    {
        self.format_tag
    }

    pub const fn width(&self) -> usize
    {
        self.width
    }

    pub const fn height(&self) -> usize
    {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize)
    {
        (self.width, self.height)
    }

    /// The max color value declared in the source header, 1 for bilevel images
    pub const fn max_color_value(&self) -> u32
    {
        self.max_color_value
    }

    /// All pixels, row major
    pub fn pixels(&self) -> &[Pixel]
    {
        &self.pixels
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_
    {
        self.pixels.chunks_exact(self.width)
    }

    pub fn row(&self, y: usize) -> Option<&[Pixel]>
    {
        if y >= self.height
        {
            return None;
        }
        let start = y * self.width;
        self.pixels.get(start..start + self.width)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel>
    {
        if x >= self.width
        {
            return None;
        }
        self.row(y).map(|row| row[x])
    }

    /// Return a new image with `rotation` applied.
    ///
    /// Width and height are swapped for 90 and 270 degrees.
    /// The tag and max color value are carried over unchanged.
    pub fn rotated(&self, rotation: Rotation) -> ImageRecord
    {
        let (width, height) = rotation.displayed_dimensions(self.width, self.height);
        let mut pixels = Vec::with_capacity(self.pixels.len());

        for y in 0..height
        {
            for x in 0..width
            {
                let (sx, sy) = rotation.source_coordinates(x, y, width, height);
                pixels.push(self.pixels[sy * self.width + sx]);
            }
        }

        ImageRecord {
            format_tag: self.format_tag,
            width,
            height,
            max_color_value: self.max_color_value,
            pixels
        }
    }
}

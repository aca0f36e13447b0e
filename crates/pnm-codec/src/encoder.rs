/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use log::{debug, trace};
use pnm_core::options::{BilevelPacking, EncoderOptions};
use pnm_core::{Encoding, Family, FormatTag, ImageRecord, Pixel};

use crate::errors::EncodeErrors;

/// Gray value of a pixel, the integer mean of its components
#[inline]
pub fn luminance(pixel: Pixel) -> u8
{
    let sum = u16::from(pixel[0]) + u16::from(pixel[1]) + u16::from(pixel[2]);

    (sum / 3) as u8
}

/// Whether a pixel is written as a set (dark) bit in bilevel output.
///
/// A pixel is dark when the mean of its components is below 127.
#[inline]
pub fn is_dark(pixel: Pixel) -> bool
{
    let sum = u16::from(pixel[0]) + u16::from(pixel[1]) + u16::from(pixel[2]);

    sum < 127 * 3
}

/// A Netpbm encoder
///
/// The header always declares a max color value of 255
/// for grayscale and color targets.
pub struct PnmEncoder<'a, W: Write>
{
    writer:  &'a mut W,
    options: EncoderOptions
}

impl<'a, W: Write> PnmEncoder<'a, W>
{
    /// Create a new encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PnmEncoder<'a, W>
    {
        PnmEncoder::new_with_options(EncoderOptions::default(), writer)
    }

    pub fn new_with_options(options: EncoderOptions, writer: &'a mut W) -> PnmEncoder<'a, W>
    {
        Self { writer, options }
    }

    /// Encode `image` in the layout of `version`
    pub fn encode(&mut self, image: &ImageRecord, version: FormatTag) -> Result<(), EncodeErrors>
    {
        debug!(
            "Encoding {}x{} {} image as {}",
            image.width(),
            image.height(),
            image.format_tag(),
            version
        );
        self.write_headers(version, image.width(), image.height())?;

        match version.encoding()
        {
            Encoding::Ascii => self.write_ascii(image, version.family()),
            Encoding::Binary => self.write_binary(image, version.family())
        }
    }

    fn write_headers(
        &mut self, version: FormatTag, width: usize, height: usize
    ) -> Result<(), EncodeErrors>
    {
        let header = if version.family().has_max_value()
        {
            format!("{version}\n{width} {height}\n255\n")
        }
        else
        {
            format!("{version}\n{width} {height}\n")
        };
        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// One line per row, tokens separated by a single space
    fn write_ascii(&mut self, image: &ImageRecord, family: Family) -> Result<(), EncodeErrors>
    {
        let tokens_per_row = image.width() * family.num_components();
        let mut line = String::with_capacity(tokens_per_row * 4);

        for row in image.rows()
        {
            line.clear();

            for pixel in row
            {
                match family
                {
                    Family::Bilevel => push_token(&mut line, u8::from(is_dark(*pixel))),
                    Family::Grayscale => push_token(&mut line, luminance(*pixel)),
                    Family::Color =>
                    {
                        for component in pixel
                        {
                            push_token(&mut line, *component);
                        }
                    }
                }
            }
            line.push('\n');
            self.writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    fn write_binary(&mut self, image: &ImageRecord, family: Family) -> Result<(), EncodeErrors>
    {
        let mut row_bytes = Vec::with_capacity(image.width() * family.num_components());

        if family == Family::Bilevel
        {
            trace!("Bilevel packing: {:?}", self.options.bilevel_packing);
        }

        for row in image.rows()
        {
            row_bytes.clear();

            match family
            {
                Family::Bilevel => match self.options.bilevel_packing
                {
                    BilevelPacking::Packed =>
                    {
                        row_bytes.extend(row.chunks(8).map(pack_bits));
                    }
                    BilevelPacking::BytePerPixel =>
                    {
                        row_bytes.extend(row.iter().map(|pixel| u8::from(is_dark(*pixel))));
                    }
                },
                Family::Grayscale => row_bytes.extend(row.iter().map(|pixel| luminance(*pixel))),
                Family::Color => row_bytes.extend(row.iter().flatten())
            }
            self.writer.write_all(&row_bytes)?;
        }
        Ok(())
    }
}

/// Pack up to eight pixels into a byte, first pixel in the most significant bit
fn pack_bits(pixels: &[Pixel]) -> u8
{
    pixels
        .iter()
        .enumerate()
        .fold(0, |byte, (i, pixel)| byte | (u8::from(is_dark(*pixel)) << (7 - i)))
}

fn push_token(line: &mut String, value: u8)
{
    if !line.is_empty()
    {
        line.push(' ');
    }
    if value >= 100
    {
        line.push(char::from(b'0' + value / 100));
    }
    if value >= 10
    {
        line.push(char::from(b'0' + (value / 10) % 10));
    }
    line.push(char::from(b'0' + value % 10));
}

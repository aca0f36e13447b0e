/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder and encoder options
//!
//! To remove the annoyance of getters and setters
//! all exposed options are declared public, the `set_*`
//! methods exist for builder style construction.

/// Decoder options
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions
{
    /// Maximum width for which the decoder will
    /// not try to decode images larger than it.
    ///
    /// - Default value: 16384
    pub max_width:   usize,
    /// Maximum height for which the decoder will
    /// not try to decode images larger than it.
    ///
    /// - Default value: 16384
    pub max_height:  usize,
    /// Treat an extension that disagrees with the tag
    /// family as an error.
    ///
    /// When set to false, the mismatch is logged and the
    /// tag found in the file wins.
    ///
    /// - Default value: false
    pub strict_mode: bool
}

impl Default for DecoderOptions
{
    fn default() -> Self
    {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false
        }
    }
}

impl DecoderOptions
{
    #[must_use]
    pub const fn set_max_width(mut self, width: usize) -> Self
    {
        self.max_width = width;
        self
    }

    #[must_use]
    pub const fn set_max_height(mut self, height: usize) -> Self
    {
        self.max_height = height;
        self
    }

    #[must_use]
    pub const fn set_strict_mode(mut self, yes: bool) -> Self
    {
        self.strict_mode = yes;
        self
    }
}

/// Layout of the binary bilevel (`P4`) payload written by the encoder
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum BilevelPacking
{
    /// One byte holding 0 or 1 per pixel, no padding.
    #[default]
    BytePerPixel,
    /// Eight pixels per byte, most significant bit first,
    /// each row padded to a whole byte.
    ///
    /// This is the layout the decoder reads.
    Packed
}

/// Encoder options
#[derive(Debug, Copy, Clone, Default)]
pub struct EncoderOptions
{
    /// - Default value: [`BilevelPacking::BytePerPixel`]
    pub bilevel_packing: BilevelPacking
}

impl EncoderOptions
{
    #[must_use]
    pub const fn set_bilevel_packing(mut self, packing: BilevelPacking) -> Self
    {
        self.bilevel_packing = packing;
        self
    }
}

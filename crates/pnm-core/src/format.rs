/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Netpbm format tags and the information they carry.
use core::fmt::{Display, Formatter};
use core::str::FromStr;

use crate::errors::CoreError;

/// The six Netpbm format tags.
///
/// The tag is the first header field of every Netpbm file,
/// it determines both the family of the image and how
/// the payload following the header is laid out.
///
/// Odd tags store their payload as ASCII decimal tokens,
/// even tags store it as raw bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FormatTag
{
    /// Bilevel, ASCII payload
    P1,
    /// Grayscale, ASCII payload
    P2,
    /// Color, ASCII payload
    P3,
    /// Bilevel, bit packed binary payload
    P4,
    /// Grayscale, binary payload
    P5,
    /// Color, binary payload
    P6
}

/// Image family, determined by the tag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Family
{
    /// One bit per pixel, `.pbm`
    Bilevel,
    /// One channel, `.pgm`
    Grayscale,
    /// Three channels, `.ppm`
    Color
}

/// Payload encoding, determined by the tag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Encoding
{
    Ascii,
    Binary
}

impl FormatTag
{
    /// All tags, in numeric order
    pub const ALL: [FormatTag; 6] = [
        FormatTag::P1,
        FormatTag::P2,
        FormatTag::P3,
        FormatTag::P4,
        FormatTag::P5,
        FormatTag::P6
    ];

    pub const fn family(self) -> Family
    {
        match self
        {
            FormatTag::P1 | FormatTag::P4 => Family::Bilevel,
            FormatTag::P2 | FormatTag::P5 => Family::Grayscale,
            FormatTag::P3 | FormatTag::P6 => Family::Color
        }
    }

    pub const fn encoding(self) -> Encoding
    {
        match self
        {
            FormatTag::P1 | FormatTag::P2 | FormatTag::P3 => Encoding::Ascii,
            FormatTag::P4 | FormatTag::P5 | FormatTag::P6 => Encoding::Binary
        }
    }

    pub const fn as_str(self) -> &'static str
    {
        match self
        {
            FormatTag::P1 => "P1",
            FormatTag::P2 => "P2",
            FormatTag::P3 => "P3",
            FormatTag::P4 => "P4",
            FormatTag::P5 => "P5",
            FormatTag::P6 => "P6"
        }
    }
}

impl Display for FormatTag
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatTag
{
    type Err = CoreError;

    /// Parse a tag, the match is exact, `p3` or `P3 ` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        FormatTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| CoreError::UnknownTargetTag(s.to_string()))
    }
}

impl Family
{
    /// File extension used for this family, without the leading dot
    pub const fn extension(self) -> &'static str
    {
        match self
        {
            Family::Bilevel => "pbm",
            Family::Grayscale => "pgm",
            Family::Color => "ppm"
        }
    }

    /// Map a file extension to a family.
    ///
    /// A leading dot is accepted and the comparison ignores ASCII case.
    pub fn from_extension(extension: &str) -> Option<Family>
    {
        let extension = extension.strip_prefix('.').unwrap_or(extension);

        [Family::Bilevel, Family::Grayscale, Family::Color]
            .into_iter()
            .find(|family| family.extension().eq_ignore_ascii_case(extension))
    }

    /// Number of samples stored per pixel in the payload
    pub const fn num_components(self) -> usize
    {
        match self
        {
            Family::Bilevel | Family::Grayscale => 1,
            Family::Color => 3
        }
    }

    /// Whether the header carries a max color value line
    pub const fn has_max_value(self) -> bool
    {
        !matches!(self, Family::Bilevel)
    }
}

impl Display for Family
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        match self
        {
            Family::Bilevel => write!(f, "bilevel"),
            Family::Grayscale => write!(f, "grayscale"),
            Family::Color => write!(f, "color")
        }
    }
}

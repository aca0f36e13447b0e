/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Netpbm decoder and encoder
//!
//! Supports all six classic Netpbm formats
//!
//! | tag | family    | payload |
//! |-----|-----------|---------|
//! | P1  | bilevel   | ASCII   |
//! | P2  | grayscale | ASCII   |
//! | P3  | color     | ASCII   |
//! | P4  | bilevel   | binary, 8 pixels per byte |
//! | P5  | grayscale | binary  |
//! | P6  | color     | binary  |
//!
//! Decoded images are [`ImageRecord`]s with every sample rescaled
//! from the header's max color value to `0..=255`.
//! The encoder always writes a max color value of 255. P4 output uses one
//! byte per pixel unless [`BilevelPacking::Packed`] is requested.
//!
//! [`BilevelPacking::Packed`]: pnm_core::options::BilevelPacking::Packed
//!
//! # Example
//! ```
//! use pnm_codec::pnm_core::FormatTag;
//!
//! let image = pnm_codec::decode(b"P2\n2 1\n15\n0 15\n", "pgm").unwrap();
//! assert_eq!(image.pixels(), &[[0, 0, 0], [255, 255, 255]]);
//!
//! let mut out = vec![];
//! pnm_codec::PnmEncoder::new(&mut out).encode(&image, FormatTag::P5).unwrap();
//! assert_eq!(out, b"P5\n2 1\n255\n\x00\xff");
//! ```
use std::path::{Path, PathBuf};

pub use decoder::{PnmDecoder, PnmHeader};
pub use destination::{encode_to_directory, resolve_destination, validate_name};
pub use encoder::{is_dark, luminance, PnmEncoder};
pub use errors::{DecodeErrors, EncodeErrors};
pub use pnm_core;
use pnm_core::options::{DecoderOptions, EncoderOptions};
use pnm_core::{Family, FormatTag, ImageRecord};

mod decoder;
mod destination;
mod encoder;
mod errors;

/// Decode `data` read from a file with the given extension
///
/// The extension must be `pbm`, `pgm` or `ppm` (a leading dot is fine),
/// but the tag inside the data decides how it is decoded.
pub fn decode(data: &[u8], extension: &str) -> Result<ImageRecord, DecodeErrors>
{
    decode_with_options(data, extension, DecoderOptions::default())
}

pub fn decode_with_options(
    data: &[u8], extension: &str, options: DecoderOptions
) -> Result<ImageRecord, DecodeErrors>
{
    let mut decoder = PnmDecoder::new_with_options(options, data);
    decoder.set_extension(extension)?;
    decoder.decode()
}

/// Read and decode a file.
///
/// The extension is checked before the file is opened.
pub fn decode_file<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<ImageRecord, DecodeErrors>
{
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default();

    if Family::from_extension(extension).is_none()
    {
        return Err(DecodeErrors::UnsupportedExtension(extension.to_string()));
    }
    let data = std::fs::read(path)?;

    decode_with_options(&data, extension, options)
}

/// Encode `image` as `version` into `destination_name` plus the family
/// extension, relative to the current directory.
///
/// Returns the path of the new file.
pub fn encode(
    image: &ImageRecord, version: FormatTag, destination_name: &str
) -> Result<PathBuf, EncodeErrors>
{
    encode_to_directory(
        image,
        version,
        Path::new(""),
        destination_name,
        EncoderOptions::default()
    )
}

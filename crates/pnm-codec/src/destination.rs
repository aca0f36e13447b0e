/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Writing encoded images to new files
use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::info;
use pnm_core::options::EncoderOptions;
use pnm_core::{FormatTag, ImageRecord};

use crate::encoder::PnmEncoder;
use crate::errors::EncodeErrors;

/// Characters a destination base name may not contain
pub const ILLEGAL_NAME_CHARACTERS: &[char] = &[
    '#', '%', '&', '}', '{', '\\', '<', '>', '*', '?', '/', ' ', '$', '!', '`', '"', ':', '@', '+',
    '|', '=', '\''
];

/// Check that `name` is non-empty and has no illegal characters
pub fn validate_name(name: &str) -> Result<(), EncodeErrors>
{
    if name.is_empty() || name.contains(ILLEGAL_NAME_CHARACTERS)
    {
        return Err(EncodeErrors::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Resolve the path `name` will be written to inside `directory`.
///
/// The extension comes from the family of `version`.
///
/// # Errors
/// - [`EncodeErrors::AlreadyExists`] if the path is taken
/// - [`EncodeErrors::InvalidName`] if `name` is not a valid base name
pub fn resolve_destination(
    directory: &Path, name: &str, version: FormatTag
) -> Result<PathBuf, EncodeErrors>
{
    let path = directory.join(format!("{name}.{}", version.family().extension()));

    if path.exists()
    {
        return Err(EncodeErrors::AlreadyExists(path));
    }
    validate_name(name)?;

    Ok(path)
}

/// Encode `image` as `version` into a new file named `name` plus the
/// family extension, inside `directory`.
///
/// Existing files are never overwritten. Returns the path written.
pub fn encode_to_directory(
    image: &ImageRecord, version: FormatTag, directory: &Path, name: &str,
    options: EncoderOptions
) -> Result<PathBuf, EncodeErrors>
{
    let path = resolve_destination(directory, name, version)?;

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|err| match err.kind()
        {
            ErrorKind::AlreadyExists => EncodeErrors::AlreadyExists(path.clone()),
            _ => EncodeErrors::Io(err)
        })?;
    let mut writer = BufWriter::new(file);

    PnmEncoder::new_with_options(options, &mut writer).encode(image, version)?;
    writer.flush()?;

    info!("Wrote {:?}", path);

    Ok(path)
}

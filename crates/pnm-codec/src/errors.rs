/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when decoding and encoding Netpbm images
use std::io;
use std::path::PathBuf;

use pnm_core::{CoreError, FormatTag};

/// Errors occurring during decoding
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeErrors
{
    #[error("unsupported file extension {0:?}, expected .pbm, .pgm or .ppm")]
    UnsupportedExtension(String),

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("truncated payload, expected {expected} pixels but found {found}")]
    TruncatedPayload
    {
        expected: usize, found: usize
    },

    #[error("{0} unexpected payload items after the last row")]
    TrailingPayload(usize),

    #[error("invalid payload token {0:?}")]
    InvalidToken(String),

    #[error("too large dimensions, expected a value less than {expected} but found {found}")]
    LargeDimensions
    {
        expected: usize, found: usize
    },

    #[error("extension .{extension} does not match the {tag} tag found in the file")]
    ExtensionMismatch
    {
        extension: String, tag: FormatTag
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error)
}

/// Errors occurring during encoding
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeErrors
{
    #[error("an existing file is already named {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("file name {0:?} is empty or contains illegal characters")]
    InvalidName(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error)
}

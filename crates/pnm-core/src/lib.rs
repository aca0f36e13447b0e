/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the pnm decoder, encoder and viewer
//!
//! This crate provides the data model every other crate in the
//! workspace agrees on
//!
//! It currently contains
//!
//! - The six Netpbm format tags and the family/encoding they imply
//! - The decoded image record and its pixel type
//! - Linear rescaling of samples into the `0..=255` range
//! - Display rotations and their coordinate mapping
//! - Decoder and encoder options
//!
//! # Features
//!  - `serde`: Enables serializing of the format enums
pub mod errors;
pub mod format;
pub mod image;
pub mod options;
pub mod rescale;
pub mod rotation;
pub mod serde;

pub use errors::CoreError;
pub use format::{Encoding, Family, FormatTag};
pub use image::{ImageRecord, Pixel, BLACK, WHITE};
pub use rescale::rescale;
pub use rotation::Rotation;

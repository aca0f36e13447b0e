/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use pnm_codec::{DecodeErrors, PnmDecoder, PnmHeader};
use pnm_core::options::DecoderOptions;
use pnm_core::{Family, ImageRecord};

/// An input file and the options used to decode it
pub struct PnmFile {
    file_path: PathBuf,
    options:   DecoderOptions
}

impl PnmFile {
    pub fn new(file_path: PathBuf, options: DecoderOptions) -> PnmFile {
        PnmFile { file_path, options }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn extension(&self) -> &str {
        self.file_path
            .extension()
            .and_then(|x| x.to_str())
            .unwrap_or_default()
    }

    /// Read only the header, returning it with the size of the file
    pub fn read_headers(&self) -> Result<(PnmHeader, u64), DecodeErrors> {
        let extension = self.extension();

        if Family::from_extension(extension).is_none() {
            return Err(DecodeErrors::UnsupportedExtension(extension.to_string()));
        }
        let data = fs::read(&self.file_path)?;
        let mut decoder = PnmDecoder::new_with_options(self.options, &data);
        decoder.set_extension(extension)?;

        let header = decoder.read_headers()?;

        Ok((header, data.len() as u64))
    }

    pub fn decode(&self) -> Result<ImageRecord, DecodeErrors> {
        debug!("Decoding {:?}", self.file_path);

        pnm_codec::decode_file(&self.file_path, self.options)
    }
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::debug;

use crate::errors::WorkflowError;
use crate::file_io::PnmFile;
use crate::serde::Metadata;

/// Read the header of the input file and render it as pretty json
pub fn probe_input_file(file: &PnmFile) -> Result<String, WorkflowError> {
    debug!("Probing {:?}", file.path());

    let (header, size) = file.read_headers()?;
    let metadata = Metadata::new(file.path(), size, header);

    Ok(serde_json::to_string_pretty(&metadata)?)
}

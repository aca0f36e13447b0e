/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnm_codec::{DecodeErrors, EncodeErrors};

/// Anything that can stop a command line invocation
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("{0}")]
    GenericString(String),

    #[error("could not decode image: {0}")]
    Decode(#[from] DecodeErrors),

    #[error("could not write image: {0}")]
    Encode(#[from] EncodeErrors),

    #[error("could not serialize image information: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("window error: {0}")]
    Window(String)
}

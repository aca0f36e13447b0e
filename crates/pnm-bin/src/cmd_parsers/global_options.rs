/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use pnm_core::options::{DecoderOptions, EncoderOptions};
use pnm_core::{FormatTag, Rotation};

use crate::cmd_parsers::{get_decoder_options, get_encoder_options};

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub file:            PathBuf,
    pub information:     bool,
    pub pixel_size:      u32,
    pub rotation:        Rotation,
    pub convert:         Option<FormatTag>,
    pub output:          String,
    pub decoder_options: DecoderOptions,
    pub encoder_options: EncoderOptions
}

impl CmdOptions {
    pub fn new(file: PathBuf) -> CmdOptions {
        CmdOptions {
            file,
            information: false,
            pixel_size: 1,
            rotation: Rotation::Deg0,
            convert: None,
            output: String::from("newImage"),
            decoder_options: DecoderOptions::default(),
            encoder_options: EncoderOptions::default()
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let file = options.get_one::<PathBuf>("file").cloned().unwrap_or_default();
    let mut cmd_options = CmdOptions::new(file);

    cmd_options.information = options.get_flag("information");

    if let Some(pixel_size) = options.get_one::<u32>("pixel") {
        cmd_options.pixel_size = *pixel_size;
    }
    if let Some(rotation) = options.get_one::<Rotation>("rotate") {
        cmd_options.rotation = *rotation;
    }
    if options.value_source("convert") == Some(ValueSource::CommandLine) {
        cmd_options.convert = options.get_one::<FormatTag>("convert").copied();
        info!("Converting to {:?}", cmd_options.convert);
    }
    if let Some(output) = options.get_one::<String>("output") {
        cmd_options.output.clone_from(output);
    }
    cmd_options.decoder_options = get_decoder_options(options);
    cmd_options.encoder_options = get_encoder_options(options);

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

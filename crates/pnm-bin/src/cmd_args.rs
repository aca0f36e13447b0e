/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub(crate) mod arg_parsers;
pub(crate) mod help_strings;

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::{parse_rotation, parse_target_tag};
use crate::cmd_args::help_strings::{CONVERT_HELP, PIXEL_HELP, ROTATE_HELP};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pnmview")
        .about("View and convert Netpbm (pbm, pgm, ppm) images")
        .arg(Arg::new("file")
            .help("The file to process")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("information")
            .short('i')
            .long("information")
            .action(ArgAction::SetTrue)
            .help("Show file data instead of opening a window"))
        .arg(Arg::new("pixel")
            .short('p')
            .long("pixel")
            .help("Set pixel size")
            .long_help(PIXEL_HELP)
            .default_value("1")
            .value_parser(value_parser!(u32).range(1..)))
        .arg(Arg::new("rotate")
            .short('r')
            .long("rotate")
            .help("Rotate the image, one of 0, 90, 180 or 270")
            .long_help(ROTATE_HELP)
            .default_value("0")
            .value_parser(parse_rotation))
        .arg(Arg::new("convert")
            .short('c')
            .long("convert")
            .help("Convert the image to another format, one of P1 to P6")
            .long_help(CONVERT_HELP)
            .value_parser(parse_target_tag))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Choose the name of the converted file")
            .default_value("newImage"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Refuse files whose extension disagrees with their format tag"))
        .arg(Arg::new("packed-pbm")
            .long("packed-pbm")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Write P4 output with eight pixels per byte instead of one byte per pixel"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images to decode")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images to decode")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::cmd_args::arg_parsers::normalize_single_dash_args;
use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod probe_files;
mod serde;
mod show_gui;
mod workflow;

pub fn main() {
    let args = normalize_single_dash_args(std::env::args_os());
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches_from(args);

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    if let Err(reason) = create_and_exec_workflow_from_cmd(&parsed_opts) {
        println!();
        error!(" Could not complete workflow, reason {}", reason);

        println!();
        exit(1);
    }
}

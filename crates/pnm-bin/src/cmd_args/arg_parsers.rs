/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use pnm_core::{FormatTag, Rotation};

/// Long options that may also be spelled with a single dash
pub const SINGLE_DASH_LONGS: [&str; 5] = ["information", "pixel", "rotate", "convert", "output"];

/// Parse `-rotate` values, only quarter turns are accepted
pub fn parse_rotation(value: &str) -> Result<Rotation, String> {
    let degrees = value
        .trim()
        .parse::<u16>()
        .map_err(|_| format!("{value:?} is not one of 0, 90, 180 or 270"))?;

    Rotation::try_from(degrees).map_err(|x| x.to_string())
}

/// Parse `-convert` values, one of `P1` to `P6`
pub fn parse_target_tag(value: &str) -> Result<FormatTag, String> {
    value.parse::<FormatTag>().map_err(|x| x.to_string())
}

fn is_single_dash_long(arg: &str) -> bool {
    arg.strip_prefix('-')
        .filter(|rest| !rest.starts_with('-'))
        .map(|rest| rest.split_once('=').map_or(rest, |(name, _)| name))
        .is_some_and(|name| SINGLE_DASH_LONGS.contains(&name))
}

/// Rewrite `-information`, `-pixel=2` and friends into their
/// double dash form so clap sees them as long options.
///
/// Arguments after a bare `--` are left alone, as is anything that is not
/// valid UTF-8.
pub fn normalize_single_dash_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>
{
    let mut seen_terminator = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if seen_terminator {
                return arg;
            }
            if arg == "--" {
                seen_terminator = true;
                return arg;
            }
            if arg.to_str().is_some_and(is_single_dash_long) {
                let mut rewritten = OsString::from("-");
                rewritten.push(&arg);
                rewritten
            } else {
                arg
            }
        })
        .collect()
}

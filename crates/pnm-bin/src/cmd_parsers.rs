use clap::ArgMatches;
use pnm_core::options::{BilevelPacking, DecoderOptions, EncoderOptions};

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let defaults = DecoderOptions::default();

    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(defaults.max_width);
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(defaults.max_height);
    let strict_mode = options.get_flag("strict");

    defaults
        .set_max_height(max_height)
        .set_max_width(max_width)
        .set_strict_mode(strict_mode)
}

pub fn get_encoder_options(options: &ArgMatches) -> EncoderOptions {
    let packing = if options.get_flag("packed-pbm") {
        BilevelPacking::Packed
    } else {
        BilevelPacking::BytePerPixel
    };

    EncoderOptions::default().set_bilevel_packing(packing)
}

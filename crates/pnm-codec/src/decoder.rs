/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::str::from_utf8;

use log::{info, trace, warn};
use pnm_core::options::DecoderOptions;
use pnm_core::{rescale, Family, FormatTag, ImageRecord, Pixel, BLACK, WHITE};

use crate::errors::DecodeErrors;

/// Header fields of a Netpbm file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PnmHeader
{
    pub format_tag:      FormatTag,
    pub width:           usize,
    pub height:          usize,
    /// Always 1 for bilevel images
    pub max_color_value: u32
}

/// Position of the header reader.
///
/// Fields are read in this order, a field is never revisited
/// once the state moved past it.
#[derive(Copy, Clone, Debug)]
enum HeaderState
{
    Version,
    Size(FormatTag),
    MaxValue
    {
        tag:    FormatTag,
        width:  usize,
        height: usize
    },
    Complete(PnmHeader)
}

impl HeaderState
{
    const fn field(&self) -> &'static str
    {
        match self
        {
            HeaderState::Version => "version",
            HeaderState::Size(_) => "size",
            HeaderState::MaxValue { .. } => "max color value",
            HeaderState::Complete(_) => "payload"
        }
    }
}

/// An instance of a Netpbm decoder
///
/// The decoder can decode the P1 to P6 formats
pub struct PnmDecoder<'a>
{
    data:      &'a [u8],
    position:  usize,
    header:    Option<PnmHeader>,
    extension: Option<(String, Family)>,
    options:   DecoderOptions
}

impl<'a> PnmDecoder<'a>
{
    /// Create a new decoder with default options
    ///
    /// # Arguments
    /// - data: Netpbm encoded bytes
    ///
    /// # Example
    /// ```
    /// use pnm_codec::PnmDecoder;
    /// let mut decoder = PnmDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PnmDecoder<'a>
    {
        PnmDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: Netpbm encoded bytes
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PnmDecoder<'a>
    {
        PnmDecoder {
            data,
            position: 0,
            header: None,
            extension: None,
            options
        }
    }

    /// Record the extension of the file the data came from.
    ///
    /// The tag inside the file decides how it is decoded, the extension
    /// is only compared against it once the header is read.
    ///
    /// # Errors
    /// [`DecodeErrors::UnsupportedExtension`] if the extension is not
    /// one of `pbm`, `pgm` or `ppm`
    pub fn set_extension(&mut self, extension: &str) -> Result<(), DecodeErrors>
    {
        let family = Family::from_extension(extension)
            .ok_or_else(|| DecodeErrors::UnsupportedExtension(extension.to_string()))?;
        let extension = extension.strip_prefix('.').unwrap_or(extension);

        self.extension = Some((extension.to_string(), family));
        Ok(())
    }

    /// Read the header and store it in internal state
    ///
    /// Calling this more than once returns the stored header.
    pub fn read_headers(&mut self) -> Result<PnmHeader, DecodeErrors>
    {
        self.decode_header()
    }

    /// Return the header or none if it wasn't read yet
    pub const fn header(&self) -> Option<PnmHeader>
    {
        self.header
    }

    /// Return image dimensions or none if the header wasn't read yet
    pub const fn dimensions(&self) -> Option<(usize, usize)>
    {
        match self.header
        {
            Some(header) => Some((header.width, header.height)),
            None => None
        }
    }

    /// Return the format tag or none if the header wasn't read yet
    pub const fn format_tag(&self) -> Option<FormatTag>
    {
        match self.header
        {
            Some(header) => Some(header.format_tag),
            None => None
        }
    }

    /// Return the max color value or none if the header wasn't read yet
    pub const fn max_color_value(&self) -> Option<u32>
    {
        match self.header
        {
            Some(header) => Some(header.max_color_value),
            None => None
        }
    }

    /// Decode the whole stream into an image record
    pub fn decode(&mut self) -> Result<ImageRecord, DecodeErrors>
    {
        let header = self.decode_header()?;
        let payload = &self.data[self.position..];

        let expected = header.width.checked_mul(header.height).ok_or(
            DecodeErrors::LargeDimensions {
                expected: usize::MAX / header.height,
                found:    header.width
            }
        )?;

        trace!("Payload is {} bytes for {} pixels", payload.len(), expected);

        let pixels = match header.format_tag
        {
            FormatTag::P1 => decode_ascii_bits(payload, expected)?,
            FormatTag::P4 => decode_packed_bits(payload, header.width, expected)?,
            FormatTag::P2 | FormatTag::P3 =>
            {
                let samples = AsciiTokens::new(payload).map(parse_sample);

                decode_samples(samples, 0, &header, expected, payload.len())?
            }
            FormatTag::P5 | FormatTag::P6 if header.max_color_value > 255 =>
            {
                // 16 bit samples are stored in big-endian, netpbm's layout
                let pairs = payload.chunks_exact(2);
                let leftover = pairs.remainder().len();
                let samples = pairs.map(|pair| Ok(u32::from(u16::from_be_bytes([pair[0], pair[1]]))));

                decode_samples(samples, leftover, &header, expected, payload.len())?
            }
            FormatTag::P5 | FormatTag::P6 =>
            {
                let samples = payload.iter().map(|byte| Ok(u32::from(*byte)));

                decode_samples(samples, 0, &header, expected, payload.len())?
            }
        };
        self.position = self.data.len();

        Ok(ImageRecord::new(
            header.format_tag,
            header.width,
            header.height,
            header.max_color_value,
            pixels
        )?)
    }

    fn decode_header(&mut self) -> Result<PnmHeader, DecodeErrors>
    {
        if let Some(header) = self.header
        {
            return Ok(header);
        }
        let mut state = HeaderState::Version;

        let header = loop
        {
            if let HeaderState::Complete(header) = state
            {
                break header;
            }
            let line = self.next_header_line().ok_or_else(|| {
                DecodeErrors::MalformedHeader(format!(
                    "stream ended before the {} line",
                    state.field()
                ))
            })?;
            state = self.advance(state, line)?;
        };
        self.check_extension(&header)?;
        self.header = Some(header);

        Ok(header)
    }

    fn advance(&self, state: HeaderState, line: &[u8]) -> Result<HeaderState, DecodeErrors>
    {
        match state
        {
            HeaderState::Version =>
            {
                let version = header_str(line)?;
                let tag = version.parse::<FormatTag>().map_err(|_| {
                    DecodeErrors::MalformedHeader(format!(
                        "unrecognized version {version:?}, expected one of P1 to P6"
                    ))
                })?;
                info!("Version: {}", tag);

                Ok(HeaderState::Size(tag))
            }
            HeaderState::Size(tag) =>
            {
                let [width, height] = header_fields::<2>(line, "size")?;
                let width = parse_positive(width, "width")?;
                let height = parse_positive(height, "height")?;

                if width > self.options.max_width
                {
                    return Err(DecodeErrors::LargeDimensions {
                        expected: self.options.max_width,
                        found:    width
                    });
                }
                if height > self.options.max_height
                {
                    return Err(DecodeErrors::LargeDimensions {
                        expected: self.options.max_height,
                        found:    height
                    });
                }
                info!("Width: {}, height: {}", width, height);

                if tag.family().has_max_value()
                {
                    Ok(HeaderState::MaxValue { tag, width, height })
                }
                else
                {
                    Ok(HeaderState::Complete(PnmHeader {
                        format_tag: tag,
                        width,
                        height,
                        max_color_value: 1
                    }))
                }
            }
            HeaderState::MaxValue { tag, width, height } =>
            {
                let [max_value] = header_fields::<1>(line, "max color value")?;
                let max_value = parse_positive(max_value, "max color value")?;

                let max_value = u32::try_from(max_value)
                    .ok()
                    .filter(|value| *value <= u32::from(u16::MAX))
                    .ok_or_else(|| {
                        DecodeErrors::MalformedHeader(format!(
                            "max color value {max_value} greater than 65535"
                        ))
                    })?;
                info!("Max color value: {}", max_value);

                Ok(HeaderState::Complete(PnmHeader {
                    format_tag: tag,
                    width,
                    height,
                    max_color_value: max_value
                }))
            }
            HeaderState::Complete(header) => Ok(HeaderState::Complete(header))
        }
    }

    fn check_extension(&self, header: &PnmHeader) -> Result<(), DecodeErrors>
    {
        let Some((extension, family)) = &self.extension
        else
        {
            return Ok(());
        };
        let tag = header.format_tag;

        if *family != tag.family()
        {
            if self.options.strict_mode
            {
                return Err(DecodeErrors::ExtensionMismatch {
                    extension: extension.clone(),
                    tag
                });
            }
            warn!(
                "Extension .{} does not match the {} tag, decoding as a {} image",
                extension,
                tag,
                tag.family()
            );
        }
        Ok(())
    }

    /// Return the next non-empty header line with comments stripped,
    /// moving past its terminating newline.
    fn next_header_line(&mut self) -> Option<&'a [u8]>
    {
        let data = self.data;

        while self.position < data.len()
        {
            let rest = &data[self.position..];
            let (line, consumed) = match rest.iter().position(|byte| *byte == b'\n')
            {
                Some(end) => (&rest[..end], end + 1),
                None => (rest, rest.len())
            };
            self.position += consumed;

            let line = strip_comment(line).trim_ascii();

            if !line.is_empty()
            {
                return Some(line);
            }
        }
        None
    }
}

/// Remove everything from the first `#` onwards
fn strip_comment(line: &[u8]) -> &[u8]
{
    match line.iter().position(|byte| *byte == b'#')
    {
        Some(start) => &line[..start],
        None => line
    }
}

fn header_str(line: &[u8]) -> Result<&str, DecodeErrors>
{
    from_utf8(line).map_err(|_| {
        DecodeErrors::MalformedHeader(format!(
            "header line {:?} is not valid text",
            String::from_utf8_lossy(line)
        ))
    })
}

/// Split a header line into exactly `N` whitespace separated fields
fn header_fields<'l, const N: usize>(
    line: &'l [u8], field: &str
) -> Result<[&'l str; N], DecodeErrors>
{
    let fields: Vec<&str> = header_str(line)?.split_ascii_whitespace().collect();

    <[&str; N]>::try_from(fields.as_slice()).map_err(|_| {
        DecodeErrors::MalformedHeader(format!(
            "expected {} values on the {} line but found {:?}",
            N, field, fields
        ))
    })
}

fn parse_positive(token: &str, field: &str) -> Result<usize, DecodeErrors>
{
    let value = token.parse::<usize>().map_err(|_| {
        DecodeErrors::MalformedHeader(format!("{field} {token:?} is not a positive integer"))
    })?;

    if value == 0
    {
        return Err(DecodeErrors::MalformedHeader(format!(
            "{field} must be positive"
        )));
    }
    Ok(value)
}

fn parse_sample(token: &[u8]) -> Result<u32, DecodeErrors>
{
    from_utf8(token)
        .ok()
        .and_then(|token| token.parse::<u32>().ok())
        .ok_or_else(|| DecodeErrors::InvalidToken(String::from_utf8_lossy(token).into_owned()))
}

/// Initial pixel buffer capacity, bounded by what the payload could hold
/// so a lying header can't make us allocate a huge buffer up front.
fn capacity_hint(expected: usize, payload_len: usize) -> usize
{
    expected.min(payload_len.saturating_mul(8))
}

/// Whitespace separated ASCII tokens, skipping `#` comments
struct AsciiTokens<'a>
{
    data: &'a [u8]
}

impl<'a> AsciiTokens<'a>
{
    fn new(data: &'a [u8]) -> AsciiTokens<'a>
    {
        AsciiTokens { data }
    }
}

impl<'a> Iterator for AsciiTokens<'a>
{
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item>
    {
        loop
        {
            let byte = *self.data.first()?;

            if byte == b'#'
            {
                let end = self
                    .data
                    .iter()
                    .position(|byte| *byte == b'\n')
                    .unwrap_or(self.data.len());
                self.data = &self.data[end..];
            }
            else if byte.is_ascii_whitespace()
            {
                self.data = &self.data[1..];
            }
            else
            {
                break;
            }
        }
        let end = self
            .data
            .iter()
            .position(|byte| byte.is_ascii_whitespace() || *byte == b'#')
            .unwrap_or(self.data.len());
        let (token, rest) = self.data.split_at(end);
        self.data = rest;

        Some(token)
    }
}

/// P1 payload, every digit is a pixel
fn decode_ascii_bits(payload: &[u8], expected: usize) -> Result<Vec<Pixel>, DecodeErrors>
{
    let mut pixels = Vec::with_capacity(capacity_hint(expected, payload.len()));
    let mut extra = 0;

    for token in AsciiTokens::new(payload)
    {
        for digit in token
        {
            if !digit.is_ascii_digit()
            {
                return Err(DecodeErrors::InvalidToken(
                    String::from_utf8_lossy(token).into_owned()
                ));
            }
            if pixels.len() == expected
            {
                extra += 1;
                continue;
            }
            pixels.push(if *digit == b'0' { BLACK } else { WHITE });
        }
    }
    finish(pixels, expected, extra)
}

/// P4 payload, bits are read most significant first.
///
/// When a row ends in the middle of a byte, the rest of that byte is
/// padding and the next row starts at the next byte.
fn decode_packed_bits(
    payload: &[u8], width: usize, expected: usize
) -> Result<Vec<Pixel>, DecodeErrors>
{
    let mut pixels = Vec::with_capacity(capacity_hint(expected, payload.len()));
    let mut bytes = payload.iter();
    let mut column = 0;

    while pixels.len() < expected
    {
        let Some(byte) = bytes.next()
        else
        {
            break;
        };
        for bit in (0..8).rev()
        {
            pixels.push(if (byte >> bit) & 1 == 1 { WHITE } else { BLACK });
            column += 1;

            if column == width
            {
                // discard the padding bits
                column = 0;
                break;
            }
        }
    }
    finish(pixels, expected, bytes.len())
}

/// P2, P3, P5 and P6 payloads.
///
/// Samples are rescaled from the header's max value and grouped
/// by the number of components of the family.
fn decode_samples<I>(
    samples: I, leftover: usize, header: &PnmHeader, expected: usize, payload_len: usize
) -> Result<Vec<Pixel>, DecodeErrors>
where
    I: Iterator<Item = Result<u32, DecodeErrors>>
{
    let components = header.format_tag.family().num_components();
    let max_value = header.max_color_value;

    let mut pixels = Vec::with_capacity(capacity_hint(expected, payload_len));
    let mut pixel = BLACK;
    let mut component = 0;
    let mut extra = leftover;

    for sample in samples
    {
        let sample = sample?;

        if pixels.len() == expected
        {
            extra += 1;
            continue;
        }
        let value = rescale(sample, max_value);

        if components == 1
        {
            pixels.push([value; 3]);
            continue;
        }
        pixel[component] = value;
        component += 1;

        if component == components
        {
            pixels.push(pixel);
            component = 0;
        }
    }
    finish(pixels, expected, extra)
}

fn finish(pixels: Vec<Pixel>, expected: usize, extra: usize) -> Result<Vec<Pixel>, DecodeErrors>
{
    if pixels.len() < expected
    {
        return Err(DecodeErrors::TruncatedPayload {
            expected,
            found: pixels.len()
        });
    }
    if extra > 0
    {
        return Err(DecodeErrors::TrailingPayload(extra));
    }
    Ok(pixels)
}

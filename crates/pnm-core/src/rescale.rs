/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sample normalization

/// Map a raw sample in `0..=max_value` to `0..=255`.
///
/// Computes `floor(raw * 255 / max_value)` in integer arithmetic,
/// so `rescale(max, max)` is exactly 255 for every `max`.
///
/// Samples larger than `max_value` saturate to 255.
#[inline]
pub const fn rescale(raw: u32, max_value: u32) -> u8
{
    if raw >= max_value
    {
        return 255;
    }
    ((raw as u64 * 255) / max_value as u64) as u8
}

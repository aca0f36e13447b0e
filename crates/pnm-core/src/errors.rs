/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors raised by the core data model

/// Errors produced when building core types from untrusted input
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError
{
    #[error("invalid rotation {0}, supported rotations are 0, 90, 180 and 270")]
    InvalidRotation(u16),

    #[error("unknown target tag {0:?}, supported tags are P1 to P6")]
    UnknownTargetTag(String),

    #[error("pixel grid of {found} pixels does not match a {width}x{height} image")]
    InvalidGrid
    {
        width:  usize,
        height: usize,
        found:  usize
    },

    #[error("image dimensions must be positive, found {width}x{height}")]
    ZeroDimensions
    {
        width: usize, height: usize
    },

    #[error("max color value must be positive")]
    ZeroMaxValue
}

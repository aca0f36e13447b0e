/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Display rotations
use core::fmt::{Display, Formatter};

use crate::errors::CoreError;

/// Rotation applied when displaying an image.
///
/// Only quarter turns are supported.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Rotation
{
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270
}

impl Rotation
{
    pub const fn degrees(self) -> u16
    {
        match self
        {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270
        }
    }

    /// The rotation following this one, wrapping from 270 back to 0
    pub const fn next(self) -> Rotation
    {
        match self
        {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0
        }
    }

    pub const fn swaps_dimensions(self) -> bool
    {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    /// Displayed `(width, height)` of an image with the given dimensions
    pub const fn displayed_dimensions(self, width: usize, height: usize) -> (usize, usize)
    {
        if self.swaps_dimensions()
        {
            (height, width)
        }
        else
        {
            (width, height)
        }
    }

    /// Map a displayed cell to the source pixel drawn there.
    ///
    /// `width` and `height` are the *displayed* dimensions,
    /// i.e the output of [`displayed_dimensions`](Self::displayed_dimensions).
    /// `x` and `y` must be inside them.
    pub const fn source_coordinates(
        self, x: usize, y: usize, width: usize, height: usize
    ) -> (usize, usize)
    {
        match self
        {
            Rotation::Deg0 => (x, y),
            Rotation::Deg90 => (y, x),
            Rotation::Deg180 => (width - x - 1, height - y - 1),
            Rotation::Deg270 => (height - y - 1, width - x - 1)
        }
    }
}

impl TryFrom<u16> for Rotation
{
    type Error = CoreError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error>
    {
        match degrees
        {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            _ => Err(CoreError::InvalidRotation(degrees))
        }
    }
}

impl Display for Rotation
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}", self.degrees())
    }
}

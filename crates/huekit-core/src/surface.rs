// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Picker surfaces
//!
//! The colour picker shows two interactive regions: the [`HueStrip`], a
//! 256×48 image of all hues, and the [`ShadeSquare`], a 256×256 region over
//! which white is mixed in horizontally and black vertically. Each
//! [`Surface`] maps a pointer [`Coord`] to its value and a value back to the
//! coordinate at which its pointer indicator is drawn.

use crate::cast::{Conv, ConvFloat};
use crate::geom::{Coord, Offset, Size};
use crate::hwb::Hue;
use crate::util::clamp_unit;

/// Radius of the circular pointer indicator drawn over a surface
pub const POINTER_RADIUS: i32 = 5;

/// Top-left corner of a pointer indicator centred on `coord`
#[inline]
pub fn indicator_origin(coord: Coord) -> Coord {
    coord - Offset::splat(POINTER_RADIUS)
}

/// An interactive region mapping pointer positions to a value
///
/// Both mappings are deterministic and clamp their input. For each value `v`,
/// `value_at(coord_of(v))` equals `v` to within the surface's quantization.
pub trait Surface {
    /// The value selected by the pointer
    type Value: Copy;

    /// Size of the region
    const SIZE: Size;

    /// Restrict a coordinate to the region
    #[inline]
    fn clamp(coord: Coord) -> Coord {
        coord.clamp(Coord::ZERO, Self::SIZE.last_coord())
    }

    /// Value at a pointer position
    ///
    /// Positions outside the region are clamped to its edge.
    fn value_at(coord: Coord) -> Self::Value;

    /// Pointer position representing a value
    fn coord_of(value: Self::Value) -> Coord;
}

/// The hue selection strip
///
/// The strip is 256 wide and 48 tall. Each column covers six consecutive
/// hues, selected by 8-unit rows: `hue = x * 6 + y / 8`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HueStrip;

impl HueStrip {
    /// Height of the row selecting one hue within a column
    pub const ROW_HEIGHT: i32 = 8;
    /// Hues per column
    pub const HUES_PER_COLUMN: i32 = 6;
}

impl Surface for HueStrip {
    type Value = Hue;

    const SIZE: Size = Size(256, 48);

    fn value_at(coord: Coord) -> Hue {
        let Coord(x, y) = Self::clamp(coord);
        Hue::clamped(x * Self::HUES_PER_COLUMN + y / Self::ROW_HEIGHT)
    }

    fn coord_of(hue: Hue) -> Coord {
        let n = i32::from(hue.get());
        Coord(
            n / Self::HUES_PER_COLUMN,
            (n % Self::HUES_PER_COLUMN) * Self::ROW_HEIGHT,
        )
    }
}

/// Whiteness and blackness, each in `0..=1`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shade {
    pub white: f32,
    pub black: f32,
}

impl Shade {
    /// Construct, clamping both fractions to `0..=1`
    #[inline]
    pub fn new(white: f32, black: f32) -> Self {
        Shade {
            white: clamp_unit(white),
            black: clamp_unit(black),
        }
    }
}

/// The whiteness / blackness square
///
/// The square is 256×256. Whiteness increases rightwards and blackness
/// downwards, each by `1/255` per unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShadeSquare;

impl ShadeSquare {
    /// Pointer units per unit of whiteness or blackness
    pub const SCALE: f32 = 255.0;
}

impl Surface for ShadeSquare {
    type Value = Shade;

    const SIZE: Size = Size(256, 256);

    fn value_at(coord: Coord) -> Shade {
        let Coord(x, y) = Self::clamp(coord);
        Shade {
            white: f32::conv(x) / Self::SCALE,
            black: f32::conv(y) / Self::SCALE,
        }
    }

    fn coord_of(shade: Shade) -> Coord {
        let shade = Shade::new(shade.white, shade.black);
        Coord(
            i32::conv_nearest(shade.white * Self::SCALE),
            i32::conv_nearest(shade.black * Self::SCALE),
        )
    }
}

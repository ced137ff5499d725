// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Geometry data types
//!
//! [`Coord`], [`Size`] and [`Offset`] are all 2D integer (`i32`) types,
//! representing pointer positions relative to a picker surface, surface sizes
//! and differences between positions respectively.

use std::cmp::{Ordering, PartialOrd};

macro_rules! impl_common {
    ($T:ty) => {
        impl $T {
            /// The constant `(0, 0)`
            pub const ZERO: Self = Self(0, 0);

            /// Construct
            #[inline]
            pub const fn new(x: i32, y: i32) -> Self {
                Self(x, y)
            }

            /// Construct, using the same value on all axes
            #[inline]
            pub const fn splat(n: i32) -> Self {
                Self(n, n)
            }

            /// Return the minimum, componentwise
            #[inline]
            #[must_use = "method does not modify self but returns a new value"]
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0), self.1.min(other.1))
            }

            /// Return the maximum, componentwise
            #[inline]
            #[must_use = "method does not modify self but returns a new value"]
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0), self.1.max(other.1))
            }

            /// Restrict a value to the specified interval, componentwise
            #[inline]
            #[must_use = "method does not modify self but returns a new value"]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                debug_assert!(min <= max);
                self.min(max).max(min)
            }
        }

        impl PartialOrd for $T {
            fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
                if self == rhs {
                    Some(Ordering::Equal)
                } else if self.0 < rhs.0 && self.1 < rhs.1 {
                    Some(Ordering::Less)
                } else if self.0 > rhs.0 && self.1 > rhs.1 {
                    Some(Ordering::Greater)
                } else {
                    None
                }
            }

            #[inline]
            fn lt(&self, rhs: &Self) -> bool {
                self.0 < rhs.0 && self.1 < rhs.1
            }

            #[inline]
            fn le(&self, rhs: &Self) -> bool {
                self.0 <= rhs.0 && self.1 <= rhs.1
            }

            #[inline]
            fn ge(&self, rhs: &Self) -> bool {
                self.0 >= rhs.0 && self.1 >= rhs.1
            }

            #[inline]
            fn gt(&self, rhs: &Self) -> bool {
                self.0 > rhs.0 && self.1 > rhs.1
            }
        }

        impl From<(i32, i32)> for $T {
            #[inline]
            fn from(v: (i32, i32)) -> Self {
                Self(v.0, v.1)
            }
        }

        impl From<$T> for (i32, i32) {
            #[inline]
            fn from(v: $T) -> Self {
                (v.0, v.1)
            }
        }
    };
}

/// A 2D coordinate, also known as a point
///
/// A coordinate is a position relative to the top-left of a picker surface,
/// with `x` increasing rightwards and `y` downwards. One cannot add a point
/// to a point. The difference between two points is an [`Offset`].
///
/// Comparison operators are partial: `a < b` holds only if it holds for
/// both components. `Coord` does not implement [`Ord`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord(pub i32, pub i32);

impl_common!(Coord);

impl std::ops::Sub for Coord {
    type Output = Offset;

    #[inline]
    fn sub(self, other: Self) -> Offset {
        Offset(self.0 - other.0, self.1 - other.1)
    }
}

impl std::ops::Add<Offset> for Coord {
    type Output = Self;

    #[inline]
    fn add(self, other: Offset) -> Self {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

impl std::ops::Sub<Offset> for Coord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Offset) -> Self {
        Coord(self.0 - other.0, self.1 - other.1)
    }
}

/// A 2D size
///
/// Sizes are non-negative.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size(pub i32, pub i32);

impl_common!(Size);

impl Size {
    /// The largest coordinate inside a rect of this size at the origin
    ///
    /// In debug mode, this asserts that both components are positive.
    #[inline]
    pub fn last_coord(self) -> Coord {
        debug_assert!(self.0 > 0 && self.1 > 0, "Size::last_coord: empty size {self:?}");
        Coord(self.0 - 1, self.1 - 1)
    }

    /// True if `coord` lies within a rect of this size at the origin
    #[inline]
    pub fn contains(self, coord: Coord) -> bool {
        coord.0 >= 0 && coord.1 >= 0 && coord.0 < self.0 && coord.1 < self.1
    }
}

/// A 2D offset, the difference between two [`Coord`]s
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset(pub i32, pub i32);

impl_common!(Offset);

impl std::ops::Neg for Offset {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Offset(-self.0, -self.1)
    }
}

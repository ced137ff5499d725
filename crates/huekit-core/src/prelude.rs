// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Prelude
//!
//! This module allows convenient importation of common unabiguous items:
//! ```
//! use huekit_core::prelude::*;
//! ```

#[doc(no_inline)]
pub use crate::cast::{Cast, CastFloat, Conv, ConvFloat};
#[doc(no_inline)]
pub use crate::color::{ParseError, Rgb8};
#[doc(no_inline)]
pub use crate::geom::{Coord, Offset, Size};
#[doc(no_inline)]
pub use crate::hwb::{Hue, HueSegment, Hwb};
#[doc(no_inline)]
pub use crate::surface::{HueStrip, Shade, ShadeSquare, Surface};

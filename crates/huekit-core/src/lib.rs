// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! huekit core
//!
//! Colour types and the HWB (hue / whiteness / blackness) model used by the
//! colour picker:
//!
//! -   [`color`] provides [`Rgb8`](color::Rgb8), its textual forms and
//!     [`ParseError`](color::ParseError)
//! -   [`hwb`] provides [`Hue`](hwb::Hue), [`Hwb`](hwb::Hwb) and conversions
//! -   [`surface`] maps pointer positions on the picker surfaces to colour
//!     parameters and back
//! -   [`config`] reads and writes picker configuration
//!
//! The [easy-cast](https://docs.rs/easy-cast/0.5/easy_cast) library is
//! re-exported as `cast`.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub extern crate easy_cast as cast;

pub mod color;
pub mod config;
pub mod geom;
pub mod hwb;
pub mod prelude;
pub mod surface;
pub mod util;

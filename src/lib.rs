// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! huekit: HWB colour picking
//!
//! This, the main huekit crate, is merely a wrapper over other crates:
//!
//! -   [`huekit_core`] provides colour types, the HWB model and picker
//!     surface mappings
//! -   [`huekit_widgets`] provides the picker, dialog and button state
//!
//! All items from [`huekit_core`] are directly re-exported from this crate
//! (e.g. [`huekit::color::Rgb8`](crate::color::Rgb8)); the widget crate is
//! re-exported as [`huekit::widgets`](crate::widgets).
//!
//! The [easy-cast](https://docs.rs/easy-cast/0.5/easy_cast) library is
//! re-exported as `huekit::cast`.
//!
//! ```
//! use huekit::prelude::*;
//!
//! let mut dialog = ColourPickerDialog::new();
//! dialog.open(Some(Rgb8::rgb(255, 0, 0)));
//! dialog.picker_mut().select_shade(Coord(0, 128));
//! assert_eq!(dialog.confirm().as_deref(), Some("rgb(127, 0, 0)"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod prelude;

pub use huekit_core::*;

pub extern crate huekit_widgets as widgets;

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! huekit prelude
//!
//! This module allows convenient importation of common unabiguous items:
//! ```
//! use huekit::prelude::*;
//! ```

#[doc(no_inline)]
pub use huekit_core::prelude::*;
#[doc(no_inline)]
pub use huekit_widgets::{ColourHistory, ColourPicker, ColourPickerButton, ColourPickerDialog};

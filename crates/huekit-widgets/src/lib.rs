// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! huekit widget library
//!
//! Headless colour-picker widgets. These hold interaction state only; the
//! host UI draws them and forwards pointer input.
//!
//! -   [`ColourPicker`]: current colour, its HWB decomposition and the
//!     recent-colour [`ColourHistory`]
//! -   [`ColourPickerDialog`]: a shown/hidden dialog over a picker, with a
//!     return action
//! -   [`ColourPickerButton`]: a button opening a dialog it is lent, as a
//!     colour swatch or an icon (see [`Presentation`])

mod button;
mod dialog;
mod history;
mod picker;

pub use button::{ColourPickerButton, Presentation};
pub use dialog::{ColourPickerDialog, OpenerId};
pub use history::ColourHistory;
pub use picker::{ColourPicker, Pointers};

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Top-level configuration struct

use crate::color::Rgb8;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Picker configuration
///
/// This is serializable (using `feature = "serde"`) with the following fields:
///
/// > `initial_colour`: [`Rgb8`] \
/// > `history`: list of [`Rgb8`], most recent first
///
/// Colours are written as HTML codes and may be read in either textual form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    #[cfg_attr(feature = "serde", serde(default = "defaults::initial_colour"))]
    initial_colour: Rgb8,
    #[cfg_attr(feature = "serde", serde(default))]
    history: Vec<Rgb8>,
    #[cfg_attr(feature = "serde", serde(skip))]
    is_dirty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_colour: defaults::initial_colour(),
            history: Vec::new(),
            is_dirty: false,
        }
    }
}

impl Config {
    /// Has the config been updated since it was loaded?
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Colour shown when a picker is opened without a preset colour
    #[inline]
    pub fn initial_colour(&self) -> Rgb8 {
        self.initial_colour
    }

    /// Set the initial colour
    pub fn set_initial_colour(&mut self, colour: Rgb8) {
        if colour != self.initial_colour {
            self.initial_colour = colour;
            self.is_dirty = true;
        }
    }

    /// Recent colours, most recent first
    #[inline]
    pub fn history(&self) -> &[Rgb8] {
        &self.history
    }

    /// Replace the stored history
    pub fn set_history(&mut self, history: impl IntoIterator<Item = Rgb8>) {
        let history: Vec<Rgb8> = history.into_iter().collect();
        if history != self.history {
            log::debug!("Config::set_history: {} colours", history.len());
            self.history = history;
            self.is_dirty = true;
        }
    }
}

mod defaults {
    use crate::color::Rgb8;

    pub fn initial_colour() -> Rgb8 {
        Rgb8::CYAN
    }
}

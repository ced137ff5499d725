// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Colour picker state

use crate::ColourHistory;
use huekit::color::{ParseError, Rgb8};
use huekit::geom::Coord;
use huekit::hwb::{Hue, Hwb, hwb_to_rgb};
use huekit::surface::{HueStrip, Shade, ShadeSquare, Surface};

/// Pointer positions over the picker surfaces
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pointers {
    /// Position over the [`HueStrip`]
    pub hue: Coord,
    /// Position over the [`ShadeSquare`]
    pub shade: Coord,
}

/// State of a colour picker
///
/// The picker tracks the current colour together with its [`Hwb`]
/// decomposition. Pointer input on either surface updates one part of the
/// decomposition and recomputes the colour; [`Self::setup_from_colour`]
/// goes the other way. Confirmed selections are recorded in a
/// [`ColourHistory`].
///
/// The host UI should:
///
/// -   colour the shade square with [`Self::hue_background`]
/// -   colour the preview with [`Self::colour`]
/// -   draw pointer indicators at [`Self::pointers`]
#[derive(Clone, Debug)]
pub struct ColourPicker {
    colour: Rgb8,
    hwb: Hwb,
    history: ColourHistory,
}

impl Default for ColourPicker {
    fn default() -> Self {
        ColourPicker::new()
    }
}

impl ColourPicker {
    /// Construct, showing [`Rgb8::CYAN`] with an empty history
    pub fn new() -> Self {
        ColourPicker::with_history(ColourHistory::new())
    }

    /// Construct with an existing history
    pub fn with_history(history: ColourHistory) -> Self {
        let colour = Rgb8::CYAN;
        ColourPicker {
            colour,
            hwb: colour.to_hwb(),
            history,
        }
    }

    /// Set the current colour, updating the decomposition
    pub fn setup_from_colour(&mut self, colour: Rgb8) {
        self.colour = colour;
        self.hwb = colour.to_hwb();
        log::debug!(
            "ColourPicker::setup_from_colour: {colour} -> hue {}, white {:.3}, black {:.3}",
            self.hwb.number.get(),
            self.hwb.white,
            self.hwb.black
        );
    }

    /// Parse and set the current colour
    ///
    /// Accepts either textual form (see [`Rgb8`]). On error the state is
    /// unchanged.
    pub fn setup_from_str(&mut self, colour: &str) -> Result<(), ParseError> {
        let colour = colour.parse()?;
        self.setup_from_colour(colour);
        Ok(())
    }

    /// The current colour
    #[inline]
    pub fn colour(&self) -> Rgb8 {
        self.colour
    }

    /// The current decomposition
    #[inline]
    pub fn hwb(&self) -> Hwb {
        self.hwb
    }

    /// Pure hue: the background of the shade square
    #[inline]
    pub fn hue_background(&self) -> Rgb8 {
        self.hwb.hue
    }

    /// Current whiteness and blackness
    #[inline]
    pub fn shade(&self) -> Shade {
        Shade {
            white: self.hwb.white,
            black: self.hwb.black,
        }
    }

    /// Where pointer indicators represent the current state
    pub fn pointers(&self) -> Pointers {
        Pointers {
            hue: HueStrip::coord_of(self.hwb.number),
            shade: ShadeSquare::coord_of(self.shade()),
        }
    }

    /// Handle a pointer press on the hue strip
    ///
    /// `coord` is relative to the strip and is clamped to it. Whiteness and
    /// blackness are kept. Returns the selected hue.
    pub fn select_hue(&mut self, coord: Coord) -> Hue {
        let number = HueStrip::value_at(coord);
        let (hue, colour) = hwb_to_rgb(number, self.hwb.white, self.hwb.black);
        self.hwb = self.hwb.with_hue(number);
        debug_assert_eq!(self.hwb.hue, hue);
        self.colour = colour;
        log::trace!("ColourPicker::select_hue: {coord:?} -> hue {}, {colour}", number.get());
        number
    }

    /// Handle a pointer press on the shade square
    ///
    /// `coord` is relative to the square and is clamped to it. The hue is
    /// kept. Returns the selected shade.
    pub fn select_shade(&mut self, coord: Coord) -> Shade {
        let shade = ShadeSquare::value_at(coord);
        let (_, colour) = hwb_to_rgb(self.hwb.hue, shade.white, shade.black);
        self.hwb = self.hwb.with_shade(shade.white, shade.black);
        self.colour = colour;
        log::trace!("ColourPicker::select_shade: {coord:?} -> {shade:?}, {colour}");
        shade
    }

    /// Confirm the current colour
    ///
    /// The colour becomes the most recent history entry. Returns the colour
    /// formatted as `rgb(r, g, b)`.
    pub fn select(&mut self) -> String {
        self.history.push(self.colour);
        log::debug!("ColourPicker::select: {}", self.colour);
        self.colour.format_css()
    }

    /// Set the current colour from a history entry
    ///
    /// Returns the colour, or `None` if `index` is out of range.
    pub fn recall(&mut self, index: usize) -> Option<Rgb8> {
        let colour = self.history.get(index)?;
        self.setup_from_colour(colour);
        Some(colour)
    }

    /// Recently selected colours
    #[inline]
    pub fn history(&self) -> &ColourHistory {
        &self.history
    }

    /// Mutable access to the history
    #[inline]
    pub fn history_mut(&mut self) -> &mut ColourHistory {
        &mut self.history
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn initial_state() {
        let picker = ColourPicker::new();
        assert_eq!(picker.colour(), Rgb8::CYAN);
        assert_eq!(picker.hue_background(), Rgb8::CYAN);
        assert_eq!(picker.hwb().number.get(), 767);
        assert_eq!(picker.pointers(), Pointers {
            hue: Coord(127, 40),
            shade: Coord(0, 0),
        });
        assert!(picker.history().is_empty());
    }

    #[test]
    fn select_hue_keeps_shade() {
        init_logger();
        let mut picker = ColourPicker::new();
        picker.select_shade(Coord(0, 51));
        let hue = picker.select_hue(Coord(0, 0));
        assert_eq!(hue, Hue::MIN);
        assert_eq!(picker.hue_background(), Rgb8::rgb(255, 0, 0));
        // 51/255 = 0.2 black
        assert_eq!(picker.colour(), Rgb8::rgb(204, 0, 0));
        assert_eq!(picker.pointers().shade, Coord(0, 51));
    }

    #[test]
    fn select_shade_keeps_hue() {
        let mut picker = ColourPicker::new();
        picker.setup_from_colour(Rgb8::rgb(255, 0, 0));
        let shade = picker.select_shade(Coord(255, 0));
        assert_eq!(shade, Shade::new(1.0, 0.0));
        assert_eq!(picker.colour(), Rgb8::WHITE);
        assert_eq!(picker.hue_background(), Rgb8::rgb(255, 0, 0));
        assert_eq!(picker.hwb().number, Hue::MIN);
    }

    #[test]
    fn setup_from_str() {
        let mut picker = ColourPicker::new();
        assert_eq!(picker.setup_from_str("rgb(1, 2)"), Err(ParseError::Syntax));
        assert_eq!(picker.colour(), Rgb8::CYAN);
        picker.setup_from_str("#336699").unwrap();
        assert_eq!(picker.colour(), Rgb8::rgb(0x33, 0x66, 0x99));
    }

    #[test]
    fn select_records_history() {
        init_logger();
        let mut picker = ColourPicker::new();
        picker.setup_from_colour(Rgb8::rgb(10, 20, 30));
        assert_eq!(picker.select(), "rgb(10, 20, 30)");
        picker.setup_from_colour(Rgb8::BLACK);
        assert_eq!(picker.select(), "rgb(0, 0, 0)");
        assert_eq!(picker.history().as_slice(), &[Rgb8::BLACK, Rgb8::rgb(10, 20, 30)]);

        assert_eq!(picker.recall(1), Some(Rgb8::rgb(10, 20, 30)));
        assert_eq!(picker.colour(), Rgb8::rgb(10, 20, 30));
        assert_eq!(picker.recall(2), None);
    }
}

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Colour picker dialog

use crate::{ColourHistory, ColourPicker};
use huekit::color::Rgb8;
use huekit::config::Config;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies who opened a [`ColourPickerDialog`]
///
/// Each [`ColourPickerButton`](crate::ColourPickerButton) has its own id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OpenerId(u64);

impl OpenerId {
    /// Allocate a new, unique id
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        OpenerId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A colour picker dialog
///
/// This is the headless model of the dialog: it owns the [`ColourPicker`]
/// state, tracks whether the dialog is shown and calls a return action when
/// a colour is confirmed. Drawing the dialog and routing pointer events to
/// [`Self::picker_mut`] is the host's job.
///
/// Construct one dialog per UI session and lend it (`&mut`) to each
/// [`ColourPickerButton`](crate::ColourPickerButton) which opens it; the
/// recent-colour history is then shared between those buttons.
///
/// The dialog remembers which [`OpenerId`] opened it. On confirmation the
/// colour is held for that opener until collected with
/// [`Self::take_selection`].
pub struct ColourPickerDialog {
    picker: ColourPicker,
    shown: bool,
    opener: Option<OpenerId>,
    selection: Option<(OpenerId, Rgb8)>,
    on_select: Option<Box<dyn FnMut(&str)>>,
}

impl fmt::Debug for ColourPickerDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColourPickerDialog")
            .field("picker", &self.picker)
            .field("shown", &self.shown)
            .field("opener", &self.opener)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl Default for ColourPickerDialog {
    fn default() -> Self {
        ColourPickerDialog::new()
    }
}

impl ColourPickerDialog {
    /// Title shown on the dialog frame
    pub const TITLE: &'static str = "Colour Picker";

    /// Construct a hidden dialog
    #[inline]
    pub fn new() -> Self {
        ColourPickerDialog::with_picker(ColourPicker::new())
    }

    /// Construct a hidden dialog over existing picker state
    #[inline]
    pub fn with_picker(picker: ColourPicker) -> Self {
        ColourPickerDialog {
            picker,
            shown: false,
            opener: None,
            selection: None,
            on_select: None,
        }
    }

    /// Construct a hidden dialog from saved configuration
    ///
    /// The picker shows the configured initial colour and history.
    pub fn from_config(config: &Config) -> Self {
        let history = ColourHistory::from_colours(config.history().iter().copied());
        let mut picker = ColourPicker::with_history(history);
        picker.setup_from_colour(config.initial_colour());
        ColourPickerDialog::with_picker(picker)
    }

    /// Store the history in `config`
    ///
    /// The config is marked dirty only if the history changed.
    pub fn save_to(&self, config: &mut Config) {
        config.set_history(self.history().iter());
    }

    /// Call the handler `f` on confirmation
    ///
    /// `f` receives the colour formatted as `rgb(r, g, b)`.
    #[inline]
    #[must_use]
    pub fn with(mut self, f: impl FnMut(&str) + 'static) -> Self {
        debug_assert!(self.on_select.is_none());
        self.on_select = Some(Box::new(f));
        self
    }

    /// Show the dialog, optionally preset to `colour`
    ///
    /// Without a colour the previous state is kept. The dialog has no
    /// opener; any uncollected selection is dropped.
    pub fn open(&mut self, colour: Option<Rgb8>) {
        self.open_impl(None, colour);
    }

    /// Show the dialog on behalf of `opener`, optionally preset to `colour`
    ///
    /// This replaces any previous opener: only the latest opener receives
    /// the confirmed colour.
    pub fn open_for(&mut self, opener: OpenerId, colour: Option<Rgb8>) {
        self.open_impl(Some(opener), colour);
    }

    fn open_impl(&mut self, opener: Option<OpenerId>, colour: Option<Rgb8>) {
        if let Some(colour) = colour {
            self.picker.setup_from_colour(colour);
        }
        self.opener = opener;
        self.selection = None;
        self.show();
    }

    /// Who opened the dialog, if known
    #[inline]
    pub fn opener(&self) -> Option<OpenerId> {
        self.opener
    }

    /// Collect the confirmed colour if `opener` opened the dialog
    ///
    /// Returns `None` for any other opener, leaving the selection in place.
    pub fn take_selection(&mut self, opener: OpenerId) -> Option<Rgb8> {
        match self.selection {
            Some((id, colour)) if id == opener => {
                self.selection = None;
                Some(colour)
            }
            _ => None,
        }
    }

    /// Show the dialog
    #[inline]
    pub fn show(&mut self) {
        self.shown = true;
    }

    /// Hide the dialog without selecting a colour
    #[inline]
    pub fn hide(&mut self) {
        self.shown = false;
    }

    /// True while the dialog is shown
    #[inline]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Access the picker state
    #[inline]
    pub fn picker(&self) -> &ColourPicker {
        &self.picker
    }

    /// Mutable access to the picker state
    #[inline]
    pub fn picker_mut(&mut self) -> &mut ColourPicker {
        &mut self.picker
    }

    /// Recently selected colours
    #[inline]
    pub fn history(&self) -> &ColourHistory {
        self.picker.history()
    }

    /// Confirm the current colour (the dialog's "Select" button)
    ///
    /// Hides the dialog, records the colour in the history, holds it for
    /// the opener (see [`Self::take_selection`]) and calls the return action.
    /// Returns the colour formatted as `rgb(r, g, b)`, or `None` if the
    /// dialog is not shown.
    pub fn confirm(&mut self) -> Option<String> {
        if !self.shown {
            log::warn!("ColourPickerDialog::confirm: dialog is not shown");
            return None;
        }
        self.hide();
        if let Some(opener) = self.opener.take() {
            self.selection = Some((opener, self.picker.colour()));
        }
        let colour = self.picker.select();
        if let Some(f) = self.on_select.as_mut() {
            f(&colour);
        }
        Some(colour)
    }
}

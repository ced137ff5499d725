// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Colour picker buttons

use crate::{ColourPickerDialog, OpenerId};
use huekit::color::Rgb8;
use std::fmt;

/// How a [`ColourPickerButton`] presents itself
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// A text button whose background is the chosen colour
    ///
    /// Opening presets the dialog to this colour and confirming adopts the
    /// selected colour.
    Swatch,
    /// A button showing a fixed icon
    ///
    /// The dialog opens with its previous state and the button's appearance
    /// never changes.
    Image { icon: String },
}

/// A button which opens a colour picker
///
/// The button does not own a dialog. [`Self::click`] opens the
/// [`ColourPickerDialog`] it is given on behalf of this button. Once the
/// dialog is confirmed, [`Self::handle_messages`] collects the colour (if this
/// button opened the dialog) and calls the handler set with [`Self::with`].
/// [`Self::confirm`] does both steps.
pub struct ColourPickerButton {
    label: String,
    background: Rgb8,
    presentation: Presentation,
    id: Option<String>,
    opener: OpenerId,
    on_change: Option<Box<dyn FnMut(&str, Option<&str>)>>,
}

impl fmt::Debug for ColourPickerButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColourPickerButton")
            .field("label", &self.label)
            .field("background", &self.background)
            .field("presentation", &self.presentation)
            .field("id", &self.id)
            .field("opener", &self.opener)
            .finish_non_exhaustive()
    }
}

impl ColourPickerButton {
    /// Tooltip for all colour picker buttons
    pub const TOOLTIP: &'static str = "Open Colour Picker...";

    /// Construct a swatch button with a `label`
    ///
    /// The initial colour is [`Rgb8::LIGHT_GREY`].
    pub fn new(label: impl ToString) -> Self {
        ColourPickerButton {
            label: label.to_string(),
            background: Rgb8::LIGHT_GREY,
            presentation: Presentation::Swatch,
            id: None,
            opener: OpenerId::next(),
            on_change: None,
        }
    }

    /// Construct an image button showing `icon`
    pub fn image(icon: impl ToString) -> Self {
        ColourPickerButton {
            presentation: Presentation::Image {
                icon: icon.to_string(),
            },
            ..ColourPickerButton::new("")
        }
    }

    /// Set the initial colour
    #[inline]
    #[must_use]
    pub fn with_colour(mut self, colour: Rgb8) -> Self {
        self.background = colour;
        self
    }

    /// Set an identifier, passed to the handler
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Call the handler `f` when a colour is chosen
    ///
    /// `f` receives the colour as `rgb(r, g, b)` and the button's identifier.
    #[inline]
    #[must_use]
    pub fn with(mut self, f: impl FnMut(&str, Option<&str>) + 'static) -> Self {
        debug_assert!(self.on_change.is_none());
        self.on_change = Some(Box::new(f));
        self
    }

    /// The button's label
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The button's background colour
    #[inline]
    pub fn background(&self) -> Rgb8 {
        self.background
    }

    /// The button's identifier
    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The button's presentation
    #[inline]
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// The id under which this button opens a dialog
    #[inline]
    pub fn opener(&self) -> OpenerId {
        self.opener
    }

    /// Handle a click: open `dialog`
    pub fn click(&self, dialog: &mut ColourPickerDialog) {
        let preset = match self.presentation {
            Presentation::Swatch => Some(self.background),
            Presentation::Image { .. } => None,
        };
        log::debug!("ColourPickerButton::click: id={:?}, preset={preset:?}", self.id);
        dialog.open_for(self.opener, preset);
    }

    /// Collect a colour confirmed in `dialog`, if this button opened it
    ///
    /// On success the colour is passed to [`Self::on_change`] and returned.
    pub fn handle_messages(&mut self, dialog: &mut ColourPickerDialog) -> Option<Rgb8> {
        let colour = dialog.take_selection(self.opener)?;
        self.on_change(colour);
        Some(colour)
    }

    /// Confirm the selection in `dialog`, then [handle](Self::handle_messages) it
    ///
    /// Returns the chosen colour, or `None` if the dialog is not shown or
    /// was opened by someone else.
    pub fn confirm(&mut self, dialog: &mut ColourPickerDialog) -> Option<Rgb8> {
        dialog.confirm()?;
        self.handle_messages(dialog)
    }

    /// Adopt a chosen colour and notify the handler
    pub fn on_change(&mut self, colour: Rgb8) {
        if self.presentation == Presentation::Swatch {
            self.background = colour;
        }
        let css = colour.format_css();
        if let Some(f) = self.on_change.as_mut() {
            f(&css, self.id.as_deref());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use huekit::geom::Coord;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn swatch_button_presets_and_adopts() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let mut button = ColourPickerButton::new("Choose Colour")
            .with_id("bg")
            .with(move |c, id| sink.borrow_mut().push(format!("{c} {id:?}")));
        assert_eq!(button.background(), Rgb8::LIGHT_GREY);

        let mut dialog = ColourPickerDialog::new();
        button.click(&mut dialog);
        assert!(dialog.is_shown());
        assert_eq!(dialog.picker().colour(), Rgb8::LIGHT_GREY);

        dialog.picker_mut().select_shade(Coord(0, 0));
        let chosen = button.confirm(&mut dialog).unwrap();
        assert_eq!(button.background(), chosen);
        assert_eq!(*log.borrow(), vec![format!("{chosen} Some(\"bg\")")]);
        assert_eq!(button.confirm(&mut dialog), None);
    }

    #[test]
    fn image_button_keeps_appearance() {
        let mut dialog = ColourPickerDialog::new();
        dialog.picker_mut().setup_from_colour(Rgb8::rgb(1, 2, 3));

        let mut button = ColourPickerButton::image("palette.png");
        assert_eq!(button.presentation(), &Presentation::Image {
            icon: "palette.png".into()
        });
        button.click(&mut dialog);
        assert_eq!(dialog.picker().colour(), Rgb8::rgb(1, 2, 3));
        assert_eq!(button.confirm(&mut dialog), Some(Rgb8::rgb(1, 2, 3)));
        assert_eq!(button.background(), Rgb8::LIGHT_GREY);
    }

    #[test]
    fn dialog_confirm_updates_opening_button() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (sink_a, sink_b) = (log.clone(), log.clone());
        let mut a = ColourPickerButton::new("a")
            .with_id("a")
            .with(move |c, id| sink_a.borrow_mut().push(format!("{c} {id:?}")));
        let mut b = ColourPickerButton::new("b")
            .with_id("b")
            .with(move |c, id| sink_b.borrow_mut().push(format!("{c} {id:?}")));

        let mut dialog = ColourPickerDialog::new();
        a.click(&mut dialog);
        dialog.hide();
        b.click(&mut dialog);
        assert_eq!(dialog.opener(), Some(b.opener()));
        dialog.picker_mut().setup_from_colour(Rgb8::rgb(0, 0, 255));
        // The dialog's own "Select" button
        assert_eq!(dialog.confirm().as_deref(), Some("rgb(0, 0, 255)"));

        assert_eq!(a.handle_messages(&mut dialog), None);
        assert_eq!(b.handle_messages(&mut dialog), Some(Rgb8::rgb(0, 0, 255)));
        assert_eq!(a.background(), Rgb8::LIGHT_GREY);
        assert_eq!(b.background(), Rgb8::rgb(0, 0, 255));
        assert_eq!(*log.borrow(), vec!["rgb(0, 0, 255) Some(\"b\")".to_string()]);
    }

    #[test]
    fn buttons_share_dialog_history() {
        let mut dialog = ColourPickerDialog::new();
        let mut a = ColourPickerButton::new("a").with_colour(Rgb8::rgb(255, 0, 0));
        let mut b = ColourPickerButton::new("b").with_colour(Rgb8::rgb(0, 0, 255));
        a.click(&mut dialog);
        a.confirm(&mut dialog);
        b.click(&mut dialog);
        b.confirm(&mut dialog);
        assert_eq!(dialog.history().as_slice(), &[
            Rgb8::rgb(0, 0, 255),
            Rgb8::rgb(255, 0, 0)
        ]);
    }
}

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Recent-colour history

use huekit::color::Rgb8;
use smallvec::SmallVec;

const HISTORY_LEN: usize = 15;

/// Recently selected colours, most recent first
///
/// The history holds at most [`ColourHistory::CAPACITY`] distinct colours.
/// Pushing a colour already present moves it to the front; pushing a new
/// colour into a full history drops the oldest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColourHistory {
    colours: SmallVec<[Rgb8; HISTORY_LEN]>,
}

impl ColourHistory {
    /// Maximum number of colours held
    pub const CAPACITY: usize = HISTORY_LEN;

    /// Construct an empty history
    #[inline]
    pub fn new() -> Self {
        ColourHistory::default()
    }

    /// Construct from colours given most recent first
    ///
    /// Later duplicates are dropped and the result is truncated to
    /// [`Self::CAPACITY`].
    pub fn from_colours(colours: impl IntoIterator<Item = Rgb8>) -> Self {
        let mut history = ColourHistory::new();
        for colour in colours {
            if history.colours.len() == Self::CAPACITY {
                break;
            }
            if !history.contains(colour) {
                history.colours.push(colour);
            }
        }
        history
    }

    /// Make `colour` the most recent
    ///
    /// Returns the colour evicted to make room, if any.
    pub fn push(&mut self, colour: Rgb8) -> Option<Rgb8> {
        if let Some(index) = self.position(colour) {
            self.colours[..=index].rotate_right(1);
            return None;
        }

        let evicted = if self.colours.len() == Self::CAPACITY {
            self.colours.pop()
        } else {
            None
        };
        self.colours.insert(0, colour);
        if let Some(old) = evicted {
            log::trace!("ColourHistory::push: evicted {old}");
        }
        evicted
    }

    /// Index of `colour`, if present
    #[inline]
    pub fn position(&self, colour: Rgb8) -> Option<usize> {
        self.colours.iter().position(|c| *c == colour)
    }

    /// True if `colour` is present
    #[inline]
    pub fn contains(&self, colour: Rgb8) -> bool {
        self.position(colour).is_some()
    }

    /// Get the colour at `index` (0 is the most recent)
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgb8> {
        self.colours.get(index).copied()
    }

    /// Most recent colour
    #[inline]
    pub fn latest(&self) -> Option<Rgb8> {
        self.get(0)
    }

    /// Number of colours held
    #[inline]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// True if no colour has been selected
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// True if the next new colour will evict the oldest
    #[inline]
    pub fn is_full(&self) -> bool {
        self.colours.len() == Self::CAPACITY
    }

    /// Colours, most recent first
    #[inline]
    pub fn as_slice(&self) -> &[Rgb8] {
        &self.colours
    }

    /// Iterate over colours, most recent first
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Rgb8> + '_ {
        self.colours.iter().copied()
    }

    /// Remove all colours
    #[inline]
    pub fn clear(&mut self) {
        self.colours.clear();
    }
}

impl FromIterator<Rgb8> for ColourHistory {
    fn from_iter<I: IntoIterator<Item = Rgb8>>(iter: I) -> Self {
        ColourHistory::from_colours(iter)
    }
}

impl<'a> IntoIterator for &'a ColourHistory {
    type Item = &'a Rgb8;
    type IntoIter = std::slice::Iter<'a, Rgb8>;

    fn into_iter(self) -> Self::IntoIter {
        self.colours.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ColourHistory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.colours.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ColourHistory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let colours = Vec::<Rgb8>::deserialize(deserializer)?;
        Ok(ColourHistory::from_colours(colours))
    }
}

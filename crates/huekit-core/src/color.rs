// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Colour types

use std::fmt;
use thiserror::Error;

/// 8-bit-per-channel opaque RGB colour
///
/// This is the interchange format between the picker and its host UI.
///
/// It may be parsed from either of two textual forms:
/// ```
/// use huekit_core::color::Rgb8;
///
/// let red: Rgb8 = "#ff0000".parse().unwrap();
/// assert_eq!(red, Rgb8::rgb(255, 0, 0));
///
/// // The leading `#` is optional and uppercase is fine
/// let green: Rgb8 = "00FF00".parse().unwrap();
/// assert_eq!(green, Rgb8::rgb(0, 255, 0));
///
/// // The decimal form used by CSS
/// let teal: Rgb8 = "rgb(0, 128, 128)".parse().unwrap();
/// assert_eq!(teal, Rgb8::rgb(0, 128, 128));
/// ```
///
/// Formatting with [`Display`](fmt::Display) yields the decimal form
/// (see [`Rgb8::format_css`]).
///
/// This is encoded as an array of three bytes: `[r, g, b]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgb8([u8; 3]);

impl Rgb8 {
    /// Opaque white
    pub const WHITE: Self = Self::grey(255);
    /// Opaque black
    pub const BLACK: Self = Self::grey(0);
    /// Cyan: the hue used when hue is undefined (for greys)
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Light grey: the default colour of a picker button
    pub const LIGHT_GREY: Self = Self::grey(211);

    /// Construct from R-G-B components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Construct from grey-scale
    pub const fn grey(s: u8) -> Self {
        Self::rgb(s, s, s)
    }

    /// Red component
    #[inline]
    pub fn r(self) -> u8 {
        self.0[0]
    }

    /// Green component
    #[inline]
    pub fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue component
    #[inline]
    pub fn b(self) -> u8 {
        self.0[2]
    }

    /// Largest component
    #[inline]
    pub fn max(self) -> u8 {
        self.0[0].max(self.0[1]).max(self.0[2])
    }

    /// Smallest component
    #[inline]
    pub fn min(self) -> u8 {
        self.0[0].min(self.0[1]).min(self.0[2])
    }

    /// True if all components are equal
    #[inline]
    pub fn is_grey(self) -> bool {
        self.max() == self.min()
    }

    /// Apply `f` to each component
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn map(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self([f(self.0[0]), f(self.0[1]), f(self.0[2])])
    }

    /// Format as a lower-case HTML colour code: `#rrggbb`
    pub fn format_html(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }

    /// Format in decimal CSS notation: `rgb(r, g, b)`
    ///
    /// This is the form passed back to the host UI on selection.
    pub fn format_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        c.0
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(c: [u8; 3]) -> Self {
        Self(c)
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

/// Malformed colour designator
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Empty input
    #[error("empty colour string")]
    Empty,
    /// Incorrect input length for a hex code
    #[error("input has unexpected length (expected optional `#` then 6 hex digits)")]
    Length,
    /// Invalid hex byte
    #[error("input byte is not a valid hex byte (expected 0-9, a-f or A-F)")]
    InvalidHex,
    /// Not of the form `rgb(r, g, b)`
    #[error("expected `rgb(r, g, b)` with three comma-separated components")]
    Syntax,
    /// A decimal component is not a non-negative integer
    #[error("colour component is not a decimal integer")]
    Component,
    /// A decimal component exceeds 255
    #[error("colour component {0} is out of range (expected 0-255)")]
    OutOfRange(u32),
}

fn parse_hex(mut s: &[u8]) -> Result<Rgb8, ParseError> {
    if s.first() == Some(&b'#') {
        s = &s[1..];
    }
    if s.len() != 6 {
        return Err(ParseError::Length);
    }

    fn val(c: u8) -> Result<u8, ParseError> {
        match c {
            b'A'..=b'F' => Ok(c - b'A' + 10),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'0'..=b'9' => Ok(c - b'0'),
            _ => Err(ParseError::InvalidHex),
        }
    }

    fn byte(s: &[u8]) -> Result<u8, ParseError> {
        Ok((val(s[0])? << 4) | val(s[1])?)
    }

    Ok(Rgb8([byte(&s[0..2])?, byte(&s[2..4])?, byte(&s[4..6])?]))
}

fn parse_decimal(s: &str) -> Result<Rgb8, ParseError> {
    let inner = s
        .strip_prefix("rgb(")
        .and_then(|s| s.strip_suffix(')'))
        .ok_or(ParseError::Syntax)?;

    let mut parts = inner.split(',');
    let mut next = || -> Result<u8, ParseError> {
        let part = parts.next().ok_or(ParseError::Syntax)?.trim();
        if part.is_empty() || !part.bytes().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::Component);
        }
        // u32 overflow is reported as out of range
        let value: u32 = part.parse().map_err(|_| ParseError::OutOfRange(u32::MAX))?;
        u8::try_from(value).map_err(|_| ParseError::OutOfRange(value))
    };
    let (r, g, b) = (next()?, next()?, next()?);
    if parts.next().is_some() {
        return Err(ParseError::Syntax);
    }
    Ok(Rgb8::rgb(r, g, b))
}

/// Parse a colour designator from a string
///
/// Accepts (with surrounding whitespace ignored):
///
/// -   `rgb(r, g, b)` with decimal components in `0..=255`; whitespace around
///     components is ignored
/// -   an HTML code: optional `#` prefix then six upper or lower case hex digits
impl std::str::FromStr for Rgb8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            Err(ParseError::Empty)
        } else if s.starts_with("rgb") {
            parse_decimal(s)
        } else {
            parse_hex(s.as_bytes())
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format_html())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Rgb8;

            fn expecting(&self, fmtr: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(
                    fmtr,
                    "an HTML colour code (optional '#' then 6 hex digits) or 'rgb(r, g, b)'"
                )
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn format() {
        let c = Rgb8::rgb(10, 0, 255);
        assert_eq!(c.format_html(), "#0a00ff");
        assert_eq!(c.format_css(), "rgb(10, 0, 255)");
        assert_eq!(Rgb8::BLACK.format_css(), "rgb(0, 0, 0)");
        assert_eq!(Rgb8::LIGHT_GREY.to_string(), "rgb(211, 211, 211)");
    }

    #[test]
    fn parse_decimal_forms() {
        assert_eq!("rgb(1, 2, 3)".parse(), Ok(Rgb8::rgb(1, 2, 3)));
        assert_eq!("rgb(1,2,3)".parse(), Ok(Rgb8::rgb(1, 2, 3)));
        assert_eq!("  rgb( 255 ,0, 7 ) ".parse(), Ok(Rgb8::rgb(255, 0, 7)));
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!("#A0b1C2".parse(), Ok(Rgb8::rgb(0xa0, 0xb1, 0xc2)));
        assert_eq!("000000".parse(), Ok(Rgb8::BLACK));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Rgb8>(), Err(ParseError::Empty));
        assert_eq!("#".parse::<Rgb8>(), Err(ParseError::Length));
        assert_eq!("#12345".parse::<Rgb8>(), Err(ParseError::Length));
        assert_eq!("#12345g".parse::<Rgb8>(), Err(ParseError::InvalidHex));
        assert_eq!("rgb(1, 2)".parse::<Rgb8>(), Err(ParseError::Syntax));
        assert_eq!("rgb(1, 2, 3, 4)".parse::<Rgb8>(), Err(ParseError::Syntax));
        assert_eq!("rgb(1, 2, 3".parse::<Rgb8>(), Err(ParseError::Syntax));
        assert_eq!("rgba(1, 2, 3)".parse::<Rgb8>(), Err(ParseError::Syntax));
        assert_eq!("rgb(1, -2, 3)".parse::<Rgb8>(), Err(ParseError::Component));
        assert_eq!("rgb(1, , 3)".parse::<Rgb8>(), Err(ParseError::Component));
        assert_eq!("rgb(1.5, 2, 3)".parse::<Rgb8>(), Err(ParseError::Component));
        assert_eq!("rgb(1, 256, 3)".parse::<Rgb8>(), Err(ParseError::OutOfRange(256)));
    }

    #[test]
    fn formatted_strings_parse_back() {
        for c in [Rgb8::rgb(0, 9, 10), Rgb8::rgb(99, 100, 255), Rgb8::WHITE] {
            assert_eq!(c.format_html().parse(), Ok(c));
            assert_eq!(c.format_css().parse(), Ok(c));
        }
    }

    #[test]
    fn components() {
        let c = Rgb8::rgb(30, 200, 7);
        assert_eq!((c.r(), c.g(), c.b()), (30, 200, 7));
        assert_eq!((c.max(), c.min()), (200, 7));
        assert!(!c.is_grey());
        assert!(Rgb8::grey(128).is_grey());
        assert_eq!(<[u8; 3]>::from(c), [30, 200, 7]);
        assert_eq!(c.map(|x| x / 2), Rgb8::rgb(15, 100, 3));
    }
}

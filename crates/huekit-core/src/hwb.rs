// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Hue / whiteness / blackness colour model
//!
//! A colour is decomposed into a *pure hue* (an RGB triple with one component
//! at 0 and another at 255), a fraction of white mixed in and a fraction of
//! black mixed in.
//!
//! Pure hues are also numbered: the hue circle is split into six
//! [segments](HueSegment) of 256 steps each, giving [`Hue`] values in
//! `0..1536`. The number drives pointer placement on the hue strip while the
//! pure-hue triple is the background of the shade square.

use crate::cast::{Conv, ConvFloat};
use crate::color::{ParseError, Rgb8};
use crate::util::clamp_unit;

/// One sixth of the hue circle
///
/// Within each segment one component is fixed at 255, one at 0 and the third
/// varies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HueSegment {
    /// `0..256`: red is 255, green rises
    RedYellow = 0,
    /// `256..512`: green is 255, red falls
    YellowGreen,
    /// `512..768`: green is 255, blue rises
    GreenCyan,
    /// `768..1024`: blue is 255, green falls
    CyanBlue,
    /// `1024..1280`: blue is 255, red rises
    BlueMagenta,
    /// `1280..1536`: red is 255, blue falls
    MagentaRed,
}

impl HueSegment {
    /// All segments, in hue order
    pub const ALL: [HueSegment; 6] = [
        HueSegment::RedYellow,
        HueSegment::YellowGreen,
        HueSegment::GreenCyan,
        HueSegment::CyanBlue,
        HueSegment::BlueMagenta,
        HueSegment::MagentaRed,
    ];

    /// The first hue in this segment
    #[inline]
    pub fn start(self) -> Hue {
        Hue(self as u16 * Hue::SEGMENT_LEN)
    }
}

/// Integer hue in the range `0..1536`
///
/// Constructors clamp out-of-range input to the nearest valid hue.
/// Deserialisation rejects out-of-range numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hue(u16);

impl Hue {
    /// Number of steps per [`HueSegment`]
    pub const SEGMENT_LEN: u16 = 256;
    /// Number of distinct hues
    pub const COUNT: u16 = 6 * Self::SEGMENT_LEN;
    /// Red
    pub const MIN: Self = Hue(0);
    /// The last hue, just short of red
    pub const MAX: Self = Hue(Self::COUNT - 1);

    /// Construct, clamping to [`Hue::MAX`]
    #[inline]
    pub fn new(n: u16) -> Self {
        Hue(n.min(Self::MAX.0))
    }

    /// Construct from any integer, clamping to `MIN..=MAX`
    #[inline]
    pub fn clamped(n: i32) -> Self {
        Hue(u16::conv(n.clamp(0, i32::from(Self::MAX.0))))
    }

    /// Construct if `n` is in range
    #[inline]
    pub fn try_new(n: u16) -> Option<Self> {
        (n < Self::COUNT).then_some(Hue(n))
    }

    /// Get the hue number
    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }

    /// The segment containing this hue
    #[inline]
    pub fn segment(self) -> HueSegment {
        HueSegment::ALL[usize::from(self.0 / Self::SEGMENT_LEN)]
    }

    /// Position within the segment, `0..=255`
    #[inline]
    pub fn offset(self) -> u8 {
        u8::conv(self.0 % Self::SEGMENT_LEN)
    }

    /// Map to its pure-hue RGB triple
    pub fn to_rgb(self) -> Rgb8 {
        let i = self.offset();
        let j = 255 - i;
        match self.segment() {
            HueSegment::RedYellow => Rgb8::rgb(255, i, 0),
            HueSegment::YellowGreen => Rgb8::rgb(j, 255, 0),
            HueSegment::GreenCyan => Rgb8::rgb(0, 255, i),
            HueSegment::CyanBlue => Rgb8::rgb(0, j, 255),
            HueSegment::BlueMagenta => Rgb8::rgb(i, 0, 255),
            HueSegment::MagentaRed => Rgb8::rgb(255, 0, j),
        }
    }

    /// The hue number of a colour
    ///
    /// The colour is first reduced to its [pure hue](Rgb8::pure_hue). The
    /// result is never 511, 1023 or 1535: those hues have the same triple as
    /// the first step of the following segment (or red), which is preferred.
    pub fn of(colour: Rgb8) -> Self {
        let hue = colour.pure_hue();
        let (r, g, b) = (hue.r(), hue.g(), hue.b());
        // (segment start, varying component, rising?)
        let (start, v, rising) = if r == 255 {
            if b == 0 { (0, g, true) } else { (1280, b, false) }
        } else if g == 255 {
            if r == 0 { (512, b, true) } else { (256, r, false) }
        } else {
            debug_assert_eq!(b, 255);
            if g == 0 { (1024, r, true) } else { (768, g, false) }
        };
        let step = if rising { v } else { 255 - v };
        Hue(start + u16::from(step))
    }
}

impl From<Hue> for u16 {
    #[inline]
    fn from(hue: Hue) -> Self {
        hue.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Hue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let n = u16::deserialize(deserializer)?;
        Hue::try_new(n).ok_or_else(|| {
            serde::de::Error::custom(format_args!(
                "hue {n} out of range: expected 0..{}",
                Hue::COUNT
            ))
        })
    }
}

impl Rgb8 {
    /// Reduce to a pure hue
    ///
    /// Components are rescaled so that the minimum becomes 0 and the maximum
    /// 255. Hue is undefined for greys; these yield [`Rgb8::CYAN`].
    pub fn pure_hue(self) -> Rgb8 {
        let (max, min) = (self.max(), self.min());
        if max == min {
            return Rgb8::CYAN;
        }
        let d = u32::from(max - min);
        // round(255 * (c - min) / d), ties upward, in exact integer arithmetic
        self.map(|c| {
            let n = 510 * u32::from(c - min) + d;
            u8::conv(n / (2 * d))
        })
    }

    /// Decompose into hue, whiteness and blackness
    ///
    /// Black has whiteness 1 (the white fraction of a colour with no light
    /// is taken as total).
    pub fn to_hwb(self) -> Hwb {
        let (max, min) = (self.max(), self.min());
        let white = if max == 0 {
            1.0
        } else {
            f32::conv(min) / f32::conv(max)
        };
        let black = 1.0 - f32::conv(max) / 255.0;
        let hue = self.pure_hue();
        Hwb {
            hue,
            number: Hue::of(hue),
            white,
            black,
        }
    }
}

/// Mix `white` then `black` into a pure hue
fn blend(hue: Rgb8, white: f32, black: f32) -> Rgb8 {
    let (white, black) = (clamp_unit(white), clamp_unit(black));
    hue.map(|c| u8::conv_nearest((1.0 - black) * (f32::conv(c) * (1.0 - white) + 255.0 * white)))
}

/// A colour in hue / whiteness / blackness form
///
/// This is derived from an [`Rgb8`] via [`Rgb8::to_hwb`] and converted back
/// with [`Hwb::to_rgb`]. Both representations of the hue are kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hwb {
    /// Pure-hue triple
    pub hue: Rgb8,
    /// Hue number
    pub number: Hue,
    /// Fraction of white, `0..=1`
    pub white: f32,
    /// Fraction of black, `0..=1`
    pub black: f32,
}

impl Hwb {
    /// Construct from a hue number and shade
    ///
    /// `white` and `black` are clamped to `0..=1`.
    pub fn new(number: Hue, white: f32, black: f32) -> Self {
        Hwb {
            hue: number.to_rgb(),
            number,
            white: clamp_unit(white),
            black: clamp_unit(black),
        }
    }

    /// Replace the hue
    #[must_use = "method does not modify self but returns a new value"]
    pub fn with_hue(self, number: Hue) -> Self {
        Hwb {
            hue: number.to_rgb(),
            number,
            ..self
        }
    }

    /// Replace whiteness and blackness
    #[must_use = "method does not modify self but returns a new value"]
    pub fn with_shade(self, white: f32, black: f32) -> Self {
        Hwb {
            white: clamp_unit(white),
            black: clamp_unit(black),
            ..self
        }
    }

    /// Convert to RGB
    pub fn to_rgb(self) -> Rgb8 {
        blend(self.hue, self.white, self.black)
    }
}

impl From<Rgb8> for Hwb {
    #[inline]
    fn from(colour: Rgb8) -> Self {
        colour.to_hwb()
    }
}

impl From<Hwb> for Rgb8 {
    #[inline]
    fn from(hwb: Hwb) -> Self {
        hwb.to_rgb()
    }
}

/// Parse from either textual colour form (see [`Rgb8`])
impl std::str::FromStr for Hwb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<Rgb8>()?.to_hwb())
    }
}

/// Hue input to [`hwb_to_rgb`]: a number or a pure-hue triple
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HueSource {
    Number(Hue),
    Rgb(Rgb8),
}

impl From<Hue> for HueSource {
    fn from(hue: Hue) -> Self {
        HueSource::Number(hue)
    }
}

impl From<Rgb8> for HueSource {
    fn from(hue: Rgb8) -> Self {
        HueSource::Rgb(hue)
    }
}

/// Mix a hue with white and black
///
/// Returns `(hue, colour)`: the pure-hue triple and the blended colour.
/// A hue given as a triple is used as-is.
pub fn hwb_to_rgb(hue: impl Into<HueSource>, white: f32, black: f32) -> (Rgb8, Rgb8) {
    let hue = match hue.into() {
        HueSource::Number(n) => n.to_rgb(),
        HueSource::Rgb(c) => c,
    };
    (hue, blend(hue, white, black))
}

#[cfg(test)]
mod test {
    use super::*;

    fn near(a: Rgb8, b: Rgb8) -> bool {
        let a: [u8; 3] = a.into();
        let b: [u8; 3] = b.into();
        a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= 1)
    }

    #[test]
    fn segment_boundaries() {
        let number = |r, g, b| Rgb8::rgb(r, g, b).to_hwb().number.get();
        assert_eq!(number(255, 0, 0), 0);
        assert_eq!(number(255, 255, 0), 255);
        assert_eq!(number(254, 255, 0), 257);
        assert_eq!(number(0, 255, 0), 512);
        assert_eq!(number(0, 255, 255), 767);
        assert_eq!(number(0, 254, 255), 769);
        assert_eq!(number(0, 0, 255), 1024);
        assert_eq!(number(255, 0, 255), 1280);
        assert_eq!(number(255, 0, 1), 1534);
    }

    #[test]
    fn segments_cover_hue_circle() {
        let mut next = 0;
        for seg in HueSegment::ALL {
            assert_eq!(seg.start().get(), next);
            for n in next..next + Hue::SEGMENT_LEN {
                assert_eq!(Hue::new(n).segment(), seg);
            }
            next += Hue::SEGMENT_LEN;
        }
        assert_eq!(next, Hue::COUNT);
    }

    #[test]
    fn every_hue_is_pure_and_stable() {
        for n in 0..Hue::COUNT {
            let hue = Hue::new(n);
            let rgb = hue.to_rgb();
            assert_eq!((rgb.max(), rgb.min()), (255, 0), "hue {n}");
            let back = Hue::of(rgb);
            assert!(back.get() < Hue::COUNT);
            assert_eq!(back.to_rgb(), rgb, "hue {n}");
        }
    }

    #[test]
    fn achromatic() {
        let hwb = Rgb8::grey(128).to_hwb();
        assert_eq!(hwb.hue, Rgb8::CYAN);
        assert_eq!(hwb.number.get(), 767);
        assert_eq!(hwb.white, 1.0);
        assert!((hwb.black - 0.498).abs() < 0.001);
        assert_eq!(hwb.to_rgb(), Rgb8::grey(128));
    }

    #[test]
    fn pure_black_does_not_divide_by_zero() {
        let hwb = Rgb8::BLACK.to_hwb();
        assert_eq!(hwb.white, 1.0);
        assert_eq!(hwb.black, 1.0);
        assert!(hwb.white.is_finite());
        assert_eq!(hwb.to_rgb(), Rgb8::BLACK);
    }

    #[test]
    fn white() {
        let hwb = Rgb8::WHITE.to_hwb();
        assert_eq!((hwb.white, hwb.black), (1.0, 0.0));
        assert_eq!(hwb.to_rgb(), Rgb8::WHITE);
    }

    #[test]
    fn pure_hue_rescales() {
        assert_eq!(Rgb8::rgb(100, 50, 0).pure_hue(), Rgb8::rgb(255, 128, 0));
        assert_eq!(Rgb8::rgb(10, 20, 30).pure_hue(), Rgb8::rgb(0, 128, 255));
        assert_eq!(Rgb8::rgb(0, 1, 2).pure_hue(), Rgb8::rgb(0, 128, 255));
    }

    #[test]
    fn round_trip_sampled() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(3) {
                for b in (0..=255u8).step_by(7) {
                    let c = Rgb8::rgb(r, g, b);
                    let hwb = c.to_hwb();
                    assert!((0.0..=1.0).contains(&hwb.white));
                    assert!((0.0..=1.0).contains(&hwb.black));
                    assert!(hwb.number.get() < Hue::COUNT);
                    let (_, back) = hwb_to_rgb(hwb.number, hwb.white, hwb.black);
                    assert!(near(back, c), "{c} -> {hwb:?} -> {back}");
                }
            }
        }
    }

    #[test]
    fn round_trip_greys_and_hues() {
        for s in 0..=255 {
            let c = Rgb8::grey(s);
            assert_eq!(c.to_hwb().to_rgb(), c);
        }
        for n in 0..Hue::COUNT {
            let c = Hue::new(n).to_rgb();
            assert_eq!(c.to_hwb().to_rgb(), c);
        }
    }

    #[test]
    fn hwb_to_rgb_forms_agree() {
        let hue = Hue::new(300);
        let (h1, c1) = hwb_to_rgb(hue, 0.25, 0.5);
        let (h2, c2) = hwb_to_rgb(hue.to_rgb(), 0.25, 0.5);
        assert_eq!((h1, c1), (h2, c2));
        assert_eq!(Hwb::new(hue, 0.25, 0.5).to_rgb(), c1);
    }

    #[test]
    fn hue_770_is_cyan_blue() {
        let (hue, colour) = hwb_to_rgb(Hue::new(770), 0.0, 0.0);
        assert_eq!(Hue::new(770).segment(), HueSegment::CyanBlue);
        assert_eq!(hue, Rgb8::rgb(0, 253, 255));
        assert_eq!(colour, hue);
    }

    #[test]
    fn clamping() {
        assert_eq!(Hue::new(5000), Hue::MAX);
        assert_eq!(Hue::clamped(-3), Hue::MIN);
        assert_eq!(Hue::clamped(2000), Hue::MAX);
        assert_eq!(Hue::try_new(1536), None);
        assert_eq!(Hue::try_new(1535), Some(Hue::MAX));

        let hwb = Hwb::new(Hue::MIN, -1.0, f32::NAN);
        assert_eq!((hwb.white, hwb.black), (0.0, 0.0));
        let (_, c) = hwb_to_rgb(Hue::MIN, 2.0, -2.0);
        assert_eq!(c, Rgb8::WHITE);
    }

    #[cfg(feature = "json")]
    #[test]
    fn deserialize_hue_checks_range() {
        let hue: Hue = serde_json::from_str("1535").unwrap();
        assert_eq!(hue, Hue::MAX);
        assert_eq!(serde_json::to_string(&Hue::new(770)).unwrap(), "770");

        let err = serde_json::from_str::<Hue>("5000").unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");
        assert!(serde_json::from_str::<Hue>("1536").is_err());
        assert!(serde_json::from_str::<Hue>("-1").is_err());
    }

    #[test]
    fn parse() {
        let hwb: Hwb = "rgb(255, 0, 0)".parse().unwrap();
        assert_eq!(hwb.number, Hue::MIN);
        assert_eq!("rgb(255, 0)".parse::<Hwb>(), Err(ParseError::Syntax));
    }
}

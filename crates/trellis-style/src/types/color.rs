//! Color model with RGB, HSV and HLS conversions.
//!
//! # Example
//!
//! ```
//! use trellis_style::types::{Color, ColorSpec, gray};
//!
//! assert_eq!(Color::rgb(255, 0, 0).to_string(), "rgba(255,0,0,1)");
//! assert_eq!(gray(0.5).to_string(), "rgba(127,127,127,1)");
//!
//! let spec = ColorSpec::hsv(0.0, 1.0, 1.0).alpha(0.5);
//! assert_eq!(spec.resolve().to_string(), "rgba(255,0,0,0.5)");
//! ```

use std::fmt;

use super::unit::{format_number, scale};

/// An 8-bit RGB color with a floating point alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity between 0.0 and 1.0.
    pub a: f64,
}

impl Color {
    /// Create a color from 8-bit components and alpha.
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color from RGB components in the 0.0-1.0 range.
    pub fn from_rgb(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::new(channel(red), channel(green), channel(blue), alpha)
    }

    /// Create a color from hue, saturation and value (all 0.0-1.0).
    pub fn from_hsv(hue: f64, saturation: f64, value: f64, alpha: f64) -> Self {
        let (r, g, b) = hsv_to_rgb(hue, saturation, value);
        Self::from_rgb(r, g, b, alpha)
    }

    /// Create a color from hue, lightness and saturation (all 0.0-1.0).
    pub fn from_hls(hue: f64, lightness: f64, saturation: f64, alpha: f64) -> Self {
        let (r, g, b) = hls_to_rgb(hue, lightness, saturation);
        Self::from_rgb(r, g, b, alpha)
    }

    /// RGB components in the 0.0-1.0 range.
    pub fn to_rgb(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Hue, saturation and value.
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_rgb();
        rgb_to_hsv(r, g, b)
    }

    /// Hue, lightness and saturation.
    pub fn to_hls(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_rgb();
        rgb_to_hls(r, g, b)
    }

    /// HLS lightness of this color.
    pub fn lightness(&self) -> f64 {
        self.to_hls().1
    }

    /// Same hue and value with a new HSV saturation.
    pub fn saturated(&self, saturation: f64) -> Self {
        let (h, _, v) = self.to_hsv();
        Self::from_hsv(h, saturation, v, self.a)
    }

    /// Same hue and saturation with a new HLS lightness.
    pub fn lit(&self, lightness: f64) -> Self {
        let (h, _, s) = self.to_hls();
        Self::from_hls(h, lightness, s, self.a)
    }

    /// Same color with a new alpha.
    pub fn transparent(&self, alpha: f64) -> Self {
        Self { a: alpha, ..*self }
    }

    /// Raise the lightness by `amount`, capped at 1.0.
    pub fn lighter(&self, amount: f64) -> Self {
        self.lit((self.lightness() + amount).min(1.0))
    }

    /// Lower the lightness by `amount`, floored at 0.0.
    pub fn darker(&self, amount: f64) -> Self {
        self.lit((self.lightness() - amount).max(0.0))
    }

    /// Raise the HSV value by `amount`, capped at 1.0.
    pub fn brighter(&self, amount: f64) -> Self {
        let (h, s, v) = self.to_hsv();
        Self::from_hsv(h, s, (v + amount).min(1.0), self.a)
    }

    /// `steps` colors from `start` to `end`, interpolated in HLS space.
    pub fn palette(start: Color, end: Color, steps: usize) -> Vec<Color> {
        let (h0, l0, s0) = start.to_hls();
        let (h1, l1, s1) = end.to_hls();

        let hues = scale(h0, h1, steps);
        let lights = scale(l0, l1, steps);
        let sats = scale(s0, s1, steps);
        let alphas = scale(start.a, end.a, steps);

        (0..steps)
            .map(|i| Color::from_hls(hues[i], lights[i], sats[i], alphas[i]))
            .collect()
    }

    /// Look up one of the sixteen basic CSS colors by name (case-insensitive).
    pub fn named(name: &str) -> Option<Color> {
        BASIC_COLORS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, c)| *c)
    }

    /// The sixteen basic CSS colors with their names.
    pub fn basic_palette() -> &'static [(&'static str, Color)] {
        BASIC_COLORS
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const SILVER: Self = Self::rgb(192, 192, 192);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const MAROON: Self = Self::rgb(128, 0, 0);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const PURPLE: Self = Self::rgb(128, 0, 128);
    pub const FUCHSIA: Self = Self::rgb(255, 0, 255);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const LIME: Self = Self::rgb(0, 255, 0);
    pub const OLIVE: Self = Self::rgb(128, 128, 0);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const NAVY: Self = Self::rgb(0, 0, 128);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const TEAL: Self = Self::rgb(0, 128, 128);
    pub const AQUA: Self = Self::rgb(0, 255, 255);
}

const BASIC_COLORS: &[(&str, Color)] = &[
    ("Black", Color::BLACK),
    ("Silver", Color::SILVER),
    ("Gray", Color::GRAY),
    ("White", Color::WHITE),
    ("Maroon", Color::MAROON),
    ("Red", Color::RED),
    ("Purple", Color::PURPLE),
    ("Fuchsia", Color::FUCHSIA),
    ("Green", Color::GREEN),
    ("Lime", Color::LIME),
    ("Olive", Color::OLIVE),
    ("Yellow", Color::YELLOW),
    ("Navy", Color::NAVY),
    ("Blue", Color::BLUE),
    ("Teal", Color::TEAL),
    ("Aqua", Color::AQUA),
];

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            format_number(self.a)
        )
    }
}

/// Pure red at the given lightness.
pub fn red(lightness: f64) -> Color {
    Color::rgb(255, 0, 0).lit(lightness)
}

/// Pure green at the given lightness.
pub fn green(lightness: f64) -> Color {
    Color::rgb(0, 255, 0).lit(lightness)
}

/// Pure blue at the given lightness.
pub fn blue(lightness: f64) -> Color {
    Color::rgb(0, 0, 255).lit(lightness)
}

/// Neutral gray at the given lightness.
pub fn gray(lightness: f64) -> Color {
    Color::rgb(255, 255, 255).lit(lightness)
}

/// How a color argument was given to a setter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSpec {
    /// A ready color; any alpha is already part of it.
    Color(Color),
    /// 8-bit red, green, blue and an optional alpha.
    Rgb(u8, u8, u8, Option<f64>),
    /// Hue, saturation, value and an optional alpha.
    Hsv(f64, f64, f64, Option<f64>),
    /// Hue, lightness, saturation and an optional alpha.
    Hls(f64, f64, f64, Option<f64>),
}

impl ColorSpec {
    /// An opaque color from 8-bit channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b, None)
    }

    /// An opaque color from hue, saturation and value, each in `0.0..=1.0`.
    pub fn hsv(hue: f64, saturation: f64, value: f64) -> Self {
        Self::Hsv(hue, saturation, value, None)
    }

    /// An opaque color from hue, lightness and saturation, each in `0.0..=1.0`.
    pub fn hls(hue: f64, lightness: f64, saturation: f64) -> Self {
        Self::Hls(hue, lightness, saturation, None)
    }

    /// Set the alpha of a component-based spec. Ready colors keep their own alpha.
    pub fn alpha(self, alpha: f64) -> Self {
        match self {
            ColorSpec::Color(_) => self,
            ColorSpec::Rgb(r, g, b, _) => ColorSpec::Rgb(r, g, b, Some(alpha)),
            ColorSpec::Hsv(h, s, v, _) => ColorSpec::Hsv(h, s, v, Some(alpha)),
            ColorSpec::Hls(h, l, s, _) => ColorSpec::Hls(h, l, s, Some(alpha)),
        }
    }

    /// Build the color this spec describes. A missing alpha means opaque.
    pub fn resolve(&self) -> Color {
        match *self {
            ColorSpec::Color(color) => color,
            ColorSpec::Rgb(r, g, b, alpha) => Color::new(r, g, b, alpha.unwrap_or(1.0)),
            ColorSpec::Hsv(h, s, v, alpha) => Color::from_hsv(h, s, v, alpha.unwrap_or(1.0)),
            ColorSpec::Hls(h, l, s, alpha) => Color::from_hls(h, l, s, alpha.unwrap_or(1.0)),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Color(color)
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.0) as u8
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    if minc == maxc {
        return (0.0, 0.0, maxc);
    }

    let range = maxc - minc;
    (hue(r, g, b, maxc, range), range / maxc, maxc)
}

fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    (
        hls_component(m1, m2, h + 1.0 / 3.0),
        hls_component(m1, m2, h),
        hls_component(m1, m2, h - 1.0 / 3.0),
    )
}

fn hls_component(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let sum = maxc + minc;
    let l = sum / 2.0;
    if minc == maxc {
        return (0.0, l, 0.0);
    }

    let range = maxc - minc;
    let s = if l <= 0.5 {
        range / sum
    } else {
        range / (2.0 - sum)
    };

    (hue(r, g, b, maxc, range), l, s)
}

// Shared hue computation of the HSV and HLS conversions.
fn hue(r: f64, g: f64, b: f64, maxc: f64, range: f64) -> f64 {
    let rc = (maxc - r) / range;
    let gc = (maxc - g) / range;
    let bc = (maxc - b) / range;

    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    (h / 6.0).rem_euclid(1.0)
}

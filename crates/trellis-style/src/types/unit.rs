//! Dimension values and unit inference.
//!
//! # Example
//!
//! ```
//! use trellis_style::types::{Measure, pc, px, rem};
//!
//! assert_eq!(px(14).to_string(), "14px");
//! assert_eq!(pc(0.8).to_string(), "80%");
//! assert_eq!((rem(0.8) / 4.0).to_string(), "0.2rem");
//!
//! // Integers infer to pixels, floats to the given fallback unit.
//! assert_eq!(Measure::from(5).infer(rem), "5px");
//! assert_eq!(Measure::from(0.5).infer(pc), "50%");
//! assert_eq!(Measure::from("auto").infer(rem), "auto");
//! ```

use std::fmt;
use std::ops::{Div, Mul, Neg};

/// The unit suffix of a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Absolute pixels.
    Px,
    /// Relative to root font size.
    Rem,
    /// Relative to current font size.
    Em,
    /// Percentage of containing block.
    Percent,
    /// Fraction of the free space in a grid container.
    Fr,
    /// Percentage of viewport width.
    Vw,
    /// Percentage of viewport height.
    Vh,
    /// Seconds.
    Seconds,
    /// Milliseconds.
    Millis,
    /// Degrees.
    Degrees,
    /// A bare number.
    Number,
}

impl UnitKind {
    /// CSS suffix for this unit.
    pub fn suffix(&self) -> &'static str {
        match self {
            UnitKind::Px => "px",
            UnitKind::Rem => "rem",
            UnitKind::Em => "em",
            UnitKind::Percent => "%",
            UnitKind::Fr => "fr",
            UnitKind::Vw => "vw",
            UnitKind::Vh => "vh",
            UnitKind::Seconds => "s",
            UnitKind::Millis => "ms",
            UnitKind::Degrees => "deg",
            UnitKind::Number => "",
        }
    }
}

/// A number paired with a CSS unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// The magnitude, already in the unit's scale (`80.0` for `80%`).
    pub value: f64,
    /// The unit suffix.
    pub kind: UnitKind,
}

impl Unit {
    /// Create a new unit value.
    pub const fn new(value: f64, kind: UnitKind) -> Self {
        Self { value, kind }
    }

    /// Build `steps` evenly spaced values from `start` to `end` (both included).
    ///
    /// ```
    /// use trellis_style::types::{Unit, rem};
    ///
    /// let sizes = Unit::scale(rem, 1.0, 2.0, 3);
    /// let rendered: Vec<String> = sizes.iter().map(ToString::to_string).collect();
    /// assert_eq!(rendered, ["1rem", "1.5rem", "2rem"]);
    /// ```
    pub fn scale(ctor: impl Fn(f64) -> Unit, start: f64, end: f64, steps: usize) -> Vec<Unit> {
        scale(start, end, steps).into_iter().map(ctor).collect()
    }

    /// Same value with a different magnitude.
    pub fn with_value(self, value: f64) -> Self {
        Self { value, ..self }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.kind.suffix())
    }
}

impl Mul<f64> for Unit {
    type Output = Unit;

    fn mul(self, rhs: f64) -> Unit {
        self.with_value(self.value * rhs)
    }
}

impl Div<f64> for Unit {
    type Output = Unit;

    fn div(self, rhs: f64) -> Unit {
        self.with_value(self.value / rhs)
    }
}

impl Neg for Unit {
    type Output = Unit;

    fn neg(self) -> Unit {
        self.with_value(-self.value)
    }
}

/// Evenly spaced numbers from `start` to `end`, both included.
pub fn scale(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps - 1) as f64;
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Render a number with at most three decimals and no trailing zeros.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }

    let text = format!("{:.3}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Pixels.
pub fn px(value: impl Into<f64>) -> Unit {
    Unit::new(value.into(), UnitKind::Px)
}

/// Root-relative ems.
pub fn rem(value: impl Into<f64>) -> Unit {
    Unit::new(value.into(), UnitKind::Rem)
}

/// Font-relative ems.
pub fn em(value: impl Into<f64>) -> Unit {
    Unit::new(value.into(), UnitKind::Em)
}

/// Percentage from a fraction: `pc(0.25)` is `25%`.
pub fn pc(fraction: impl Into<f64>) -> Unit {
    Unit::new(fraction.into() * 100.0, UnitKind::Percent)
}

/// Grid fractions.
pub fn fr(value: impl Into<f64>) -> Unit {
    Unit::new(value.into(), UnitKind::Fr)
}

/// Viewport width percentage.
pub fn vw(value: impl Into<f64>) -> Unit {
    Unit::new(value.into(), UnitKind::Vw)
}

/// Viewport height percentage.
pub fn vh(value: impl Into<f64>) -> Unit {
    Unit::new(value.into(), UnitKind::Vh)
}

/// Seconds.
pub fn sec(value: impl Into<f64>) -> Unit {
    Unit::new(value.into(), UnitKind::Seconds)
}

/// Milliseconds.
pub fn ms(value: impl Into<f64>) -> Unit {
    Unit::new(value.into(), UnitKind::Millis)
}

/// Degrees.
pub fn deg(value: impl Into<f64>) -> Unit {
    Unit::new(value.into(), UnitKind::Degrees)
}

/// A dimension argument whose unit may still have to be inferred.
///
/// Convenience setters accept anything convertible into a `Measure`:
/// integers, floats, prebuilt [`Unit`]s and keywords such as `"auto"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Measure {
    /// An integer; always inferred as pixels.
    Int(i64),
    /// A float; inferred with the setter's fallback unit.
    Float(f64),
    /// An explicit unit, used as given.
    Unit(Unit),
    /// A keyword or preformatted value, used verbatim.
    Keyword(String),
}

impl Measure {
    /// Convert to CSS text, using `on_float` for bare floats.
    pub fn infer(&self, on_float: fn(f64) -> Unit) -> String {
        self.infer_with(px, on_float)
    }

    /// Convert to CSS text with explicit fallbacks for both number kinds.
    pub fn infer_with(&self, on_int: fn(f64) -> Unit, on_float: fn(f64) -> Unit) -> String {
        match self {
            Measure::Int(v) => on_int(*v as f64).to_string(),
            Measure::Float(v) => on_float(*v).to_string(),
            Measure::Unit(unit) => unit.to_string(),
            Measure::Keyword(text) => text.clone(),
        }
    }

    /// Convert to CSS text with floats as `rem`.
    pub fn infer_linear(&self) -> String {
        self.infer(rem)
    }
}

macro_rules! measure_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Measure {
                fn from(value: $ty) -> Self {
                    Measure::Int(value as i64)
                }
            }
        )*
    };
}

measure_from_int!(i8, i16, i32, i64, u8, u16, u32, usize);

impl From<f32> for Measure {
    fn from(value: f32) -> Self {
        Measure::Float(value as f64)
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Measure::Float(value)
    }
}

impl From<Unit> for Measure {
    fn from(value: Unit) -> Self {
        Measure::Unit(value)
    }
}

impl From<&str> for Measure {
    fn from(value: &str) -> Self {
        Measure::Keyword(value.to_string())
    }
}

impl From<String> for Measure {
    fn from(value: String) -> Self {
        Measure::Keyword(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(100.0 / 12.0), "8.333");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(-2.5), "-2.5");
    }

    #[test]
    fn unit_display() {
        assert_eq!(px(10).to_string(), "10px");
        assert_eq!(fr(1).to_string(), "1fr");
        assert_eq!(pc(1.0).to_string(), "100%");
        assert_eq!(ms(300).to_string(), "300ms");
        assert_eq!(Unit::new(1.5, UnitKind::Number).to_string(), "1.5");
    }

    #[test]
    fn unit_arithmetic() {
        let pd = rem(0.8) / 4.0;
        assert_eq!(pd.to_string(), "0.2rem");
        assert_eq!((pd * 2.0).to_string(), "0.4rem");
        assert_eq!((-px(500)).to_string(), "-500px");
    }

    #[test]
    fn scale_endpoints() {
        assert_eq!(scale(0.0, 4.0, 5), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(scale(1.0, 2.0, 1), vec![1.0]);
        assert!(scale(1.0, 2.0, 0).is_empty());

        let sizes = Unit::scale(px, 14.0, 32.0, 4);
        assert_eq!(sizes.last().map(ToString::to_string), Some("32px".to_string()));
    }

    #[test]
    fn measure_inference() {
        assert_eq!(Measure::from(14).infer(rem), "14px");
        assert_eq!(Measure::from(0.25).infer(rem), "0.25rem");
        assert_eq!(Measure::from(0.5).infer(pc), "50%");
        assert_eq!(Measure::from(0.5).infer(fr), "0.5fr");
        assert_eq!(Measure::from(em(2)).infer(pc), "2em");
        assert_eq!(Measure::from("auto").infer_linear(), "auto");
    }

    #[test]
    fn durations_infer_per_number_kind() {
        assert_eq!(Measure::from(300).infer_with(ms, sec), "300ms");
        assert_eq!(Measure::from(0.5).infer_with(ms, sec), "0.5s");
    }
}

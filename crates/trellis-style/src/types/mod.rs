//! Value types: units, grid templates and colors.

mod color;
mod grid;
mod unit;

pub use color::{Color, ColorSpec, blue, gray, green, red};
pub use grid::{GridSpan, GridTrack, TrackList, minmax, repeat};
pub use unit::{
    Measure, Unit, UnitKind, deg, em, format_number, fr, ms, pc, px, rem, scale, sec, vh, vw,
};

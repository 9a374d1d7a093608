//! Grid template helpers.

use std::fmt;

use super::unit::{Unit, fr};

/// A single track in a grid template.
#[derive(Debug, Clone, PartialEq)]
pub enum GridTrack {
    /// A fixed or flexible size (`100px`, `1fr`).
    Size(Unit),
    /// A keyword such as `auto` or `min-content`.
    Keyword(String),
    /// `minmax(low, high)`.
    MinMax(Box<GridTrack>, Box<GridTrack>),
    /// `repeat(count, track)`.
    Repeat(u32, Box<GridTrack>),
}

impl fmt::Display for GridTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridTrack::Size(unit) => write!(f, "{}", unit),
            GridTrack::Keyword(word) => write!(f, "{}", word),
            GridTrack::MinMax(low, high) => write!(f, "minmax({}, {})", low, high),
            GridTrack::Repeat(count, track) => write!(f, "repeat({}, {})", count, track),
        }
    }
}

impl From<Unit> for GridTrack {
    fn from(unit: Unit) -> Self {
        GridTrack::Size(unit)
    }
}

impl From<&str> for GridTrack {
    fn from(word: &str) -> Self {
        GridTrack::Keyword(word.to_string())
    }
}

/// `repeat(count, track)`.
pub fn repeat(count: u32, track: impl Into<GridTrack>) -> GridTrack {
    GridTrack::Repeat(count, Box::new(track.into()))
}

/// `minmax(low, high)`.
pub fn minmax(low: impl Into<GridTrack>, high: impl Into<GridTrack>) -> GridTrack {
    GridTrack::MinMax(Box::new(low.into()), Box::new(high.into()))
}

/// The value of `grid-template-columns` or `grid-template-rows`.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackList {
    /// A number of equal `1fr` tracks.
    Count(u32),
    /// Explicit tracks, space separated.
    Tracks(Vec<GridTrack>),
}

impl TrackList {
    /// Expand a count into its `repeat(n, 1fr)` template.
    pub fn expand(self) -> Vec<GridTrack> {
        match self {
            TrackList::Count(count) => vec![repeat(count, fr(1))],
            TrackList::Tracks(tracks) => tracks,
        }
    }
}

impl fmt::Display for TrackList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tracks = self.clone().expand();
        for (i, track) in tracks.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", track)?;
        }
        Ok(())
    }
}

impl From<u32> for TrackList {
    fn from(count: u32) -> Self {
        TrackList::Count(count)
    }
}

impl From<i32> for TrackList {
    fn from(count: i32) -> Self {
        TrackList::Count(count.max(0) as u32)
    }
}

impl From<GridTrack> for TrackList {
    fn from(track: GridTrack) -> Self {
        TrackList::Tracks(vec![track])
    }
}

impl From<Unit> for TrackList {
    fn from(unit: Unit) -> Self {
        TrackList::Tracks(vec![GridTrack::Size(unit)])
    }
}

impl From<Vec<GridTrack>> for TrackList {
    fn from(tracks: Vec<GridTrack>) -> Self {
        TrackList::Tracks(tracks)
    }
}

/// Placement of an item on grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSpan {
    /// A single line index.
    Line(i32),
    /// An inclusive `(first, last)` track range, rendered as `first / last+1`.
    Range(i32, i32),
}

impl fmt::Display for GridSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridSpan::Line(line) => write!(f, "{}", line),
            GridSpan::Range(start, end) => write!(f, "{} / {}", start, i64::from(*end) + 1),
        }
    }
}

impl From<i32> for GridSpan {
    fn from(line: i32) -> Self {
        GridSpan::Line(line)
    }
}

impl From<(i32, i32)> for GridSpan {
    fn from((start, end): (i32, i32)) -> Self {
        GridSpan::Range(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::px;

    #[test]
    fn span_display_at_line_limits() {
        assert_eq!(GridSpan::from((1, 3)).to_string(), "1 / 4");
        assert_eq!(GridSpan::from((0, i32::MAX)).to_string(), "0 / 2147483648");
        assert_eq!(GridSpan::from((i32::MIN, -1)).to_string(), "-2147483648 / 0");
    }

    #[test]
    fn track_display() {
        assert_eq!(repeat(3, fr(1)).to_string(), "repeat(3, 1fr)");
        assert_eq!(minmax(px(100), fr(1)).to_string(), "minmax(100px, 1fr)");
        assert_eq!(
            repeat(4, minmax("auto", fr(2))).to_string(),
            "repeat(4, minmax(auto, 2fr))"
        );
    }

    #[test]
    fn track_list_count_expands() {
        assert_eq!(TrackList::from(3).to_string(), "repeat(3, 1fr)");

        let list = TrackList::from(vec![px(200).into(), fr(1).into()]);
        assert_eq!(list.to_string(), "200px 1fr");
    }

    #[test]
    fn span_range_is_end_exclusive() {
        assert_eq!(GridSpan::from((0, 2)).to_string(), "0 / 3");
        assert_eq!(GridSpan::from(4).to_string(), "4");
    }
}

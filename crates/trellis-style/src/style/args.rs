//! Argument types for the convenience setters.
//!
//! Each setter that takes several optional values receives one of these
//! small builders. Plain numbers, units and keywords convert into the
//! builder's main field, so `style.margin(5)` and
//! `style.margin(Edges::all(5).top(0))` both work.

use crate::types::{GridSpan, GridTrack, Measure, TrackList, fr, minmax, repeat};

/// Implements `From<T>` for every value a [`Measure`] can be built from,
/// storing it through the given constructor.
macro_rules! from_measure {
    ($target:ty, $ctor:path) => {
        from_measure!($target, $ctor, i8, i16, i32, i64, u8, u16, u32, usize, f32, f64, crate::types::Unit, &str, String);
    };
    ($target:ty, $ctor:path, $($ty:ty),*) => {
        $(
            impl From<$ty> for $target {
                fn from(value: $ty) -> Self {
                    $ctor(value)
                }
            }
        )*
    };
}

/// Arguments of [`Style::font`](crate::Style::font).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    pub(crate) size: Option<Measure>,
    pub(crate) weight: Option<String>,
    pub(crate) family: Option<String>,
}

impl Font {
    /// No font settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Font size; integers are pixels, floats are `rem`.
    pub fn size(mut self, size: impl Into<Measure>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Font weight (`bold`, `lighter`, `700`).
    pub fn weight(mut self, weight: impl ToString) -> Self {
        self.weight = Some(weight.to_string());
        self
    }

    /// Font family list.
    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    fn sized(size: impl Into<Measure>) -> Self {
        Self::new().size(size)
    }
}

from_measure!(Font, Font::sized);

/// Arguments of [`Style::text`](crate::Style::text).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub(crate) align: Option<String>,
    pub(crate) decoration: Option<String>,
}

impl Text {
    /// No text settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// `text-align`.
    pub fn align(mut self, align: impl Into<String>) -> Self {
        self.align = Some(align.into());
        self
    }

    /// `text-decoration`.
    pub fn decoration(mut self, decoration: impl Into<String>) -> Self {
        self.decoration = Some(decoration.into());
        self
    }

    /// `text-decoration: none`.
    pub fn no_decoration(self) -> Self {
        self.decoration("none")
    }
}

/// Arguments of [`Style::width`](crate::Style::width) and
/// [`Style::height`](crate::Style::height).
///
/// Floats are percentages here: `0.5` becomes `50%`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extent {
    pub(crate) value: Option<Measure>,
    pub(crate) min: Option<Measure>,
    pub(crate) max: Option<Measure>,
}

impl Extent {
    /// No size settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The size itself.
    pub fn value(mut self, value: impl Into<Measure>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Lower bound.
    pub fn min(mut self, min: impl Into<Measure>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Upper bound.
    pub fn max(mut self, max: impl Into<Measure>) -> Self {
        self.max = Some(max.into());
        self
    }

    fn exact(value: impl Into<Measure>) -> Self {
        Self::new().value(value)
    }
}

from_measure!(Extent, Extent::exact);

/// Arguments of [`Style::margin`](crate::Style::margin) and
/// [`Style::padding`](crate::Style::padding).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Edges {
    pub(crate) all: Option<Measure>,
    pub(crate) left: Option<Measure>,
    pub(crate) right: Option<Measure>,
    pub(crate) top: Option<Measure>,
    pub(crate) bottom: Option<Measure>,
}

impl Edges {
    /// No edges set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shorthand for all four sides.
    pub fn all(value: impl Into<Measure>) -> Self {
        Self {
            all: Some(value.into()),
            ..Self::default()
        }
    }

    /// Left side.
    pub fn left(mut self, value: impl Into<Measure>) -> Self {
        self.left = Some(value.into());
        self
    }

    /// Right side.
    pub fn right(mut self, value: impl Into<Measure>) -> Self {
        self.right = Some(value.into());
        self
    }

    /// Top side.
    pub fn top(mut self, value: impl Into<Measure>) -> Self {
        self.top = Some(value.into());
        self
    }

    /// Bottom side.
    pub fn bottom(mut self, value: impl Into<Measure>) -> Self {
        self.bottom = Some(value.into());
        self
    }

    /// Left and right sides.
    pub fn horizontal(self, value: impl Into<Measure>) -> Self {
        let value = value.into();
        self.left(value.clone()).right(value)
    }

    /// Top and bottom sides.
    pub fn vertical(self, value: impl Into<Measure>) -> Self {
        let value = value.into();
        self.top(value.clone()).bottom(value)
    }

    pub(crate) fn sides(&self) -> [(&'static str, Option<&Measure>); 4] {
        [
            ("left", self.left.as_ref()),
            ("right", self.right.as_ref()),
            ("top", self.top.as_ref()),
            ("bottom", self.bottom.as_ref()),
        ]
    }
}

from_measure!(Edges, Edges::all);

/// Offsets for [`Style::position`](crate::Style::position) and its
/// shortcuts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inset {
    pub(crate) left: Option<Measure>,
    pub(crate) right: Option<Measure>,
    pub(crate) top: Option<Measure>,
    pub(crate) bottom: Option<Measure>,
}

impl Inset {
    /// No offsets.
    pub fn new() -> Self {
        Self::default()
    }

    /// The same offset on all four sides.
    pub fn all(value: impl Into<Measure>) -> Self {
        let value = value.into();
        Self::new()
            .left(value.clone())
            .right(value.clone())
            .top(value.clone())
            .bottom(value)
    }

    /// `left`.
    pub fn left(mut self, value: impl Into<Measure>) -> Self {
        self.left = Some(value.into());
        self
    }

    /// `right`.
    pub fn right(mut self, value: impl Into<Measure>) -> Self {
        self.right = Some(value.into());
        self
    }

    /// `top`.
    pub fn top(mut self, value: impl Into<Measure>) -> Self {
        self.top = Some(value.into());
        self
    }

    /// `bottom`.
    pub fn bottom(mut self, value: impl Into<Measure>) -> Self {
        self.bottom = Some(value.into());
        self
    }

    pub(crate) fn sides(&self) -> [(&'static str, Option<&Measure>); 4] {
        [
            ("left", self.left.as_ref()),
            ("right", self.right.as_ref()),
            ("top", self.top.as_ref()),
            ("bottom", self.bottom.as_ref()),
        ]
    }
}

/// Arguments of [`Style::flexbox`](crate::Style::flexbox).
#[derive(Debug, Clone, PartialEq)]
pub struct Flexbox {
    pub(crate) direction: String,
    pub(crate) wrap: bool,
    pub(crate) reverse: bool,
    pub(crate) align: Option<String>,
    pub(crate) justify: Option<String>,
}

impl Default for Flexbox {
    fn default() -> Self {
        Self::direction("row")
    }
}

impl Flexbox {
    /// A flex container laid out along `direction`.
    pub fn direction(direction: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
            wrap: false,
            reverse: false,
            align: None,
            justify: None,
        }
    }

    /// A horizontal flex container.
    pub fn row() -> Self {
        Self::direction("row")
    }

    /// A vertical flex container.
    pub fn column() -> Self {
        Self::direction("column")
    }

    /// Allow items to wrap.
    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    /// Reverse the main axis.
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// `align-items`.
    pub fn align(mut self, align: impl Into<String>) -> Self {
        self.align = Some(align.into());
        self
    }

    /// `justify-content`.
    pub fn justify(mut self, justify: impl Into<String>) -> Self {
        self.justify = Some(justify.into());
        self
    }
}

impl From<&str> for Flexbox {
    fn from(direction: &str) -> Self {
        Self::direction(direction)
    }
}

/// Arguments of [`Style::flex`](crate::Style::flex).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flex {
    pub(crate) grow: Option<f64>,
    pub(crate) shrink: Option<f64>,
    pub(crate) basis: Option<Measure>,
}

impl Flex {
    /// No flex item settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// `flex-grow`.
    pub fn grow(mut self, grow: impl Into<f64>) -> Self {
        self.grow = Some(grow.into());
        self
    }

    /// `flex-shrink`.
    pub fn shrink(mut self, shrink: impl Into<f64>) -> Self {
        self.shrink = Some(shrink.into());
        self
    }

    /// `flex-basis`; floats are grid fractions.
    pub fn basis(mut self, basis: impl Into<Measure>) -> Self {
        self.basis = Some(basis.into());
        self
    }
}

/// Arguments of [`Style::grid`](crate::Style::grid).
///
/// At least one of `columns` and `rows` must be given.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub(crate) columns: Option<TrackList>,
    pub(crate) rows: Option<TrackList>,
    pub(crate) auto_columns: Option<GridTrack>,
    pub(crate) auto_rows: Option<GridTrack>,
    pub(crate) gap: Measure,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            columns: None,
            rows: None,
            auto_columns: None,
            auto_rows: None,
            gap: Measure::Int(0),
        }
    }
}

impl Grid {
    /// An empty grid; add columns or rows before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Column template: a count of `1fr` tracks or explicit tracks.
    pub fn columns(mut self, columns: impl Into<TrackList>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    /// Row template: a count of `1fr` tracks or explicit tracks.
    pub fn rows(mut self, rows: impl Into<TrackList>) -> Self {
        self.rows = Some(rows.into());
        self
    }

    /// `grid-auto-columns`, used only without a column template.
    pub fn auto_columns(mut self, track: impl Into<GridTrack>) -> Self {
        self.auto_columns = Some(track.into());
        self
    }

    /// `grid-auto-rows`, used only without a row template.
    pub fn auto_rows(mut self, track: impl Into<GridTrack>) -> Self {
        self.auto_rows = Some(track.into());
        self
    }

    /// Gap between tracks; floats are grid fractions.
    pub fn gap(mut self, gap: impl Into<Measure>) -> Self {
        self.gap = gap.into();
        self
    }
}

/// Arguments of [`Style::columns`](crate::Style::columns) and
/// [`Style::rows`](crate::Style::rows): `count` tracks of
/// `minmax(min, max)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tracks {
    pub(crate) count: u32,
    pub(crate) min: GridTrack,
    pub(crate) max: GridTrack,
    pub(crate) gap: Measure,
}

impl Tracks {
    /// `count` tracks between `1fr` and `1fr`.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            min: fr(1).into(),
            max: fr(1).into(),
            gap: Measure::Int(0),
        }
    }

    /// Smallest track size.
    pub fn min(mut self, min: impl Into<GridTrack>) -> Self {
        self.min = min.into();
        self
    }

    /// Largest track size.
    pub fn max(mut self, max: impl Into<GridTrack>) -> Self {
        self.max = max.into();
        self
    }

    /// Gap between tracks.
    pub fn gap(mut self, gap: impl Into<Measure>) -> Self {
        self.gap = gap.into();
        self
    }

    pub(crate) fn template(&self) -> TrackList {
        TrackList::Tracks(vec![repeat(
            self.count,
            minmax(self.min.clone(), self.max.clone()),
        )])
    }
}

impl From<u32> for Tracks {
    fn from(count: u32) -> Self {
        Self::new(count)
    }
}

impl From<i32> for Tracks {
    fn from(count: i32) -> Self {
        Self::new(count.max(0) as u32)
    }
}

/// Arguments of [`Style::place`](crate::Style::place).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Place {
    pub(crate) columns: Option<GridSpan>,
    pub(crate) rows: Option<GridSpan>,
}

impl Place {
    /// No placement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Column line, or an inclusive `(start, end)` pair.
    pub fn columns(mut self, span: impl Into<GridSpan>) -> Self {
        self.columns = Some(span.into());
        self
    }

    /// Row line, or an inclusive `(start, end)` pair.
    pub fn rows(mut self, span: impl Into<GridSpan>) -> Self {
        self.rows = Some(span.into());
        self
    }
}

/// Arguments of [`Style::shadow`](crate::Style::shadow).
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub(crate) x: Measure,
    pub(crate) y: Measure,
    pub(crate) blur: Measure,
    pub(crate) spread: Measure,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            x: Measure::Int(0),
            y: Measure::Int(0),
            blur: Measure::Int(0),
            spread: Measure::Int(0),
        }
    }
}

impl Shadow {
    /// A shadow at the given offset.
    pub fn offset(x: impl Into<Measure>, y: impl Into<Measure>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            ..Self::default()
        }
    }

    /// Blur radius.
    pub fn blur(mut self, blur: impl Into<Measure>) -> Self {
        self.blur = blur.into();
        self
    }

    /// Spread radius.
    pub fn spread(mut self, spread: impl Into<Measure>) -> Self {
        self.spread = spread.into();
        self
    }
}

/// Arguments of [`Style::translate`](crate::Style::translate). Axes left
/// out stay at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Translate {
    pub(crate) x: Measure,
    pub(crate) y: Measure,
}

impl Default for Translate {
    fn default() -> Self {
        Self {
            x: Measure::Int(0),
            y: Measure::Int(0),
        }
    }
}

impl Translate {
    /// No offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal offset.
    pub fn x(mut self, x: impl Into<Measure>) -> Self {
        self.x = x.into();
        self
    }

    /// Vertical offset.
    pub fn y(mut self, y: impl Into<Measure>) -> Self {
        self.y = y.into();
        self
    }
}

impl<X: Into<Measure>, Y: Into<Measure>> From<(X, Y)> for Translate {
    fn from((x, y): (X, Y)) -> Self {
        Self::new().x(x).y(y)
    }
}

/// Arguments of [`Style::transition`](crate::Style::transition).
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub(crate) property: String,
    pub(crate) duration: Measure,
    pub(crate) timing: String,
    pub(crate) delay: Measure,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            property: "all".to_string(),
            duration: Measure::Int(300),
            timing: "ease".to_string(),
            delay: Measure::Int(0),
        }
    }
}

impl Transition {
    /// Transition every property over 300ms.
    pub fn new() -> Self {
        Self::default()
    }

    /// The animated property.
    pub fn property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    /// Duration; integers are milliseconds, floats are seconds.
    pub fn duration(mut self, duration: impl Into<Measure>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Timing function.
    pub fn timing(mut self, timing: impl Into<String>) -> Self {
        self.timing = timing.into();
        self
    }

    /// Delay; integers are milliseconds, floats are seconds.
    pub fn delay(mut self, delay: impl Into<Measure>) -> Self {
        self.delay = delay.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::px;

    #[test]
    fn numbers_convert_into_main_field() {
        assert_eq!(Font::from(14).size, Some(Measure::Int(14)));
        assert_eq!(Extent::from(0.5).value, Some(Measure::Float(0.5)));
        assert_eq!(Edges::from("auto").all, Some(Measure::Keyword("auto".into())));
        assert_eq!(Edges::from(px(3)).all, Some(Measure::Unit(px(3))));
    }

    #[test]
    fn translate_axes_default_to_zero() {
        let only_y = Translate::new().y(5);
        assert_eq!(only_y.x, Measure::Int(0));
        assert_eq!(only_y.y, Measure::Int(5));
        assert_eq!(Translate::from((1.5, -2)), Translate::new().x(1.5).y(-2));
    }

    #[test]
    fn edges_shortcuts() {
        let edges = Edges::new().horizontal(2).vertical(1);
        assert_eq!(edges.all, None);
        assert_eq!(edges.left, Some(Measure::Int(2)));
        assert_eq!(edges.right, Some(Measure::Int(2)));
        assert_eq!(edges.top, Some(Measure::Int(1)));
        assert_eq!(edges.bottom, Some(Measure::Int(1)));
    }

    #[test]
    fn tracks_template() {
        assert_eq!(Tracks::new(3).template().to_string(), "repeat(3, minmax(1fr, 1fr))");
        assert_eq!(
            Tracks::new(2).min(px(200)).template().to_string(),
            "repeat(2, minmax(200px, 1fr))"
        );
        assert_eq!(Tracks::from(-1).count, 0);
    }

    #[test]
    fn defaults() {
        assert_eq!(Flexbox::default().direction, "row");
        assert_eq!(Grid::new().gap, Measure::Int(0));
        assert_eq!(Transition::new().property, "all");
    }
}

//! Convenience setters for common CSS properties.
//!
//! Every setter writes through [`Style::rule`], so it inherits the
//! overwrite-in-place semantics of the declaration block.

use std::fmt;

use super::Style;
use super::args::{Edges, Extent, Flex, Flexbox, Font, Grid, Inset, Place, Shadow, Text, Tracks, Transition, Translate};
use crate::animation::Animation;
use crate::types::{ColorSpec, Measure, format_number, fr, ms, pc, sec};
use crate::{Error, Result};

impl Style {
    // === Typography ===

    /// Set `font-size`, `font-weight` and `font-family`, each if given.
    pub fn font(&mut self, font: impl Into<Font>) -> &mut Self {
        let font = font.into();

        if let Some(size) = &font.size {
            self.rule("font-size", size.infer_linear());
        }
        if let Some(weight) = font.weight {
            self.rule("font-weight", weight);
        }
        if let Some(family) = font.family {
            self.rule("font-family", family);
        }
        self
    }

    /// Set `text-align` and `text-decoration`, each if given.
    pub fn text(&mut self, text: Text) -> &mut Self {
        if let Some(align) = text.align {
            self.rule("text-align", align);
        }
        if let Some(decoration) = text.decoration {
            self.rule("text-decoration", decoration);
        }
        self
    }

    /// `text-align: center`.
    pub fn center(&mut self) -> &mut Self {
        self.text(Text::new().align("center"))
    }

    /// `text-align: left`.
    pub fn left(&mut self) -> &mut Self {
        self.text(Text::new().align("left"))
    }

    /// `text-align: right`.
    pub fn right(&mut self) -> &mut Self {
        self.text(Text::new().align("right"))
    }

    /// `text-align: justify`.
    pub fn justify(&mut self) -> &mut Self {
        self.text(Text::new().align("justify"))
    }

    // === Color ===

    /// Set the foreground `color`.
    pub fn color(&mut self, color: impl Into<ColorSpec>) -> &mut Self {
        self.rule("color", color.into().resolve())
    }

    /// Set `background-color`.
    pub fn background(&mut self, color: impl Into<ColorSpec>) -> &mut Self {
        self.rule("background-color", color.into().resolve())
    }

    // === Visibility ===

    /// Set `visibility`.
    pub fn visibility(&mut self, visibility: &str) -> &mut Self {
        self.rule("visibility", visibility)
    }

    /// `visibility: visible`.
    pub fn visible(&mut self) -> &mut Self {
        self.visibility("visible")
    }

    /// `visibility: hidden`.
    pub fn hidden(&mut self) -> &mut Self {
        self.visibility("hidden")
    }

    // === Geometry ===

    /// Set `width`, `min-width` and `max-width`. Floats are percentages.
    pub fn width(&mut self, extent: impl Into<Extent>) -> &mut Self {
        self.extent("width", extent.into())
    }

    /// Set `height`, `min-height` and `max-height`. Floats are percentages.
    pub fn height(&mut self, extent: impl Into<Extent>) -> &mut Self {
        self.extent("height", extent.into())
    }

    fn extent(&mut self, attr: &str, extent: Extent) -> &mut Self {
        if let Some(value) = &extent.value {
            self.rule(attr, value.infer(pc));
        }
        if let Some(min) = &extent.min {
            self.rule(format!("min-{}", attr), min.infer(pc));
        }
        if let Some(max) = &extent.max {
            self.rule(format!("max-{}", attr), max.infer(pc));
        }
        self
    }

    /// Set `margin` and the per-side margins, each if given.
    pub fn margin(&mut self, edges: impl Into<Edges>) -> &mut Self {
        self.edges("margin", edges.into())
    }

    /// Set `padding` and the per-side paddings, each if given.
    pub fn padding(&mut self, edges: impl Into<Edges>) -> &mut Self {
        self.edges("padding", edges.into())
    }

    fn edges(&mut self, attr: &str, edges: Edges) -> &mut Self {
        if let Some(all) = &edges.all {
            self.rule(attr, all.infer_linear());
        }
        for (side, value) in edges.sides() {
            if let Some(value) = value {
                self.rule(format!("{}-{}", attr, side), value.infer_linear());
            }
        }
        self
    }

    /// `border-radius: 0.25rem`.
    pub fn rounded(&mut self) -> &mut Self {
        self.rounded_by(0.25)
    }

    /// Set `border-radius`.
    pub fn rounded_by(&mut self, radius: impl Into<Measure>) -> &mut Self {
        self.rule("border-radius", radius.into().infer_linear())
    }

    // === Layout ===

    /// Set `display`.
    pub fn display(&mut self, display: &str) -> &mut Self {
        self.rule("display", display)
    }

    /// Make this a flex container.
    ///
    /// Always sets `display: flex` and `flex-direction`, with `-reverse`
    /// appended when reversed.
    pub fn flexbox(&mut self, flexbox: impl Into<Flexbox>) -> &mut Self {
        let flexbox = flexbox.into();
        self.display("flex");

        let direction = if flexbox.reverse {
            format!("{}-reverse", flexbox.direction)
        } else {
            flexbox.direction
        };
        self.rule("flex-direction", direction);

        if flexbox.wrap {
            self.rule("flex-wrap", "wrap");
        }
        if let Some(align) = flexbox.align {
            self.rule("align-items", align);
        }
        if let Some(justify) = flexbox.justify {
            self.rule("justify-content", justify);
        }
        self
    }

    /// Set `flex-grow`, `flex-shrink` and `flex-basis`, each if given.
    /// Float bases are grid fractions.
    pub fn flex(&mut self, flex: Flex) -> &mut Self {
        if let Some(grow) = flex.grow {
            self.rule("flex-grow", format_number(grow));
        }
        if let Some(shrink) = flex.shrink {
            self.rule("flex-shrink", format_number(shrink));
        }
        if let Some(basis) = &flex.basis {
            self.rule("flex-basis", basis.infer(fr));
        }
        self
    }

    /// Make this a grid container.
    ///
    /// Fails without changing the style if neither columns nor rows are
    /// given. A column or row template takes precedence over the matching
    /// `auto` size. The gap is always written.
    pub fn grid(&mut self, grid: Grid) -> Result<&mut Self> {
        if grid.columns.is_none() && grid.rows.is_none() {
            return Err(Error::configuration(
                "grid",
                "either columns or rows must be specified",
            ));
        }

        Ok(self.apply_grid(grid))
    }

    /// A grid of `count` columns sized `minmax(min, max)`.
    pub fn columns(&mut self, tracks: impl Into<Tracks>) -> &mut Self {
        let tracks = tracks.into();
        let grid = Grid::new().columns(tracks.template()).gap(tracks.gap);
        self.apply_grid(grid)
    }

    /// A grid of `count` rows sized `minmax(min, max)`.
    pub fn rows(&mut self, tracks: impl Into<Tracks>) -> &mut Self {
        let tracks = tracks.into();
        let grid = Grid::new().rows(tracks.template()).gap(tracks.gap);
        self.apply_grid(grid)
    }

    fn apply_grid(&mut self, grid: Grid) -> &mut Self {
        self.display("grid");

        match (grid.columns, grid.auto_columns) {
            (Some(columns), _) => {
                self.rule("grid-template-columns", columns);
            }
            (None, Some(auto)) => {
                self.rule("grid-auto-columns", auto);
            }
            (None, None) => {}
        }

        match (grid.rows, grid.auto_rows) {
            (Some(rows), _) => {
                self.rule("grid-template-rows", rows);
            }
            (None, Some(auto)) => {
                self.rule("grid-auto-rows", auto);
            }
            (None, None) => {}
        }

        self.rule("gap", grid.gap.infer(fr))
    }

    /// Place this item in a grid. Ranges are inclusive, so `(0, 2)` renders
    /// `0 / 3`.
    pub fn place(&mut self, place: Place) -> &mut Self {
        if let Some(columns) = place.columns {
            self.rule("grid-column", columns);
        }
        if let Some(rows) = place.rows {
            self.rule("grid-row", rows);
        }
        self
    }

    /// Set `position` and the given offsets.
    pub fn position(&mut self, position: &str, inset: Inset) -> &mut Self {
        self.rule("position", position);

        for (side, value) in inset.sides() {
            if let Some(value) = value {
                self.rule(side, value.infer_linear());
            }
        }
        self
    }

    /// `position: absolute` with the given offsets.
    pub fn absolute(&mut self, inset: Inset) -> &mut Self {
        self.position("absolute", inset)
    }

    /// `position: relative` with the given offsets.
    pub fn relative(&mut self, inset: Inset) -> &mut Self {
        self.position("relative", inset)
    }

    // === Decoration ===

    /// `border: <width> solid <color>`.
    pub fn border(&mut self, width: impl Into<Measure>, color: impl Into<ColorSpec>) -> &mut Self {
        let width = width.into().infer_linear();
        let color = color.into().resolve();
        self.rule("border", format!("{} solid {}", width, color))
    }

    /// `box-shadow: <x> <y> <blur> <spread> <color>`.
    pub fn shadow(&mut self, color: impl Into<ColorSpec>, shadow: Shadow) -> &mut Self {
        let value = format!(
            "{} {} {} {} {}",
            shadow.x.infer_linear(),
            shadow.y.infer_linear(),
            shadow.blur.infer_linear(),
            shadow.spread.infer_linear(),
            color.into().resolve()
        );
        self.rule("box-shadow", value)
    }

    /// Set the four `transition-*` properties.
    pub fn transition(&mut self, transition: Transition) -> &mut Self {
        self.rule("transition-property", transition.property)
            .rule("transition-duration", transition.duration.infer_with(ms, sec))
            .rule("transition-timing-function", transition.timing)
            .rule("transition-delay", transition.delay.infer_with(ms, sec))
    }

    // === Transforms ===

    /// `transform: scale(<factor>)`.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.rule("transform", format!("scale({})", format_number(factor)))
    }

    /// `transform: translate(<x>, <y>)`. Takes a `(x, y)` pair or a
    /// [`Translate`] with either axis left out.
    pub fn translate(&mut self, offset: impl Into<Translate>) -> &mut Self {
        let offset = offset.into();
        let value = format!(
            "translate({}, {})",
            offset.x.infer_linear(),
            offset.y.infer_linear()
        );
        self.rule("transform", value)
    }

    // === Animation ===

    /// Run a keyframe animation on this style.
    ///
    /// Integer durations are milliseconds and float durations are seconds.
    /// The animation is recorded so a stylesheet can emit its `@keyframes`.
    pub fn animation(
        &mut self,
        animation: &Animation,
        duration: impl Into<Measure>,
        iterations: impl fmt::Display,
    ) -> &mut Self {
        self.track_animation(animation);
        self.rule("animation-name", animation.name())
            .rule("animation-duration", duration.into().infer_with(ms, sec))
            .rule("animation-iteration-count", iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, GridTrack, minmax, px, repeat};

    fn inline(build: impl FnOnce(&mut Style)) -> String {
        let mut style = Style::inline();
        build(&mut style);
        style.render(true)
    }

    #[test]
    fn font_parts_are_optional() {
        assert_eq!(inline(|s| { s.font(14); }), "font-size: 14px;");
        assert_eq!(inline(|s| { s.font(1.5); }), "font-size: 1.5rem;");
        assert_eq!(
            inline(|s| { s.font(Font::new().weight(700).family("serif")); }),
            "font-weight: 700;font-family: serif;"
        );
    }

    #[test]
    fn text_alignment_shortcuts() {
        assert_eq!(inline(|s| { s.center(); }), "text-align: center;");
        assert_eq!(inline(|s| { s.justify().left(); }), "text-align: left;");
        assert_eq!(
            inline(|s| { s.text(Text::new().no_decoration()); }),
            "text-decoration: none;"
        );
    }

    #[test]
    fn color_resolution() {
        assert_eq!(inline(|s| { s.color(Color::rgb(255, 0, 0)); }), "color: rgba(255,0,0,1);");
        assert_eq!(
            inline(|s| { s.background(ColorSpec::rgb(0, 0, 255).alpha(0.5)); }),
            "background-color: rgba(0,0,255,0.5);"
        );
        assert_eq!(
            inline(|s| { s.color(ColorSpec::hsv(0.0, 0.0, 1.0)); }),
            "color: rgba(255,255,255,1);"
        );
        assert_eq!(
            inline(|s| { s.color(ColorSpec::hls(0.0, 0.0, 0.0)); }),
            "color: rgba(0,0,0,1);"
        );
    }

    #[test]
    fn visibility() {
        assert_eq!(inline(|s| { s.hidden(); }), "visibility: hidden;");
        assert_eq!(inline(|s| { s.visible(); }), "visibility: visible;");
    }

    #[test]
    fn width_floats_are_percentages() {
        assert_eq!(inline(|s| { s.width(0.5); }), "width: 50%;");
        assert_eq!(
            inline(|s| { s.height(Extent::new().min(100).max(1.0)); }),
            "min-height: 100px;max-height: 100%;"
        );
    }

    #[test]
    fn margin_and_padding() {
        assert_eq!(
            inline(|s| { s.margin(Edges::all(5).top(0)); }),
            "margin: 5px;margin-top: 0px;"
        );
        assert_eq!(
            inline(|s| { s.padding(Edges::new().left(0.5).bottom("auto")); }),
            "padding-left: 0.5rem;padding-bottom: auto;"
        );
    }

    #[test]
    fn rounded_default() {
        assert_eq!(inline(|s| { s.rounded(); }), "border-radius: 0.25rem;");
        assert_eq!(inline(|s| { s.rounded_by(4); }), "border-radius: 4px;");
    }

    #[test]
    fn flexbox_direction() {
        assert_eq!(
            inline(|s| { s.flexbox(Flexbox::row().reverse()); }),
            "display: flex;flex-direction: row-reverse;"
        );
        assert_eq!(
            inline(|s| { s.flexbox(Flexbox::column().wrap().align("center").justify("end")); }),
            "display: flex;flex-direction: column;flex-wrap: wrap;align-items: center;justify-content: end;"
        );
        assert_eq!(
            inline(|s| { s.flexbox("row"); }),
            "display: flex;flex-direction: row;"
        );
    }

    #[test]
    fn flex_item() {
        assert_eq!(
            inline(|s| { s.flex(Flex::new().grow(1).basis(0.5)); }),
            "flex-grow: 1;flex-basis: 0.5fr;"
        );
        assert_eq!(inline(|s| { s.flex(Flex::new().shrink(0.5)); }), "flex-shrink: 0.5;");
    }

    #[test]
    fn grid_requires_tracks() {
        let mut style = Style::inline();
        let err = style.grid(Grid::new().gap(10)).unwrap_err();

        assert!(matches!(err, Error::Configuration { method: "grid", .. }));
        assert!(style.is_empty());
    }

    #[test]
    fn grid_templates() {
        assert_eq!(
            inline(|s| { s.grid(Grid::new().columns(3)).unwrap(); }),
            "display: grid;grid-template-columns: repeat(3, 1fr);gap: 0px;"
        );
        assert_eq!(
            inline(|s| {
                s.grid(Grid::new().rows(vec![GridTrack::from(px(50)), GridTrack::from("auto")]).gap(0.5))
                    .unwrap();
            }),
            "display: grid;grid-template-rows: 50px auto;gap: 0.5fr;"
        );
    }

    #[test]
    fn grid_template_wins_over_auto() {
        assert_eq!(
            inline(|s| {
                s.grid(Grid::new().columns(2).auto_columns("100px").auto_rows("min-content"))
                    .unwrap();
            }),
            "display: grid;grid-template-columns: repeat(2, 1fr);grid-auto-rows: min-content;gap: 0px;"
        );
    }

    #[test]
    fn columns_and_rows_sugar() {
        assert_eq!(
            inline(|s| { s.columns(3); }),
            "display: grid;grid-template-columns: repeat(3, minmax(1fr, 1fr));gap: 0px;"
        );
        assert_eq!(
            inline(|s| { s.rows(Tracks::new(2).min(px(100)).gap(5)); }),
            "display: grid;grid-template-rows: repeat(2, minmax(100px, 1fr));gap: 5px;"
        );
        assert_eq!(
            repeat(2, minmax(px(100), fr(1))).to_string(),
            "repeat(2, minmax(100px, 1fr))"
        );
    }

    #[test]
    fn place_ranges_are_inclusive() {
        assert_eq!(
            inline(|s| { s.place(Place::new().columns((0, 2))); }),
            "grid-column: 0 / 3;"
        );
        assert_eq!(inline(|s| { s.place(Place::new().rows(4)); }), "grid-row: 4;");
        assert_eq!(
            inline(|s| { s.place(Place::new().columns((0, i32::MAX))); }),
            "grid-column: 0 / 2147483648;"
        );
    }

    #[test]
    fn positioning() {
        assert_eq!(
            inline(|s| { s.absolute(Inset::new().left(0).top(0.5)); }),
            "position: absolute;left: 0px;top: 0.5rem;"
        );
        assert_eq!(inline(|s| { s.relative(Inset::new()); }), "position: relative;");
        assert_eq!(
            inline(|s| { s.position("fixed", Inset::all(0)); }),
            "position: fixed;left: 0px;right: 0px;top: 0px;bottom: 0px;"
        );
    }

    #[test]
    fn decoration() {
        assert_eq!(
            inline(|s| { s.border(1, Color::BLACK); }),
            "border: 1px solid rgba(0,0,0,1);"
        );
        assert_eq!(
            inline(|s| { s.shadow(Color::BLACK, Shadow::offset(2, 2).blur(4)); }),
            "box-shadow: 2px 2px 4px 0px rgba(0,0,0,1);"
        );
    }

    #[test]
    fn transition_defaults() {
        assert_eq!(
            inline(|s| { s.transition(Transition::new().duration(0.5)); }),
            "transition-property: all;transition-duration: 0.5s;transition-timing-function: ease;transition-delay: 0ms;"
        );
    }

    #[test]
    fn transforms_share_one_property() {
        assert_eq!(inline(|s| { s.scale(1.1).translate((0, -2)); }), "transform: translate(0px, -2px);");
        assert_eq!(
            inline(|s| { s.translate(Translate::new().y(5)); }),
            "transform: translate(0px, 5px);"
        );
        assert_eq!(
            inline(|s| { s.translate(Translate::new().x(0.5)); }),
            "transform: translate(0.5rem, 0px);"
        );
        assert_eq!(inline(|s| { s.scale(1.25); }), "transform: scale(1.25);");
    }

    #[test]
    fn animation_is_recorded() {
        let mut shown = Style::inline();
        shown.rule("opacity", 1);
        let mut fade = Animation::new("fade");
        fade.end(&shown);

        let mut style = Style::new(".toast").unwrap();
        style.animation(&fade, 300, "infinite").animation(&fade, 1.5, 2);

        assert_eq!(
            style.render(true),
            "animation-name: fade;animation-duration: 1.5s;animation-iteration-count: 2;"
        );
        assert_eq!(style.animations().len(), 1);
        assert_eq!(style.animations()[0].name(), "fade");
    }

    #[test]
    fn title_scenario() {
        let mut title = Style::new("#title").unwrap();
        title
            .font(Font::new().size(14).weight("lighter"))
            .margin(Edges::all(5).top(0));

        assert_eq!(
            title.render(false),
            "#title {\n    font-size: 14px;\n    font-weight: lighter;\n    margin: 5px;\n    margin-top: 0px;\n}"
        );
    }
}

//! Stylesheet collection and rendering.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use slotmap::{SlotMap, new_key_type};
use trellis_style::Style;
use trellis_style::animation::Animation;
use trellis_style::selector::Selector;

use super::MediaQuery;
use crate::{Error, Result, SheetOptions};

static NORMALIZE: &str = include_str!("../../assets/normalize.css");

const HEADER: &str = "/* Made with trellis */\n/* This file is autogenerated. Do not modify. */\n\n";

new_key_type! {
    /// Key of a style registered in a [`StyleSheet`].
    pub struct StyleId;
}

/// Index of the media block styles are currently added to, if any.
type Scope = Option<usize>;

#[derive(Debug, Clone)]
struct MediaBlock {
    query: MediaQuery,
    styles: Vec<StyleId>,
}

/// A collection of styles rendered into one CSS document.
///
/// Styles are stored in an arena and referenced by [`StyleId`]. Top-level
/// styles and each media block keep their own insertion order, which is
/// the order they render in. Sub-styles derived with `on` and `children`
/// stay owned by their style and render right after it.
///
/// # Example
///
/// ```
/// use trellis::prelude::*;
///
/// let mut sheet = StyleSheet::with_options(SheetOptions::bare());
/// sheet.select("body")?.font(Font::new().family("serif"));
/// sheet.media(MediaQuery::max_width(600), |sheet| -> trellis::Result<()> {
///     sheet.select("body")?.font(12);
///     Ok(())
/// })?;
///
/// let css = sheet.render();
/// assert!(css.starts_with("body {\n    font-family: serif;\n}"));
/// assert!(css.contains("@media (max-width: 600px) {\n    body {\n        font-size: 12px;\n    }\n}"));
/// assert!(css.ends_with("/* Generated 2 styles */"));
/// # Ok::<(), trellis::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    options: SheetOptions,
    base: Option<Style>,
    styles: SlotMap<StyleId, Style>,
    roots: Vec<StyleId>,
    medias: Vec<MediaBlock>,
    by_name: HashMap<String, StyleId>,
    by_selector: HashMap<(Scope, String), StyleId>,
    used: HashSet<StyleId>,
    scope: Scope,
}

impl StyleSheet {
    /// Create an empty stylesheet with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stylesheet.
    pub fn with_options(options: SheetOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Apply `base` to every style created by [`select`](Self::select).
    pub fn with_base(mut self, base: Style) -> Self {
        self.base = Some(base);
        self
    }

    /// The rendering options.
    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    /// Number of registered styles, media blocks included.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if no styles are registered.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Top-level styles in insertion order.
    pub fn styles(&self) -> impl Iterator<Item = &Style> {
        self.roots.iter().map(|id| &self.styles[*id])
    }

    /// Get a style by key.
    pub fn style(&self, id: StyleId) -> Option<&Style> {
        self.styles.get(id)
    }

    /// Get a style by key for modification.
    pub fn style_mut(&mut self, id: StyleId) -> Option<&mut Style> {
        self.styles.get_mut(id)
    }

    // === Registration ===

    /// Get the style for `selector` in the current scope, creating it if
    /// needed.
    ///
    /// The style is registered under a name derived from the selector:
    /// `#`, `.` and `-` become `_`, and leading or trailing `_` are removed.
    pub fn select(&mut self, selector: &str) -> Result<&mut Style> {
        self.select_named(selector, &default_name(selector))
    }

    /// Like [`select`](Self::select), registering the style under `name`.
    pub fn select_named(&mut self, selector: &str, name: &str) -> Result<&mut Style> {
        let selector = Selector::parse(selector)?;
        let key = (self.scope, selector.to_string());

        if let Some(&id) = self.by_selector.get(&key) {
            self.by_name.insert(name.to_string(), id);
            return Ok(&mut self.styles[id]);
        }

        let mut style = Style::with_selector(selector);
        if let Some(base) = &self.base {
            style.apply([base]);
        }

        let id = self.register(style, Some(name));
        Ok(&mut self.styles[id])
    }

    /// Add a prebuilt style to the current scope.
    pub fn add(&mut self, style: Style) -> &mut Style {
        let id = self.register(style, None);
        &mut self.styles[id]
    }

    /// Add a prebuilt style to the current scope under `name`.
    pub fn add_named(&mut self, style: Style, name: &str) -> &mut Style {
        let id = self.register(style, Some(name));
        &mut self.styles[id]
    }

    /// Start a fresh style for `selector` in the current scope.
    ///
    /// Earlier styles for the same selector are kept and still render;
    /// later calls to [`select`](Self::select) return the new one.
    pub fn redefine(&mut self, selector: &str) -> Result<&mut Style> {
        let selector = Selector::parse(selector)?;
        let id = self.register(Style::with_selector(selector), None);
        Ok(&mut self.styles[id])
    }

    /// Run `build` with every new style going into a media block.
    pub fn media<R>(&mut self, query: MediaQuery, build: impl FnOnce(&mut Self) -> R) -> R {
        self.medias.push(MediaBlock {
            query,
            styles: vec![],
        });
        let outer = self.scope.replace(self.medias.len() - 1);

        let result = build(self);

        self.scope = outer;
        result
    }

    /// Move every style, name and media block of `other` into this sheet.
    ///
    /// Top-level styles of `other` are appended at the top level.
    pub fn extend(&mut self, mut other: StyleSheet) -> &mut Self {
        let offset = self.medias.len();
        let ids: HashMap<StyleId, StyleId> = other
            .styles
            .drain()
            .map(|(old, style)| (old, self.styles.insert(style)))
            .collect();
        let remap = |id: &StyleId| ids.get(id).copied();

        self.roots.extend(other.roots.iter().filter_map(remap));

        for block in &other.medias {
            self.medias.push(MediaBlock {
                query: block.query,
                styles: block.styles.iter().filter_map(remap).collect(),
            });
        }

        for (name, id) in &other.by_name {
            if let Some(id) = remap(id) {
                self.by_name.insert(name.clone(), id);
            }
        }

        for ((scope, selector), id) in &other.by_selector {
            if let Some(id) = remap(id) {
                let scope = scope.map(|index| index + offset);
                self.by_selector.insert((scope, selector.clone()), id);
            }
        }

        self.used.extend(other.used.iter().filter_map(remap));
        self
    }

    fn register(&mut self, style: Style, name: Option<&str>) -> StyleId {
        let selector = style.selector().map(ToString::to_string);
        let id = self.styles.insert(style);

        match self.scope {
            Some(index) => self.medias[index].styles.push(id),
            None => self.roots.push(id),
        }

        if let Some(selector) = selector {
            tracing::trace!("Registered style '{}'", selector);
            self.by_selector.insert((self.scope, selector), id);
        }
        if let Some(name) = name {
            self.by_name.insert(name.to_string(), id);
        }
        id
    }

    // === Lookup ===

    /// Get a style by name and mark it as used.
    pub fn get(&mut self, name: &str) -> Result<&Style> {
        let Some(&id) = self.by_name.get(name) else {
            tracing::warn!("Style '{}' not defined", name);
            return Err(Error::unknown_style(name));
        };

        self.used.insert(id);
        Ok(&self.styles[id])
    }

    /// Check if the style registered under `name` was looked up with
    /// [`get`](Self::get).
    pub fn is_used(&self, name: &str) -> bool {
        self.by_name
            .get(name)
            .is_some_and(|id| self.used.contains(id))
    }

    // === Rendering ===

    /// Render every style.
    pub fn render(&self) -> String {
        self.render_with(false)
    }

    /// Render only the styles looked up with [`get`](Self::get), with their
    /// sub-styles.
    pub fn render_dynamic(&self) -> String {
        self.render_with(true)
    }

    /// Render every style into a file.
    pub fn render_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.render()).map_err(|e| Error::io(path, e))?;

        tracing::debug!("Wrote stylesheet to {}", path.display());
        Ok(())
    }

    fn render_with(&self, dynamic: bool) -> String {
        let mut writer = Writer::default();

        if self.options.header {
            writer.out.push_str(HEADER);
        }
        if self.options.normalize {
            writer.out.push_str(NORMALIZE.trim_end());
            writer.out.push_str("\n\n");
        }

        let selected = |id: &&StyleId| !dynamic || self.used.contains(*id);

        for id in self.roots.iter().filter(selected) {
            writer.style(&self.styles[*id], 0);
        }

        for block in &self.medias {
            let ids: Vec<_> = block.styles.iter().filter(selected).collect();
            if dynamic && ids.is_empty() {
                continue;
            }

            writer.out.push_str(&format!("{} {{\n", block.query));
            for id in ids {
                writer.style(&self.styles[*id], self.options.indent);
            }
            if writer.out.ends_with("\n\n") {
                writer.out.pop();
            }
            writer.out.push_str("}\n\n");
        }

        for animation in writer.animations.values() {
            writer.out.push_str(&animation.css());
            writer.out.push_str("\n\n");
        }

        tracing::debug!(
            "Rendered {} styles ({} media blocks, {} animations)",
            writer.total,
            self.medias.len(),
            writer.animations.len()
        );

        writer.out.push_str(&format!("/* Generated {} styles */", writer.total));
        writer.out
    }
}

/// Accumulates rendered rules and the animations they reference.
#[derive(Default)]
struct Writer<'a> {
    out: String,
    total: usize,
    animations: BTreeMap<&'a str, &'a Animation>,
}

impl<'a> Writer<'a> {
    /// Write a style and, depth-first, its sub-styles. Styles without
    /// declarations are skipped.
    fn style(&mut self, style: &'a Style, indent: usize) {
        if !style.is_empty() {
            self.out.push_str(&indent_lines(&style.render(false), indent));
            self.out.push_str("\n\n");
            self.total += 1;
        }

        for animation in style.animations() {
            self.animations.entry(animation.name()).or_insert(animation);
        }

        for child in style.sub_styles() {
            self.style(child, indent);
        }
    }
}

fn indent_lines(text: &str, indent: usize) -> String {
    if indent == 0 {
        return text.to_string();
    }

    let prefix = " ".repeat(indent);
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn default_name(selector: &str) -> String {
    selector
        .replace(['#', '.', '-'], "_")
        .trim_matches('_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_style::style::{Edges, Font};

    fn sheet() -> StyleSheet {
        StyleSheet::with_options(SheetOptions::bare())
    }

    #[test]
    fn default_names() {
        assert_eq!(default_name("#main-title"), "main_title");
        assert_eq!(default_name(".card.dark"), "card_dark");
        assert_eq!(default_name("body"), "body");
    }

    #[test]
    fn indentation() {
        assert_eq!(indent_lines("a {\n\n}", 2), "  a {\n\n  }");
        assert_eq!(indent_lines("a", 0), "a");
    }

    #[test]
    fn select_returns_existing_style() {
        let mut sheet = sheet();
        sheet.select(".card").unwrap().rule("color", "red");
        sheet.select(".card").unwrap().rule("margin", "0px");

        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.get("card").unwrap().render(true), "color: red;margin: 0px;");
    }

    #[test]
    fn select_matches_normalized_selector() {
        let mut sheet = sheet();
        sheet.select("ul>li").unwrap();
        sheet.select("ul > li").unwrap();
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn select_rejects_bad_selector() {
        let mut sheet = sheet();
        let err = sheet.select("div >").unwrap_err();
        assert!(matches!(err, Error::Style(trellis_style::Error::InvalidSelector { .. })));
        assert!(sheet.is_empty());
    }

    #[test]
    fn base_applies_to_selected_styles() {
        let mut base = Style::inline();
        base.font(Font::new().family("serif"));

        let mut sheet = sheet().with_base(base);
        sheet.select("p").unwrap().margin(0);
        sheet.redefine("h1").unwrap().margin(1);

        let css = sheet.render();
        assert!(css.contains("p {\n    font-family: serif;\n    margin: 0px;\n}"));
        assert!(css.contains("h1 {\n    margin: 1px;\n}"));
    }

    #[test]
    fn media_scopes_are_separate() {
        let mut sheet = sheet();
        sheet.select("body").unwrap().margin(Edges::all(8));
        sheet.media(MediaQuery::max_width(480), |sheet| {
            sheet.select("body").unwrap().margin(0);
        });

        assert_eq!(sheet.len(), 2);
        assert_eq!(
            sheet.render(),
            "body {\n    margin: 8px;\n}\n\n@media (max-width: 480px) {\n    body {\n        margin: 0px;\n    }\n}\n\n/* Generated 2 styles */"
        );
    }

    #[test]
    fn unknown_name() {
        let mut sheet = sheet();
        assert!(matches!(sheet.get("nope"), Err(Error::UnknownStyle { name }) if name == "nope"));
    }

    #[test]
    fn render_skips_empty_styles() {
        let mut sheet = sheet();
        sheet.select("div").unwrap();
        assert_eq!(sheet.render(), "/* Generated 0 styles */");
    }
}

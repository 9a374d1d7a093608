//! The `Style` rule: a selector plus an ordered declaration block.

use std::fmt;

use super::Declarations;
use crate::animation::Animation;
use crate::selector::Selector;
use crate::{Error, Result};

/// A CSS rule being built with a fluent API.
///
/// A `Style` holds an optional selector, an ordered set of declarations and
/// the sub-styles derived from it with [`on`](Self::on) and
/// [`children`](Self::children). Sub-styles are owned by the style they were
/// derived from and remember its selector as their parent.
///
/// # Example
///
/// ```
/// use trellis_style::prelude::*;
///
/// let mut title = Style::new("#title")?;
/// title.font(Font::new().size(14).weight("lighter")).margin(Edges::all(5).top(0));
///
/// assert_eq!(
///     title.render(false),
///     "#title {\n    font-size: 14px;\n    font-weight: lighter;\n    margin: 5px;\n    margin-top: 0px;\n}"
/// );
/// # Ok::<(), trellis_style::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    selector: Option<Selector>,
    declarations: Declarations,
    parent: Option<Selector>,
    children: Vec<Style>,
    animations: Vec<Animation>,
}

impl Style {
    /// Create a style for a selector given as text.
    pub fn new(selector: &str) -> Result<Self> {
        Ok(Self::with_selector(Selector::parse(selector)?))
    }

    /// Create a style for an already parsed selector.
    pub fn with_selector(selector: Selector) -> Self {
        Self {
            selector: Some(selector),
            ..Default::default()
        }
    }

    /// Create a style without a selector, usable for inline rendering,
    /// composition through [`apply`](Self::apply) and keyframes.
    pub fn inline() -> Self {
        Self::default()
    }

    /// Record the selector of the style this one was derived from.
    pub fn with_parent(mut self, parent: Selector) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The selector, if any.
    pub fn selector(&self) -> Option<&Selector> {
        self.selector.as_ref()
    }

    /// The selector of the style this one was derived from.
    pub fn parent(&self) -> Option<&Selector> {
        self.parent.as_ref()
    }

    /// The declaration block.
    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    /// The value of one declaration.
    pub fn get(&self, attr: &str) -> Option<&str> {
        self.declarations.get(attr)
    }

    /// Check if no declarations are set.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Sub-styles derived with [`on`](Self::on) and [`children`](Self::children),
    /// in creation order.
    pub fn sub_styles(&self) -> &[Style] {
        &self.children
    }

    /// Animations referenced by this style.
    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    // === Rules ===

    /// Set a declaration, overwriting any previous value for `attr`.
    ///
    /// The value is converted to text immediately. Empty attribute names are
    /// ignored with a warning.
    pub fn rule(&mut self, attr: impl Into<String>, value: impl fmt::Display) -> &mut Self {
        let attr = attr.into();
        if attr.is_empty() {
            tracing::warn!("Ignoring declaration with an empty attribute name");
            return self;
        }

        self.declarations.set(attr, value.to_string());
        self
    }

    /// Set several declarations in order.
    pub fn rules<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: fmt::Display,
    {
        for (attr, value) in pairs {
            self.rule(attr, value);
        }
        self
    }

    /// Copy every declaration of `others` into this style, in order.
    ///
    /// Later styles win on conflicts. Selectors, sub-styles and animations
    /// of the sources are not copied.
    pub fn apply<'a>(&mut self, others: impl IntoIterator<Item = &'a Style>) -> &mut Self {
        for other in others {
            for (attr, value) in other.declarations.iter() {
                self.rule(attr, value);
            }
        }
        self
    }

    pub(crate) fn track_animation(&mut self, animation: &Animation) {
        match self
            .animations
            .iter_mut()
            .find(|a| a.name() == animation.name())
        {
            Some(existing) => *existing = animation.clone(),
            None => self.animations.push(animation.clone()),
        }
    }

    // === Sub-styles ===

    /// Derive a sub-style for this selector in a pseudo-class state.
    ///
    /// Returns the new sub-style; further chained calls configure it, not
    /// this style.
    pub fn on(&mut self, state: &str) -> Result<&mut Style> {
        let parent = self.selector.clone().ok_or(Error::MissingSelector)?;
        let derived = parent.on(state)?;
        Ok(self.push_child(derived, parent))
    }

    /// Derive a sub-style for descendants matching `pattern` (use `"*"` for
    /// all), optionally restricted to the `nth` child.
    pub fn children(&mut self, pattern: &str, nth: Option<i32>) -> Result<&mut Style> {
        let parent = self.selector.clone().ok_or(Error::MissingSelector)?;
        let derived = parent.children(pattern, nth)?;
        Ok(self.push_child(derived, parent))
    }

    fn push_child(&mut self, selector: Selector, parent: Selector) -> &mut Style {
        tracing::trace!("Derived sub-style '{}' from '{}'", selector, parent);

        let index = self.children.len();
        self.children.push(Style::with_selector(selector).with_parent(parent));
        &mut self.children[index]
    }

    // === Rendering ===

    /// Render as CSS.
    ///
    /// Inline mode renders only the declarations on one line. Otherwise the
    /// selector is followed by a block with one indented declaration per
    /// line; a style without selector renders the bare block. Sub-styles are
    /// not included.
    pub fn render(&self, inline: bool) -> String {
        if inline {
            return self.declarations.to_css("");
        }

        let body = self
            .declarations
            .iter()
            .map(|(attr, value)| format!("    {}: {};", attr, value))
            .collect::<Vec<_>>()
            .join("\n");

        match &self.selector {
            Some(selector) => format!("{} {{\n{}\n}}", selector, body),
            None => format!("{{\n{}\n}}", body),
        }
    }

    /// Render as a `style="..."` markup attribute.
    pub fn inline_attribute(&self) -> String {
        format!("style=\"{}\"", self.render(true))
    }

    /// Markup attributes (`id="..." class="..."`) that select this style.
    pub fn markup(&self) -> Result<String> {
        self.selector
            .as_ref()
            .ok_or(Error::MissingSelector)?
            .markup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_overwrites_in_place() {
        let mut style = Style::inline();
        style.rule("color", "red").rule("margin", 0).rule("color", "blue");

        assert_eq!(style.render(true), "color: blue;margin: 0;");
    }

    #[test]
    fn empty_attribute_is_ignored() {
        let mut style = Style::inline();
        style.rule("", "red");
        assert!(style.is_empty());
    }

    #[test]
    fn rules_sets_in_order() {
        let mut style = Style::inline();
        style.rules([("overflow", "hidden"), ("cursor", "pointer")]);
        assert_eq!(style.render(true), "overflow: hidden;cursor: pointer;");
    }

    #[test]
    fn apply_copies_declarations_only() {
        let mut base = Style::new(".base").unwrap();
        base.rule("color", "gray").rule("margin", "0px");
        base.on("hover").unwrap().rule("color", "black");

        let mut accent = Style::inline();
        accent.rule("color", "red");

        let mut style = Style::new(".card").unwrap();
        style.apply([&base, &accent]);

        assert_eq!(style.render(true), "color: red;margin: 0px;");
        assert_eq!(style.selector().unwrap().to_string(), ".card");
        assert!(style.sub_styles().is_empty());
    }

    #[test]
    fn on_returns_child() {
        let mut btn = Style::new(".btn").unwrap();
        btn.rule("color", "white");
        btn.on("hover").unwrap().rule("color", "black");

        assert_eq!(btn.get("color"), Some("white"));
        assert_eq!(btn.sub_styles().len(), 1);

        let hover = &btn.sub_styles()[0];
        assert_eq!(hover.selector().unwrap().to_string(), ".btn:hover");
        assert_eq!(hover.parent().unwrap().to_string(), ".btn");
        assert_eq!(hover.get("color"), Some("black"));
    }

    #[test]
    fn children_with_nth() {
        let mut root = Style::new("#palette").unwrap();
        root.children("div", Some(3)).unwrap().rule("width", "100%");

        assert_eq!(
            root.sub_styles()[0].render(false),
            "#palette div:nth-child(3) {\n    width: 100%;\n}"
        );
    }

    #[test]
    fn derivation_needs_selector() {
        let mut style = Style::inline();
        assert_eq!(style.on("hover").unwrap_err(), Error::MissingSelector);
        assert_eq!(style.children("*", None).unwrap_err(), Error::MissingSelector);
    }

    #[test]
    fn bad_state_is_malformed_selector() {
        let mut style = Style::new("a").unwrap();
        assert!(matches!(style.on("nth-child(x)"), Err(Error::InvalidSelector { .. })));
        assert!(style.sub_styles().is_empty());
    }

    #[test]
    fn render_does_not_include_sub_styles() {
        let mut style = Style::new("a").unwrap();
        style.rule("color", "red");
        style.on("hover").unwrap().rule("color", "blue");

        assert_eq!(style.render(false), "a {\n    color: red;\n}");
    }

    #[test]
    fn render_without_declarations() {
        let style = Style::new("p").unwrap();
        assert_eq!(style.render(false), "p {\n\n}");
        assert_eq!(style.render(true), "");
    }

    #[test]
    fn inline_attribute() {
        let mut style = Style::inline();
        style.rule("color", "red");
        assert_eq!(style.inline_attribute(), "style=\"color: red;\"");
    }

    #[test]
    fn markup_needs_selector() {
        assert_eq!(Style::inline().markup().unwrap_err(), Error::MissingSelector);
        assert_eq!(Style::new("#title").unwrap().markup().unwrap(), "id=\"title\"");
    }

    #[test]
    fn malformed_selector_on_construction() {
        assert!(matches!(Style::new("a >"), Err(Error::InvalidSelector { .. })));
    }
}

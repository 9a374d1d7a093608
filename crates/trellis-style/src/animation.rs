//! Keyframe animations.

use crate::style::Style;
use crate::types::pc;

/// A named `@keyframes` animation.
///
/// Keyframes hold a copy of the declarations of the style given for each
/// point in time. Setting the same point twice replaces the earlier frame.
///
/// # Example
///
/// ```
/// use trellis_style::prelude::*;
///
/// let mut hidden = Style::inline();
/// hidden.rule("opacity", 0);
/// let mut shown = Style::inline();
/// shown.rule("opacity", 1);
///
/// let mut fade = Animation::new("fade");
/// fade.start(&hidden).end(&shown);
///
/// assert!(fade.css().starts_with("@keyframes fade {\n    0% {\n        opacity: 0;"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    name: String,
    keyframes: Vec<(f64, Style)>,
}

impl Animation {
    /// Create an animation without keyframes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keyframes: Vec::new(),
        }
    }

    /// The animation name used in `animation-name`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of keyframes.
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Check if no keyframes are set.
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Set the keyframe at `fraction` (0.0 to 1.0) of the animation.
    pub fn at(&mut self, fraction: f64, style: &Style) -> &mut Self {
        let mut frame = Style::inline();
        frame.apply([style]);

        match self.keyframes.iter_mut().find(|(f, _)| *f == fraction) {
            Some(existing) => existing.1 = frame,
            None => self.keyframes.push((fraction, frame)),
        }
        self
    }

    /// Build the keyframe at `fraction` in place.
    pub fn at_with(&mut self, fraction: f64, build: impl FnOnce(&mut Style)) -> &mut Self {
        let mut frame = Style::inline();
        build(&mut frame);
        self.at(fraction, &frame)
    }

    /// The keyframe at `0%`.
    pub fn start(&mut self, style: &Style) -> &mut Self {
        self.at(0.0, style)
    }

    /// The keyframe at `100%`.
    pub fn end(&mut self, style: &Style) -> &mut Self {
        self.at(1.0, style)
    }

    /// Render the `@keyframes` block.
    pub fn css(&self) -> String {
        let mut lines = vec![format!("@keyframes {} {{", self.name)];

        for (fraction, frame) in &self.keyframes {
            let block = format!("{} {}", pc(*fraction), frame.render(false));
            lines.extend(block.lines().map(|line| format!("    {}", line)));
        }

        lines.push("}".to_string());
        lines.join("\n")
    }
}

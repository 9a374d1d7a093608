//! Fluent CSS rule building for Trellis.
//!
//! This crate turns chained method calls into CSS rules:
//!
//! - **Styles**: A selector plus an ordered declaration block, with typed
//!   setters for typography, geometry, flexbox, grid and more
//! - **Selectors**: Parsing with `cssparser`, pseudo-class and descendant
//!   derivation, markup attributes
//! - **Values**: Units with inference for bare numbers, grid templates,
//!   RGB/HSV/HLS colors
//! - **Animations**: `@keyframes` built from styles
//!
//! # Example
//!
//! ```
//! use trellis_style::prelude::*;
//!
//! let mut button = Style::new("button.primary")?;
//! button
//!     .color(Color::WHITE)
//!     .padding(Edges::all(0.5))
//!     .rounded();
//! button.on("hover")?.background(blue(0.4));
//!
//! assert_eq!(button.markup()?, "class=\"primary\"");
//! assert!(button.render(false).starts_with("button.primary {\n    color: rgba(255,255,255,1);"));
//! # Ok::<(), trellis_style::Error>(())
//! ```

pub mod animation;
pub mod selector;
pub mod style;
pub mod types;

mod error;

pub use error::{Error, Result};
pub use style::Style;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::animation::Animation;
    pub use crate::selector::{AttributeSelector, Combinator, PseudoClass, Selector, SelectorPart};
    pub use crate::style::{
        Edges, Extent, Flex, Flexbox, Font, Grid, Inset, Place, Shadow, Style, Text, Tracks,
        Transition, Translate,
    };
    pub use crate::types::{
        Color, ColorSpec, GridSpan, GridTrack, Measure, TrackList, Unit, blue, deg, em, fr, gray,
        green, minmax, ms, pc, px, red, rem, repeat, sec, vh, vw,
    };
    pub use crate::{Error, Result};
}

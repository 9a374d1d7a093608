//! Trellis - programmatic CSS stylesheets.
//!
//! Build styles with a fluent Rust API and render them as CSS:
//!
//! - **Styles**: Typed setters for typography, color, geometry, flexbox and
//!   grid (re-exported from `trellis-style`)
//! - **Stylesheets**: Selector lookup, named styles, a shared base style
//! - **Media queries**: Width-based `@media` blocks
//! - **Animations**: `@keyframes` emitted once per animation in use
//! - **Options**: Header, normalization preamble and indentation, loadable
//!   from TOML
//!
//! # Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! let mut sheet = StyleSheet::with_options(SheetOptions::bare());
//!
//! let title = sheet.select("#title")?;
//! title.font(Font::new().size(14).weight("lighter")).margin(Edges::all(5).top(0));
//! title.on("hover")?.color(red(0.5));
//!
//! let css = sheet.render();
//! assert!(css.starts_with("#title {\n    font-size: 14px;"));
//! assert!(css.contains("#title:hover {\n    color: rgba(255,0,0,1);\n}"));
//! # Ok::<(), trellis::Error>(())
//! ```

pub mod options;
pub mod sheet;

mod error;

pub use error::{Error, Result};
pub use options::SheetOptions;
pub use sheet::{MediaQuery, StyleId, StyleSheet};
pub use trellis_style as style;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use trellis_style::prelude::*;

    pub use crate::{Error, MediaQuery, Result, SheetOptions, StyleId, StyleSheet};
}

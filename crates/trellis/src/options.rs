//! Stylesheet rendering options.

use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// Options that control how a [`StyleSheet`](crate::StyleSheet) renders.
///
/// Missing keys keep their defaults when loading from TOML:
///
/// ```
/// use trellis::SheetOptions;
///
/// let options = SheetOptions::from_toml_str("normalize = false")?;
/// assert!(!options.normalize);
/// assert!(options.header);
/// assert_eq!(options.indent, 4);
/// # Ok::<(), trellis::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetOptions {
    /// Prepend the bundled normalization rules.
    pub normalize: bool,
    /// Start with the "generated file" comment lines.
    pub header: bool,
    /// Spaces used to indent rules inside media blocks.
    pub indent: usize,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            normalize: true,
            header: true,
            indent: 4,
        }
    }
}

impl SheetOptions {
    /// Options without preamble: no header and no normalization rules.
    pub fn bare() -> Self {
        Self {
            normalize: false,
            header: false,
            ..Self::default()
        }
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::options(e.to_string()))
    }

    /// Read options from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }
}

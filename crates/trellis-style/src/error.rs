//! Error types for style building.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building styles.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Selector text could not be parsed.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// A convenience setter was called with an unusable argument combination.
    #[error("Invalid arguments for '{method}': {message}")]
    Configuration {
        method: &'static str,
        message: String,
    },

    /// The operation needs a selector but the style has none.
    #[error("Style has no selector")]
    MissingSelector,

    /// The selector cannot be expressed as markup attributes.
    #[error("Selector '{selector}' has no markup representation")]
    NoMarkup { selector: String },
}

impl Error {
    /// Create a selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(method: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            method,
            message: message.into(),
        }
    }

    /// Create a markup error.
    pub fn no_markup(selector: impl Into<String>) -> Self {
        Self::NoMarkup {
            selector: selector.into(),
        }
    }
}

//! Media queries.

use std::fmt;

use trellis_style::types::px;

/// A width-based `@media` condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MediaQuery {
    min_width: Option<u32>,
    max_width: Option<u32>,
}

impl MediaQuery {
    /// Viewports at least `width` pixels wide.
    pub fn min_width(width: u32) -> Self {
        Self {
            min_width: Some(width),
            max_width: None,
        }
    }

    /// Viewports at most `width` pixels wide.
    pub fn max_width(width: u32) -> Self {
        Self {
            min_width: None,
            max_width: Some(width),
        }
    }

    /// Viewports between `min` and `max` pixels wide, both included.
    pub fn between(min: u32, max: u32) -> Self {
        Self {
            min_width: Some(min),
            max_width: Some(max),
        }
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut conditions = vec![];
        if let Some(min) = self.min_width {
            conditions.push(format!("(min-width: {})", px(min)));
        }
        if let Some(max) = self.max_width {
            conditions.push(format!("(max-width: {})", px(max)));
        }

        if conditions.is_empty() {
            write!(f, "@media all")
        } else {
            write!(f, "@media {}", conditions.join(" and "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_text() {
        assert_eq!(MediaQuery::min_width(600).to_string(), "@media (min-width: 600px)");
        assert_eq!(MediaQuery::max_width(480).to_string(), "@media (max-width: 480px)");
        assert_eq!(
            MediaQuery::between(600, 900).to_string(),
            "@media (min-width: 600px) and (max-width: 900px)"
        );
        assert_eq!(MediaQuery::default().to_string(), "@media all");
    }
}

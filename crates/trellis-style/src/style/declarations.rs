//! Insertion-ordered declaration storage.

/// Attribute/value pairs in first-write order.
///
/// Writing an attribute that already exists replaces its value in place, so
/// the order of a declaration block is fixed by the first write of each
/// attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    entries: Vec<(String, String)>,
}

impl Declarations {
    /// Create an empty declaration block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an attribute.
    pub fn set(&mut self, attr: impl Into<String>, value: impl Into<String>) {
        let attr = attr.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(a, _)| *a == attr) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((attr, value)),
        }
    }

    /// Get the value of an attribute.
    pub fn get(&self, attr: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(a, _)| a == attr)
            .map(|(_, v)| v.as_str())
    }

    /// Check if an attribute is set.
    pub fn contains(&self, attr: &str) -> bool {
        self.get(attr).is_some()
    }

    /// Get the number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, v)| (a.as_str(), v.as_str()))
    }

    /// Render as `attr: value;` lines joined by `separator`.
    pub fn to_css(&self, separator: &str) -> String {
        self.iter()
            .map(|(attr, value)| format!("{}: {};", attr, value))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl<'a> IntoIterator for &'a Declarations {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_position() {
        let mut decls = Declarations::new();
        decls.set("color", "red");
        decls.set("margin", "0px");
        decls.set("color", "blue");

        let order: Vec<_> = decls.iter().collect();
        assert_eq!(order, vec![("color", "blue"), ("margin", "0px")]);
        assert_eq!(decls.len(), 2);
    }

    #[test]
    fn css_lines() {
        let mut decls = Declarations::new();
        assert_eq!(decls.to_css("\n"), "");

        decls.set("a", "1");
        decls.set("b", "2");
        assert_eq!(decls.to_css(""), "a: 1;b: 2;");
        assert_eq!(decls.to_css("\n"), "a: 1;\nb: 2;");
    }
}

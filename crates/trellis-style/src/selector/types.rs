//! Selector type definitions.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A complete CSS selector (e.g., "ul.menu > li:hover").
///
/// A selector consists of one or more selector parts connected by combinators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Chain of selector parts with their connecting combinators.
    pub parts: Vec<SelectorPart>,
    /// Combinators between parts (length = parts.len() - 1).
    pub combinators: Vec<Combinator>,
}

impl Selector {
    /// Parse selector text.
    ///
    /// ```
    /// use trellis_style::selector::Selector;
    ///
    /// let sel = Selector::parse("#menu > li.item:hover").unwrap();
    /// assert_eq!(sel.to_string(), "#menu > li.item:hover");
    /// assert_eq!(Selector::parse("input[type=email]:invalid").unwrap().to_string(), r#"input[type="email"]:invalid"#);
    /// assert!(Selector::parse("li >").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        super::parser::parse_selector(text)
    }

    /// Create a simple element selector.
    pub fn element(name: impl Into<String>) -> Self {
        Self::from_part(SelectorPart::element_only(name))
    }

    /// Create a class selector.
    pub fn class(class_name: impl Into<String>) -> Self {
        Self::from_part(SelectorPart::class_only(class_name))
    }

    /// Create an ID selector.
    pub fn id(id: impl Into<String>) -> Self {
        Self::from_part(SelectorPart::id_only(id))
    }

    fn from_part(part: SelectorPart) -> Self {
        Self {
            parts: vec![part],
            combinators: vec![],
        }
    }

    /// Add a descendant selector part.
    pub fn descendant(mut self, part: SelectorPart) -> Self {
        if !self.parts.is_empty() {
            self.combinators.push(Combinator::Descendant);
        }
        self.parts.push(part);
        self
    }

    /// Add a child selector part.
    pub fn child(mut self, part: SelectorPart) -> Self {
        if !self.parts.is_empty() {
            self.combinators.push(Combinator::Child);
        }
        self.parts.push(part);
        self
    }

    /// Derive the selector for this one in a pseudo-class state.
    ///
    /// The state is parsed like a pseudo-class (`"hover"`, `"nth-child(2)"`,
    /// `"placeholder-shown"`) and appended to the subject part. Any name is
    /// accepted; only text that does not tokenize as one pseudo-class fails.
    pub fn on(&self, state: &str) -> Result<Selector> {
        let pseudo = super::parser::parse_pseudo_class(state)?;
        let mut derived = self.clone();
        match derived.parts.last_mut() {
            Some(subject) => subject.pseudo_classes.push(pseudo),
            None => {
                return Err(Error::invalid_selector(self.to_string(), "Empty selector"));
            }
        }
        Ok(derived)
    }

    /// Derive a descendant selector.
    ///
    /// `pattern` is parsed as a selector and joined with a descendant
    /// combinator. With `nth`, the pattern's subject also gets
    /// `:nth-child(nth)`.
    pub fn children(&self, pattern: &str, nth: Option<i32>) -> Result<Selector> {
        let mut tail = Selector::parse(pattern)?;
        if let Some(n) = nth
            && let Some(subject) = tail.parts.last_mut()
        {
            subject.pseudo_classes.push(PseudoClass::NthChild(NthExpr::new(0, n)));
        }

        let mut derived = self.clone();
        derived.combinators.push(Combinator::Descendant);
        derived.combinators.extend(tail.combinators);
        derived.parts.extend(tail.parts);
        Ok(derived)
    }

    /// Markup attributes that make an element match this selector.
    ///
    /// Only a single compound part with an id and/or classes has a markup
    /// form; the element name is ignored.
    ///
    /// ```
    /// use trellis_style::selector::Selector;
    ///
    /// let sel = Selector::parse("div#main.wide.dark").unwrap();
    /// assert_eq!(sel.markup().unwrap(), r#"id="main" class="wide dark""#);
    /// ```
    pub fn markup(&self) -> Result<String> {
        let [part] = self.parts.as_slice() else {
            return Err(Error::no_markup(self.to_string()));
        };

        let stateful = !part.pseudo_classes.is_empty()
            || !part.attributes.is_empty()
            || part.pseudo_element.is_some();
        if stateful || (part.id.is_none() && part.classes.is_empty()) {
            return Err(Error::no_markup(self.to_string()));
        }

        let mut attrs = vec![];
        if let Some(id) = &part.id {
            attrs.push(format!("id=\"{}\"", id));
        }
        if !part.classes.is_empty() {
            attrs.push(format!("class=\"{}\"", part.classes.join(" ")));
        }
        Ok(attrs.join(" "))
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                match &self.combinators[i - 1] {
                    Combinator::Descendant => write!(f, " ")?,
                    Combinator::Child => write!(f, " > ")?,
                    Combinator::AdjacentSibling => write!(f, " + ")?,
                    Combinator::GeneralSibling => write!(f, " ~ ")?,
                }
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// A single compound selector (e.g., "button.primary:hover").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectorPart {
    /// Element name or universal selector.
    pub element: Option<ElementSelector>,
    /// ID selector (#id).
    pub id: Option<String>,
    /// Class selectors (.class).
    pub classes: Vec<String>,
    /// Attribute selectors ([type="text"]).
    pub attributes: Vec<AttributeSelector>,
    /// Pseudo-class selectors (:hover, :focus, etc.).
    pub pseudo_classes: Vec<PseudoClass>,
    /// Trailing pseudo-element (::before).
    pub pseudo_element: Option<String>,
}

impl SelectorPart {
    /// Create a new empty selector part.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element-only selector.
    pub fn element_only(name: impl Into<String>) -> Self {
        Self {
            element: Some(ElementSelector::Named(name.into())),
            ..Default::default()
        }
    }

    /// Create a class-only selector.
    pub fn class_only(class_name: impl Into<String>) -> Self {
        Self {
            classes: vec![class_name.into()],
            ..Default::default()
        }
    }

    /// Create an ID-only selector.
    pub fn id_only(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Add a class selector.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add a pseudo-class selector.
    pub fn with_pseudo(mut self, pseudo: PseudoClass) -> Self {
        self.pseudo_classes.push(pseudo);
        self
    }

    /// Check if nothing has been set on this part.
    pub fn is_empty(&self) -> bool {
        self.element.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
            && self.pseudo_classes.is_empty()
            && self.pseudo_element.is_none()
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element {
            Some(ElementSelector::Universal) => write!(f, "*")?,
            Some(ElementSelector::Named(t)) => write!(f, "{}", t)?,
            None => {}
        }

        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }

        for class in &self.classes {
            write!(f, ".{}", class)?;
        }

        for attribute in &self.attributes {
            write!(f, "{}", attribute)?;
        }

        for pseudo in &self.pseudo_classes {
            write!(f, ":{}", pseudo)?;
        }

        if let Some(element) = &self.pseudo_element {
            write!(f, "::{}", element)?;
        }

        Ok(())
    }
}

/// Element selector - matches a tag name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementSelector {
    /// Universal selector (*) - matches any element.
    Universal,
    /// Named element (e.g., "div", "button").
    Named(String),
}

/// An attribute selector such as `[href]` or `[type="text" i]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeSelector {
    /// Attribute name, lowercased.
    pub name: String,
    /// Comparison and value, if any.
    pub value: Option<(AttributeOperator, String)>,
    /// The `i` flag.
    pub case_insensitive: bool,
}

impl AttributeSelector {
    /// Match elements that have the attribute.
    pub fn present(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            case_insensitive: false,
        }
    }

    /// Match elements whose attribute compares to `value`.
    pub fn matching(
        name: impl Into<String>,
        operator: AttributeOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: Some((operator, value.into())),
            case_insensitive: false,
        }
    }
}

impl fmt::Display for AttributeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.name)?;
        if let Some((operator, value)) = &self.value {
            let value = value.replace('\\', "\\\\").replace('"', "\\\"");
            write!(f, "{}\"{}\"", operator, value)?;
            if self.case_insensitive {
                write!(f, " i")?;
            }
        }
        write!(f, "]")
    }
}

/// Comparison inside an attribute selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeOperator {
    /// `=`
    Equals,
    /// `~=`, one of a whitespace-separated list.
    Includes,
    /// `|=`, exact or followed by `-`.
    DashMatch,
    /// `^=`
    Prefix,
    /// `$=`
    Suffix,
    /// `*=`
    Substring,
}

impl fmt::Display for AttributeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AttributeOperator::Equals => "=",
            AttributeOperator::Includes => "~=",
            AttributeOperator::DashMatch => "|=",
            AttributeOperator::Prefix => "^=",
            AttributeOperator::Suffix => "$=",
            AttributeOperator::Substring => "*=",
        })
    }
}

/// Combinator between selector parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Descendant combinator (space): matches any descendant.
    Descendant,
    /// Child combinator (>): matches direct child only.
    Child,
    /// Adjacent sibling (+): matches immediately following sibling.
    AdjacentSibling,
    /// General sibling (~): matches any following sibling.
    GeneralSibling,
}

/// Pseudo-class selectors for element state and position.
///
/// Common states have their own variants. Any other name is kept as
/// [`Other`](Self::Other), and functional pseudo-classes without a
/// dedicated variant keep their argument text in
/// [`Functional`](Self::Functional).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    Hover,
    Active,
    Focus,
    FocusWithin,
    FocusVisible,
    Visited,
    Link,
    Disabled,
    Enabled,
    Checked,
    FirstChild,
    LastChild,
    /// :nth-child(An+B).
    NthChild(NthExpr),
    OnlyChild,
    Empty,
    /// :not(selector) - negation of a simple selector.
    Not(Box<SelectorPart>),
    /// Any other functional pseudo-class, e.g. `:nth-of-type(2)`.
    Functional { name: String, args: String },
    /// Any other pseudo-class, e.g. `:placeholder-shown`.
    Other(String),
}

impl fmt::Display for PseudoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PseudoClass::Hover => write!(f, "hover"),
            PseudoClass::Active => write!(f, "active"),
            PseudoClass::Focus => write!(f, "focus"),
            PseudoClass::FocusWithin => write!(f, "focus-within"),
            PseudoClass::FocusVisible => write!(f, "focus-visible"),
            PseudoClass::Visited => write!(f, "visited"),
            PseudoClass::Link => write!(f, "link"),
            PseudoClass::Disabled => write!(f, "disabled"),
            PseudoClass::Enabled => write!(f, "enabled"),
            PseudoClass::Checked => write!(f, "checked"),
            PseudoClass::FirstChild => write!(f, "first-child"),
            PseudoClass::LastChild => write!(f, "last-child"),
            PseudoClass::NthChild(expr) => write!(f, "nth-child({})", expr),
            PseudoClass::OnlyChild => write!(f, "only-child"),
            PseudoClass::Empty => write!(f, "empty"),
            PseudoClass::Not(inner) => write!(f, "not({})", inner),
            PseudoClass::Functional { name, args } => write!(f, "{}({})", name, args),
            PseudoClass::Other(name) => write!(f, "{}", name),
        }
    }
}

impl PseudoClass {
    /// An argument-less pseudo-class by name. Names are case-insensitive.
    pub fn from_css(s: &str) -> Self {
        let name = s.to_ascii_lowercase();
        match name.as_str() {
            "hover" => Self::Hover,
            "active" => Self::Active,
            "focus" => Self::Focus,
            "focus-within" => Self::FocusWithin,
            "focus-visible" => Self::FocusVisible,
            "visited" => Self::Visited,
            "link" => Self::Link,
            "disabled" => Self::Disabled,
            "enabled" => Self::Enabled,
            "checked" => Self::Checked,
            "first-child" => Self::FirstChild,
            "last-child" => Self::LastChild,
            "only-child" => Self::OnlyChild,
            "empty" => Self::Empty,
            _ => Self::Other(name),
        }
    }
}

/// Expression for :nth-child (An+B).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NthExpr {
    /// Coefficient (A in An+B).
    pub a: i32,
    /// Offset (B in An+B).
    pub b: i32,
}

impl NthExpr {
    /// Create a new nth expression.
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// :nth-child(odd) = 2n+1.
    pub fn odd() -> Self {
        Self { a: 2, b: 1 }
    }

}

impl fmt::Display for NthExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.a, self.b) {
            (2, 1) => write!(f, "odd"),
            (2, 0) => write!(f, "even"),
            (0, b) => write!(f, "{}", b),
            (1, 0) => write!(f, "n"),
            (a, 0) => write!(f, "{}n", a),
            (1, b) if b > 0 => write!(f, "n+{}", b),
            (1, b) => write!(f, "n{}", b),
            (a, b) if b > 0 => write!(f, "{}n+{}", a, b),
            (a, b) => write!(f, "{}n{}", a, b),
        }
    }
}

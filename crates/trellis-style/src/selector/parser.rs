//! Selector parsing using the `cssparser` tokenizer.
//!
//! Whitespace is significant in selectors (it is the descendant combinator),
//! so the parser walks tokens with `next_including_whitespace` and builds
//! compound parts, flushing the current part whenever whitespace or an
//! explicit combinator is seen.
//!
//! Pseudo-class names are not checked against a list: any identifier or
//! function is accepted, since the output is CSS text for a browser to
//! interpret. Only input that does not tokenize into a selector is an error.

use super::types::{
    AttributeOperator, AttributeSelector, Combinator, ElementSelector, NthExpr, PseudoClass, Selector,
    SelectorPart,
};
use crate::{Error, Result};
use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

type Parsed<T> = std::result::Result<T, String>;

/// Parse a full selector such as `"#menu > li.item:hover"`.
pub(crate) fn parse_selector(text: &str) -> Result<Selector> {
    tracing::trace!("Parsing selector '{}'", text);

    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parse_complex(&mut parser).map_err(|message| Error::invalid_selector(text, message))
}

/// Parse a single pseudo-class such as `"hover"`, `"nth-child(2n+1)"` or
/// `"nth-of-type(2)"`.
///
/// A leading colon is accepted.
pub(crate) fn parse_pseudo_class(text: &str) -> Result<PseudoClass> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parse_standalone_pseudo(&mut parser).map_err(|message| Error::invalid_selector(text, message))
}

/// Builder state for a selector being parsed.
#[derive(Default)]
struct Chain {
    parts: Vec<SelectorPart>,
    combinators: Vec<Combinator>,
    current: SelectorPart,
    pending: Option<Combinator>,
}

impl Chain {
    /// Called before adding anything to the current compound part.
    fn begin(&mut self) -> Parsed<()> {
        if let Some(element) = &self.current.pseudo_element {
            return Err(format!("Nothing may follow '::{}' in a compound selector", element));
        }
        if self.current.is_empty() && !self.parts.is_empty() {
            let combinator = self.pending.take().unwrap_or(Combinator::Descendant);
            self.combinators.push(combinator);
        }
        Ok(())
    }

    /// Close the current compound part, if it has content.
    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.parts.push(std::mem::take(&mut self.current));
        }
    }

    fn combinator(&mut self, combinator: Combinator) -> Parsed<()> {
        self.flush();
        if self.parts.is_empty() {
            return Err(format!("Combinator '{}' has no left-hand side", symbol(combinator)));
        }
        if let Some(previous) = self.pending
            && previous != Combinator::Descendant
        {
            return Err("Consecutive combinators".to_string());
        }
        self.pending = Some(combinator);
        Ok(())
    }

    fn finish(mut self) -> Parsed<Selector> {
        self.flush();
        if let Some(combinator) = self.pending
            && combinator != Combinator::Descendant
            && self.combinators.len() < self.parts.len()
        {
            return Err(format!("Dangling combinator '{}'", symbol(combinator)));
        }
        if self.parts.is_empty() {
            return Err("Empty selector".to_string());
        }

        Ok(Selector {
            parts: self.parts,
            combinators: self.combinators,
        })
    }
}

fn symbol(combinator: Combinator) -> char {
    match combinator {
        Combinator::Descendant => ' ',
        Combinator::Child => '>',
        Combinator::AdjacentSibling => '+',
        Combinator::GeneralSibling => '~',
    }
}

fn parse_complex(parser: &mut Parser<'_, '_>) -> Parsed<Selector> {
    let mut chain = Chain::default();

    parser.skip_whitespace();

    loop {
        let token = match parser.next_including_whitespace() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) => {
                if !chain.current.is_empty() {
                    chain.flush();
                    chain.pending = Some(Combinator::Descendant);
                }
            }

            Token::Ident(name) => {
                if !chain.current.is_empty() {
                    return Err(format!("Element name '{}' must come first", name));
                }
                chain.begin()?;
                chain.current.element = Some(ElementSelector::Named(name.to_string()));
            }

            Token::Delim('*') => {
                if !chain.current.is_empty() {
                    return Err("Universal selector must come first".to_string());
                }
                chain.begin()?;
                chain.current.element = Some(ElementSelector::Universal);
            }

            Token::Delim('.') => {
                chain.begin()?;
                match parser.next_including_whitespace() {
                    Ok(Token::Ident(class)) => chain.current.classes.push(class.to_string()),
                    _ => return Err("Expected class name after '.'".to_string()),
                }
            }

            Token::IDHash(id) => {
                if chain.current.id.is_some() {
                    return Err(format!("Second id '#{}' in one compound selector", id));
                }
                chain.begin()?;
                chain.current.id = Some(id.to_string());
            }

            Token::Hash(id) => {
                return Err(format!("'#{}' is not a valid id", id));
            }

            Token::Colon => {
                chain.begin()?;
                if parser.try_parse(expect_adjacent_colon).is_ok() {
                    chain.current.pseudo_element = Some(parse_pseudo_element(parser)?);
                } else {
                    let pseudo = parse_pseudo_after_colon(parser)?;
                    chain.current.pseudo_classes.push(pseudo);
                }
            }

            Token::SquareBracketBlock => {
                chain.begin()?;
                let attribute = parser
                    .parse_nested_block(|p| parse_attribute(p))
                    .map_err(|_: CssParseError<'_, ()>| "Invalid attribute selector".to_string())?;
                chain.current.attributes.push(attribute);
            }

            Token::Delim('>') => chain.combinator(Combinator::Child)?,
            Token::Delim('+') => chain.combinator(Combinator::AdjacentSibling)?,
            Token::Delim('~') => chain.combinator(Combinator::GeneralSibling)?,

            Token::Comma => {
                return Err("Selector lists are not supported".to_string());
            }

            other => {
                return Err(format!("Unexpected token {:?}", other));
            }
        }
    }

    chain.finish()
}

fn parse_pseudo_after_colon(parser: &mut Parser<'_, '_>) -> Parsed<PseudoClass> {
    let token = match parser.next_including_whitespace() {
        Ok(t) => t.clone(),
        Err(_) => return Err("Expected pseudo-class name after ':'".to_string()),
    };

    match token {
        Token::Ident(name) => Ok(PseudoClass::from_css(&name)),
        Token::Function(name) => parse_functional_pseudo(parser, &name),
        Token::Colon => Err("Expected a pseudo-class, found a pseudo-element".to_string()),
        _ => Err("Expected pseudo-class name after ':'".to_string()),
    }
}

fn expect_adjacent_colon(parser: &mut Parser<'_, '_>) -> std::result::Result<(), ()> {
    match parser.next_including_whitespace() {
        Ok(Token::Colon) => Ok(()),
        _ => Err(()),
    }
}

fn parse_pseudo_element(parser: &mut Parser<'_, '_>) -> Parsed<String> {
    match parser.next_including_whitespace() {
        Ok(Token::Ident(name)) => Ok(name.to_ascii_lowercase()),
        _ => Err("Expected pseudo-element name after '::'".to_string()),
    }
}

/// Parse the inside of `[...]`: a name, optionally an operator and value,
/// and optionally the `i` flag.
fn parse_attribute<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<AttributeSelector, CssParseError<'i, ()>> {
    let name = parser.expect_ident()?.to_ascii_lowercase();
    if parser.is_exhausted() {
        return Ok(AttributeSelector::present(name));
    }

    let operator = match parser.next()?.clone() {
        Token::Delim('=') => AttributeOperator::Equals,
        Token::IncludeMatch => AttributeOperator::Includes,
        Token::DashMatch => AttributeOperator::DashMatch,
        Token::PrefixMatch => AttributeOperator::Prefix,
        Token::SuffixMatch => AttributeOperator::Suffix,
        Token::SubstringMatch => AttributeOperator::Substring,
        _ => return Err(parser.new_custom_error(())),
    };

    let value = match parser.next()?.clone() {
        Token::Ident(value) | Token::QuotedString(value) => value.to_string(),
        _ => return Err(parser.new_custom_error(())),
    };

    let mut attribute = AttributeSelector::matching(name, operator, value);
    attribute.case_insensitive = parser.try_parse(|p| p.expect_ident_matching("i")).is_ok();
    parser.expect_exhausted()?;
    Ok(attribute)
}

fn parse_standalone_pseudo(parser: &mut Parser<'_, '_>) -> Parsed<PseudoClass> {
    parser.skip_whitespace();
    let _ = parser.try_parse(|p| p.expect_colon());

    let pseudo = parse_pseudo_after_colon(parser)?;

    parser.skip_whitespace();
    if !parser.is_exhausted() {
        return Err("Unexpected input after pseudo-class".to_string());
    }
    Ok(pseudo)
}

fn parse_functional_pseudo(parser: &mut Parser<'_, '_>, name: &str) -> Parsed<PseudoClass> {
    match name.to_ascii_lowercase().as_str() {
        "nth-child" => {
            let (a, b) = parser
                .parse_nested_block(|p| {
                    let nth = cssparser::parse_nth(p)?;
                    p.expect_exhausted()?;
                    Ok::<_, CssParseError<'_, ()>>(nth)
                })
                .map_err(|_| "Invalid nth-child expression".to_string())?;
            Ok(PseudoClass::NthChild(NthExpr::new(a, b)))
        }
        "not" => {
            let inner = parser
                .parse_nested_block(|p| parse_simple_selector(p))
                .map_err(|_: CssParseError<'_, ()>| "Invalid :not() argument".to_string())?;
            Ok(PseudoClass::Not(Box::new(inner)))
        }
        other => {
            let args = parser
                .parse_nested_block(|p| {
                    let start = p.position();
                    while p.next_including_whitespace_and_comments().is_ok() {}
                    Ok::<_, CssParseError<'_, ()>>(p.slice_from(start).trim().to_string())
                })
                .map_err(|_| format!("Invalid :{}() argument", other))?;
            if args.is_empty() {
                return Err(format!("Missing :{}() argument", other));
            }
            Ok(PseudoClass::Functional {
                name: other.to_string(),
                args,
            })
        }
    }
}

/// Parse a simple selector (for :not() argument).
fn parse_simple_selector<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<SelectorPart, CssParseError<'i, ()>> {
    let mut part = SelectorPart::default();

    parser.skip_whitespace();

    while let Ok(token) = parser.next_including_whitespace() {
        match token.clone() {
            Token::Ident(name) if part.is_empty() => {
                part.element = Some(ElementSelector::Named(name.to_string()));
            }
            Token::Delim('*') if part.is_empty() => {
                part.element = Some(ElementSelector::Universal);
            }
            Token::Delim('.') => {
                let class = parser.expect_ident()?;
                part.classes.push(class.to_string());
            }
            Token::IDHash(id) if part.id.is_none() => {
                part.id = Some(id.to_string());
            }
            Token::WhiteSpace(_) => {
                parser.skip_whitespace();
                parser.expect_exhausted()?;
                break;
            }
            _ => return Err(parser.new_custom_error(())),
        }
    }

    if part.is_empty() {
        return Err(parser.new_custom_error(()));
    }
    Ok(part)
}

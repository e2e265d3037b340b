//! CSS selector subset understood by [`MemoryDocument`](crate::MemoryDocument).
//!
//! Supported: selector lists (`a, b`), type and universal selectors, `#id`, `.class`,
//! `[attr]`, `[attr=value]`, and the descendant and child (`>`) combinators.

use core::iter::Peekable;
use core::str::CharIndices;

use crate::memory::{MemoryDocument, NodeId};

/// Error returned when a selector cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// The selector (or one entry of a selector list) is empty.
    #[error("selector is empty")]
    Empty,
    /// An unsupported or misplaced character was found.
    #[error("unexpected `{found}` at position {position}")]
    Unexpected {
        /// The offending character.
        found: char,
        /// Byte offset in the selector.
        position: usize,
    },
    /// The selector ended in the middle of a simple selector.
    #[error("selector ended unexpectedly")]
    UnexpectedEnd,
    /// An attribute selector is missing its closing `]` or quote.
    #[error("unterminated attribute selector at position {position}")]
    UnterminatedAttribute {
        /// Byte offset of the opening `[`.
        position: usize,
    },
    /// A combinator is not followed by a selector.
    #[error("combinator at position {position} has no right-hand selector")]
    DanglingCombinator {
        /// Byte offset of the combinator.
        position: usize,
    },
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Complex>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    /// Compounds left to right; `combinators[i]` sits between `compounds[i]` and `compounds[i + 1]`.
    compounds: Vec<Compound>,
    combinators: Vec<Combinator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttributeMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeMatch {
    name: String,
    value: Option<String>,
}

impl Selector {
    /// Parses `input`.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectorError`] describing the first problem found.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        Parser::new(input).parse_list()
    }

    /// Returns `true` if the element `node` of `document` matches any alternative.
    #[must_use]
    pub fn matches(&self, document: &MemoryDocument, node: NodeId) -> bool {
        document.is_element(node)
            && self
                .alternatives
                .iter()
                .any(|complex| complex.matches(document, node))
    }
}

impl Complex {
    fn matches(&self, document: &MemoryDocument, node: NodeId) -> bool {
        let last = self.compounds.len() - 1;
        self.compounds[last].matches(document, node) && self.matches_left_of(document, last, node)
    }

    /// `compounds[index]` already matched `node`; checks everything to its left.
    fn matches_left_of(&self, document: &MemoryDocument, index: usize, node: NodeId) -> bool {
        if index == 0 {
            return true;
        }
        let previous = &self.compounds[index - 1];
        let mut ancestor = element_parent(document, node);
        match self.combinators[index - 1] {
            Combinator::Child => ancestor.is_some_and(|parent| {
                previous.matches(document, parent)
                    && self.matches_left_of(document, index - 1, parent)
            }),
            Combinator::Descendant => {
                while let Some(candidate) = ancestor {
                    if previous.matches(document, candidate)
                        && self.matches_left_of(document, index - 1, candidate)
                    {
                        return true;
                    }
                    ancestor = element_parent(document, candidate);
                }
                false
            }
        }
    }
}

fn element_parent(document: &MemoryDocument, node: NodeId) -> Option<NodeId> {
    document
        .parent(node)
        .filter(|parent| document.is_element(*parent))
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty() && self.attributes.is_empty()
    }

    fn matches(&self, document: &MemoryDocument, node: NodeId) -> bool {
        if let Some(tag) = &self.tag {
            if tag != "*" && document.tag(node) != Some(tag.as_str()) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if document.attribute(node, "id") != Some(id.as_str()) {
                return false;
            }
        }
        let class_list = document.attribute(node, "class").unwrap_or_default();
        if !self.classes.iter().all(|class| {
            class_list
                .split_ascii_whitespace()
                .any(|candidate| candidate == class)
        }) {
            return false;
        }
        self.attributes.iter().all(|attribute| {
            match (document.attribute(node, &attribute.name), &attribute.value) {
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == expected,
                (None, _) => false,
            }
        })
    }
}

struct Parser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn parse_list(&mut self) -> Result<Selector, SelectorError> {
        let mut alternatives = Vec::new();
        loop {
            self.skip_whitespace();
            alternatives.push(self.parse_complex()?);
            match self.chars.next() {
                None => break,
                Some((_, ',')) => {}
                Some((position, found)) => {
                    return Err(SelectorError::Unexpected { found, position });
                }
            }
        }
        Ok(Selector { alternatives })
    }

    /// Parses one complex selector, stopping before `,` or at the end of input.
    fn parse_complex(&mut self) -> Result<Complex, SelectorError> {
        let first = self.parse_compound()?;
        if first.is_empty() {
            return Err(match self.chars.peek() {
                None | Some((_, ',')) => SelectorError::Empty,
                Some(&(position, found)) => SelectorError::Unexpected { found, position },
            });
        }

        let mut complex = Complex {
            compounds: vec![first],
            combinators: Vec::new(),
        };
        loop {
            let had_whitespace = self.skip_whitespace();
            let (position, combinator) = match self.chars.peek() {
                None | Some((_, ',')) => return Ok(complex),
                Some(&(position, '>')) => {
                    self.chars.next();
                    self.skip_whitespace();
                    (position, Combinator::Child)
                }
                Some(&(position, _)) if had_whitespace => (position, Combinator::Descendant),
                Some(&(position, found)) => {
                    return Err(SelectorError::Unexpected { found, position });
                }
            };
            let compound = self.parse_compound()?;
            if compound.is_empty() {
                return Err(match self.chars.peek() {
                    None | Some((_, ',')) => SelectorError::DanglingCombinator { position },
                    Some(&(position, found)) => SelectorError::Unexpected { found, position },
                });
            }
            complex.combinators.push(combinator);
            complex.compounds.push(compound);
        }
    }

    fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
        let mut compound = Compound::default();
        match self.chars.peek() {
            Some((_, '*')) => {
                self.chars.next();
                compound.tag = Some("*".to_owned());
            }
            Some(&(_, ch)) if is_ident_char(ch) => {
                compound.tag = Some(self.identifier()?);
            }
            _ => {}
        }
        loop {
            match self.chars.peek() {
                Some((_, '#')) => {
                    self.chars.next();
                    compound.id = Some(self.identifier()?);
                }
                Some((_, '.')) => {
                    self.chars.next();
                    compound.classes.push(self.identifier()?);
                }
                Some(&(position, '[')) => {
                    self.chars.next();
                    compound.attributes.push(self.attribute(position)?);
                }
                _ => return Ok(compound),
            }
        }
    }

    fn attribute(&mut self, open: usize) -> Result<AttributeMatch, SelectorError> {
        let unterminated = SelectorError::UnterminatedAttribute { position: open };
        self.skip_whitespace();
        let name = self.identifier().map_err(|_| unterminated.clone())?;
        self.skip_whitespace();
        let value = match self.chars.next() {
            Some((_, ']')) => return Ok(AttributeMatch { name, value: None }),
            Some((_, '=')) => {
                self.skip_whitespace();
                match self.chars.peek() {
                    Some(&(_, quote @ ('"' | '\''))) => {
                        self.chars.next();
                        self.quoted(quote).ok_or_else(|| unterminated.clone())?
                    }
                    _ => self.identifier().map_err(|_| unterminated.clone())?,
                }
            }
            Some((position, found)) => return Err(SelectorError::Unexpected { found, position }),
            None => return Err(unterminated),
        };
        self.skip_whitespace();
        match self.chars.next() {
            Some((_, ']')) => Ok(AttributeMatch {
                name,
                value: Some(value),
            }),
            _ => Err(unterminated),
        }
    }

    fn quoted(&mut self, quote: char) -> Option<String> {
        let start = self.chars.peek().map_or(self.input.len(), |&(index, _)| index);
        for (index, ch) in self.chars.by_ref() {
            if ch == quote {
                return Some(self.input[start..index].to_owned());
            }
        }
        None
    }

    fn identifier(&mut self) -> Result<String, SelectorError> {
        let start = match self.chars.peek() {
            Some(&(index, ch)) if is_ident_char(ch) => index,
            Some(&(position, found)) => return Err(SelectorError::Unexpected { found, position }),
            None => return Err(SelectorError::UnexpectedEnd),
        };
        let mut end = start;
        while let Some(&(index, ch)) = self.chars.peek() {
            if !is_ident_char(ch) {
                break;
            }
            end = index + ch.len_utf8();
            self.chars.next();
        }
        Ok(self.input[start..end].to_owned())
    }

    fn skip_whitespace(&mut self) -> bool {
        let mut skipped = false;
        while self.chars.next_if(|(_, ch)| ch.is_whitespace()).is_some() {
            skipped = true;
        }
        skipped
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '-' | '_') || !ch.is_ascii()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (MemoryDocument, NodeId, NodeId, NodeId) {
        let mut document = MemoryDocument::new();
        let root = document.root();
        let svg = document.create_element(root, "svg").expect("svg");
        document.set_attribute(svg, "id", "chart").expect("id");
        let g = document.create_element(svg, "g").expect("g");
        document
            .set_attribute(g, "class", "axis axis-x")
            .expect("class");
        let line = document.create_element(g, "line").expect("line");
        document.set_attribute(line, "y1", "0").expect("y1");
        (document, svg, g, line)
    }

    fn parse(input: &str) -> Selector {
        Selector::parse(input).expect("selector parses")
    }

    #[test]
    fn simple_selectors() {
        let (document, svg, g, line) = fixture();
        assert!(parse("svg").matches(&document, svg));
        assert!(parse("#chart").matches(&document, svg));
        assert!(parse("svg#chart").matches(&document, svg));
        assert!(parse(".axis").matches(&document, g));
        assert!(parse("g.axis.axis-x").matches(&document, g));
        assert!(!parse("g.axis-y").matches(&document, g));
        assert!(parse("[y1]").matches(&document, line));
        assert!(parse("line[y1='0']").matches(&document, line));
        assert!(!parse("line[y1=\"1\"]").matches(&document, line));
        assert!(parse("*").matches(&document, line));
    }

    #[test]
    fn combinators() {
        let (document, _, g, line) = fixture();
        assert!(parse("svg line").matches(&document, line));
        assert!(parse("#chart > g").matches(&document, g));
        assert!(!parse("svg > line").matches(&document, line));
        assert!(parse("svg > g > line").matches(&document, line));
        assert!(parse("circle, .axis line").matches(&document, line));
    }

    #[test]
    fn document_root_never_matches() {
        let (document, ..) = fixture();
        assert!(!parse("*").matches(&document, document.root()));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("svg,"), Err(SelectorError::Empty));
        assert_eq!(
            Selector::parse("svg >"),
            Err(SelectorError::DanglingCombinator { position: 4 })
        );
        assert_eq!(
            Selector::parse("[width"),
            Err(SelectorError::UnterminatedAttribute { position: 0 })
        );
        assert_eq!(
            Selector::parse("svg:hover"),
            Err(SelectorError::Unexpected {
                found: ':',
                position: 3
            })
        );
        assert_eq!(Selector::parse("g."), Err(SelectorError::UnexpectedEnd));
    }

    #[test]
    fn stray_character_after_whitespace_is_unexpected() {
        assert_eq!(
            Selector::parse("svg ]"),
            Err(SelectorError::Unexpected {
                found: ']',
                position: 4
            })
        );
        assert_eq!(
            Selector::parse("svg > )"),
            Err(SelectorError::Unexpected {
                found: ')',
                position: 6
            })
        );
        assert_eq!(
            Selector::parse("svg >, g"),
            Err(SelectorError::DanglingCombinator { position: 4 })
        );
    }
}

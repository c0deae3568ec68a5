//! Parser for the path expression dialect.

use std::fmt;

use crate::{Error, Result};

/// One step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// `.name` or `['name']`
    Field(String),
    /// `[n]`; negative values count from the end.
    Index(i64),
    /// `[*]` or `.*`
    Wildcard,
    /// `[?(@.field=="value")]`
    Filter {
        /// Field compared on each array element.
        field: String,
        /// Literal the field must equal.
        value: String,
    },
}

/// A parsed path expression.
///
/// ```
/// use xmindkit::path::{PathExpr, Segment};
///
/// let expr = PathExpr::parse(r#"$[0].rootTopic.children.attached[?(@.title=="Ideas")]"#).unwrap();
/// assert_eq!(expr.segments()[0], Segment::Index(0));
/// assert_eq!(expr.segments().len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
    source: String,
    segments: Vec<Segment>,
}

impl PathExpr {
    /// Parses an expression.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] with the byte offset of the first
    /// character that could not be parsed.
    pub fn parse(expression: &str) -> Result<Self> {
        let segments = Parser::new(expression).parse()?;
        Ok(Self {
            source: expression.to_string(),
            segments,
        })
    }

    /// Returns the expression as supplied.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the parsed segments (the leading `$` is implicit).
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for PathExpr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn error(&self, reason: impl Into<String>) -> Error {
        Error::invalid_path(self.src, self.pos, reason)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{expected}'")))
        }
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
    }

    fn parse(mut self) -> Result<Vec<Segment>> {
        self.skip_ws();
        self.expect('$')?;

        let mut segments = Vec::new();
        loop {
            match self.peek() {
                None => break,
                Some('.') => {
                    self.bump();
                    match self.peek() {
                        // `$.[0]` is accepted as a spelling of `$[0]`
                        Some('[') => {}
                        Some('*') => {
                            self.bump();
                            segments.push(Segment::Wildcard);
                        }
                        _ => segments.push(Segment::Field(self.identifier()?)),
                    }
                }
                Some('[') => {
                    self.bump();
                    segments.push(self.bracket()?);
                }
                Some(c) if c.is_whitespace() => {
                    self.skip_ws();
                    if self.peek().is_some() {
                        return Err(self.error("unexpected trailing input"));
                    }
                }
                Some(_) => return Err(self.error("expected '.' or '['")),
            }
        }
        Ok(segments)
    }

    fn identifier(&mut self) -> Result<String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | ':'))
        {
            self.bump();
        }
        if self.pos == start {
            return Err(self.error("expected field name"));
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn bracket(&mut self) -> Result<Segment> {
        self.skip_ws();
        let segment = match self.peek() {
            Some('*') => {
                self.bump();
                Segment::Wildcard
            }
            Some('?') => {
                self.bump();
                self.filter()?
            }
            Some('\'' | '"') => Segment::Field(self.string()?),
            Some(c) if c == '-' || c.is_ascii_digit() => Segment::Index(self.index()?),
            _ => return Err(self.error("expected index, '*', filter or quoted field")),
        };
        self.skip_ws();
        self.expect(']')?;
        Ok(segment)
    }

    fn index(&mut self) -> Result<i64> {
        let start = self.pos;
        self.eat('-');
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        self.src[start..self.pos].parse().map_err(|_| {
            Error::invalid_path(self.src, start, "expected integer index")
        })
    }

    fn filter(&mut self) -> Result<Segment> {
        self.skip_ws();
        self.expect('(')?;
        self.skip_ws();
        self.expect('@')?;
        self.expect('.')?;
        let field = self.identifier()?;
        self.skip_ws();
        if !self.src[self.pos..].starts_with("==") {
            return Err(self.error("expected '=='"));
        }
        self.pos += 2;
        self.skip_ws();
        let value = self.string()?;
        self.skip_ws();
        self.expect(')')?;
        Ok(Segment::Filter { field, value })
    }

    fn string(&mut self) -> Result<String> {
        let quote = match self.bump() {
            Some(q @ ('\'' | '"')) => q,
            _ => return Err(self.error("expected string literal")),
        };
        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string literal")),
                Some('\\') => match self.bump() {
                    Some(c) => value.push(c),
                    None => return Err(self.error("unterminated escape")),
                },
                Some(c) if c == quote => return Ok(value),
                Some(c) => value.push(c),
            }
        }
    }
}

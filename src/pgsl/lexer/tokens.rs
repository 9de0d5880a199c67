//! Token definitions for the pgsl format
//!
//! The lexer produces a flat sequence of these tokens. Keywords are not
//! recognised here: `interface`, `table` and `columns` are all plain words, and
//! the parser decides what they mean.

use serde::Serialize;
use std::fmt;

/// A classified unit of lexical output.
///
/// Serializes as `{"type": "WORD", "value": "interface"}`; `Eol` has no value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "UPPERCASE")]
pub enum Token {
    /// A run of word characters (`[A-Za-z0-9_]`)
    Word(String),
    /// Any other single character
    Operator(char),
    /// Interior whitespace that is significant: two or more spaces, or anything with a tab
    Whitespace(String),
    /// Leading whitespace of a line, counted in characters
    Indent(usize),
    /// Separator between two logical lines
    Eol,
}

/// The kind of a [`Token`], without its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Operator,
    Whitespace,
    Indent,
    Eol,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Word(_) => TokenKind::Word,
            Token::Operator(_) => TokenKind::Operator,
            Token::Whitespace(_) => TokenKind::Whitespace,
            Token::Indent(_) => TokenKind::Indent,
            Token::Eol => TokenKind::Eol,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    /// Check for a specific word, e.g. `token.is_word_of("interface")`
    pub fn is_word_of(&self, word: &str) -> bool {
        matches!(self, Token::Word(w) if w == word)
    }

    pub fn is_operator(&self, op: char) -> bool {
        matches!(self, Token::Operator(c) if *c == op)
    }

    pub fn is_eol(&self) -> bool {
        matches!(self, Token::Eol)
    }

    pub fn is_indent(&self) -> bool {
        matches!(self, Token::Indent(_))
    }
}

impl TokenKind {
    /// Upper-case name used by the text and JSON output formats
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Word => "WORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Indent => "INDENT",
            TokenKind::Eol => "EOL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "WORD {}", word),
            Token::Operator(op) => write!(f, "OPERATOR {}", op),
            Token::Whitespace(ws) => write!(f, "WHITESPACE {:?}", ws),
            Token::Indent(depth) => write!(f, "INDENT {}", depth),
            Token::Eol => f.write_str("EOL"),
        }
    }
}

//! Lexer for the pgsl format
//!
//! pgsl is line oriented and indentation sensitive, so lexing happens one line
//! at a time:
//!
//! 1. `char_class` splits a line into character classes using logos
//! 2. `line_lexer` applies the indentation, whitespace and comment rules and
//!    appends the line's tokens to the buffer
//! 3. `assembler` separates logical lines with `Eol` and trims the end
//!
//! Reading lines from disk is done by [`crate::pgsl::source`]; [`lex`] here is
//! the synchronous entry point for text already in memory.

pub mod assembler;
pub mod char_class;
pub mod line_lexer;
pub mod tokens;

pub use assembler::TokenAssembler;
pub use line_lexer::lex_line;
pub use tokens::{Token, TokenKind};

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Split text into lines on `\r\n`, `\r` or `\n`
pub fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK.split(source)
}

/// Lex a complete source held in memory
pub fn lex(source: &str) -> Vec<Token> {
    let mut assembler = TokenAssembler::new();
    for line in split_lines(source) {
        assembler.push_line(line);
    }
    assembler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(w: &str) -> Token {
        Token::Word(w.to_string())
    }

    #[test]
    fn test_split_any_line_break() {
        let lines: Vec<&str> = split_lines("a\r\nb\rc\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_crlf_is_one_break() {
        let lines: Vec<&str> = split_lines("a\r\n\r\nb").collect();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_blank_line_between() {
        assert_eq!(lex("foo\n\nbar"), vec![word("foo"), Token::Eol, word("bar")]);
    }

    #[test]
    fn test_line_break_conventions_agree() {
        let unix = lex("interface table users:\n  id int\n");
        assert_eq!(lex("interface table users:\r\n  id int\r\n"), unix);
        assert_eq!(lex("interface table users:\r  id int\r"), unix);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(lex(""), vec![]);
        assert_eq!(lex("\n\n\n"), vec![]);
    }
}

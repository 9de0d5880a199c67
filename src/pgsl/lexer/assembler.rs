//! Token stream assembly
//!
//! Runs the line lexer once per line and places `Eol` separators between
//! logical lines. A line that contributes nothing (blank, comment-only, or only
//! indentation) produces no separator, so the finished stream never starts or
//! ends with `Eol` and never holds two in a row.

use super::line_lexer::lex_line;
use super::tokens::Token;
use tracing::trace;

#[derive(Debug, Default)]
pub struct TokenAssembler {
    tokens: Vec<Token>,
    lines: usize,
}

impl TokenAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lex one line and append its tokens, followed by an `Eol` if needed.
    pub fn push_line(&mut self, line: &str) {
        self.lines += 1;
        let contributed = lex_line(line, &mut self.tokens);
        trace!(line = self.lines, contributed, "lexed line");

        // Nothing yet, or this line added nothing after the previous separator
        match self.tokens.last() {
            None | Some(Token::Eol) => {}
            Some(_) => self.tokens.push(Token::Eol),
        }
    }

    /// Number of lines fed so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Drop the trailing separator and hand over the tokens.
    pub fn finish(mut self) -> Vec<Token> {
        if matches!(self.tokens.last(), Some(Token::Eol)) {
            self.tokens.pop();
        }
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble(lines: &[&str]) -> Vec<Token> {
        let mut assembler = TokenAssembler::new();
        for line in lines {
            assembler.push_line(line);
        }
        assembler.finish()
    }

    fn word(w: &str) -> Token {
        Token::Word(w.to_string())
    }

    #[test]
    fn test_separator_between_lines() {
        assert_eq!(
            assemble(&["foo", "bar"]),
            vec![word("foo"), Token::Eol, word("bar")]
        );
    }

    #[test]
    fn test_blank_lines_collapse() {
        assert_eq!(
            assemble(&["foo", "", "", "bar"]),
            vec![word("foo"), Token::Eol, word("bar")]
        );
    }

    #[test]
    fn test_no_leading_separator() {
        assert_eq!(
            assemble(&["", "# header", "   ", "foo"]),
            vec![word("foo")]
        );
    }

    #[test]
    fn test_no_trailing_separator() {
        assert_eq!(assemble(&["foo", "", "# end"]), vec![word("foo")]);
    }

    #[test]
    fn test_comment_only_file() {
        assert_eq!(assemble(&["# comment"]), vec![]);
    }

    #[test]
    fn test_no_lines() {
        assert_eq!(assemble(&[]), vec![]);
    }

    #[test]
    fn test_counts_lines() {
        let mut assembler = TokenAssembler::new();
        assembler.push_line("a");
        assembler.push_line("");
        assert_eq!(assembler.lines(), 2);
    }
}

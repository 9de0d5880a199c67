//! Line lexer
//!
//! Turns one source line (line break already removed) into tokens appended to
//! a shared buffer.
//!
//! Rules, left to right:
//!
//! - While the line is still indenting, every space or tab adds one to the
//!   line's indent depth. The `Indent` token is committed when the first word
//!   or operator arrives, so it is always the first token of its line. A line
//!   that never gets past its indentation (blank or indented comment) adds
//!   nothing.
//! - After the indentation, a whitespace run becomes a `Whitespace` token only
//!   if it starts with a tab or with a space followed by another space. Spaces
//!   before that point are dropped. A lone interior space is therefore not a
//!   token at all.
//! - `#` ends the line. Nothing from the marker on is tokenized.
//! - Word character runs become one `Word`; every other character becomes its
//!   own `Operator`.

use super::char_class::{classify, CharClass};
use super::tokens::Token;

/// Lex a single line, appending its tokens to `tokens`.
///
/// Returns true if the line contributed at least one token.
pub fn lex_line(line: &str, tokens: &mut Vec<Token>) -> bool {
    let start = tokens.len();
    let mut state = LineState::default();
    let classes = classify(line);
    let mut iter = classes.iter().peekable();

    while let Some(&(class, text)) = iter.next() {
        match class {
            CharClass::Space | CharClass::Tab => {
                if state.indenting {
                    state.indent += 1;
                    continue;
                }

                match state.run.as_mut() {
                    Some(run) => run.push_str(text),
                    None => {
                        let next_is_space =
                            matches!(iter.peek(), Some(&&(CharClass::Space, _)));
                        if class == CharClass::Tab || next_is_space {
                            state.run = Some(text.to_string());
                        }
                    }
                }
            }
            CharClass::CommentMarker => break,
            CharClass::Word => {
                state.close(tokens);
                tokens.push(Token::Word(text.to_string()));
            }
            CharClass::Operator => {
                state.close(tokens);
                tokens.extend(text.chars().map(Token::Operator));
            }
        }
    }

    state.finish(tokens);
    tokens.len() > start
}

/// Scan state for one line.
///
/// Indentation and whitespace are held here while their run is open and only
/// pushed once the run ends, so tokens already in the buffer are never touched.
#[derive(Debug)]
struct LineState {
    indenting: bool,
    indent: usize,
    run: Option<String>,
}

impl Default for LineState {
    fn default() -> Self {
        LineState {
            indenting: true,
            indent: 0,
            run: None,
        }
    }
}

impl LineState {
    /// Called before a word or operator: ends indentation and any open whitespace run
    fn close(&mut self, tokens: &mut Vec<Token>) {
        if self.indenting {
            self.indenting = false;
            if self.indent > 0 {
                tokens.push(Token::Indent(self.indent));
            }
        }

        if let Some(run) = self.run.take() {
            tokens.push(Token::Whitespace(run));
        }
    }

    /// End of line. Trailing whitespace after content is kept; a pending indent is not.
    fn finish(mut self, tokens: &mut Vec<Token>) {
        if let Some(run) = self.run.take() {
            tokens.push(Token::Whitespace(run));
        }
    }
}

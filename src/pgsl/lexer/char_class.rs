//! Character classification for a single pgsl line
//!
//! The logos lexer only splits a line into classes; it knows nothing about
//! indentation or whitespace significance. Those rules live in the line lexer,
//! which walks these classes with one token of look-ahead.
//!
//! Spaces and tabs are matched one character at a time so the line lexer can
//! decide, per character, whether it extends an indent or a whitespace run.
//! Word characters are matched as whole runs.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    #[token(" ")]
    Space,

    #[token("\t")]
    Tab,

    // Everything from here to the end of the line is a comment
    #[token("#")]
    CommentMarker,

    #[regex(r"[A-Za-z0-9_]+")]
    Word,

    // Anything else is a one-character operator
    #[regex(r"[^ \t#A-Za-z0-9_]")]
    Operator,
}

/// Classify a line into `(class, text)` pairs.
///
/// Anything logos refuses to match is reported as [`CharClass::Operator`]
/// with its original text, so every character of the line is accounted for.
pub fn classify(line: &str) -> Vec<(CharClass, &str)> {
    let mut lexer = CharClass::lexer(line);
    let mut classes = Vec::new();

    while let Some(result) = lexer.next() {
        let class = result.unwrap_or(CharClass::Operator);
        classes.push((class, lexer.slice()));
    }

    classes
}

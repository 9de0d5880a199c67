//! Token stream and cursor
//!
//! [`TokenStream`] owns the finished tokens of one source and never changes
//! them. It offers two independent read views:
//!
//! - full traversal through [`TokenStream::iter`], restartable and unaffected
//!   by any cursor
//! - positional access through [`Cursor`], for a parser that walks tokens in
//!   order and peeks one position either way
//!
//! # Example
//!
//! ```rust
//! let stream = pgsl::pgsl::stream::tokenize("schema/users").await?;
//! let mut cursor = stream.cursor();
//! while let Some(token) = cursor.current() {
//!     // ...
//!     cursor.advance();
//! }
//! ```

use crate::pgsl::config::SourceConfig;
use crate::pgsl::error::PgslError;
use crate::pgsl::lexer::{lex, Token, TokenAssembler};
use crate::pgsl::source::{resolve_source_path, SourceLines};
use std::path::Path;
use std::slice;
use tracing::{debug, instrument};

/// Tokenize a schema by name, using the default `.pgl` extension
pub async fn tokenize(identifier: &str) -> Result<TokenStream, PgslError> {
    tokenize_with(identifier, &SourceConfig::default()).await
}

/// Tokenize a schema by name with explicit source settings
pub async fn tokenize_with(
    identifier: &str,
    config: &SourceConfig,
) -> Result<TokenStream, PgslError> {
    let path = resolve_source_path(identifier, &config.extension)?;
    tokenize_path(&path).await
}

/// Tokenize the file at `path` as-is.
///
/// On error nothing is returned; a partially built stream is dropped.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn tokenize_path(path: &Path) -> Result<TokenStream, PgslError> {
    let mut lines = SourceLines::open(path).await?;
    let mut assembler = TokenAssembler::new();

    while let Some(line) = lines.next_line().await? {
        assembler.push_line(&line);
    }

    let line_count = assembler.lines();
    let stream = TokenStream::new(assembler.finish());
    debug!(lines = line_count, tokens = stream.len(), "tokenized source");
    Ok(stream)
}

/// The complete, ordered tokens of one source
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens }
    }

    /// Lex source text already in memory
    pub fn from_source(source: &str) -> Self {
        TokenStream::new(lex(source))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens in order. Each call starts again from the first token.
    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// A cursor positioned on the first token
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens)
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Positional read access over a token slice.
///
/// Every accessor returns `None` outside the slice, so callers must check.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    active: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, active: 0 }
    }

    /// The token at the active position
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.active)
    }

    pub fn peek_next(&self) -> Option<&'a Token> {
        self.active.checked_add(1).and_then(|i| self.tokens.get(i))
    }

    pub fn peek_previous(&self) -> Option<&'a Token> {
        self.active.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    /// Move one position forward and return the new current token.
    ///
    /// Stops one past the end, where `current` is `None`.
    pub fn advance(&mut self) -> Option<&'a Token> {
        if self.active < self.tokens.len() {
            self.active += 1;
        }
        self.current()
    }

    pub fn position(&self) -> usize {
        self.active
    }

    pub fn is_at_end(&self) -> bool {
        self.active >= self.tokens.len()
    }

    pub fn reset(&mut self) {
        self.active = 0;
    }
}

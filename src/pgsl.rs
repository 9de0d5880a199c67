//! Main module for pgsl library functionality

pub mod config;
pub mod error;
pub mod lexer;
pub mod processor;
pub mod source;
pub mod stream;

pub use error::PgslError;
pub use lexer::{Token, TokenKind};
pub use stream::{tokenize, Cursor, TokenStream};

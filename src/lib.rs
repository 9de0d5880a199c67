//! # pgsl
//!
//! Lexical front end for pgsl, a line-oriented, indentation-sensitive schema
//! description language.
//!
//! Source files (`<name>.pgl`) are read line by line and turned into a flat
//! sequence of tokens: words, single-character operators, significant
//! whitespace, indentation and line separators. See [`pgsl::lexer`] for the
//! rules and [`pgsl::stream`] for the read interface handed to the parser.

pub mod pgsl;

//! Output formatting for token streams
//!
//! Formats are named `<stage>-<format>`. Only the token stage exists until the
//! parser lands:
//!
//! - `token-simple`: one token per line, e.g. `WORD interface` or `INDENT 2`
//! - `token-json`: a JSON array of `{"type": ..., "value": ...}` objects

use crate::pgsl::error::PgslError;
use crate::pgsl::stream::TokenStream;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    TokenSimple,
    TokenJson,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Result<Self, PgslError> {
        match name {
            "token-simple" => Ok(OutputFormat::TokenSimple),
            "token-json" => Ok(OutputFormat::TokenJson),
            other => Err(PgslError::UnknownFormat(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::TokenSimple => "token-simple",
            OutputFormat::TokenJson => "token-json",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::TokenSimple => "One token per line",
            OutputFormat::TokenJson => "JSON array of tokens",
        }
    }
}

/// All supported output formats
pub fn available_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::TokenSimple, OutputFormat::TokenJson]
}

/// Render a token stream in the given format
pub fn format_tokens(stream: &TokenStream, format: OutputFormat) -> Result<String, PgslError> {
    match format {
        OutputFormat::TokenSimple => Ok(stream
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::TokenJson => Ok(serde_json::to_string_pretty(stream.tokens())?),
    }
}

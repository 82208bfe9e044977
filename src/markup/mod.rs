// src/markup/mod.rs

//! Converts inline markup into ANSI escape sequences.
//!
//! Text such as `"a <red>warning</> here"` is split into tokens by the
//! lexer, each tag is resolved against the formatter table or one of the
//! parametric forms (`rgb`, `hex`, `link`), and the pieces are joined back
//! together in order. Tags that do not resolve are kept as literal text.

pub mod escape;
pub mod formatters;
mod lexer;
mod resolver;

pub use lexer::{tokenize, Token, TokenKind, Tokenizer};
pub use resolver::{
    resolve, resolve_invocation, resolve_style, Resolution, ResolvedStyle, TagError,
    TagInvocation,
};

use crate::config::Config;
use log::warn;
use std::io::{self, Write};

/// Per-call conversion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Echo every token to the diagnostic stream before it is resolved.
    pub diagnostics: bool,
    /// Render a doubled `<<`/`>>` in literal text as a single character.
    pub unescape_delimiters: bool,
}

impl From<&Config> for ConvertOptions {
    fn from(config: &Config) -> Self {
        ConvertOptions {
            diagnostics: config.diagnostics,
            unescape_delimiters: config.unescape_delimiters,
        }
    }
}

/// Converts `markup` with default options.
pub fn convert(markup: &str) -> String {
    convert_with(markup, &ConvertOptions::default())
}

/// Converts `markup`; diagnostics, if enabled, go to stderr.
pub fn convert_with(markup: &str, options: &ConvertOptions) -> String {
    convert_traced(markup, options, &mut io::stderr().lock())
}

/// Converts `markup`; diagnostics, if enabled, go to `trace`.
///
/// Failing to write a diagnostic line is logged and otherwise ignored.
pub fn convert_traced<W: Write>(markup: &str, options: &ConvertOptions, trace: &mut W) -> String {
    let mut output = String::with_capacity(markup.len());

    for token in tokenize(markup) {
        if options.diagnostics {
            if let Err(e) = writeln!(trace, "{:?}", token) {
                warn!("failed to write token diagnostics: {}", e);
            }
        }

        match token.kind {
            TokenKind::Tag => output.push_str(resolve(&token).as_str()),
            TokenKind::Literal if options.unescape_delimiters => {
                output.push_str(&unescape(token.text))
            }
            TokenKind::Literal | TokenKind::Whitespace => output.push_str(token.text),
        }
    }

    output
}

/// Collapses doubled delimiters, pairing left to right like the lexer does.
fn unescape(text: &str) -> String {
    text.replace("<<", "<").replace(">>", ">")
}

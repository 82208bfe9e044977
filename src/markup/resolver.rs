// src/markup/resolver.rs

//! Interprets tag tokens and maps them to escape sequences.
//!
//! Resolution never fails the conversion. A tag that does not match any rule
//! is handed back untouched so the caller can emit it as literal text.

use super::escape;
use super::formatters;
use super::lexer::{Token, CLOSE_TAG, OPEN_TAG};
use log::debug;
use std::fmt;
use thiserror::Error;

const PARAM_SEPARATOR: char = ':';
const CLOSE_NAME: &str = "/";
const HEX_PREFIX: char = '#';
const HEX_DIGITS: usize = 6;

/// Why a tag did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("unknown tag name `{0}`")]
    UnknownName(String),
    #[error("`{name}` does not take {given} parameter(s)")]
    Arity { name: String, given: usize },
    #[error("color component `{0}` is not an integer in 0..=255")]
    InvalidComponent(String),
    #[error("`{0}` is not a 6 digit hex color")]
    InvalidHex(String),
}

/// Parsed view of a tag token: `<name:param:param...>`.
///
/// The whole tag is lowercased before it is split, so names and parameters
/// (link labels and targets included) are all lowercase. `raw` keeps the
/// text as written for passthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInvocation<'a> {
    pub name: String,
    pub parameters: Vec<String>,
    pub raw: &'a str,
}

impl<'a> TagInvocation<'a> {
    /// Parses the text of a tag token. Returns `None` if `raw` is not
    /// bounded by the tag delimiters.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let inner = raw
            .strip_prefix(OPEN_TAG)?
            .strip_suffix(CLOSE_TAG)?
            .to_lowercase();
        let mut parts = inner.split(PARAM_SEPARATOR).map(str::to_string);
        // `split` always yields at least one item.
        let name = parts.next().unwrap_or_default();
        Some(TagInvocation {
            name,
            parameters: parts.collect(),
            raw,
        })
    }

    /// Parameters after the name.
    pub fn arguments(&self) -> &[String] {
        &self.parameters
    }
}

/// The semantic form a tag resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedStyle {
    Named(&'static str),
    Rgb(u8, u8, u8),
    Hex(u8, u8, u8),
    Link { label: String, href: String },
    Reset,
    Unrecognized,
}

impl fmt::Display for ResolvedStyle {
    /// Writes the escape sequence; `Unrecognized` writes nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedStyle::Named(code) => f.write_str(&escape::sgr(code)),
            ResolvedStyle::Rgb(r, g, b) | ResolvedStyle::Hex(r, g, b) => {
                f.write_str(&escape::truecolor(*r, *g, *b))
            }
            ResolvedStyle::Link { label, href } => f.write_str(&escape::hyperlink(label, href)),
            ResolvedStyle::Reset => f.write_str(&escape::reset()),
            ResolvedStyle::Unrecognized => Ok(()),
        }
    }
}

/// Outcome of resolving a single tag token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The tag matched; carries its escape sequence.
    Matched(String),
    /// The tag did not match; carries the original text.
    Passthrough(&'a str),
}

impl Resolution<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Resolution::Matched(sequence) => sequence,
            Resolution::Passthrough(raw) => raw,
        }
    }
}

fn parse_component(component: &str) -> Result<u8, TagError> {
    component
        .parse::<u8>()
        .map_err(|_| TagError::InvalidComponent(component.to_string()))
}

fn parse_hex(literal: &str) -> Result<(u8, u8, u8), TagError> {
    let invalid = || TagError::InvalidHex(literal.to_string());
    let digits = literal.strip_prefix(HEX_PREFIX).unwrap_or(literal);
    if digits.len() != HEX_DIGITS || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let byte = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());
    Ok((byte(0)?, byte(2)?, byte(4)?))
}

/// Applies the resolution rules in order; the first match wins.
pub fn resolve_invocation(invocation: &TagInvocation<'_>) -> Result<ResolvedStyle, TagError> {
    match (invocation.name.as_str(), invocation.arguments()) {
        (CLOSE_NAME, []) => Ok(ResolvedStyle::Reset),
        (name, []) => formatters::lookup(name)
            .map(ResolvedStyle::Named)
            .ok_or_else(|| TagError::UnknownName(name.to_string())),
        ("rgb", [r, g, b]) => Ok(ResolvedStyle::Rgb(
            parse_component(r)?,
            parse_component(g)?,
            parse_component(b)?,
        )),
        ("hex", [literal]) => {
            let (r, g, b) = parse_hex(literal)?;
            Ok(ResolvedStyle::Hex(r, g, b))
        }
        // The href keeps any further colons (`https://...`).
        ("link", [label, href @ ..]) if !href.is_empty() => Ok(ResolvedStyle::Link {
            label: label.to_string(),
            href: href.join(":"),
        }),
        (name @ ("rgb" | "hex" | "link"), args) => Err(TagError::Arity {
            name: name.to_string(),
            given: args.len(),
        }),
        (name, _) => Err(TagError::UnknownName(name.to_string())),
    }
}

/// Maps a tag invocation to its style, or `Unrecognized`.
pub fn resolve_style(invocation: &TagInvocation<'_>) -> ResolvedStyle {
    resolve_invocation(invocation).unwrap_or_else(|err| {
        debug!("passing through {:?}: {}", invocation.raw, err);
        ResolvedStyle::Unrecognized
    })
}

/// Resolves a tag token to its escape sequence, or hands its text back.
/// Non-tag tokens always pass through.
pub fn resolve<'a>(token: &Token<'a>) -> Resolution<'a> {
    if !token.is_tag() {
        return Resolution::Passthrough(token.text);
    }
    let Some(invocation) = TagInvocation::parse(token.text) else {
        return Resolution::Passthrough(token.text);
    };
    match resolve_style(&invocation) {
        ResolvedStyle::Unrecognized => Resolution::Passthrough(token.text),
        style => Resolution::Matched(style.to_string()),
    }
}

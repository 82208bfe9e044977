//! Console markup library crate.
//!
//! Turns text like `"<bold>hello</> <link:docs:https://example.com>"` into
//! ANSI escape sequences for color, style and hyperlinks.

pub mod config;
pub mod cursor;
pub mod markup;

pub use markup::{convert, convert_traced, convert_with, ConvertOptions};

// src/markup/formatters.rs

//! The table of named tags and the SGR parameter each one selects.
//!
//! Keys are lowercase tag names. Values are the SGR code that goes between
//! the CSI prefix and the final `m`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

// --- Constants for SGR ---
const SGR_BOLD: &str = "1";
const SGR_ITALIC: &str = "3";
const SGR_UNDERLINE: &str = "4";
const SGR_BLINK: &str = "5";
const SGR_REVERSE: &str = "7";
const SGR_STRIKETHROUGH: &str = "9";
// `gray` is bright black; `bg-gray` is the plain black background.
const SGR_FG_GRAY: &str = "90";
const SGR_BG_GRAY: &str = "40";

/// The eight base color names, in SGR order (30-37 / 40-47).
const BASE_COLORS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Foreground (30-37), background (40-47), bright foreground (90-97)
/// and bright background (100-107) codes, indexed like `BASE_COLORS`.
const FG_CODES: [&str; 8] = ["30", "31", "32", "33", "34", "35", "36", "37"];
const BG_CODES: [&str; 8] = ["40", "41", "42", "43", "44", "45", "46", "47"];
const FG_BRIGHT_CODES: [&str; 8] = ["90", "91", "92", "93", "94", "95", "96", "97"];
const BG_BRIGHT_CODES: [&str; 8] = [
    "100", "101", "102", "103", "104", "105", "106", "107",
];

const BRIGHT_PREFIX: &str = "bright-";
const BACKGROUND_PREFIX: &str = "bg-";

static FORMATTERS: Lazy<HashMap<String, &'static str>> = Lazy::new(build_table);

fn build_table() -> HashMap<String, &'static str> {
    let mut table: HashMap<String, &'static str> = [
        ("bold", SGR_BOLD),
        ("strong", SGR_BOLD),
        ("italic", SGR_ITALIC),
        ("underline", SGR_UNDERLINE),
        ("blink", SGR_BLINK),
        ("invert", SGR_REVERSE),
        ("strike", SGR_STRIKETHROUGH),
        ("strikeout", SGR_STRIKETHROUGH),
        ("gray", SGR_FG_GRAY),
        ("bg-gray", SGR_BG_GRAY),
    ]
    .into_iter()
    .map(|(name, code)| (name.to_string(), code))
    .collect();

    for (i, color) in BASE_COLORS.iter().enumerate() {
        table.insert(color.to_string(), FG_CODES[i]);
        table.insert(format!("{BACKGROUND_PREFIX}{color}"), BG_CODES[i]);
        table.insert(format!("{BRIGHT_PREFIX}{color}"), FG_BRIGHT_CODES[i]);
        table.insert(
            format!("{BACKGROUND_PREFIX}{BRIGHT_PREFIX}{color}"),
            BG_BRIGHT_CODES[i],
        );
    }

    table
}

/// Looks up the SGR code for a lowercase tag name.
pub fn lookup(name: &str) -> Option<&'static str> {
    FORMATTERS.get(name).copied()
}

// src/markup/escape.rs

//! Builds the escape sequences emitted for resolved tags.

/// Escape character (0x1B).
pub const ESC: &str = "\x1b";
/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";
/// Operating System Command introducer.
pub const OSC: &str = "\x1b]";
/// String Terminator (ESC \).
pub const ST: &str = "\x1b\\";

const SGR_FINAL: char = 'm';
const SGR_RESET: &str = "0";
const SGR_EXTENDED_FG: u16 = 38;
const SGR_EXTENDED_MODE_RGB: u16 = 2;
const OSC_HYPERLINK: u16 = 8;

/// `ESC[<code>m`
pub fn sgr(code: &str) -> String {
    format!("{CSI}{code}{SGR_FINAL}")
}

/// `ESC[0m`
pub fn reset() -> String {
    sgr(SGR_RESET)
}

/// `ESC[38;2;<r>;<g>;<b>m`
pub fn truecolor(r: u8, g: u8, b: u8) -> String {
    format!("{CSI}{SGR_EXTENDED_FG};{SGR_EXTENDED_MODE_RGB};{r};{g};{b}{SGR_FINAL}")
}

/// `ESC]8;id=<href>;<href>ESC\<label>ESC]8;;ESC\`
///
/// The href doubles as the link id, so every range pointing at the same
/// target is grouped as one link by the terminal.
pub fn hyperlink(label: &str, href: &str) -> String {
    format!("{OSC}{OSC_HYPERLINK};id={href};{href}{ST}{label}{OSC}{OSC_HYPERLINK};;{ST}")
}

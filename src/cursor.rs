// src/cursor.rs

//! Direct cursor control. Writes raw CSI sequences to a stream; the markup
//! converter never calls into this module.

use crate::markup::escape::CSI;
use std::io::{self, Write};

const ERASE_IN_DISPLAY_ALL: u16 = 2;

/// Homes the cursor and clears the whole screen.
pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    position(out, 1, 1)?;
    write!(out, "{CSI}{ERASE_IN_DISPLAY_ALL}J")
}

/// Moves the cursor. The top left corner is `(1, 1)`.
pub fn position<W: Write>(out: &mut W, top: u16, left: u16) -> io::Result<()> {
    write!(out, "{CSI}{top};{left}H")
}

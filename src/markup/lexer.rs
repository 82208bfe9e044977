// src/markup/lexer.rs

//! Markup lexer.
//! Splits a markup string into `Token`s in a single forward pass, one token
//! at a time. Tokens borrow their text from the input, so concatenating the
//! text of every token reproduces the input exactly.

use log::trace;
use std::iter::Peekable;
use std::str::CharIndices;

// --- Delimiters ---
pub(crate) const OPEN_TAG: char = '<';
pub(crate) const CLOSE_TAG: char = '>';

/// Characters that split literal text into separate tokens.
/// Inside a tag they are ordinary content.
#[inline]
fn is_token_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Classification of a token, decided when the token is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A single space, tab, CR or LF outside of a tag.
    Whitespace,
    /// Text opened by an unescaped `<` and closed by an unescaped `>`.
    Tag,
    /// Everything else.
    Literal,
}

/// A slice of the input with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Token { kind, text }
    }

    pub fn is_tag(&self) -> bool {
        self.kind == TokenKind::Tag
    }
}

/// Lazy token stream over a markup string.
///
/// The pending buffer is always the contiguous range `start..` of the input
/// up to the current scan position, so it is tracked as an offset rather
/// than copied.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    start: usize,
    in_tag: bool,
    // A whitespace token found right after a flush; yielded on the next call.
    pending: Option<Token<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            input,
            chars: input.char_indices().peekable(),
            start: 0,
            in_tag: false,
            pending: None,
        }
    }

    /// Finalizes the buffer up to (not including) `end`.
    /// An empty buffer never yields a token.
    fn flush(&mut self, end: usize, kind: TokenKind) -> Option<Token<'a>> {
        if end <= self.start {
            return None;
        }
        let token = Token::new(kind, &self.input[self.start..end]);
        self.start = end;
        Some(token)
    }

    /// Consumes the next character if it repeats `delimiter`.
    /// A doubled delimiter is one literal character and stays in the buffer.
    fn take_escaped(&mut self, delimiter: char) -> bool {
        self.chars.next_if(|&(_, ch)| ch == delimiter).is_some()
    }

    fn scan(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }

        while let Some((idx, ch)) = self.chars.next() {
            match ch {
                OPEN_TAG | CLOSE_TAG if self.take_escaped(ch) => {}
                OPEN_TAG => {
                    // An unclosed tag in progress degrades to a literal.
                    let prior = self.flush(idx, TokenKind::Literal);
                    self.in_tag = true;
                    if prior.is_some() {
                        return prior;
                    }
                }
                CLOSE_TAG => {
                    let kind = if self.in_tag {
                        TokenKind::Tag
                    } else {
                        TokenKind::Literal
                    };
                    self.in_tag = false;
                    if let Some(token) = self.flush(idx + ch.len_utf8(), kind) {
                        return Some(token);
                    }
                }
                ws if is_token_whitespace(ws) && !self.in_tag => {
                    let end = idx + ws.len_utf8();
                    let prior = self.flush(idx, TokenKind::Literal);
                    let whitespace = self.flush(end, TokenKind::Whitespace);
                    match prior {
                        Some(token) => {
                            self.pending = whitespace;
                            return Some(token);
                        }
                        None => return whitespace,
                    }
                }
                _ => {}
            }
        }

        self.in_tag = false;
        self.flush(self.input.len(), TokenKind::Literal)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.scan();
        if let Some(token) = &token {
            trace!("lexed {:?}", token);
        }
        token
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Tokenizes `input`. The returned iterator is lazy; call again to restart.
pub fn tokenize(input: &str) -> Tokenizer<'_> {
    Tokenizer::new(input)
}

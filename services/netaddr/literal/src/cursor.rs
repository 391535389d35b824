//! Backtracking cursor over an immutable input buffer.
//!
//! Parsers never mutate the input. They advance a position index and, when an
//! attempt fails, put the index back where it was. A failed parse therefore
//! leaves [`Cursor::rest`] byte-for-byte identical to what it was before.

use crate::error::{Literal, ParseFailure, Reason};
use tracing::trace;

/// Read position into a string slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unread input
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Whether all input has been consumed
    pub fn is_at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    /// Next byte without consuming it
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consume `byte` if it is next
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a literal separator or fail without moving
    pub fn expect(&mut self, byte: u8, literal: Literal) -> Result<(), ParseFailure> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(ParseFailure::new(
                literal,
                self.pos,
                Reason::Expected(byte as char),
            ))
        }
    }

    /// Consume the longest run of bytes matching `class`.
    ///
    /// Classes only ever accept ASCII, so the returned slice always ends on a
    /// character boundary.
    pub fn take_while(&mut self, class: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        let len = self.input.as_bytes()[start..]
            .iter()
            .take_while(|&&b| b.is_ascii() && class(b))
            .count();
        self.pos += len;
        &self.input[start..self.pos]
    }

    /// Text consumed since `start`
    pub fn since(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Run `parse`, restoring the position if it fails.
    ///
    /// This is the only place a parser gives input back. Every parser in the
    /// crate wraps its body in `attempt`, so nested failures unwind to the
    /// outermost attempt that started them.
    pub fn attempt<T, E>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        let mark = self.pos;
        let result = parse(self);
        if result.is_err() {
            trace!(
                "backtracking {} bytes to offset {}",
                self.pos.saturating_sub(mark),
                mark
            );
            self.pos = mark;
        }
        result
    }

    /// Like [`attempt`](Self::attempt), also returning the matched text
    pub fn recognize<T, E>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<(T, &'a str), E> {
        let start = self.pos;
        let value = self.attempt(parse)?;
        Ok((value, self.since(start)))
    }

    /// Fail with [`Reason::Trailing`] unless all input is consumed
    pub fn finish(&self, literal: Literal) -> Result<(), ParseFailure> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(ParseFailure::new(literal, self.pos, Reason::Trailing))
        }
    }
}

/// Parse the whole of `input` with `parse`.
///
/// Fails if the parser fails or if any input is left over.
pub fn parse_all<'a, T>(
    input: &'a str,
    literal: Literal,
    parse: impl FnOnce(&mut Cursor<'a>) -> Result<T, ParseFailure>,
) -> Result<T, ParseFailure> {
    let mut cursor = Cursor::new(input);
    let value = parse(&mut cursor)?;
    cursor.finish(literal)?;
    Ok(value)
}

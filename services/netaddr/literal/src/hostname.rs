//! RFC 952 / RFC 1123 hostname parsing.

use crate::charset::{is_digit, is_label, is_label_regular};
use crate::cursor::Cursor;
use crate::error::{Literal, ParseFailure, Reason};

/// Longest allowed label
pub const MAX_LABEL_LENGTH: usize = 63;

/// Longest allowed hostname
pub const MAX_HOSTNAME_LENGTH: usize = 255;

/// Parse one hostname label.
///
/// The label starts and ends with an alphanumeric character, may contain
/// `-` in between and is not made of digits only.
pub fn label<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str, ParseFailure> {
    cursor.attempt(|c| {
        let start = c.position();
        let fail = |reason: Reason| -> Result<&'a str, ParseFailure> {
            Err(ParseFailure::new(Literal::Label, start, reason))
        };

        match c.peek() {
            None => return fail(Reason::Empty),
            Some(byte) if !is_label_regular(byte) => {
                return fail(if is_label(byte) {
                    Reason::Malformed
                } else {
                    Reason::Empty
                })
            }
            Some(_) => {}
        }

        let text = c.take_while(is_label);
        if text.len() > MAX_LABEL_LENGTH {
            return fail(Reason::TooLong);
        }
        if !text.bytes().last().is_some_and(is_label_regular) {
            return fail(Reason::Malformed);
        }
        if text.bytes().all(is_digit) {
            return fail(Reason::Malformed);
        }
        Ok(text)
    })
}

/// Parse a dot-joined hostname.
///
/// A dot must be followed by a valid label; otherwise the whole hostname,
/// leading labels included, is given back.
pub fn hostname<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str, ParseFailure> {
    cursor.attempt(|c| {
        let start = c.position();
        let as_hostname = |e: ParseFailure| ParseFailure {
            literal: Literal::Hostname,
            ..e
        };

        label(c).map_err(as_hostname)?;
        while c.eat(b'.') {
            label(c).map_err(as_hostname)?;
        }

        let text = c.since(start);
        if text.len() > MAX_HOSTNAME_LENGTH {
            return Err(ParseFailure::new(Literal::Hostname, start, Reason::TooLong));
        }
        Ok(text)
    })
}

//! Bounded unsigned decimal integers.

use crate::charset::is_digit;
use crate::cursor::Cursor;
use crate::error::{Literal, ParseFailure, Reason};
use crate::family::Family;
use std::ops::RangeInclusive;

/// Largest port number
pub const MAX_PORT: u32 = 65535;

/// Parse a decimal integer within `range`.
///
/// Digits are accumulated greedily; an empty run, an overflow or a value
/// outside `range` gives back exactly the digits consumed.
pub fn unsigned_in(
    cursor: &mut Cursor<'_>,
    literal: Literal,
    range: RangeInclusive<u32>,
) -> Result<u32, ParseFailure> {
    cursor.attempt(|c| {
        let start = c.position();
        let digits = c.take_while(is_digit);
        if digits.is_empty() {
            return Err(ParseFailure::new(literal, start, Reason::Empty));
        }
        let value = digits
            .bytes()
            .try_fold(0u32, |acc, b| {
                acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
            })
            .filter(|value| range.contains(value))
            .ok_or(ParseFailure::new(literal, start, Reason::OutOfRange))?;
        Ok(value)
    })
}

/// Parse a decimal integer within `MIN..=MAX`
pub fn bounded<const MIN: u32, const MAX: u32>(
    cursor: &mut Cursor<'_>,
    literal: Literal,
) -> Result<u32, ParseFailure> {
    unsigned_in(cursor, literal, MIN..=MAX)
}

/// Parse a port number
pub fn port(cursor: &mut Cursor<'_>) -> Result<u16, ParseFailure> {
    bounded::<0, MAX_PORT>(cursor, Literal::Port).map(|value| value as u16)
}

/// Parse a prefix length bounded by the width of family `F`
pub fn prefix_length<F: Family>(cursor: &mut Cursor<'_>) -> Result<u8, ParseFailure> {
    unsigned_in(
        cursor,
        Literal::PrefixLength,
        0..=u32::from(F::MAX_PREFIX_LENGTH),
    )
    .map(|value| value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::{V4, V6};

    #[test]
    fn test_port_bounds() {
        let mut cursor = Cursor::new("65535");
        assert_eq!(port(&mut cursor).unwrap(), 65535);

        let mut cursor = Cursor::new("0");
        assert_eq!(port(&mut cursor).unwrap(), 0);

        let mut cursor = Cursor::new("65536");
        let err = port(&mut cursor).unwrap_err();
        assert_eq!(err.reason, Reason::OutOfRange);
        assert_eq!(cursor.rest(), "65536");
    }

    #[test]
    fn test_overflow_is_out_of_range() {
        let mut cursor = Cursor::new("99999999999999999999");
        let err = port(&mut cursor).unwrap_err();
        assert_eq!(err.reason, Reason::OutOfRange);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_leaves_trailing_input() {
        let mut cursor = Cursor::new("8080/udp");
        assert_eq!(port(&mut cursor).unwrap(), 8080);
        assert_eq!(cursor.rest(), "/udp");
    }

    #[test]
    fn test_no_digits() {
        let mut cursor = Cursor::new("g12000");
        let err = port(&mut cursor).unwrap_err();
        assert_eq!(err.reason, Reason::Empty);
        assert_eq!(cursor.rest(), "g12000");
    }

    #[test]
    fn test_prefix_length_per_family() {
        let mut cursor = Cursor::new("32");
        assert_eq!(prefix_length::<V4>(&mut cursor).unwrap(), 32);

        let mut cursor = Cursor::new("33");
        assert!(prefix_length::<V4>(&mut cursor).is_err());
        assert_eq!(cursor.rest(), "33");

        let mut cursor = Cursor::new("128");
        assert_eq!(prefix_length::<V6>(&mut cursor).unwrap(), 128);

        let mut cursor = Cursor::new("129");
        assert!(prefix_length::<V6>(&mut cursor).is_err());
    }

    #[test]
    fn test_custom_bounds() {
        let mut cursor = Cursor::new("5");
        let err = bounded::<10, 20>(&mut cursor, Literal::Integer).unwrap_err();
        assert_eq!(err.literal, Literal::Integer);
        assert_eq!(err.reason, Reason::OutOfRange);

        let mut cursor = Cursor::new("15");
        assert_eq!(bounded::<10, 20>(&mut cursor, Literal::Integer).unwrap(), 15);
    }
}

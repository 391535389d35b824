//! Locale-independent character classes.
//!
//! Every predicate is a plain byte-range check so classification never
//! depends on the process locale and is safe to call from any thread.

/// Decimal digit
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Hexadecimal digit, either case
pub const fn is_hex_digit(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

/// Characters that may appear in an IPv4 literal
pub const fn is_ipv4(byte: u8) -> bool {
    is_digit(byte) || byte == b'.'
}

/// Characters that may appear in an IPv6 literal
pub const fn is_ipv6(byte: u8) -> bool {
    is_hex_digit(byte) || byte == b':'
}

/// Characters that may appear in an Ethernet literal
pub const fn is_ethernet(byte: u8) -> bool {
    is_hex_digit(byte) || byte == b':' || byte == b'-'
}

/// Regular hostname label character
pub const fn is_label_regular(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

/// Special hostname label character, never first or last in a label
pub const fn is_label_special(byte: u8) -> bool {
    byte == b'-'
}

/// Any hostname label character
pub const fn is_label(byte: u8) -> bool {
    is_label_regular(byte) || is_label_special(byte)
}

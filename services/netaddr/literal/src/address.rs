//! Address literal parsing and canonical formatting.

use crate::charset::{is_digit, is_hex_digit};
use crate::cursor::Cursor;
use crate::error::{ParseFailure, Reason};
use crate::family::Family;
use smallvec::SmallVec;
use std::fmt;

/// Parse an address of family `F` at the cursor.
///
/// Every character in the family's class is accumulated first and the whole
/// run is then converted. If the conversion fails the entire run is given
/// back, so `"9.0.f0.1"` leaves the cursor at `9` rather than after `9.0.`.
pub fn address<F: Family>(cursor: &mut Cursor<'_>) -> Result<F::Octets, ParseFailure> {
    cursor.attempt(|c| {
        let start = c.position();
        let text = c.take_while(F::is_member);
        if text.is_empty() {
            return Err(ParseFailure::new(F::LITERAL, start, Reason::Empty));
        }
        F::from_text(text).ok_or(ParseFailure::new(F::LITERAL, start, Reason::Malformed))
    })
}

/// Convert a dotted-quad to octets
pub fn ipv4_from_text(text: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut parts = text.split('.');
    for octet in octets.iter_mut() {
        *octet = decimal_octet(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(octets)
}

fn decimal_octet(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 3 || !part.bytes().all(is_digit) {
        return None;
    }
    // "0" is fine, "01" is not
    if part.len() > 1 && part.starts_with('0') {
        return None;
    }
    part.parse().ok()
}

/// Convert colon-separated hex groups to octets.
///
/// A single `::` stands for one or more zero groups.
pub fn ipv6_from_text(text: &str) -> Option<[u8; 16]> {
    let (head, tail) = match text.find("::") {
        Some(at) => {
            let tail = &text[at + 2..];
            if tail.contains("::") {
                return None;
            }
            (&text[..at], Some(tail))
        }
        None => (text, None),
    };

    let head = hex_groups(head)?;
    let mut groups = [0u16; 8];
    match tail {
        Some(tail) => {
            let tail = hex_groups(tail)?;
            if head.len() + tail.len() > 7 {
                return None;
            }
            groups[..head.len()].copy_from_slice(&head);
            groups[8 - tail.len()..].copy_from_slice(&tail);
        }
        None => {
            if head.len() != 8 {
                return None;
            }
            groups.copy_from_slice(&head);
        }
    }

    let mut octets = [0u8; 16];
    for (chunk, group) in octets.chunks_exact_mut(2).zip(groups) {
        chunk.copy_from_slice(&group.to_be_bytes());
    }
    Some(octets)
}

fn hex_groups(text: &str) -> Option<SmallVec<[u16; 8]>> {
    let mut groups = SmallVec::new();
    if text.is_empty() {
        return Some(groups);
    }
    for part in text.split(':') {
        if part.is_empty() || part.len() > 4 || groups.len() == 8 {
            return None;
        }
        if !part.bytes().all(is_hex_digit) {
            return None;
        }
        groups.push(u16::from_str_radix(part, 16).ok()?);
    }
    Some(groups)
}

/// Convert six two-digit hex groups to octets.
///
/// The separator may be `:` or `-` but must be the same throughout.
pub fn ethernet_from_text(text: &str) -> Option<[u8; 6]> {
    let separator = match text.as_bytes().get(2) {
        Some(b':') => ':',
        Some(b'-') => '-',
        _ => return None,
    };
    let mut octets = [0u8; 6];
    let mut parts = text.split(separator);
    for octet in octets.iter_mut() {
        let part = parts.next()?;
        if part.len() != 2 || !part.bytes().all(is_hex_digit) {
            return None;
        }
        *octet = u8::from_str_radix(part, 16).ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(octets)
}

/// Write `a.b.c.d`
pub fn write_ipv4(octets: &[u8; 4], out: &mut dyn fmt::Write) -> fmt::Result {
    write!(out, "{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

/// Write the RFC 5952 form: lowercase, no leading zeros, the longest run of
/// two or more zero groups (the first one on a tie) replaced by `::`.
pub fn write_ipv6(octets: &[u8; 16], out: &mut dyn fmt::Write) -> fmt::Result {
    let groups: [u16; 8] =
        std::array::from_fn(|i| u16::from_be_bytes([octets[2 * i], octets[2 * i + 1]]));

    let (mut best_start, mut best_len) = (0, 0);
    let (mut run_start, mut run_len) = (0, 0);
    for (i, &group) in groups.iter().enumerate() {
        if group == 0 {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len > best_len {
                best_start = run_start;
                best_len = run_len;
            }
        } else {
            run_len = 0;
        }
    }

    if best_len < 2 {
        return write_groups(&groups, out);
    }
    write_groups(&groups[..best_start], out)?;
    out.write_str("::")?;
    write_groups(&groups[best_start + best_len..], out)
}

fn write_groups(groups: &[u16], out: &mut dyn fmt::Write) -> fmt::Result {
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.write_char(':')?;
        }
        write!(out, "{:x}", group)?;
    }
    Ok(())
}

/// Write `aa:bb:cc:dd:ee:ff`
pub fn write_ethernet(octets: &[u8; 6], out: &mut dyn fmt::Write) -> fmt::Result {
    for (i, octet) in octets.iter().enumerate() {
        if i > 0 {
            out.write_char(':')?;
        }
        write!(out, "{:02x}", octet)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Literal;
    use crate::family::{Ethernet, V4, V6};

    fn v6_text(octets: &[u8; 16]) -> String {
        let mut out = String::new();
        write_ipv6(octets, &mut out).unwrap();
        out
    }

    #[test]
    fn test_ipv4_consumes_whole_literal() {
        let mut cursor = Cursor::new("9.0.0.1");
        assert_eq!(address::<V4>(&mut cursor).unwrap(), [9, 0, 0, 1]);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_ipv4_failure_restores_input() {
        let mut cursor = Cursor::new("9.0.f0.1");
        let err = address::<V4>(&mut cursor).unwrap_err();
        assert_eq!(err.literal, Literal::Ipv4);
        assert_eq!(err.reason, Reason::Malformed);
        assert_eq!(cursor.rest(), "9.0.f0.1");
    }

    #[test]
    fn test_ipv4_stops_at_foreign_character() {
        let mut cursor = Cursor::new("192.168.1.1:80");
        assert_eq!(address::<V4>(&mut cursor).unwrap(), [192, 168, 1, 1]);
        assert_eq!(cursor.rest(), ":80");
    }

    #[test]
    fn test_ipv4_rejects_malformed_quads() {
        for text in [
            "256.0.0.1",
            "1.2.3",
            "1.2.3.4.5",
            "1..3.4",
            "01.2.3.4",
            "1.2.3.4.",
            ".1.2.3.4",
            "1234.1.1.1",
        ] {
            assert_eq!(ipv4_from_text(text), None, "{}", text);
        }
        assert_eq!(ipv4_from_text("0.0.0.0"), Some([0, 0, 0, 0]));
        assert_eq!(ipv4_from_text("255.255.255.255"), Some([255; 4]));
    }

    #[test]
    fn test_empty_run_is_reported_as_empty() {
        let mut cursor = Cursor::new("host");
        let err = address::<V4>(&mut cursor).unwrap_err();
        assert_eq!(err.reason, Reason::Empty);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_ipv6_forms() {
        let loopback = ipv6_from_text("::1").unwrap();
        assert_eq!(loopback[15], 1);
        assert!(loopback[..15].iter().all(|&b| b == 0));

        assert_eq!(ipv6_from_text("::"), Some([0; 16]));

        let full = ipv6_from_text("2001:0db8:0000:0000:0000:ff00:0042:8329").unwrap();
        assert_eq!(full, ipv6_from_text("2001:db8::ff00:42:8329").unwrap());

        let trailing = ipv6_from_text("1:2:3:4:5:6:7::").unwrap();
        assert_eq!(&trailing[12..], &[0, 7, 0, 0]);
    }

    #[test]
    fn test_ipv6_rejects_malformed() {
        for text in [
            "1::2::3",
            ":::",
            "1:2:3:4:5:6:7:8:9",
            "1:2:3:4:5:6:7",
            "1:2:3:4::5:6:7:8",
            ":1:2:3:4:5:6:7",
            "1:2:3:4:5:6:7:",
            "12345::",
            "",
        ] {
            assert_eq!(ipv6_from_text(text), None, "{}", text);
        }
    }

    #[test]
    fn test_ipv6_failure_restores_input() {
        let mut cursor = Cursor::new("fe80:::1 rest");
        assert!(address::<V6>(&mut cursor).is_err());
        assert_eq!(cursor.rest(), "fe80:::1 rest");
    }

    #[test]
    fn test_ipv6_canonical_text() {
        assert_eq!(v6_text(&ipv6_from_text("::").unwrap()), "::");
        assert_eq!(v6_text(&ipv6_from_text("::1").unwrap()), "::1");
        assert_eq!(
            v6_text(&ipv6_from_text("2001:DB8:0:0:1:0:0:1").unwrap()),
            "2001:db8::1:0:0:1"
        );
        // a single zero group is never compressed
        assert_eq!(
            v6_text(&ipv6_from_text("2001:db8:0:1:1:1:1:1").unwrap()),
            "2001:db8:0:1:1:1:1:1"
        );
        // the longer run wins over the earlier one
        assert_eq!(
            v6_text(&ipv6_from_text("1:0:0:2:0:0:0:3").unwrap()),
            "1:0:0:2::3"
        );
        assert_eq!(v6_text(&ipv6_from_text("fe80::").unwrap()), "fe80::");
    }

    #[test]
    fn test_ethernet_forms() {
        let octets = [0x00, 0x1b, 0x44, 0x11, 0x3a, 0xb7];
        assert_eq!(ethernet_from_text("00:1B:44:11:3A:B7"), Some(octets));
        assert_eq!(ethernet_from_text("00-1b-44-11-3a-b7"), Some(octets));
        assert_eq!(ethernet_from_text("00:1b-44:11:3a:b7"), None);
        assert_eq!(ethernet_from_text("0:1b:44:11:3a:b7"), None);
        assert_eq!(ethernet_from_text("00:1b:44:11:3a"), None);

        let mut out = String::new();
        write_ethernet(&octets, &mut out).unwrap();
        assert_eq!(out, "00:1b:44:11:3a:b7");

        let mut cursor = Cursor::new("00:1b:44:11:3a:b7/24");
        assert_eq!(address::<Ethernet>(&mut cursor).unwrap(), octets);
        assert_eq!(cursor.rest(), "/24");
    }
}

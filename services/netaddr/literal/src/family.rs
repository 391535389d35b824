//! Address families.
//!
//! A family bundles the character class, width and text conversions for one
//! kind of address. Parsers and typed wrappers are generic over it and the
//! concrete family is picked at the call site.

use crate::address;
use crate::charset;
use crate::error::Literal;
use std::fmt;
use std::hash::Hash;

/// Per-family classifier, constants and conversions
pub trait Family:
    fmt::Debug
    + Clone
    + Copy
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Hash
    + Default
    + Send
    + Sync
    + 'static
{
    /// Raw big-endian address bytes
    type Octets: AsRef<[u8]>
        + AsMut<[u8]>
        + fmt::Debug
        + Clone
        + Copy
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash
        + Default
        + Send
        + Sync
        + 'static;

    /// Literal reported in failures
    const LITERAL: Literal;

    /// Address width in bytes
    const BYTE_WIDTH: usize;

    /// Largest valid prefix length, the address width in bits
    const MAX_PREFIX_LENGTH: u8 = (Self::BYTE_WIDTH * 8) as u8;

    /// Whether `byte` can appear in this family's literal
    fn is_member(byte: u8) -> bool;

    /// Convert an accumulated literal to octets
    fn from_text(text: &str) -> Option<Self::Octets>;

    /// Write the canonical text form
    fn write_text(octets: &Self::Octets, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// Families that carry ports and therefore form endpoints
pub trait IpFamily: Family {
    /// Whether the address must be bracketed in `address:port` form
    const BRACKETED: bool;
}

/// IPv4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct V4;

/// IPv6
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct V6;

/// Ethernet (MAC-48)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ethernet;

impl Family for V4 {
    type Octets = [u8; 4];
    const LITERAL: Literal = Literal::Ipv4;
    const BYTE_WIDTH: usize = 4;

    fn is_member(byte: u8) -> bool {
        charset::is_ipv4(byte)
    }

    fn from_text(text: &str) -> Option<Self::Octets> {
        address::ipv4_from_text(text)
    }

    fn write_text(octets: &Self::Octets, out: &mut dyn fmt::Write) -> fmt::Result {
        address::write_ipv4(octets, out)
    }
}

impl IpFamily for V4 {
    const BRACKETED: bool = false;
}

impl Family for V6 {
    type Octets = [u8; 16];
    const LITERAL: Literal = Literal::Ipv6;
    const BYTE_WIDTH: usize = 16;

    fn is_member(byte: u8) -> bool {
        charset::is_ipv6(byte)
    }

    fn from_text(text: &str) -> Option<Self::Octets> {
        address::ipv6_from_text(text)
    }

    fn write_text(octets: &Self::Octets, out: &mut dyn fmt::Write) -> fmt::Result {
        address::write_ipv6(octets, out)
    }
}

impl IpFamily for V6 {
    const BRACKETED: bool = true;
}

impl Family for Ethernet {
    type Octets = [u8; 6];
    const LITERAL: Literal = Literal::Ethernet;
    const BYTE_WIDTH: usize = 6;

    fn is_member(byte: u8) -> bool {
        charset::is_ethernet(byte)
    }

    fn from_text(text: &str) -> Option<Self::Octets> {
        address::ethernet_from_text(text)
    }

    fn write_text(octets: &Self::Octets, out: &mut dyn fmt::Write) -> fmt::Result {
        address::write_ethernet(octets, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_constants() {
        assert_eq!(V4::MAX_PREFIX_LENGTH, 32);
        assert_eq!(V6::MAX_PREFIX_LENGTH, 128);
        assert_eq!(Ethernet::MAX_PREFIX_LENGTH, 48);
        assert_eq!(<V4 as Family>::Octets::default().len(), V4::BYTE_WIDTH);
        assert_eq!(<V6 as Family>::Octets::default().len(), V6::BYTE_WIDTH);
        assert_eq!(<Ethernet as Family>::Octets::default().len(), Ethernet::BYTE_WIDTH);
    }

    #[test]
    fn test_bracket_rules() {
        assert!(!V4::BRACKETED);
        assert!(V6::BRACKETED);
    }
}

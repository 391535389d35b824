//! Either-family addresses and hosts.
//!
//! These try one literal after another at the same cursor position. Each
//! alternative that fails gives its input back, so the next one starts from
//! the same place. When all of them fail, the failure that got furthest into
//! the input is reported.

use bitflags::bitflags;
use netaddr_literal::{parse_all, Cursor, Literal, ParseFailure, Reason, V4, V6};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::address::Address;
use crate::hostname::Hostname;

bitflags! {
    /// Literal kinds a [`Host`] parse may accept
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Families: u8 {
        /// IPv4 address
        const V4 = 1 << 0;
        /// IPv6 address
        const V6 = 1 << 1;
        /// Hostname
        const NAME = 1 << 2;
        /// Either IP family
        const IP = Self::V4.bits() | Self::V6.bits();
    }
}

/// An IPv4 or IPv6 address. IPv4 addresses order before IPv6 ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IpAddress {
    /// IPv4
    V4(Address<V4>),
    /// IPv6
    V6(Address<V6>),
}

impl IpAddress {
    /// Parse an IPv4 address, or failing that an IPv6 address
    pub fn parse_from(cursor: &mut Cursor<'_>) -> Result<Self, ParseFailure> {
        Self::parse_with(cursor, Families::IP)
    }

    fn parse_with(cursor: &mut Cursor<'_>, families: Families) -> Result<Self, ParseFailure> {
        let start = cursor.position();
        let mut failure = ParseFailure::new(Literal::Host, start, Reason::Empty);

        if families.contains(Families::V4) {
            match Address::<V4>::parse_from(cursor) {
                Ok(address) => return Ok(Self::V4(address)),
                Err(e) => failure = failure.furthest(e),
            }
        }
        if families.contains(Families::V6) {
            match Address::<V6>::parse_from(cursor) {
                Ok(address) => return Ok(Self::V6(address)),
                Err(e) => failure = failure.furthest(e),
            }
        }
        Err(failure)
    }

    /// Whether this is an IPv4 address
    pub fn is_ipv4(&self) -> bool {
        matches!(self, Self::V4(_))
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(address) => fmt::Display::fmt(address, f),
            Self::V6(address) => fmt::Display::fmt(address, f),
        }
    }
}

impl FromStr for IpAddress {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_all(s, Literal::Host, Self::parse_from)
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(addr) => Self::V4(addr.into()),
            IpAddr::V6(addr) => Self::V6(addr.into()),
        }
    }
}

impl From<IpAddress> for IpAddr {
    fn from(addr: IpAddress) -> Self {
        match addr {
            IpAddress::V4(addr) => IpAddr::V4(addr.into()),
            IpAddress::V6(addr) => IpAddr::V6(addr.into()),
        }
    }
}

serde_via_text!(IpAddress);

/// An address or a hostname
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Host {
    /// Literal address
    Address(IpAddress),
    /// Name to be resolved elsewhere
    Name(Hostname),
}

impl Host {
    /// Parse any host
    pub fn parse_from(cursor: &mut Cursor<'_>) -> Result<Self, ParseFailure> {
        Self::parse_with(cursor, Families::all())
    }

    /// Parse a host of the kinds in `families`, addresses tried first
    pub fn parse_with(cursor: &mut Cursor<'_>, families: Families) -> Result<Self, ParseFailure> {
        let start = cursor.position();
        let mut failure = ParseFailure::new(Literal::Host, start, Reason::Empty);

        if families.intersects(Families::IP) {
            match IpAddress::parse_with(cursor, families) {
                Ok(address) => return Ok(Self::Address(address)),
                Err(e) => failure = failure.furthest(e),
            }
        }
        if families.contains(Families::NAME) {
            match Hostname::parse_from(cursor) {
                Ok(name) => return Ok(Self::Name(name)),
                Err(e) => failure = failure.furthest(e),
            }
        }
        Err(failure)
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => fmt::Display::fmt(address, f),
            Self::Name(name) => fmt::Display::fmt(name, f),
        }
    }
}

impl FromStr for Host {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_all(s, Literal::Host, Self::parse_from)
    }
}

serde_via_text!(Host);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_address_picks_family() {
        assert!("9.0.0.1".parse::<IpAddress>().unwrap().is_ipv4());
        assert!(!"::ffff:1".parse::<IpAddress>().unwrap().is_ipv4());
        assert!("9.0.0".parse::<IpAddress>().is_err());
    }

    #[test]
    fn test_ip_address_orders_v4_first() {
        let v4: IpAddress = "255.255.255.255".parse().unwrap();
        let v6: IpAddress = "::".parse().unwrap();
        assert!(v4 < v6);
    }

    #[test]
    fn test_host_alternatives_share_start() {
        // "deadbeef" looks like IPv6 until conversion fails, then is a name
        let host: Host = "deadbeef.example".parse().unwrap();
        assert_eq!(host, Host::Name("deadbeef.example".parse().unwrap()));

        let host: Host = "10.1.2.3".parse().unwrap();
        assert!(matches!(host, Host::Address(IpAddress::V4(_))));

        let host: Host = "fe80::1".parse().unwrap();
        assert!(matches!(host, Host::Address(IpAddress::V6(_))));
    }

    #[test]
    fn test_host_respects_families() {
        let mut cursor = Cursor::new("example.com");
        assert!(Host::parse_with(&mut cursor, Families::IP).is_err());
        assert_eq!(cursor.position(), 0);

        let mut cursor = Cursor::new("10.0.0.1");
        let err = Host::parse_with(&mut cursor, Families::NAME).unwrap_err();
        assert_eq!(err.literal, Literal::Hostname);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_host_reports_furthest_failure() {
        let err = "a.b.".parse::<Host>().unwrap_err();
        assert_eq!(err.literal, Literal::Hostname);
        assert_eq!(err.offset, 4);

        let err = "deadbeef.ex-".parse::<Host>().unwrap_err();
        assert_eq!(err.literal, Literal::Hostname);

        // every alternative fails at the start; the first one tried is kept
        let err = "10.0.0.256".parse::<Host>().unwrap_err();
        assert_eq!(err.literal, Literal::Ipv4);
        assert_eq!(err.reason, Reason::Malformed);
    }

    #[test]
    fn test_ip_address_reports_furthest_failure() {
        let err = "9.0.0".parse::<IpAddress>().unwrap_err();
        assert_eq!(err.literal, Literal::Ipv4);
        assert_eq!(err.reason, Reason::Malformed);

        let err = "fe80:::1".parse::<IpAddress>().unwrap_err();
        assert_eq!(err.literal, Literal::Ipv6);
    }

    #[test]
    fn test_host_stream_stops_at_port() {
        let mut cursor = Cursor::new("db.internal:5432");
        let host = Host::parse_from(&mut cursor).unwrap();
        assert_eq!(host.to_string(), "db.internal");
        assert_eq!(cursor.rest(), ":5432");
    }

    #[test]
    fn test_std_interop() {
        let addr: IpAddr = "2001:db8::1".parse().unwrap();
        let ours = IpAddress::from(addr);
        assert_eq!(ours.to_string(), "2001:db8::1");
        assert_eq!(IpAddr::from(ours), addr);
    }
}

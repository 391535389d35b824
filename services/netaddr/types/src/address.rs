//! Typed addresses.

use netaddr_literal::{cidr, parse_all, Cursor, Ethernet, Family, ParseFailure, V4, V6};
use std::fmt;
use std::marker::PhantomData;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::prefix::PrefixLength;

/// An address of family `F`.
///
/// Ordering is the numeric (big-endian) order of the octets.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address<F: Family> {
    octets: F::Octets,
    family: PhantomData<F>,
}

/// IPv4 address
pub type Ipv4Address = Address<V4>;
/// IPv6 address
pub type Ipv6Address = Address<V6>;
/// Ethernet address
pub type EthernetAddress = Address<Ethernet>;

impl<F: Family> Address<F> {
    /// Create an address from raw octets
    pub const fn new(octets: F::Octets) -> Self {
        Self {
            octets,
            family: PhantomData,
        }
    }

    /// Raw octets
    pub fn octets(&self) -> F::Octets {
        self.octets
    }

    /// Octets as a slice
    pub fn as_bytes(&self) -> &[u8] {
        self.octets.as_ref()
    }

    /// Parse an address at the cursor, leaving it untouched on failure
    pub fn parse_from(cursor: &mut Cursor<'_>) -> Result<Self, ParseFailure> {
        netaddr_literal::address::<F>(cursor).map(Self::new)
    }

    /// This address with all host bits cleared
    pub fn network(&self, prefix: PrefixLength<F>) -> Self {
        let mut octets = self.octets;
        cidr::network_address(octets.as_mut(), prefix.get());
        Self::new(octets)
    }

    /// This address with all host bits set
    pub fn broadcast(&self, prefix: PrefixLength<F>) -> Self {
        let mut octets = self.octets;
        cidr::broadcast_address(octets.as_mut(), prefix.get());
        Self::new(octets)
    }

    /// The next address, or `None` past the all-ones address
    pub fn successor(&self) -> Option<Self> {
        let mut octets = self.octets;
        cidr::increment(octets.as_mut()).then(|| Self::new(octets))
    }
}

impl<F: Family> fmt::Display for Address<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        F::write_text(&self.octets, f)
    }
}

impl<F: Family> fmt::Debug for Address<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl<F: Family> FromStr for Address<F> {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_all(s, F::LITERAL, Self::parse_from)
    }
}

serde_via_text!(Address<F: Family>);

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(addr.octets())
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.octets())
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr.octets())
    }
}

impl From<Ipv6Address> for Ipv6Addr {
    fn from(addr: Ipv6Address) -> Self {
        Ipv6Addr::from(addr.octets())
    }
}

//! Typed `address/prefix` routes.

use netaddr_literal::{
    cidr, parse_all, route, Cursor, Ethernet, Family, Literal, ParseFailure, V4, V6,
};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::address::Address;
use crate::hosts::Hosts;
use crate::prefix::PrefixLength;

/// A network: an address with host bits cleared and its prefix length.
///
/// Routes order more specific (longer prefix) first, then by address, which
/// is the order a longest-prefix match wants to scan them in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Route<F: Family> {
    address: Address<F>,
    prefix: PrefixLength<F>,
}

/// IPv4 route
pub type Ipv4Route = Route<V4>;
/// IPv6 route
pub type Ipv6Route = Route<V6>;
/// Ethernet prefix (e.g. an OUI block)
pub type EthernetRoute = Route<Ethernet>;

impl<F: Family> Route<F> {
    /// Create a route, clearing the host bits of `address`
    pub fn new(address: Address<F>, prefix: PrefixLength<F>) -> Self {
        Self {
            address: address.network(prefix),
            prefix,
        }
    }

    /// Network address
    pub fn address(&self) -> Address<F> {
        self.address
    }

    /// Prefix length
    pub fn prefix_length(&self) -> PrefixLength<F> {
        self.prefix
    }

    /// Highest address in the network
    pub fn broadcast(&self) -> Address<F> {
        self.address.broadcast(self.prefix)
    }

    /// Whether `address` lies inside this network
    pub fn contains(&self, address: &Address<F>) -> bool {
        cidr::same_network(address.as_bytes(), self.address.as_bytes(), self.prefix.get())
    }

    /// Host addresses, network and broadcast excluded
    pub fn hosts(&self) -> Hosts<F> {
        Hosts::new(self.address, self.broadcast())
    }

    /// Parse a route at the cursor, leaving it untouched on failure
    pub fn parse_from(cursor: &mut Cursor<'_>) -> Result<Self, ParseFailure> {
        let (octets, len) = route::<F>(cursor)?;
        Ok(Self::new(Address::new(octets), PrefixLength::from_parsed(len)))
    }
}

impl<F: Family> Ord for Route<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .prefix
            .cmp(&self.prefix)
            .then_with(|| self.address.cmp(&other.address))
    }
}

impl<F: Family> PartialOrd for Route<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Family> fmt::Display for Route<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

impl<F: Family> fmt::Debug for Route<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route({})", self)
    }
}

impl<F: Family> FromStr for Route<F> {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_all(s, Literal::Route, Self::parse_from)
    }
}

serde_via_text!(Route<F: Family>);

//! Typed `address:port` endpoints.

use netaddr_literal::{endpoint, parse_all, Cursor, IpFamily, Literal, ParseFailure, V4, V6};
use std::fmt;
use std::net::{SocketAddr, SocketAddrV4, SocketAddrV6};
use std::str::FromStr;

use crate::address::Address;

/// An address and a port. Ordered by address, then port.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Endpoint<F: IpFamily> {
    address: Address<F>,
    port: u16,
}

/// IPv4 endpoint
pub type Ipv4Endpoint = Endpoint<V4>;
/// IPv6 endpoint
pub type Ipv6Endpoint = Endpoint<V6>;

impl<F: IpFamily> Endpoint<F> {
    /// Create an endpoint
    pub fn new(address: Address<F>, port: u16) -> Self {
        Self { address, port }
    }

    /// Address part
    pub fn address(&self) -> Address<F> {
        self.address
    }

    /// Port part
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Parse an endpoint at the cursor, leaving it untouched on failure
    pub fn parse_from(cursor: &mut Cursor<'_>) -> Result<Self, ParseFailure> {
        endpoint::<F>(cursor).map(|(octets, port)| Self::new(Address::new(octets), port))
    }
}

impl<F: IpFamily> fmt::Display for Endpoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if F::BRACKETED {
            write!(f, "[{}]:{}", self.address, self.port)
        } else {
            write!(f, "{}:{}", self.address, self.port)
        }
    }
}

impl<F: IpFamily> fmt::Debug for Endpoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Endpoint({})", self)
    }
}

impl<F: IpFamily> FromStr for Endpoint<F> {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_all(s, Literal::Endpoint, Self::parse_from)
    }
}

serde_via_text!(Endpoint<F: IpFamily>);

impl From<SocketAddrV4> for Ipv4Endpoint {
    fn from(addr: SocketAddrV4) -> Self {
        Self::new((*addr.ip()).into(), addr.port())
    }
}

impl From<Ipv4Endpoint> for SocketAddrV4 {
    fn from(endpoint: Ipv4Endpoint) -> Self {
        SocketAddrV4::new(endpoint.address.into(), endpoint.port)
    }
}

impl From<SocketAddrV6> for Ipv6Endpoint {
    fn from(addr: SocketAddrV6) -> Self {
        Self::new((*addr.ip()).into(), addr.port())
    }
}

impl From<Ipv6Endpoint> for SocketAddrV6 {
    fn from(endpoint: Ipv6Endpoint) -> Self {
        SocketAddrV6::new(endpoint.address.into(), endpoint.port, 0, 0)
    }
}

impl From<Ipv4Endpoint> for SocketAddr {
    fn from(endpoint: Ipv4Endpoint) -> Self {
        SocketAddr::V4(endpoint.into())
    }
}

impl From<Ipv6Endpoint> for SocketAddr {
    fn from(endpoint: Ipv6Endpoint) -> Self {
        SocketAddr::V6(endpoint.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4_endpoint() {
        let endpoint: Ipv4Endpoint = "9.0.0.1:12000".parse().unwrap();
        assert_eq!(endpoint.address().octets(), [9, 0, 0, 1]);
        assert_eq!(endpoint.port(), 12000);
        assert_eq!(endpoint.to_string(), "9.0.0.1:12000");
    }

    #[test]
    fn test_parse_failure_gives_back_address() {
        let mut cursor = Cursor::new("9.0.0.1:g12000");
        assert!(Ipv4Endpoint::parse_from(&mut cursor).is_err());
        assert_eq!(cursor.rest(), "9.0.0.1:g12000");
    }

    #[test]
    fn test_ipv6_endpoint_is_bracketed() {
        let endpoint: Ipv6Endpoint = "[2001:DB8::1]:8443".parse().unwrap();
        assert_eq!(endpoint.to_string(), "[2001:db8::1]:8443");
        assert!("2001:db8::1:8443".parse::<Ipv6Endpoint>().is_err());
    }

    #[test]
    fn test_ordering_is_address_then_port() {
        let mut endpoints: Vec<Ipv4Endpoint> = ["10.0.0.2:80", "10.0.0.1:443", "10.0.0.1:80"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        endpoints.sort();
        let sorted: Vec<String> = endpoints.iter().map(|e| e.to_string()).collect();
        assert_eq!(sorted, ["10.0.0.1:80", "10.0.0.1:443", "10.0.0.2:80"]);
    }

    #[test]
    fn test_socket_addr_interop() {
        let endpoint: Ipv4Endpoint = "127.0.0.1:8080".parse().unwrap();
        let socket: SocketAddr = endpoint.into();
        assert_eq!(socket, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());

        let endpoint: Ipv6Endpoint = "[::1]:53".parse().unwrap();
        let socket = SocketAddrV6::from(endpoint);
        assert_eq!(Ipv6Endpoint::from(socket), endpoint);
    }
}

//! Host address enumeration.

use netaddr_literal::Family;
use std::iter::FusedIterator;

use crate::address::Address;

/// Iterator over the host addresses of a network.
///
/// Yields `network + 1` up to, but not including, `broadcast`. Networks with
/// fewer than two host bits (`/31`, `/32`, `/127`, `/128`) have no host
/// addresses under this rule and yield nothing. Iteration never wraps past
/// the all-ones address.
#[derive(Debug, Clone)]
pub struct Hosts<F: Family> {
    next: Option<Address<F>>,
    end: Address<F>,
}

impl<F: Family> Hosts<F> {
    /// Hosts strictly between `network` and `broadcast`
    pub fn new(network: Address<F>, broadcast: Address<F>) -> Self {
        Self {
            next: network.successor(),
            end: broadcast,
        }
    }

    /// First host, if any
    pub fn first(&self) -> Option<Address<F>> {
        self.next.filter(|next| *next < self.end)
    }

    /// Exclusive upper bound
    pub fn end(&self) -> Address<F> {
        self.end
    }
}

impl<F: Family> Iterator for Hosts<F> {
    type Item = Address<F>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.first()?;
        self.next = current.successor();
        Some(current)
    }
}

impl<F: Family> FusedIterator for Hosts<F> {}

#[cfg(test)]
mod tests {
    use crate::route::{Ipv4Route, Ipv6Route};

    fn hosts(route: &str) -> Vec<String> {
        route
            .parse::<Ipv4Route>()
            .unwrap()
            .hosts()
            .map(|a| a.to_string())
            .collect()
    }

    #[test]
    fn test_small_network() {
        assert_eq!(hosts("10.0.0.0/30"), ["10.0.0.1", "10.0.0.2"]);
        assert_eq!(
            hosts("192.168.1.8/29"),
            [
                "192.168.1.9",
                "192.168.1.10",
                "192.168.1.11",
                "192.168.1.12",
                "192.168.1.13",
                "192.168.1.14"
            ]
        );
    }

    #[test]
    fn test_carry_across_octets() {
        let route: Ipv4Route = "10.0.0.0/23".parse().unwrap();
        let all: Vec<_> = route.hosts().collect();
        assert_eq!(all.len(), 510);
        assert_eq!(all[254].to_string(), "10.0.0.255");
        assert_eq!(all[255].to_string(), "10.0.1.0");
        assert_eq!(all.last().unwrap().to_string(), "10.0.1.254");
    }

    #[test]
    fn test_degenerate_prefixes_are_empty() {
        assert!(hosts("10.0.0.0/31").is_empty());
        assert!(hosts("10.0.0.7/32").is_empty());
        assert!(hosts("255.255.255.255/32").is_empty());
        assert!(hosts("255.255.255.254/31").is_empty());

        let route: Ipv6Route = "2001:db8::1/128".parse().unwrap();
        assert_eq!(route.hosts().count(), 0);
        let route: Ipv6Route = "2001:db8::/127".parse().unwrap();
        assert_eq!(route.hosts().count(), 0);
    }

    #[test]
    fn test_whole_space_is_bounded() {
        let route: Ipv4Route = "0.0.0.0/0".parse().unwrap();
        let mut hosts = route.hosts();
        assert_eq!(hosts.next().unwrap().to_string(), "0.0.0.1");
        assert_eq!(hosts.end().to_string(), "255.255.255.255");

        let route: Ipv6Route = "::/0".parse().unwrap();
        let first: Vec<String> = route.hosts().take(2).map(|a| a.to_string()).collect();
        assert_eq!(first, ["::1", "::2"]);
    }

    #[test]
    fn test_fused_after_end() {
        let route: Ipv4Route = "10.0.0.0/30".parse().unwrap();
        let mut hosts = route.hosts();
        assert!(hosts.by_ref().count() == 2);
        assert_eq!(hosts.next(), None);
        assert_eq!(hosts.next(), None);
    }
}

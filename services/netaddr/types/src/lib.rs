//! Typed addresses, prefix lengths, endpoints, routes and route tables for netaddr.
//!
//! Every value here wraps the raw output of a `netaddr-literal` parser and
//! derives equality, ordering and display from it. Values only come from a
//! successful parse or an explicit constructor and never change afterwards.
//!
//! For every value `v`, `v.to_string().parse()` gives back `v`.
//!
//! ## Ordering
//!
//! - [`Address`]: numeric
//! - [`Endpoint`]: address, then port
//! - [`Route`]: prefix length descending, then address
//!
//! ## Example
//!
//! ```
//! use netaddr_types::{Ipv4Endpoint, Ipv4Route};
//!
//! let route: Ipv4Route = "10.0.0.5/24".parse().unwrap();
//! assert_eq!(route.to_string(), "10.0.0.0/24");
//!
//! let endpoint: Ipv4Endpoint = "9.0.0.1:12000".parse().unwrap();
//! assert_eq!(endpoint.port(), 12000);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Implement serde for a type through its `Display` and `FromStr` forms
macro_rules! serde_via_text {
    ($ty:ident < F : $bound:ident >) => {
        impl<F: netaddr_literal::$bound> serde::Serialize for $ty<F> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de, F: netaddr_literal::$bound> serde::Deserialize<'de> for $ty<F> {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
    ($ty:ident) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod address;
pub mod endpoint;
pub mod error;
pub mod host;
pub mod hostname;
pub mod hosts;
pub mod prefix;
pub mod route;
pub mod table;

// Re-export main types
pub use address::{Address, EthernetAddress, Ipv4Address, Ipv6Address};
pub use endpoint::{Endpoint, Ipv4Endpoint, Ipv6Endpoint};
pub use error::AddrError;
pub use host::{Families, Host, IpAddress};
pub use hostname::Hostname;
pub use hosts::Hosts;
pub use prefix::PrefixLength;
pub use route::{EthernetRoute, Ipv4Route, Ipv6Route, Route};
pub use table::RouteTable;

pub use netaddr_literal::{Ethernet, Family, IpFamily, Literal, ParseFailure, Reason, V4, V6};

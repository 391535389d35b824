//! Network literal lexing and CIDR octet arithmetic for netaddr.
//!
//! This crate turns text into raw address octets, port numbers and prefix
//! lengths. Parsers work on a [`Cursor`] and never leave a trace on failure:
//! the cursor is put back exactly where the attempt started, so callers can
//! try one alternative after another.
//!
//! ## Literals
//!
//! ```text
//! IPv4      9.0.0.1
//! IPv6      2001:db8::1
//! Ethernet  00:1b:44:11:3a:b7
//! Hostname  this.is.my.host
//! Endpoint  9.0.0.1:12000   [2001:db8::1]:443
//! Route     10.0.0.0/24     2001:db8::/32
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod charset;
pub mod cidr;
pub mod composite;
pub mod cursor;
pub mod error;
pub mod family;
pub mod hostname;
pub mod number;

// Re-export main types
pub use address::address;
pub use composite::{endpoint, route};
pub use cursor::{parse_all, Cursor};
pub use error::{Literal, ParseFailure, Reason};
pub use family::{Ethernet, Family, IpFamily, V4, V6};
pub use hostname::{hostname, label, MAX_HOSTNAME_LENGTH, MAX_LABEL_LENGTH};
pub use number::{bounded, port, prefix_length, unsigned_in, MAX_PORT};

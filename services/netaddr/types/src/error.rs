//! Value construction error types.

use netaddr_literal::Literal;
use thiserror::Error;

/// Errors from explicit value constructors.
///
/// Text input fails with [`netaddr_literal::ParseFailure`] instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrError {
    /// Prefix length wider than the address
    #[error("prefix length {len} exceeds {max} for {family}")]
    PrefixLength {
        /// Requested length
        len: u8,
        /// Address width in bits
        max: u8,
        /// Address family
        family: Literal,
    },
}

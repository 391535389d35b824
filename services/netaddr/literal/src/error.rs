//! Literal parsing error types.

use std::fmt;
use thiserror::Error;

/// Kind of literal a parser was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Dotted-quad IPv4 address
    Ipv4,
    /// Colon-separated IPv6 address
    Ipv6,
    /// Six-octet Ethernet (MAC) address
    Ethernet,
    /// Single hostname label
    Label,
    /// Dot-joined hostname
    Hostname,
    /// Unsigned decimal integer
    Integer,
    /// Port number
    Port,
    /// Prefix length
    PrefixLength,
    /// `address:port` endpoint
    Endpoint,
    /// `address/prefix` route
    Route,
    /// Address of any family, or a hostname
    Host,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Literal::Ipv4 => "IPv4 address",
            Literal::Ipv6 => "IPv6 address",
            Literal::Ethernet => "Ethernet address",
            Literal::Label => "hostname label",
            Literal::Hostname => "hostname",
            Literal::Integer => "integer",
            Literal::Port => "port number",
            Literal::PrefixLength => "prefix length",
            Literal::Endpoint => "endpoint",
            Literal::Route => "route",
            Literal::Host => "host",
        };
        f.write_str(name)
    }
}

/// Why a literal did not match
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// No character of the literal's class at the cursor
    #[error("nothing to parse")]
    Empty,

    /// Characters matched but do not form a valid literal
    #[error("malformed literal")]
    Malformed,

    /// Numeric value outside the allowed range
    #[error("value out of range")]
    OutOfRange,

    /// Label or hostname longer than allowed
    #[error("literal too long")]
    TooLong,

    /// A separator or delimiter is missing
    #[error("expected '{0}'")]
    Expected(char),

    /// The literal matched but input remains
    #[error("unexpected trailing input")]
    Trailing,
}

/// The single failure kind of every parser in this crate.
///
/// `offset` is the byte position the failing attempt started at (or, for
/// [`Reason::Trailing`], the first unconsumed byte).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("invalid {literal} at offset {offset}: {reason}")]
pub struct ParseFailure {
    /// Literal being parsed
    pub literal: Literal,
    /// Byte offset into the input
    pub offset: usize,
    /// Failure reason
    pub reason: Reason,
}

impl ParseFailure {
    /// Create a new failure
    pub fn new(literal: Literal, offset: usize, reason: Reason) -> Self {
        Self {
            literal,
            offset,
            reason,
        }
    }

    /// Of two failed alternatives, the one that got further into the input.
    ///
    /// A larger offset wins; at equal offsets [`Reason::Empty`] loses to any
    /// other reason. Ties keep `self`.
    pub fn furthest(self, other: Self) -> Self {
        let rank = |failure: &Self| (failure.offset, failure.reason != Reason::Empty);
        if rank(&other) > rank(&self) {
            other
        } else {
            self
        }
    }
}

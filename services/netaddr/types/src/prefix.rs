//! Typed prefix lengths.

use netaddr_literal::{parse_all, prefix_length, Cursor, Family, Literal, ParseFailure};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::AddrError;

/// Prefix length in `0..=F::MAX_PREFIX_LENGTH`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PrefixLength<F: Family> {
    len: u8,
    family: PhantomData<F>,
}

impl<F: Family> PrefixLength<F> {
    /// Host route length, the full address width
    pub const MAX: Self = Self {
        len: F::MAX_PREFIX_LENGTH,
        family: PhantomData,
    };

    /// Create a prefix length, rejecting values wider than the address
    pub fn new(len: u8) -> Result<Self, AddrError> {
        if len > F::MAX_PREFIX_LENGTH {
            return Err(AddrError::PrefixLength {
                len,
                max: F::MAX_PREFIX_LENGTH,
                family: F::LITERAL,
            });
        }
        Ok(Self {
            len,
            family: PhantomData,
        })
    }

    /// Number of network bits
    pub fn get(&self) -> u8 {
        self.len
    }

    /// Number of host bits
    pub fn host_bits(&self) -> u8 {
        F::MAX_PREFIX_LENGTH - self.len
    }

    /// Wrap a length the literal parser already bounded by the family width
    pub(crate) fn from_parsed(len: u8) -> Self {
        debug_assert!(len <= F::MAX_PREFIX_LENGTH);
        Self {
            len,
            family: PhantomData,
        }
    }

    /// Parse a prefix length at the cursor
    pub fn parse_from(cursor: &mut Cursor<'_>) -> Result<Self, ParseFailure> {
        prefix_length::<F>(cursor).map(Self::from_parsed)
    }
}

impl<F: Family> fmt::Display for PrefixLength<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.len)
    }
}

impl<F: Family> fmt::Debug for PrefixLength<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrefixLength({})", self.len)
    }
}

impl<F: Family> FromStr for PrefixLength<F> {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_all(s, Literal::PrefixLength, Self::parse_from)
    }
}

serde_via_text!(PrefixLength<F: Family>);

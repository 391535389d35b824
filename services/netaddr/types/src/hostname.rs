//! Validated hostnames.

use netaddr_literal::{hostname, parse_all, Cursor, Literal, ParseFailure};
use std::fmt;
use std::str::FromStr;

/// A hostname of one or more RFC 1123 labels.
///
/// Compared as written; no case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hostname(String);

impl Hostname {
    /// Parse a hostname at the cursor, leaving it untouched on failure
    pub fn parse_from(cursor: &mut Cursor<'_>) -> Result<Self, ParseFailure> {
        hostname(cursor).map(|text| Self(text.to_string()))
    }

    /// Labels from left to right
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Hostname {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_all(s, Literal::Hostname, Self::parse_from)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

serde_via_text!(Hostname);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let name: Hostname = "this.is.my.host".parse().unwrap();
        assert_eq!(name.labels().collect::<Vec<_>>(), ["this", "is", "my", "host"]);
        assert_eq!(name.to_string(), "this.is.my.host");
        assert_eq!(name.as_ref(), "this.is.my.host");
    }

    #[test]
    fn test_trailing_dot_fails() {
        assert!("this.is.my.".parse::<Hostname>().is_err());

        let mut cursor = Cursor::new("this.is.my.");
        assert!(Hostname::parse_from(&mut cursor).is_err());
        assert_eq!(cursor.rest(), "this.is.my.");
    }

    #[test]
    fn test_rejects_bad_labels() {
        for text in ["-lead.example", "trail-.example", "under_score", "1.2.3.4", ""] {
            assert!(text.parse::<Hostname>().is_err(), "{}", text);
        }
    }
}

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GuardError, Result};

/// A domain name in canonical reversed form.
///
/// The canonical form lists labels from the top level down, each followed by
/// a dot: `"mail.google.com"` becomes `"com.google.mail."`. In this form the
/// sub-domain relation is a literal prefix test, and lexicographic order
/// groups every domain with its ancestors and descendants, which is what
/// [`DomainIndex`](crate::DomainIndex) relies on for its sorted-search lookup.
///
/// A single trailing dot and a single leading dot in the input are ignored, so
/// `"host"`, `"host."`, `".host"`, and `".host."` all canonicalize to
/// `"host."`. Interior empty labels (`"a..b"`) are preserved as empty labels.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Domain {
    reversed: String,
}

impl Domain {
    /// Parse a raw domain name into canonical form.
    ///
    /// Total for any non-empty input, including degenerate names made only of
    /// separators. Fails with [`GuardError::EmptyDomain`] on an empty string.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(GuardError::EmptyDomain);
        }

        let name = raw.strip_suffix('.').unwrap_or(raw);
        let name = name.strip_prefix('.').unwrap_or(name);

        let mut reversed = String::with_capacity(name.len() + 1);
        for label in name.rsplit('.') {
            reversed.push_str(label);
            reversed.push('.');
        }

        Ok(Self { reversed })
    }

    /// The canonical reversed-name string, always non-empty and dot-terminated.
    pub fn reversed_name(&self) -> &str {
        &self.reversed
    }

    /// Check whether this domain equals `other` or lies anywhere under it.
    ///
    /// Reflexive: every domain is a sub-domain of itself. Because each label
    /// in the canonical form carries its own terminating dot, mere suffix
    /// similarity never matches: `"as.ds"` is not a sub-domain of `"ds"`.
    pub fn is_subdomain_of(&self, other: &Domain) -> bool {
        self.reversed.starts_with(&other.reversed)
    }
}

impl FromStr for Domain {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Domain {
    /// Renders the name in natural label order, without a trailing dot.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trimmed = self.reversed.strip_suffix('.').unwrap_or(&self.reversed);
        let mut labels = trimmed.rsplit('.');
        if let Some(first) = labels.next() {
            f.write_str(first)?;
        }
        for label in labels {
            write!(f, ".{}", label)?;
        }
        Ok(())
    }
}

impl Serialize for Domain {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Domain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Domain::parse(&raw).map_err(D::Error::custom)
    }
}

//! Domain Guard - A forbidden-domain blocklist engine for Rust
//!
//! This library decides whether domain names fall under a blocklist of
//! forbidden domains, where "under" means the domain itself or any of its
//! sub-domains. It provides:
//! - Canonical reversed-name representation of domains
//! - Minimal covering set construction (nested entries collapse into their
//!   ancestor)
//! - O(log n) verdicts via ordered search over the minimized set
//! - A line-based blocklist parser with comments and file includes
//!
//! # Example
//!
//! ```rust
//! use domain_guard::{parse_domains, Domain, DomainIndex};
//!
//! let blocklist = "
//! gdz.ru
//! maps.me
//! m.gdz.ru    # already covered by gdz.ru
//! com
//! ";
//!
//! // Parse the blocklist
//! let forbidden = parse_domains(blocklist).unwrap();
//!
//! // Build the index (sorts and minimizes)
//! let index = DomainIndex::build(forbidden);
//! assert_eq!(index.len(), 3); // m.gdz.ru collapsed into gdz.ru
//!
//! // Query candidates
//! assert!(index.is_forbidden(&Domain::parse("alg.m.gdz.ru").unwrap()));
//! assert!(index.is_forbidden(&Domain::parse("maps.com").unwrap()));
//! assert!(!index.is_forbidden(&Domain::parse("maps.ru").unwrap()));
//! ```
//!
//! # Canonical form
//!
//! Internally every domain is stored with its labels reversed and each label
//! terminated by a dot: `mail.google.com` becomes `com.google.mail.`. Under
//! this form "A is a sub-domain of B" is exactly "canonical(A) starts with
//! canonical(B)", and lexicographic sorting places every domain next to its
//! ancestors, which makes both the minimization scan and the binary-search
//! lookup correct.

pub mod domain;
pub mod error;
pub mod index;
pub mod parser;

// Re-export commonly used items
pub use domain::Domain;
pub use error::{GuardError, Result};
pub use index::DomainIndex;
pub use parser::{parse_domains, parse_domains_from_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let blocklist = r#"
# Forbidden zones
gdz.ru
maps.me
m.gdz.ru
com
"#;

        let forbidden = parse_domains(blocklist).unwrap();
        assert_eq!(forbidden.len(), 4);

        let index = DomainIndex::build(forbidden);
        // m.gdz.ru is covered by gdz.ru and collapses away
        assert_eq!(index.len(), 3);

        let verdicts = [
            ("gdz.ru", true),
            ("gdz.com", true),
            ("m.maps.me", true),
            ("alg.m.gdz.ru", true),
            ("maps.com", true),
            ("maps.ru", false),
            ("gdz.ru.com", true),
        ];
        for (raw, expected) in verdicts {
            let candidate = Domain::parse(raw).unwrap();
            assert_eq!(
                index.is_forbidden(&candidate),
                expected,
                "candidate: {}",
                raw
            );
        }
    }
}

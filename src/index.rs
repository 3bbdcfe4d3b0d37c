use log::debug;

use crate::domain::Domain;

/// Sorted minimal covering set of forbidden domains.
///
/// Built once, queried any number of times. Construction sorts the input by
/// canonical order and collapses every domain already covered by an ancestor,
/// so no retained element is a sub-domain of another. A query is then a single
/// upper-bound search plus one prefix check: any ancestor of the candidate
/// present in the set is necessarily the largest element not greater than the
/// candidate, so only the predecessor of the upper bound needs examining.
///
/// The index holds no interior mutability; a built index can be shared across
/// threads for concurrent read-only queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainIndex {
    forbidden: Vec<Domain>,
}

impl DomainIndex {
    /// Build an index from an arbitrary collection of domains.
    ///
    /// Total: duplicates, nested domains, and empty input are all fine.
    /// O(n log n); queries afterwards are O(log n).
    pub fn build(domains: Vec<Domain>) -> Self {
        let input_len = domains.len();

        let mut forbidden = domains;
        forbidden.sort_unstable();
        // After sorting, every domain sits in a contiguous run with its
        // ancestors, the ancestor first. One forward scan against the last
        // retained element removes everything already covered.
        forbidden.dedup_by(|candidate, retained| candidate.is_subdomain_of(retained));

        if forbidden.len() < input_len {
            debug!(
                "collapsed {} covered domain(s), {} retained",
                input_len - forbidden.len(),
                forbidden.len()
            );
        }

        Self { forbidden }
    }

    /// Check whether `candidate` equals, or lies under, any forbidden domain.
    pub fn is_forbidden(&self, candidate: &Domain) -> bool {
        // Index of the first element strictly greater than the candidate.
        let upper = self.forbidden.partition_point(|d| d <= candidate);
        match upper.checked_sub(1) {
            Some(prev) => candidate.is_subdomain_of(&self.forbidden[prev]),
            None => false,
        }
    }

    /// The minimal covering set, in canonical sort order.
    pub fn domains(&self) -> &[Domain] {
        &self.forbidden
    }

    /// Number of domains retained after minimization.
    pub fn len(&self) -> usize {
        self.forbidden.len()
    }

    /// Check if the index is empty (nothing is ever forbidden).
    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty()
    }
}

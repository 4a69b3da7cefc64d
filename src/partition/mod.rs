//! Prospect classification.
//!
//! Splits the prospect URLs into those whose root domain is already present in
//! the existing file and those that are new. URLs without a derivable domain
//! end up in neither list.

use std::collections::HashSet;

use log::debug;

use crate::domain::root_domain;
use crate::extract::UrlSet;
use crate::models::{DuplicateProspect, UniqueProspect};

/// Root domains derived from the existing file.
pub type DomainSet = HashSet<String>;

/// Outcome of classifying one prospect URL set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Prospects whose domain is not in the existing set
    pub unique: Vec<UniqueProspect>,
    /// Prospects whose domain is in the existing set
    pub duplicates: Vec<DuplicateProspect>,
    /// URLs with no parseable host
    pub dropped: usize,
}

/// Derives the root domain of every URL, skipping those without one.
pub fn domain_set<'a>(urls: impl IntoIterator<Item = &'a String>) -> DomainSet {
    urls.into_iter()
        .filter_map(|url| root_domain(url))
        .collect()
}

/// Classifies each prospect URL against the existing domains.
///
/// Both output lists are sorted by URL so that identical inputs always give
/// identical reports.
pub fn partition(existing: &DomainSet, prospects: &UrlSet) -> Partition {
    let mut result = Partition::default();

    for url in prospects {
        let Some(domain) = root_domain(url) else {
            debug!("Dropping prospect without a parseable host: {url}");
            result.dropped += 1;
            continue;
        };

        if existing.contains(&domain) {
            result.duplicates.push(DuplicateProspect {
                url: url.clone(),
                matched_domain: domain,
            });
        } else {
            result.unique.push(UniqueProspect { url: url.clone() });
        }
    }

    result.unique.sort();
    result.duplicates.sort();
    result
}

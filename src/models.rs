//! Classification records and comparison results.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Which of the two uploaded files a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum InputRole {
    /// The list of domains already on file
    Existing,
    /// The list being checked against the existing one
    Prospect,
}

/// A prospect URL whose root domain does not appear in the existing file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct UniqueProspect {
    /// The prospect URL as extracted
    #[serde(rename = "URL")]
    pub url: String,
}

/// A prospect URL whose root domain is already present in the existing file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DuplicateProspect {
    /// The prospect URL as extracted
    #[serde(rename = "Prospect URL")]
    pub url: String,
    /// Always a member of the existing file's domain set
    #[serde(rename = "Matches Existing Domain")]
    pub matched_domain: String,
}

/// Counters describing a single comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonStats {
    /// Distinct URLs found in the existing file
    pub existing_urls: usize,
    /// Distinct root domains derived from those URLs
    pub existing_domains: usize,
    /// Distinct URLs found in the prospect file
    pub prospect_urls: usize,
    /// Prospect URLs with no derivable root domain
    pub dropped: usize,
    /// The existing file could not be read as a workbook
    pub existing_unreadable: bool,
    /// The prospect file could not be read as a workbook
    pub prospect_unreadable: bool,
}

impl ComparisonStats {
    /// Records that the file playing `role` could not be parsed.
    pub fn mark_unreadable(&mut self, role: InputRole) {
        match role {
            InputRole::Existing => self.existing_unreadable = true,
            InputRole::Prospect => self.prospect_unreadable = true,
        }
    }

    /// Returns true if either input degraded to an empty URL set.
    pub fn any_unreadable(&self) -> bool {
        self.existing_unreadable || self.prospect_unreadable
    }
}

/// Result of comparing a prospect file against an existing file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    /// Prospects with no domain match, sorted by URL
    pub unique: Vec<UniqueProspect>,
    /// Prospects whose domain is already known, sorted by URL
    pub duplicates: Vec<DuplicateProspect>,
    /// Counters for logging and the run summary
    pub stats: ComparisonStats,
}

impl Comparison {
    /// Number of classified records (dropped URLs are not counted).
    pub fn record_count(&self) -> usize {
        self.unique.len() + self.duplicates.len()
    }
}

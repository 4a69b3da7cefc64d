//! Configuration constants.
//!
//! Report layout, the URL pattern used by the extractor, and the fixed
//! second-level-domain table used by the domain normalizer.

// Report layout
/// Name of the first report sheet (prospects with no domain match)
pub const UNIQUE_SHEET_NAME: &str = "Unique Prospects";
/// Name of the second report sheet (prospects whose domain is already known)
pub const DUPLICATE_SHEET_NAME: &str = "Duplicate Prospects";
/// Column header of the unique sheet
pub const UNIQUE_URL_HEADER: &str = "URL";
/// Column headers of the duplicate sheet
pub const DUPLICATE_HEADERS: [&str; 2] = ["Prospect URL", "Matches Existing Domain"];
/// File name used when no output path is given
pub const DEFAULT_REPORT_FILE: &str = "Unique_Prospects_Report.xlsx";

// URL extraction
/// Case-insensitive URL pattern.
///
/// Intentionally permissive: a scheme, one character that cannot start a path
/// or end a host, then anything up to the next whitespace. Trailing
/// punctuation stays part of the match.
pub const URL_PATTERN: &str = r"(?i)https?://[^\s/$.?#]\S*";

// Domain normalization
/// Labels that mark a second-level registry such as `co.uk` or `com.au`.
///
/// When one of these is the second-to-last label of a host with more than two
/// labels, the root domain keeps three labels instead of two.
pub const SECOND_LEVEL_MARKERS: &[&str] = &["co", "com", "org", "net", "gov", "edu", "ac"];

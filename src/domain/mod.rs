//! Domain extraction and normalization utilities.
//!
//! Reduces a URL to its root (registrable) domain with a small fixed rule set
//! rather than the Public Suffix List:
//! - fewer than two labels: the host itself (`localhost`)
//! - second-to-last label in [`SECOND_LEVEL_MARKERS`] and more than two
//!   labels: the last three labels (`example.co.uk`)
//! - otherwise: the last two labels (`example.com`)
//!
//! The table is not a full suffix list; hosts such as
//! `example.com.cn` and `shop.example.co` are classified by the same rule.

use std::net::Ipv6Addr;

use crate::config::SECOND_LEVEL_MARKERS;

/// Extracts the root domain of a URL.
///
/// Returns `None` if the input is empty, has no `scheme://` authority, or the
/// authority has no host. Never fails otherwise.
///
/// # Examples
///
/// ```
/// use prospect_dedup::root_domain;
///
/// assert_eq!(root_domain("http://www.example.co.uk/path").as_deref(), Some("example.co.uk"));
/// assert_eq!(root_domain("https://example.com").as_deref(), Some("example.com"));
/// assert_eq!(root_domain("http://localhost:8080,").as_deref(), Some("localhost"));
/// assert_eq!(root_domain("not a url"), None);
/// ```
pub fn root_domain(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }
    let host = host_of(url)?;
    Some(reduce_host(&host.to_lowercase()))
}

/// Slices the host out of `scheme://[userinfo@]host[:port]`.
///
/// The authority ends at the first `/`, `?` or `#`. The port is not
/// validated, so trailing text after the first `:` is discarded. A bracketed
/// literal must be an IPv6 address and is returned without brackets.
fn host_of(url: &str) -> Option<&str> {
    let (scheme, rest) = url.trim_start().split_once("://")?;
    if !is_scheme(scheme) {
        return None;
    }

    let end = rest.find(|c: char| matches!(c, '/' | '?' | '#')).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host_info = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

    let host = match host_info.split_once('[') {
        Some((_, bracketed)) => {
            let (literal, _) = bracketed.split_once(']')?;
            literal.parse::<Ipv6Addr>().ok()?;
            literal
        }
        None if host_info.contains(']') => return None,
        None => host_info.split_once(':').map_or(host_info, |(host, _)| host),
    };

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Applies the second-level-marker rule to a lowercase host.
fn reduce_host(host: &str) -> String {
    let labels: Vec<&str> = host.split('.').collect();
    let n = labels.len();
    if n < 2 {
        return host.to_string();
    }

    let keep = if n > 2 && SECOND_LEVEL_MARKERS.contains(&labels[n - 2]) {
        3
    } else {
        2
    };
    labels[n - keep..].join(".")
}

//! End-to-end tests for `compare` on real xlsx bytes.

use std::collections::HashSet;

use prospect_dedup::{compare, CompareError, InputRole};

#[path = "helpers.rs"]
mod helpers;

use helpers::{duplicate_set, single_column_workbook, unique_set, workbook_bytes, TestCell};

fn pairs(items: &[(&str, &str)]) -> HashSet<(String, String)> {
    items
        .iter()
        .map(|(u, d)| (u.to_string(), d.to_string()))
        .collect()
}

fn strings(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_compare_end_to_end() {
    let existing = single_column_workbook(&["visit http://a.com/x and http://b.com"]);
    let prospect = single_column_workbook(&["http://a.com/y", "http://c.com"]);

    let comparison = compare(&existing, &prospect).unwrap();

    assert_eq!(duplicate_set(&comparison), pairs(&[("http://a.com/y", "a.com")]));
    assert_eq!(unique_set(&comparison), strings(&["http://c.com"]));
    assert_eq!(comparison.stats.existing_urls, 2);
    assert_eq!(comparison.stats.existing_domains, 2);
    assert_eq!(comparison.stats.prospect_urls, 2);
    assert!(!comparison.stats.any_unreadable());
}

#[test]
fn test_compare_is_idempotent() {
    let existing = single_column_workbook(&["http://www.example.co.uk", "https://shop.test.com/a"]);
    let prospect = single_column_workbook(&[
        "https://blog.example.co.uk/post",
        "http://other.org",
        "http://test.com",
        "see http://x.io, http://y.io",
    ]);

    let first = compare(&existing, &prospect).unwrap();
    let second = compare(&existing, &prospect).unwrap();

    assert_eq!(unique_set(&first), unique_set(&second));
    assert_eq!(duplicate_set(&first), duplicate_set(&second));
    assert_eq!(first, second);
}

#[test]
fn test_compare_scans_every_sheet_and_column_but_only_text() {
    let existing = workbook_bytes(&[
        ("Clients", vec![vec![TestCell::Number(1.0), TestCell::Text("http://a.com")]]),
        ("Archive", vec![vec![], vec![TestCell::Bool(true), TestCell::Text("x https://b.net/y")]]),
    ]);
    let prospect = workbook_bytes(&[(
        "Leads",
        vec![
            vec![TestCell::Text("https://www.b.net"), TestCell::Number(2.0)],
            vec![TestCell::Text("https://a.com/about"), TestCell::Text("https://a.com/about")],
            vec![TestCell::Text("http://new.dev")],
        ],
    )]);

    let comparison = compare(&existing, &prospect).unwrap();

    assert_eq!(
        duplicate_set(&comparison),
        pairs(&[("https://www.b.net", "b.net"), ("https://a.com/about", "a.com")])
    );
    assert_eq!(unique_set(&comparison), strings(&["http://new.dev"]));
    assert_eq!(comparison.stats.prospect_urls, 3);
}

#[test]
fn test_compare_drops_prospects_without_host() {
    let existing = single_column_workbook(&["http://a.com"]);
    let prospect = single_column_workbook(&["http://[oops]/x", "http://a.com/1", "http://z.com"]);

    let comparison = compare(&existing, &prospect).unwrap();

    assert_eq!(comparison.stats.dropped, 1);
    let all: HashSet<String> = unique_set(&comparison)
        .into_iter()
        .chain(duplicate_set(&comparison).into_iter().map(|(u, _)| u))
        .collect();
    assert!(!all.contains("http://[oops]/x"));
    assert_eq!(all.len(), 2);
}

#[test]
fn test_compare_malformed_existing_treats_all_prospects_as_unique() {
    let prospect = single_column_workbook(&["http://a.com", "http://b.com"]);

    let comparison = compare(b"garbage bytes", &prospect).unwrap();

    assert!(comparison.stats.existing_unreadable);
    assert!(!comparison.stats.prospect_unreadable);
    assert!(comparison.duplicates.is_empty());
    assert_eq!(unique_set(&comparison), strings(&["http://a.com", "http://b.com"]));
}

#[test]
fn test_compare_malformed_prospect_yields_empty_report() {
    let existing = single_column_workbook(&["http://a.com"]);

    let comparison = compare(&existing, b"garbage bytes").unwrap();

    assert!(comparison.stats.prospect_unreadable);
    assert_eq!(comparison.record_count(), 0);
}

#[test]
fn test_compare_missing_input() {
    let workbook = single_column_workbook(&["http://a.com"]);
    assert_eq!(
        compare(&[], &workbook).unwrap_err(),
        CompareError::MissingInput(InputRole::Existing)
    );
    assert_eq!(
        compare(&workbook, &[]).unwrap_err(),
        CompareError::MissingInput(InputRole::Prospect)
    );
}

#[test]
fn test_compare_matched_domain_is_from_existing_set() {
    let existing = single_column_workbook(&["https://news.bbc.co.uk", "http://gov.example.ac.uk"]);
    let prospect = single_column_workbook(&["https://www.bbc.co.uk/sport", "https://example.ac.uk"]);

    let comparison = compare(&existing, &prospect).unwrap();

    assert_eq!(
        duplicate_set(&comparison),
        pairs(&[
            ("https://www.bbc.co.uk/sport", "bbc.co.uk"),
            ("https://example.ac.uk", "example.ac.uk"),
        ])
    );
}

#[test]
fn test_compare_classifies_urls_with_punctuation_after_port() {
    let existing = single_column_workbook(&["http://localhost:8080/admin"]);
    let prospect = single_column_workbook(&["dev at http://localhost:8080, staging"]);

    let comparison = compare(&existing, &prospect).unwrap();

    assert_eq!(
        duplicate_set(&comparison),
        pairs(&[("http://localhost:8080,", "localhost")])
    );
    assert!(unique_set(&comparison).is_empty());
    assert_eq!(comparison.stats.dropped, 0);
}

//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique (prevents domain collision)
//! 3. All domains are null-terminated and follow `DELVE::*::V1\0`
//! 4. No raw `DELVE::` domain literals in production source outside `digest.rs`
//! 5. The engine crate never reaches into the harness

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use delve_search::digest::HashDomain;

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        2,
        "expected 2 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain:?}"
        );
    }
}

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.starts_with(b"DELVE::"), "{domain:?} does not start with DELVE::");
        assert!(bytes.ends_with(b"::V1\0"), "{domain:?} does not end with ::V1\\0");
    }
}

// ---------------------------------------------------------------------------
// Source scans
// ---------------------------------------------------------------------------

/// Simple recursive directory walker.
fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(walkdir(&path));
            } else {
                results.push(path);
            }
        }
    }
    results
}

/// Non-comment lines of every `.rs` file under `dir` containing `pattern`,
/// skipping files named `exempt`.
fn scan(dir: &str, pattern: &str, exempt: Option<&str>) -> Vec<String> {
    let mut violations = Vec::new();
    for path in walkdir(Path::new(dir)) {
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        if exempt.is_some() && path.file_name().and_then(|n| n.to_str()) == exempt {
            continue;
        }
        let Ok(content) = std::fs::read_to_string(&path) else {
            continue;
        };
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("//") {
                continue;
            }
            if trimmed.contains(pattern) {
                violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
            }
        }
    }
    violations
}

#[test]
fn no_raw_domain_literals_outside_authority() {
    let mut violations = Vec::new();
    for dir in [
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../harness/src"),
    ] {
        violations.extend(scan(dir, "b\"DELVE::", Some("digest.rs")));
    }
    assert!(
        violations.is_empty(),
        "raw DELVE:: domain literals found outside digest.rs:\n{}",
        violations.join("\n")
    );
}

#[test]
fn engine_does_not_depend_on_harness() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src");
    let violations = scan(dir, "delve_harness", None);
    assert!(
        violations.is_empty(),
        "search crate references the harness:\n{}",
        violations.join("\n")
    );
}

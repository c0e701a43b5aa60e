//! Canonical JSON bytes and content hashing for search artifacts.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace: `{"a":1,"b":2}`.
//! 3. Strings are escaped per RFC 8259 §7; other UTF-8 passes through.
//! 4. Numbers must be integers. Costs are floats, so artifacts carry them
//!    as strings (see [`cost_repr`]) and the encoder rejects any float that
//!    slips through, which keeps formatting drift out of digests.

use std::fmt;
use std::io::Write;

use sha2::{Digest, Sha256};

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
}

impl fmt::Display for CanonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Domain separators for [`canonical_hash`]. Each is null-terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Search graph (expansion log) artifacts.
    SearchGraph,
    /// Target ranking artifacts produced by callers of the engine.
    TargetRanking,
}

impl HashDomain {
    pub const ALL: &'static [HashDomain] = &[Self::SearchGraph, Self::TargetRanking];

    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::SearchGraph => b"DELVE::SEARCH_GRAPH::V1\0",
            Self::TargetRanking => b"DELVE::TARGET_RANKING::V1\0",
        }
    }
}

/// A content-addressed hash: `"sha256:<hex_digest>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
}

impl ContentHash {
    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        self.full
            .split_once(':')
            .map_or(self.full.as_str(), |(_, hex)| hex)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 over `domain || data`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    ContentHash {
        full: format!("sha256:{}", hex::encode(hasher.finalize())),
    }
}

/// Exact, platform-independent text for a cost value.
///
/// Rust's float `Display` prints the shortest string that round-trips.
#[must_use]
pub fn cost_repr(cost: f64) -> String {
    format!("{cost}")
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64`
/// or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

fn write_value(buf: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Null => buf.extend_from_slice(b"null"),
        serde_json::Value::Bool(true) => buf.extend_from_slice(b"true"),
        serde_json::Value::Bool(false) => buf.extend_from_slice(b"false"),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                let _ = write!(buf, "{i}");
            } else if let Some(u) = n.as_u64() {
                let _ = write!(buf, "{u}");
            } else {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
        }
        serde_json::Value::String(s) => write_string(buf, s),
        serde_json::Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
        }
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            buf.push(b'{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_string(buf, key);
                buf.push(b':');
                write_value(buf, &map[*key])?;
            }
            buf.push(b'}');
        }
    }
    Ok(())
}

fn write_string(buf: &mut Vec<u8>, s: &str) {
    buf.push(b'"');
    for ch in s.chars() {
        match ch {
            '"' => buf.extend_from_slice(b"\\\""),
            '\\' => buf.extend_from_slice(b"\\\\"),
            '\n' => buf.extend_from_slice(b"\\n"),
            '\r' => buf.extend_from_slice(b"\\r"),
            '\t' => buf.extend_from_slice(b"\\t"),
            c if c < '\u{0020}' => {
                let _ = write!(buf, "\\u{:04x}", c as u32);
            }
            c => {
                let mut utf8 = [0u8; 4];
                buf.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            }
        }
    }
    buf.push(b'"');
}

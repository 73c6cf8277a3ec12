//! Opaque query-parameter bag.
//!
//! Abstracts the shareable URL state away from any navigation API: callers
//! hand the engine an ordered key/value bag and persist it however they like
//! (browser history, CLI flag, plain string). Setting a key updates it in
//! place so unrelated parameters keep their positions.
//!
//! Values are treated as opaque tokens and carried verbatim; no
//! percent-decoding is performed (the sort tokens are plain lowercase ASCII).

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Ordered multimap-ish parameter bag. Lookups return the first match;
/// `set` replaces the first match in place and drops later duplicates.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        QueryParams { pairs: Vec::new() }
    }

    /// Parse `k=v&k2=v2` text. Empty segments are skipped; a segment without
    /// `=` becomes a key with an empty value. A leading `?` is tolerated.
    pub fn parse(s: &str) -> Self {
        let s = s.strip_prefix('?').unwrap_or(s);
        let mut pairs = Vec::new();
        for segment in s.split('&') {
            if segment.is_empty() {
                continue;
            }
            match segment.split_once('=') {
                Some((k, v)) => pairs.push((k.to_string(), v.to_string())),
                None => pairs.push((segment.to_string(), String::new())),
            }
        }
        QueryParams { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key` to `value`, keeping its original position when present.
    /// Stray duplicates of the key are removed so the bag stays canonical.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut found = false;
        self.pairs.retain_mut(|(k, v)| {
            if k == key {
                if found {
                    return false;
                }
                found = true;
                *v = value.to_string();
            }
            true
        });
        if !found {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render back to `k=v&k2=v2` text in bag order.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (i, (k, v)) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(k);
            out.push('=');
            out.push_str(v);
        }
        out
    }
}

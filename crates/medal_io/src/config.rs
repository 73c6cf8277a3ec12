//! Source configuration.
//!
//! One explicit value injected into the sources that need it, constructed at
//! a single point per process. There is deliberately no ambient environment
//! table: a process that talks to two deployments builds two configs.

use serde::{Deserialize, Serialize};

use crate::{IoError, IoResult};

/// Where and how to fetch standings data.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SourceConfig {
    /// Scheme + authority, e.g. `https://api.example.org`.
    pub base_url: String,
    /// Path of the medals endpoint relative to `base_url`.
    pub medals_path: String,
    /// Path of the country-flags endpoint relative to `base_url`.
    pub flags_path: String,
    /// When false, requests are sent with `Cache-Control: no-store`.
    pub cache_enabled: bool,
}

impl SourceConfig {
    /// Config rooted at `base_url` with the conventional endpoint paths.
    pub fn new(base_url: impl Into<String>) -> IoResult<Self> {
        let base_url = base_url.into();
        Self::check_base(&base_url)?;
        Ok(SourceConfig {
            base_url,
            medals_path: "/api/medals".to_string(),
            flags_path: "/api/flags".to_string(),
            cache_enabled: false,
        })
    }

    /// Config pointing at one absolute medals URL (flags unavailable).
    pub fn from_medals_url(url: impl Into<String>) -> IoResult<Self> {
        let url = url.into();
        Self::check_base(&url)?;
        Ok(SourceConfig {
            base_url: url,
            medals_path: String::new(),
            flags_path: String::new(),
            cache_enabled: false,
        })
    }

    fn check_base(url: &str) -> IoResult<()> {
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(IoError::Invalid(format!(
                "base url must start with http:// or https:// (got {url:?})"
            )))
        }
    }

    pub fn medals_url(&self) -> String {
        join_url(&self.base_url, &self.medals_path)
    }

    pub fn flags_url(&self) -> String {
        join_url(&self.base_url, &self.flags_path)
    }
}

/// Join base and path with exactly one `/` between them.
fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    match (base.ends_with('/'), path.starts_with('/')) {
        (true, true) => format!("{}{}", base.trim_end_matches('/'), path),
        (false, false) => format!("{base}/{path}"),
        _ => format!("{base}{path}"),
    }
}

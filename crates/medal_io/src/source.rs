//! Medal data sources: the fetch port and its file/HTTP implementations.
//!
//! A source either resolves with validated records or fails with a typed
//! `IoError`. No retries here.

use std::fs;
use std::path::{Path, PathBuf};

use medal_core::MedalRecord;

use crate::validate::parse_medals;
use crate::IoResult;

#[cfg(feature = "http")]
use std::collections::BTreeMap;

#[cfg(feature = "http")]
use crate::{config::SourceConfig, validate::parse_flags, IoError};

/// The fetch port the engine depends on.
pub trait MedalSource {
    /// Fetch and validate the current standings, or fail with a typed error.
    fn fetch_medals(&self) -> IoResult<Vec<MedalRecord>>;
}

/// File-backed source (local JSON snapshot).
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MedalSource for FileSource {
    fn fetch_medals(&self) -> IoResult<Vec<MedalRecord>> {
        tracing::debug!(path = %self.path.display(), "reading medals snapshot");
        let bytes = fs::read(&self.path)?;
        parse_medals(&bytes)
    }
}

/// HTTP-backed source using a blocking client.
#[cfg(feature = "http")]
#[derive(Debug)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
    config: SourceConfig,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(config: SourceConfig) -> IoResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| IoError::Http(e.to_string()))?;
        Ok(HttpSource { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    fn get_bytes(&self, url: &str) -> IoResult<Vec<u8>> {
        tracing::debug!(url, "fetching");
        let mut request = self.client.get(url);
        if !self.config.cache_enabled {
            request = request.header("Cache-Control", "no-store");
        }
        let response = request.send().map_err(|e| IoError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(IoError::Status {
                code: status.as_u16(),
            });
        }
        let bytes = response
            .bytes()
            .map_err(|e| IoError::Http(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Fetch the country-code → flag-asset map.
    pub fn fetch_flags(&self) -> IoResult<BTreeMap<String, String>> {
        let bytes = self.get_bytes(&self.config.flags_url())?;
        parse_flags(&bytes)
    }
}

#[cfg(feature = "http")]
impl MedalSource for HttpSource {
    fn fetch_medals(&self) -> IoResult<Vec<MedalRecord>> {
        let bytes = self.get_bytes(&self.config.medals_url())?;
        parse_medals(&bytes)
    }
}

//! Sort domain: key, direction, config, and the toggle state machine.
//!
//! `SortConfig` is replaced as a unit — key and direction are never patched
//! independently. The only transition is a sort request for some key:
//! re-selecting the current key flips the direction, selecting a new key
//! resets to descending ("most medals first").

use crate::errors::CoreError;
use crate::query::QueryParams;

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Primary ranking criterion. Closed enumeration; wire tokens are lowercase.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortKey {
    Gold,
    Silver,
    Bronze,
    Total,
}

impl SortKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Gold => "gold",
            SortKey::Silver => "silver",
            SortKey::Bronze => "bronze",
            SortKey::Total => "total",
        }
    }

    /// Permissive parse for an external `sort` parameter: absent or
    /// unrecognized values fall back to `Gold`. Never an error — invalid
    /// input is silently corrected at this boundary.
    pub fn parse_param(param: Option<&str>) -> SortKey {
        match param.map(str::parse) {
            Some(Ok(key)) => key,
            _ => SortKey::Gold,
        }
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gold" => Ok(SortKey::Gold),
            "silver" => Ok(SortKey::Silver),
            "bronze" => Ok(SortKey::Bronze),
            "total" => Ok(SortKey::Total),
            _ => Err(CoreError::InvalidSortKey),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction. Wire tokens: `asc` / `desc`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortDirection {
    #[cfg_attr(feature = "serde", serde(rename = "asc"))]
    Ascending,
    #[cfg_attr(feature = "serde", serde(rename = "desc"))]
    Descending,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub const fn flipped(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Permissive parse for an external `direction` parameter: ascending only
    /// when the value is literally `"asc"`; anything else (including absence)
    /// is descending. Malformed input must never silently produce ascending.
    pub fn parse_param(param: Option<&str>) -> SortDirection {
        match param {
            Some("asc") => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            _ => Err(CoreError::InvalidDirection),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active sort configuration. Always constructed/replaced whole.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            key: SortKey::Gold,
            direction: SortDirection::Descending,
        }
    }
}

impl SortConfig {
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        SortConfig { key, direction }
    }

    /// Transition for a "sort by `key`" intent: same key flips the direction,
    /// a different key starts descending.
    pub fn on_sort_request(self, key: SortKey) -> SortConfig {
        if self.key == key {
            SortConfig::new(key, self.direction.flipped())
        } else {
            SortConfig::new(key, SortDirection::Descending)
        }
    }

    /// Decode from an external parameter bag. Missing or unrecognized values
    /// fall back to the defaults (`gold` / descending); this never fails.
    pub fn from_params(params: &QueryParams) -> SortConfig {
        SortConfig {
            key: SortKey::parse_param(params.get("sort")),
            direction: SortDirection::parse_param(params.get("direction")),
        }
    }

    /// Encode into an external parameter bag, preserving unrelated parameters
    /// and their order.
    pub fn write_to(&self, params: &mut QueryParams) {
        params.set("sort", self.key.as_str());
        params.set("direction", self.direction.as_str());
    }
}

/// Owner of the live `SortConfig` for one view session; the only writer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortState {
    config: SortConfig,
}

impl SortState {
    pub fn new(config: SortConfig) -> Self {
        SortState { config }
    }

    /// Restore state from a shared/persisted parameter bag.
    pub fn from_params(params: &QueryParams) -> Self {
        SortState {
            config: SortConfig::from_params(params),
        }
    }

    pub fn config(&self) -> SortConfig {
        self.config
    }

    /// Apply a user sort intent and return the new config.
    pub fn apply_sort_request(&mut self, key: SortKey) -> SortConfig {
        self.config = self.config.on_sort_request(key);
        self.config
    }

    /// Mirror the current config into the shareable representation.
    pub fn sync_params(&self, params: &mut QueryParams) {
        self.config.write_to(params);
    }
}

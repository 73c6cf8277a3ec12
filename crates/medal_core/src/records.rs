//! Medal records: raw per-country counts and the derived row with a
//! recomputed total.
//!
//! `total` is **always** computed here; it is never read from an external
//! payload. Counts are `u32`, totals are `u64`, so the sum of three terms
//! cannot overflow.

use crate::sort::SortKey;

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw per-country medal counts as supplied by the data source.
///
/// `code` is expected to be non-empty and unique within a dataset; uniqueness
/// is a data-quality concern of the source, not enforced here.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CountryMedals {
    pub code: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

/// One standings row: the raw counts plus the derived total.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MedalRecord {
    pub code: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u64,
}

impl MedalRecord {
    /// Derive a record from raw counts, recomputing `total`.
    pub fn from_counts(raw: CountryMedals) -> Self {
        let total = raw.gold as u64 + raw.silver as u64 + raw.bronze as u64;
        MedalRecord {
            code: raw.code,
            gold: raw.gold,
            silver: raw.silver,
            bronze: raw.bronze,
            total,
        }
    }

    /// Numeric value of the given sort key for this record (widened to `u64`
    /// so all keys compare in one domain).
    #[inline]
    pub fn key_value(&self, key: SortKey) -> u64 {
        match key {
            SortKey::Gold => self.gold as u64,
            SortKey::Silver => self.silver as u64,
            SortKey::Bronze => self.bronze as u64,
            SortKey::Total => self.total,
        }
    }
}

impl From<CountryMedals> for MedalRecord {
    fn from(raw: CountryMedals) -> Self {
        MedalRecord::from_counts(raw)
    }
}

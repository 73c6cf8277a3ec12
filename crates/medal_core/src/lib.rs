//! medal_core — Core types and state for medal standings.
//!
//! This crate is **I/O-free**. It defines the stable types/APIs used across
//! the workspace (`medal_rank`, `medal_io`, `medal_pipeline`, `medal_report`,
//! `medal_cli`):
//!
//! - Records: `CountryMedals` (raw input) and `MedalRecord` (derived, with a
//!   recomputed total)
//! - Sort domain: `SortKey`, `SortDirection`, `SortConfig`
//! - `SortState`: the toggle state machine that owns the live config
//! - `QueryParams`: an opaque, order-preserving key/value bag for the
//!   shareable query-string representation
//!
//! Serialization derives are gated behind the `serde` feature.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain token parsing.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        /// Not one of `gold | silver | bronze | total`.
        InvalidSortKey,
        /// Not one of `asc | desc`.
        InvalidDirection,
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidSortKey => {
                    write!(f, "invalid sort key (expected gold|silver|bronze|total)")
                }
                CoreError::InvalidDirection => {
                    write!(f, "invalid direction (expected asc|desc)")
                }
            }
        }
    }

    #[cfg(feature = "std")]
    impl std::error::Error for CoreError {}
}

pub mod query;
pub mod records;
pub mod sort;

pub use errors::CoreError;
pub use query::QueryParams;
pub use records::{CountryMedals, MedalRecord};
pub use sort::{SortConfig, SortDirection, SortKey, SortState};

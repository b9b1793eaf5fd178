//! Version ordering layer
//!
//! Orders version strings by semver precedence of their base, breaking ties
//! with the trailing number of their suffix so that `1.0.0-rc.2` sorts before
//! `1.0.0-rc.10`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Suffix    │────▶│   Orderer   │◀────│   Semver    │
//! │ (decompose) │     │ (less/swap) │     │  (parse)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │    Sort     │
//!                     │ (heap/ins.) │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types for version parsing
//! - [`logger`]: Injected debug logging for comparisons
//! - [`orderer`]: `VersionOrderer` and slice-level entry points
//! - [`semver`]: Lenient semver parsing and base version comparison
//! - [`sort`]: `SortableSequence` trait and generic sort routines
//! - [`suffix`]: Base/suffix decomposition

pub mod error;
pub mod logger;
pub mod orderer;
pub mod semver;
pub mod sort;
pub mod suffix;

pub use orderer::{
    VersionOrderer, compare_versions, order_versions, sort_versions, sort_versions_with_logger,
};
pub use semver::{ParsedVersion, VersionText};
pub use sort::SortableSequence;

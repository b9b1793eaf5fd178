//! Deterministic version ordering
//!
//! Versions are ordered by their base (text before the first hyphen) using
//! semver precedence, then by the numeric tail of their suffix, then by their
//! original text. The last step makes the order total, so stable and unstable
//! sorts agree on the output for any input permutation.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::config::OrderConfig;
use crate::version::error::VersionError;
use crate::version::logger::{DebugLogger, NoopLogger, TracingLogger};
use crate::version::semver::{BaseVersion, ParsedVersion, VersionText};
use crate::version::sort::{SortableSequence, heap_sort};
use crate::version::suffix::decompose;

/// Sortable view over a caller-owned slice of versions
pub struct VersionOrderer<'a, V, L = NoopLogger> {
    versions: &'a mut [V],
    logger: L,
}

impl<'a, V: VersionText> VersionOrderer<'a, V, NoopLogger> {
    pub fn new(versions: &'a mut [V]) -> Self {
        Self::with_logger(versions, NoopLogger)
    }
}

impl<'a, V: VersionText, L: DebugLogger> VersionOrderer<'a, V, L> {
    pub fn with_logger(versions: &'a mut [V], logger: L) -> Self {
        Self { versions, logger }
    }

    /// Three-way comparison of the elements at `i` and `j`
    pub fn compare(&self, i: usize, j: usize) -> Ordering {
        compare_with(
            self.versions[i].original(),
            self.versions[j].original(),
            &self.logger,
        )
    }

    /// Sort the borrowed slice in place
    pub fn sort(&mut self) {
        heap_sort(self);
    }
}

impl<V: VersionText, L: DebugLogger> SortableSequence for VersionOrderer<'_, V, L> {
    fn len(&self) -> usize {
        self.versions.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.compare(i, j) == Ordering::Less
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.versions.swap(i, j);
    }
}

/// Compare two version strings with the suffix tie-break
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    compare_with(a, b, &NoopLogger)
}

fn compare_with<L: DebugLogger + ?Sized>(left: &str, right: &str, logger: &L) -> Ordering {
    let left_parts = decompose(left);
    let right_parts = decompose(right);

    if logger.enabled() {
        logger.debug(&format!(
            "Comparing base '{}' with base '{}'",
            left_parts.base, right_parts.base
        ));
    }

    BaseVersion::parse(left_parts.base)
        .cmp(&BaseVersion::parse(right_parts.base))
        .then(left_parts.suffix_number.cmp(&right_parts.suffix_number))
        .then_with(|| left.cmp(right))
}

/// Sort versions in place, oldest first
pub fn sort_versions<V: VersionText>(versions: &mut [V]) {
    versions.sort_by(|a, b| compare_versions(a.original(), b.original()));
}

/// Sort versions in place, oldest first, tracing every comparison to `logger`
pub fn sort_versions_with_logger<V: VersionText, L: DebugLogger + ?Sized>(
    versions: &mut [V],
    logger: &L,
) {
    versions.sort_by(|a, b| compare_with(a.original(), b.original(), logger));
}

/// Order raw version strings according to `config`
///
/// Every input is validated as a whole string, suffix included, with the
/// same leniency as `parse_version`. Inputs that fail either fail the whole
/// call (`input.reject_invalid`) or are kept and ordered leniently. A tag such
/// as `1.0.0-rc.01` fails validation because of its pre-release, yet still
/// orders by its valid base.
pub fn order_versions(
    inputs: Vec<String>,
    config: &OrderConfig,
) -> Result<Vec<String>, VersionError> {
    for input in &inputs {
        if let Err(e) = ParsedVersion::parse(input) {
            if config.input.reject_invalid {
                return Err(e);
            }
            warn!("Ordering invalid version leniently: {}", e);
        }
    }

    let mut versions = inputs;
    VersionOrderer::with_logger(&mut versions, TracingLogger).sort();

    if config.output.descending {
        versions.reverse();
    }

    debug!("Ordered {} versions", versions.len());
    Ok(versions)
}

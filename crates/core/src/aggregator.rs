// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Merges the local and external candidate pools for one day.

use mealplan_domain::{RecipeCandidate, RecipeRecord, RecipeSource};
use std::collections::HashSet;
use tracing::warn;

/// Normalizes raw records from one pool, dropping the ones that cannot be
/// normalized.
#[must_use]
pub fn ingest(records: &[RecipeRecord], source: RecipeSource) -> Vec<RecipeCandidate> {
    records
        .iter()
        .filter_map(
            |record| match RecipeCandidate::from_record(record, source) {
                Ok(candidate) => Some(candidate),
                Err(err) => {
                    warn!(%source, name = %record.name, error = %err, "Dropping invalid recipe record");
                    None
                }
            },
        )
        .collect()
}

/// Aggregates both pools into one list.
///
/// LOCAL entries come first, then EXTERNAL ones, each in their original
/// order. Two empty pools produce an empty list.
///
/// # Arguments
///
/// * `local_pool` - Records from the local curated set
/// * `external_pool` - Records from the remote catalog
#[must_use]
pub fn aggregate(local_pool: &[RecipeRecord], external_pool: &[RecipeRecord]) -> Vec<RecipeCandidate> {
    merge_candidates(
        ingest(local_pool, RecipeSource::Local),
        ingest(external_pool, RecipeSource::External),
    )
}

/// Merges already-ingested pools, LOCAL first.
///
/// Names are de-duplicated case-insensitively and the first occurrence wins,
/// so a LOCAL recipe always shadows an EXTERNAL one of the same name.
#[must_use]
pub fn merge_candidates(
    local: Vec<RecipeCandidate>,
    external: Vec<RecipeCandidate>,
) -> Vec<RecipeCandidate> {
    let mut seen: HashSet<String> = HashSet::new();

    local
        .into_iter()
        .chain(external)
        .filter(|candidate| seen.insert(candidate.name_key()))
        .collect()
}

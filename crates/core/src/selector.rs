// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day-by-day greedy selection.
//!
//! ## Selection Order (Authoritative)
//!
//! For each day:
//! 1. Filter the aggregated pool through all three constraint rules.
//! 2. If no home-cuisine candidate survived, re-admit up to
//!    [`HOME_READMIT_LIMIT`] home-cuisine candidates that pass the staple
//!    rules, ignoring recency.
//! 3. If the eligible set is still empty, fall back to the top
//!    [`FALLBACK_LIMIT`] home-cuisine candidates of the full pool ranked by
//!    rating and favorite, ignoring every rule. When the pool holds no
//!    home-cuisine candidate at all, the top of the whole pool is used.
//! 4. Pick the winner: home cuisine first, then highest rating, then
//!    favorites. Remaining ties go to the earliest candidate in aggregation
//!    order.
//!
//! ## Invariants
//!
//! - Selection is deterministic; nothing is random
//! - The winner is recorded into the plan before the next day is considered

use crate::error::EngineError;
use mealplan_domain::{
    Cuisine, Day, PlanInProgress, RecipeCandidate, SelectionPath, UsageWindow, is_eligible,
    passes_staple_rules,
};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Maximum home-cuisine candidates re-admitted by the home-cuisine guarantee.
pub const HOME_READMIT_LIMIT: usize = 2;

/// Size of the unconstrained fallback set.
pub const FALLBACK_LIMIT: usize = 5;

/// Selects the recipe for `day` and records it into `plan`.
///
/// # Arguments
///
/// * `day` - The day being filled; must be the plan's next day
/// * `pool` - The aggregated candidates for this day
/// * `window` - The run's usage window
/// * `plan` - The plan under construction
/// * `home_cuisine` - The cuisine given preferential treatment
///
/// # Returns
///
/// The winning candidate.
///
/// # Errors
///
/// Returns an error if:
/// - `pool` is empty (`EngineError::EmptyCandidatePool`)
/// - `day` is not the next day awaiting assignment
pub fn select_for_day(
    day: Day,
    pool: &[RecipeCandidate],
    window: &UsageWindow,
    plan: &mut PlanInProgress,
    home_cuisine: Cuisine,
) -> Result<RecipeCandidate, EngineError> {
    if pool.is_empty() {
        return Err(EngineError::EmptyCandidatePool { days: vec![day] });
    }

    let mut path: SelectionPath = SelectionPath::Eligible;
    let current: &PlanInProgress = plan;

    // 1. Regular filtering
    let mut eligible: Vec<&RecipeCandidate> = pool
        .iter()
        .filter(|c| is_eligible(c, window, current, day))
        .collect();

    // 2. Home-cuisine guarantee
    if !eligible.iter().any(|c| c.is_cuisine(home_cuisine)) {
        let readmitted: Vec<&RecipeCandidate> = pool
            .iter()
            .filter(|c| c.is_cuisine(home_cuisine) && passes_staple_rules(c, window, current, day))
            .take(HOME_READMIT_LIMIT)
            .collect();

        if !readmitted.is_empty() {
            warn!(
                %day,
                readmitted = readmitted.len(),
                "Re-admitting recently used home-cuisine recipes"
            );
            eligible.extend(readmitted);
            path = SelectionPath::HomeCuisineReadmitted;
        }
    }

    // 3. Unconstrained fallback
    if eligible.is_empty() {
        eligible = fallback_candidates(pool, home_cuisine);
        path = SelectionPath::Fallback;
        warn!(
            %day,
            fallback_candidates = eligible.len(),
            "No candidate passed the constraint rules, using fallback"
        );
    }

    // 4. Winner selection
    let winner: RecipeCandidate = pick_winner(&eligible, home_cuisine)
        .cloned()
        .ok_or_else(|| EngineError::EmptyCandidatePool { days: vec![day] })?;

    debug!(
        %day,
        recipe = %winner.name,
        main_ingredient = %winner.main_ingredient,
        source = %winner.source,
        ?path,
        eligible = eligible.len(),
        "Selected recipe"
    );

    plan.record(day, winner.clone(), path)?;
    Ok(winner)
}

/// Builds the fallback set: the best home-cuisine candidates by rating and
/// favorite, or the best of the whole pool when there is no home cuisine.
fn fallback_candidates(pool: &[RecipeCandidate], home_cuisine: Cuisine) -> Vec<&RecipeCandidate> {
    let mut ranked: Vec<&RecipeCandidate> = pool
        .iter()
        .filter(|c| c.is_cuisine(home_cuisine))
        .collect();

    if ranked.is_empty() {
        ranked = pool.iter().collect();
    }

    // Stable sort keeps aggregation order among equal ranks
    ranked.sort_by(|a, b| compare_rank(b, a));
    ranked.truncate(FALLBACK_LIMIT);
    ranked
}

/// Picks the winner among `candidates`.
///
/// Home-cuisine candidates are preferred; within the chosen tier the highest
/// `(rating, is_favorite)` wins and ties keep the earliest candidate.
fn pick_winner<'a>(
    candidates: &[&'a RecipeCandidate],
    home_cuisine: Cuisine,
) -> Option<&'a RecipeCandidate> {
    let has_home: bool = candidates.iter().any(|c| c.is_cuisine(home_cuisine));

    candidates
        .iter()
        .copied()
        .filter(|c| !has_home || c.is_cuisine(home_cuisine))
        .reduce(|best, candidate| {
            if compare_rank(candidate, best) == Ordering::Greater {
                candidate
            } else {
                best
            }
        })
}

/// Compares two candidates by `(rating, is_favorite)`, ascending.
fn compare_rank(a: &RecipeCandidate, b: &RecipeCandidate) -> Ordering {
    a.rating
        .cmp(&b.rating)
        .then_with(|| a.is_favorite.cmp(&b.is_favorite))
}

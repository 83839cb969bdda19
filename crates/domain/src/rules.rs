// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Constraint rules for candidate eligibility.
//!
//! A candidate is eligible for a day only if all three rules pass:
//!
//! 1. Recency: its name was not used inside the lookback window.
//! 2. Staple cap: a staple main ingredient is used at most once per plan.
//! 3. Adjacency: a staple main ingredient never follows itself on the
//!    immediately preceding day.
//!
//! Every rule is a pure function of its inputs. [`failed_rules`] reports every
//! failing rule rather than stopping at the first one, so diagnostics can show
//! the full picture.

use crate::plan::PlanInProgress;
use crate::recipe::RecipeCandidate;
use crate::types::Day;
use crate::usage::UsageWindow;
use serde::{Deserialize, Serialize};

/// One of the three eligibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintRule {
    Recency,
    StapleCap,
    Adjacency,
}

impl ConstraintRule {
    /// All rules in evaluation order.
    pub const ALL: [Self; 3] = [Self::Recency, Self::StapleCap, Self::Adjacency];

    /// Returns the stable rule identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recency => "recency",
            Self::StapleCap => "staple_cap",
            Self::Adjacency => "adjacency",
        }
    }
}

impl std::fmt::Display for ConstraintRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recency rule: passes unless the candidate's name is in the usage window.
#[must_use]
pub fn passes_recency(candidate: &RecipeCandidate, window: &UsageWindow) -> bool {
    !window.was_recently_used(&candidate.name)
}

/// Staple cap rule: a staple-based candidate passes only while its ingredient
/// has not been used yet.
///
/// The cap counts each staple ingredient on its own, so a rice dish and a
/// pasta dish may share a week.
///
/// # Arguments
///
/// * `candidate` - The candidate to check
/// * `window` - Supplies the restricted staple set
/// * `prior_uses` - Uses of the candidate's ingredient on the days already filled
#[must_use]
pub fn passes_staple_cap(
    candidate: &RecipeCandidate,
    window: &UsageWindow,
    prior_uses: u32,
) -> bool {
    // Rule: non-staple ingredients have no cap
    if !window.is_staple(&candidate.main_ingredient) {
        return true;
    }
    prior_uses == 0
}

/// Adjacency rule: a staple-based candidate fails when the previous day used
/// the same staple.
///
/// Only the single preceding day is inspected.
#[must_use]
pub fn passes_adjacency(
    candidate: &RecipeCandidate,
    window: &UsageWindow,
    previous: Option<&RecipeCandidate>,
) -> bool {
    if !window.is_staple(&candidate.main_ingredient) {
        return true;
    }
    previous.is_none_or(|prev| prev.ingredient_key() != candidate.ingredient_key())
}

/// Evaluates every rule for `candidate` on `day` and returns the ones that fail.
///
/// The result is empty exactly when the candidate is eligible.
#[must_use]
pub fn failed_rules(
    candidate: &RecipeCandidate,
    window: &UsageWindow,
    plan: &PlanInProgress,
    day: Day,
) -> Vec<ConstraintRule> {
    let prior_uses: u32 = plan.use_count(&candidate.ingredient_key());
    let previous: Option<&RecipeCandidate> = plan.previous_recipe(day);

    ConstraintRule::ALL
        .into_iter()
        .filter(|rule| match rule {
            ConstraintRule::Recency => !passes_recency(candidate, window),
            ConstraintRule::StapleCap => !passes_staple_cap(candidate, window, prior_uses),
            ConstraintRule::Adjacency => !passes_adjacency(candidate, window, previous),
        })
        .collect()
}

/// Returns whether `candidate` passes all three rules on `day`.
#[must_use]
pub fn is_eligible(
    candidate: &RecipeCandidate,
    window: &UsageWindow,
    plan: &PlanInProgress,
    day: Day,
) -> bool {
    failed_rules(candidate, window, plan, day).is_empty()
}

/// Returns whether `candidate` passes the staple cap and adjacency rules on
/// `day`, ignoring recency.
///
/// Used by the home-cuisine guarantee, which may re-admit recently used
/// recipes but never breaks the staple rules.
#[must_use]
pub fn passes_staple_rules(
    candidate: &RecipeCandidate,
    window: &UsageWindow,
    plan: &PlanInProgress,
    day: Day,
) -> bool {
    passes_staple_cap(candidate, window, plan.use_count(&candidate.ingredient_key()))
        && passes_adjacency(candidate, window, plan.previous_recipe(day))
}

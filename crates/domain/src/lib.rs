// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod plan;
mod recipe;
mod rules;
mod types;
mod usage;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use plan::{DayAssignment, PlanInProgress, SelectionPath};
pub use recipe::{MAX_RATING, RecipeCandidate, RecipeRecord};
pub use rules::{
    ConstraintRule, failed_rules, is_eligible, passes_adjacency, passes_recency,
    passes_staple_cap, passes_staple_rules,
};
pub use types::{Cuisine, Day, RecipeSource, fold_key};
pub use usage::{DEFAULT_RESTRICTED_STAPLES, PastMeal, PastPlan, RestrictedStaples, UsageWindow};

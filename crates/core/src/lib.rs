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

mod aggregator;
mod config;
mod engine;
mod error;
mod history;
mod scorer;
mod selector;
mod shopping;
mod statistics;
mod variations;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use aggregator::{aggregate, ingest, merge_candidates};
pub use config::{
    DEFAULT_EXTERNAL_LIMIT, DEFAULT_HOME_CUISINE, DEFAULT_LOOKBACK_WEEKS, PlannerConfig,
    ValidatedConfig, parse_date,
};
pub use engine::{PlanOutcome, PlanRequest, UsageSummary, plan_week};
pub use error::EngineError;
pub use history::compute_usage_window;
pub use scorer::{
    BASE_SCORE, QualityReport, SUGGEST_DIVERSITY, SUGGEST_HOME_CUISINE, SUGGEST_REDUCE_REPETITION,
    VIOLATION_PENALTY, Violation, ViolationKind, ViolationReport, score,
};
pub use selector::{FALLBACK_LIMIT, HOME_READMIT_LIMIT, select_for_day};
pub use shopping::{build_shopping_list, pantry_items};
pub use statistics::{
    DEFAULT_BUDGET_PER_MEAL, PlanStatistics, TOP_INGREDIENT_COUNT, budget_per_meal,
    compute_statistics,
};
pub use variations::{HOME_VARIATION_LIMIT, OTHER_VARIATION_LIMIT, suggest_variations};

pub use mealplan_domain::{
    Cuisine, Day, DayAssignment, DomainError, PastMeal, PastPlan, PlanInProgress, RecipeCandidate,
    RecipeRecord, RecipeSource, RestrictedStaples, SelectionPath, UsageWindow, fold_key,
};

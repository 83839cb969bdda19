// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly planning entry point.
//!
//! A planning run is a single synchronous pass:
//! validate the configuration, build the usage window, aggregate each day's
//! pool, select Monday through Sunday in order, then score the result.
//! Nothing is persisted; the caller owns the outcome.

use crate::aggregator::{ingest, merge_candidates};
use crate::config::{PlannerConfig, ValidatedConfig};
use crate::error::EngineError;
use crate::history::compute_usage_window;
use crate::scorer::{QualityReport, score};
use crate::selector::select_for_day;
use crate::shopping::build_shopping_list;
use crate::statistics::{PlanStatistics, compute_statistics};
use mealplan_domain::{
    Day, DayAssignment, PastPlan, PlanInProgress, RecipeCandidate, RecipeRecord, RecipeSource,
    UsageWindow,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Everything a planning run needs, in one serde-friendly shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanRequest {
    /// Curated local recipes, offered every day.
    pub local_pool: Vec<RecipeRecord>,
    /// External catalog results keyed by day.
    pub external_pool_by_day: BTreeMap<Day, Vec<RecipeRecord>>,
    /// Past plan summaries from the recipe store.
    pub past_plans: Vec<PastPlan>,
    pub config: PlannerConfig,
}

impl PlanRequest {
    /// Runs [`plan_week`] over this request.
    ///
    /// # Errors
    ///
    /// See [`plan_week`].
    pub fn plan(&self) -> Result<PlanOutcome, EngineError> {
        plan_week(
            &self.local_pool,
            &self.external_pool_by_day,
            &self.past_plans,
            &self.config,
        )
    }
}

/// What the usage window looked like for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub plans_considered: usize,
    pub plans_excluded: usize,
    pub recent_recipes: usize,
}

impl From<&UsageWindow> for UsageSummary {
    fn from(window: &UsageWindow) -> Self {
        Self {
            plans_considered: window.plans_considered,
            plans_excluded: window.plans_excluded,
            recent_recipes: window.recently_used_names.len(),
        }
    }
}

/// The result of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// Exactly seven assignments, Monday through Sunday.
    pub assignments: Vec<DayAssignment>,
    pub quality: QualityReport,
    pub statistics: PlanStatistics,
    pub shopping_list: Vec<String>,
    pub usage: UsageSummary,
}

/// Plans one week of meal slots.
///
/// # Arguments
///
/// * `local_pool` - Curated local recipes, offered every day
/// * `external_pool_by_day` - External catalog results per day; missing days
///   get no external candidates
/// * `past_plans` - Past plan summaries from the recipe store
/// * `config` - Planner options
///
/// # Returns
///
/// The seven assignments with their quality report, statistics and
/// shopping list.
///
/// # Errors
///
/// Returns an error if:
/// - `config` fails validation (`EngineError::InvalidConfig`)
/// - One or more days have no candidate at all
///   (`EngineError::EmptyCandidatePool`, listing every such day)
pub fn plan_week(
    local_pool: &[RecipeRecord],
    external_pool_by_day: &BTreeMap<Day, Vec<RecipeRecord>>,
    past_plans: &[PastPlan],
    config: &PlannerConfig,
) -> Result<PlanOutcome, EngineError> {
    let config: ValidatedConfig = config.validate()?;

    info!(
        local_recipes = local_pool.len(),
        past_plans = past_plans.len(),
        lookback_weeks = config.lookback_weeks,
        home_cuisine = %config.home_cuisine,
        reference_date = %config.reference_date,
        "Planning week"
    );

    let window: UsageWindow = compute_usage_window(
        past_plans,
        config.lookback_weeks,
        config.reference_date,
        config.restricted_staples.clone(),
    );

    let pools: Vec<(Day, Vec<RecipeCandidate>)> =
        build_day_pools(local_pool, external_pool_by_day, config.external_limit);

    let empty_days: Vec<Day> = pools
        .iter()
        .filter(|(_, pool)| pool.is_empty())
        .map(|(day, _)| *day)
        .collect();
    if !empty_days.is_empty() {
        return Err(EngineError::EmptyCandidatePool { days: empty_days });
    }

    let mut plan: PlanInProgress = PlanInProgress::new();
    for (day, pool) in &pools {
        select_for_day(*day, pool, &window, &mut plan, config.home_cuisine)?;
    }

    let quality: QualityReport = score(&plan, &window, config.home_cuisine);
    let statistics: PlanStatistics = compute_statistics(plan.assignments());
    let shopping_list: Vec<String> = build_shopping_list(plan.assignments());

    info!(
        score = quality.score,
        violations = quality.violations.entries().len(),
        distinct_ingredients = quality.distinct_ingredients,
        home_cuisine_days = quality.home_cuisine_days,
        "Planned week"
    );

    Ok(PlanOutcome {
        assignments: plan.into_assignments(),
        quality,
        statistics,
        shopping_list,
        usage: UsageSummary::from(&window),
    })
}

/// Builds the aggregated pool for every day, in day order.
///
/// The local pool is normalized once. Each day's external pool is cut to
/// `external_limit` records before it is normalized.
fn build_day_pools(
    local_pool: &[RecipeRecord],
    external_pool_by_day: &BTreeMap<Day, Vec<RecipeRecord>>,
    external_limit: usize,
) -> Vec<(Day, Vec<RecipeCandidate>)> {
    let local: Vec<RecipeCandidate> = ingest(local_pool, RecipeSource::Local);

    Day::ALL
        .iter()
        .map(|day| {
            let external: &[RecipeRecord] = external_pool_by_day
                .get(day)
                .map(Vec::as_slice)
                .unwrap_or_default();

            if external.len() > external_limit {
                warn!(
                    %day,
                    received = external.len(),
                    kept = external_limit,
                    "Truncating external pool"
                );
            }
            let kept: &[RecipeRecord] = &external[..external.len().min(external_limit)];

            (
                *day,
                merge_candidates(local.clone(), ingest(kept, RecipeSource::External)),
            )
        })
        .collect()
}

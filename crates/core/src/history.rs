// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Usage history tracking.
//!
//! Builds the read-only [`UsageWindow`] for a planning run from persisted past
//! plans. A past plan counts when its start date falls within
//! `[reference_date - lookback_weeks, reference_date]`.

use crate::config::parse_date;
use mealplan_domain::{PastPlan, RestrictedStaples, UsageWindow};
use time::{Date, Duration};
use tracing::{debug, warn};

/// Computes the usage window for one planning run.
///
/// Past plans with an unparseable start date are excluded and logged; they
/// never abort the run.
///
/// # Arguments
///
/// * `past_plans` - Past plan summaries supplied by the recipe store
/// * `lookback_weeks` - Length of the trailing window
/// * `reference_date` - The day the window ends on
/// * `restricted_staples` - Staples carried into the window for the rules
#[must_use]
pub fn compute_usage_window(
    past_plans: &[PastPlan],
    lookback_weeks: u32,
    reference_date: Date,
    restricted_staples: RestrictedStaples,
) -> UsageWindow {
    let window_start: Date = reference_date
        .checked_sub(Duration::weeks(i64::from(lookback_weeks)))
        .unwrap_or(Date::MIN);

    let mut window: UsageWindow = UsageWindow::new(restricted_staples);

    for plan in past_plans {
        let start_date: Date = match parse_date(&plan.start_date) {
            Ok(date) => date,
            Err(err) => {
                warn!(
                    plan_id = plan.plan_id,
                    start_date = %plan.start_date,
                    error = %err,
                    "Excluding past plan with malformed start date from usage window"
                );
                window.plans_excluded += 1;
                continue;
            }
        };

        if start_date < window_start || start_date > reference_date {
            continue;
        }

        window.absorb(plan);
    }

    debug!(
        plans_considered = window.plans_considered,
        plans_excluded = window.plans_excluded,
        recent_recipes = window.recently_used_names.len(),
        %window_start,
        %reference_date,
        "Computed usage window"
    );

    window
}

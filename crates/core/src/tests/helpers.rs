// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PlannerConfig;
use mealplan_domain::{
    Day, DayAssignment, PastMeal, PastPlan, RecipeCandidate, RecipeRecord, RecipeSource,
    RestrictedStaples, UsageWindow,
};
use std::collections::BTreeMap;

pub const TEST_REFERENCE_DATE: &str = "2026-10-14";

pub fn create_test_config() -> PlannerConfig {
    PlannerConfig {
        reference_date: Some(String::from(TEST_REFERENCE_DATE)),
        ..PlannerConfig::default()
    }
}

pub fn create_test_record(name: &str, main_ingredient: &str, cuisine: &str, rating: i64) -> RecipeRecord {
    RecipeRecord::new(name, main_ingredient, cuisine, rating)
}

pub fn create_test_candidate(name: &str, main_ingredient: &str, cuisine: &str) -> RecipeCandidate {
    RecipeCandidate::from_record(
        &create_test_record(name, main_ingredient, cuisine, 3),
        RecipeSource::Local,
    )
    .expect("test candidate should be valid")
}

pub fn create_test_past_plan(plan_id: i64, start_date: &str, recipes: &[(&str, &str)]) -> PastPlan {
    PastPlan {
        plan_id,
        start_date: start_date.to_string(),
        meals: recipes
            .iter()
            .map(|(name, ingredient)| PastMeal::new(name, ingredient, "cameroun"))
            .collect(),
    }
}

/// The same external records offered on every day.
pub fn create_external_every_day(records: &[RecipeRecord]) -> BTreeMap<Day, Vec<RecipeRecord>> {
    Day::ALL
        .iter()
        .map(|day| (*day, records.to_vec()))
        .collect()
}

pub fn create_test_window_with_recent(names: &[&str]) -> UsageWindow {
    let mut window: UsageWindow = UsageWindow::new(RestrictedStaples::default());
    window
        .recently_used_names
        .extend(names.iter().map(|n| n.to_lowercase()));
    window
}

pub fn assigned_names(assignments: &[DayAssignment]) -> Vec<&str> {
    assignments.iter().map(|a| a.recipe.name.as_str()).collect()
}

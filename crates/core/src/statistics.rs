// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Descriptive statistics for a finished plan.
//!
//! Statistics are computed, not stored: a pure function of the assignments.

use mealplan_domain::{Cuisine, DayAssignment, RecipeCandidate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of entries kept in `top_ingredients`.
pub const TOP_INGREDIENT_COUNT: usize = 5;

/// Cost weight per minute of preparation.
const PREP_COST_PER_MINUTE: f64 = 0.5;

/// Cost weight per minute of cooking.
const COOK_COST_PER_MINUTE: f64 = 0.3;

/// Budget per meal for cuisines without a specific estimate.
pub const DEFAULT_BUDGET_PER_MEAL: f64 = 8.0;

/// Returns the estimated grocery budget for one meal of `cuisine`.
#[must_use]
pub const fn budget_per_meal(cuisine: Cuisine) -> f64 {
    match cuisine {
        Cuisine::Cameroun => 8.0,
        Cuisine::Asiatique => 6.0,
        Cuisine::Mexican => 7.0,
        Cuisine::French => 10.0,
        Cuisine::International => DEFAULT_BUDGET_PER_MEAL,
    }
}

/// Descriptive statistics for a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStatistics {
    pub total_meals: usize,
    /// Average rating over rated meals (rating above zero), rounded to one
    /// decimal. Zero when no meal is rated.
    pub avg_rating: f64,
    pub favorite_count: usize,
    pub cuisine_distribution: BTreeMap<Cuisine, usize>,
    /// Most used main ingredients, highest count first. Ties keep first appearance.
    pub top_ingredients: Vec<(String, usize)>,
    /// Average preparation minutes, rounded to one decimal.
    pub avg_prep_minutes: f64,
    /// Average cooking minutes, rounded to one decimal.
    pub avg_cook_minutes: f64,
    pub total_cooking_minutes: u32,
    /// Estimated cost, `sum(prep * 0.5 + cook * 0.3)`.
    pub estimated_cost: f64,
    /// Grocery budget, the sum of [`budget_per_meal`] over every meal.
    pub budget_estimate: f64,
}

/// Computes statistics over `assignments`.
///
/// An empty slice yields zeroed statistics.
#[must_use]
pub fn compute_statistics(assignments: &[DayAssignment]) -> PlanStatistics {
    let mut cuisine_distribution: BTreeMap<Cuisine, usize> = BTreeMap::new();
    let mut ingredient_counts: Vec<(String, String, usize)> = Vec::new();
    let mut total_prep: u32 = 0;
    let mut total_cook: u32 = 0;
    let mut total_cooking_minutes: u32 = 0;
    let mut estimated_cost: f64 = 0.0;
    let mut budget_estimate: f64 = 0.0;
    let mut rating_total: u32 = 0;
    let mut rated_meals: usize = 0;
    let mut favorite_count: usize = 0;

    for assignment in assignments {
        let recipe: &RecipeCandidate = &assignment.recipe;
        *cuisine_distribution.entry(recipe.cuisine).or_insert(0) += 1;

        let key: String = recipe.ingredient_key();
        match ingredient_counts.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, _, count)) => *count += 1,
            None => ingredient_counts.push((key, recipe.main_ingredient.clone(), 1)),
        }

        total_prep = total_prep.saturating_add(recipe.prep_minutes);
        total_cook = total_cook.saturating_add(recipe.cook_minutes);
        total_cooking_minutes = total_cooking_minutes.saturating_add(recipe.total_minutes());
        estimated_cost += f64::from(recipe.prep_minutes).mul_add(
            PREP_COST_PER_MINUTE,
            f64::from(recipe.cook_minutes) * COOK_COST_PER_MINUTE,
        );
        budget_estimate += budget_per_meal(recipe.cuisine);

        // Unrated meals do not drag the average down
        if recipe.rating > 0 {
            rating_total += u32::from(recipe.rating);
            rated_meals += 1;
        }
        if recipe.is_favorite {
            favorite_count += 1;
        }
    }

    // Stable sort keeps first appearance among equal counts
    ingredient_counts.sort_by(|a, b| b.2.cmp(&a.2));
    let top_ingredients: Vec<(String, usize)> = ingredient_counts
        .into_iter()
        .take(TOP_INGREDIENT_COUNT)
        .map(|(_, label, count)| (label, count))
        .collect();

    PlanStatistics {
        total_meals: assignments.len(),
        avg_rating: average(rating_total, rated_meals),
        favorite_count,
        cuisine_distribution,
        top_ingredients,
        avg_prep_minutes: average(total_prep, assignments.len()),
        avg_cook_minutes: average(total_cook, assignments.len()),
        total_cooking_minutes,
        estimated_cost,
        budget_estimate,
    }
}

#[allow(clippy::cast_precision_loss)]
fn average(total: u32, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let mean: f64 = f64::from(total) / count as f64;
    (mean * 10.0).round() / 10.0
}

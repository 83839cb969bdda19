// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Historical usage inputs for one planning run.

use crate::types::fold_key;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Staple ingredients restricted when no configuration overrides them.
pub const DEFAULT_RESTRICTED_STAPLES: [&str; 5] = ["riz", "pâtes", "pates", "pasta", "rice"];

/// The configured set of staple ingredients subject to the stricter
/// repetition and adjacency rules.
///
/// Entries are stored case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictedStaples {
    staples: BTreeSet<String>,
}

impl RestrictedStaples {
    /// Creates a staple set from raw ingredient names.
    ///
    /// Blank entries are ignored.
    #[must_use]
    pub fn new<I, S>(staples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            staples: staples
                .into_iter()
                .map(|s| fold_key(s.as_ref()))
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Returns whether `ingredient` is a restricted staple.
    #[must_use]
    pub fn contains(&self, ingredient: &str) -> bool {
        self.staples.contains(&fold_key(ingredient))
    }

    /// Returns the staples in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.staples.iter().map(String::as_str)
    }
}

impl Default for RestrictedStaples {
    fn default() -> Self {
        Self::new(DEFAULT_RESTRICTED_STAPLES)
    }
}

/// One meal of a persisted past plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PastMeal {
    pub recipe_name: String,
    pub main_ingredient: String,
    pub cuisine: String,
}

impl PastMeal {
    /// Creates a past meal entry.
    #[must_use]
    pub fn new(recipe_name: &str, main_ingredient: &str, cuisine: &str) -> Self {
        Self {
            recipe_name: recipe_name.to_string(),
            main_ingredient: main_ingredient.to_string(),
            cuisine: cuisine.to_string(),
        }
    }
}

/// Summary of a persisted past plan, as supplied by the recipe store.
///
/// `start_date` is kept as the raw stored string; records whose date cannot
/// be parsed are excluded from the usage window rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PastPlan {
    pub plan_id: i64,
    pub start_date: String,
    pub meals: Vec<PastMeal>,
}

/// Recent usage derived from past plans, read-only for a whole planning run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageWindow {
    /// Case-folded names of recipes used inside the lookback window.
    pub recently_used_names: BTreeSet<String>,
    /// Case-folded main ingredient counts across the in-window plans.
    pub ingredient_use_counts: BTreeMap<String, u32>,
    /// Staples subject to the cap and adjacency rules.
    pub restricted_staples: RestrictedStaples,
    /// Number of past plans that fell inside the window.
    pub plans_considered: usize,
    /// Number of past plans skipped for a malformed date.
    pub plans_excluded: usize,
}

impl UsageWindow {
    /// Creates an empty window with the given staples.
    #[must_use]
    pub fn new(restricted_staples: RestrictedStaples) -> Self {
        Self {
            restricted_staples,
            ..Self::default()
        }
    }

    /// Returns whether `name` was used inside the lookback window.
    #[must_use]
    pub fn was_recently_used(&self, name: &str) -> bool {
        self.recently_used_names.contains(&fold_key(name))
    }

    /// Returns whether `ingredient` is a restricted staple.
    #[must_use]
    pub fn is_staple(&self, ingredient: &str) -> bool {
        self.restricted_staples.contains(ingredient)
    }

    /// Folds the meals of one in-window past plan into the window.
    pub fn absorb(&mut self, plan: &PastPlan) {
        for meal in &plan.meals {
            let name: String = fold_key(&meal.recipe_name);
            if !name.is_empty() {
                self.recently_used_names.insert(name);
            }
            let ingredient: String = fold_key(&meal.main_ingredient);
            if !ingredient.is_empty() {
                *self.ingredient_use_counts.entry(ingredient).or_insert(0) += 1;
            }
        }
        self.plans_considered += 1;
    }
}

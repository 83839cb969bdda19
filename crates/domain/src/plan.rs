// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The run-scoped plan under construction.
//!
//! A `PlanInProgress` is created empty for each planning run and filled
//! strictly in day order. Ingredient counts are updated only when a day is
//! recorded, so the counts visible while selecting a day describe the days
//! before it.

use crate::error::DomainError;
use crate::recipe::RecipeCandidate;
use crate::types::Day;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a day's recipe was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPath {
    /// The winner passed every constraint rule.
    Eligible,
    /// The winner was re-admitted by the home-cuisine guarantee, ignoring recency.
    HomeCuisineReadmitted,
    /// No candidate survived; the winner came from the unconstrained fallback.
    Fallback,
}

/// The recipe assigned to one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssignment {
    pub day: Day,
    pub recipe: RecipeCandidate,
    pub path: SelectionPath,
}

/// The plan being filled during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanInProgress {
    assignments: Vec<DayAssignment>,
    ingredient_use_count: BTreeMap<String, u32>,
}

impl PlanInProgress {
    /// Creates an empty plan.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assignments: Vec::new(),
            ingredient_use_count: BTreeMap::new(),
        }
    }

    /// Returns the next day awaiting assignment, or `None` once complete.
    #[must_use]
    pub fn next_day(&self) -> Option<Day> {
        Day::ALL.get(self.assignments.len()).copied()
    }

    /// Returns whether all seven days are assigned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.next_day().is_none()
    }

    /// Returns the assignment for `day`, if filled.
    #[must_use]
    pub fn assignment(&self, day: Day) -> Option<&DayAssignment> {
        self.assignments.get(day.index())
    }

    /// Returns the recipe assigned to the day before `day`.
    #[must_use]
    pub fn previous_recipe(&self, day: Day) -> Option<&RecipeCandidate> {
        day.previous()
            .and_then(|prev| self.assignment(prev))
            .map(|a| &a.recipe)
    }

    /// Returns how many assigned days use `ingredient` (case-folded key).
    #[must_use]
    pub fn use_count(&self, ingredient_key: &str) -> u32 {
        self.ingredient_use_count
            .get(ingredient_key)
            .copied()
            .unwrap_or(0)
    }

    /// Returns the filled assignments in day order.
    #[must_use]
    pub fn assignments(&self) -> &[DayAssignment] {
        &self.assignments
    }

    /// Returns the per-ingredient use counts.
    #[must_use]
    pub const fn ingredient_use_count(&self) -> &BTreeMap<String, u32> {
        &self.ingredient_use_count
    }

    /// Records the winner for `day` and bumps its ingredient count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DayOutOfOrder` if `day` is not the next day
    /// awaiting assignment.
    pub fn record(
        &mut self,
        day: Day,
        recipe: RecipeCandidate,
        path: SelectionPath,
    ) -> Result<(), DomainError> {
        let expected: Option<Day> = self.next_day();
        if expected != Some(day) {
            return Err(DomainError::DayOutOfOrder {
                expected,
                actual: day,
            });
        }

        *self
            .ingredient_use_count
            .entry(recipe.ingredient_key())
            .or_insert(0) += 1;
        self.assignments.push(DayAssignment { day, recipe, path });
        Ok(())
    }

    /// Consumes the plan, returning its assignments.
    #[must_use]
    pub fn into_assignments(self) -> Vec<DayAssignment> {
        self.assignments
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Post-hoc plan quality scoring.
//!
//! The scorer never trusts selection-time decisions. It re-runs the three
//! constraint rules over the finished plan, adds a whole-plan ingredient
//! repetition check, and reports every fallback day.
//!
//! Whole-plan repetition flags any ingredient used more than once, staple or
//! not, although the selector only prevents staple repetition. Selection and
//! scoring intentionally disagree here.

use mealplan_domain::{
    Cuisine, Day, PlanInProgress, RecipeCandidate, SelectionPath, UsageWindow, passes_adjacency,
    passes_recency, passes_staple_cap,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Score a plan starts from.
pub const BASE_SCORE: i32 = 100;

/// Points deducted per penalized violation.
pub const VIOLATION_PENALTY: i32 = 10;

/// Suggestion emitted when ingredient diversity is below the top bonus tier.
pub const SUGGEST_DIVERSITY: &str = "Add more ingredient diversity";

/// Suggestion emitted when no day uses the home cuisine.
pub const SUGGEST_HOME_CUISINE: &str = "Include at least one home-cuisine recipe";

/// Suggestion emitted when any penalized violation was found.
pub const SUGGEST_REDUCE_REPETITION: &str = "Reduce ingredient repetition";

/// The kind of a reported violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The recipe was used inside the lookback window.
    Recency,
    /// A staple was used more than once.
    StapleCap,
    /// A staple followed itself on consecutive days.
    Adjacency,
    /// Any ingredient was used more than once across the plan.
    IngredientRepetition,
    /// The day was filled by the unconstrained fallback.
    Fallback,
}

impl ViolationKind {
    /// Returns whether this kind deducts points.
    ///
    /// Fallback entries are informational.
    #[must_use]
    pub const fn is_penalized(self) -> bool {
        !matches!(self, Self::Fallback)
    }

    /// Returns the stable identifier of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recency => "recency",
            Self::StapleCap => "staple_cap",
            Self::Adjacency => "adjacency",
            Self::IngredientRepetition => "ingredient_repetition",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reported violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The rule broken.
    pub kind: ViolationKind,
    /// The offending day or days.
    pub days: Vec<Day>,
    /// The recipe involved, for per-day entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    /// The ingredient involved, for ingredient rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,
    /// Human-readable description.
    pub description: String,
}

/// Ordered, append-only list of violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationReport {
    entries: Vec<Violation>,
}

impl ViolationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn push(&mut self, violation: Violation) {
        self.entries.push(violation);
    }

    /// Returns every entry in report order.
    #[must_use]
    pub fn entries(&self) -> &[Violation] {
        &self.entries
    }

    /// Returns the number of entries of `kind`.
    #[must_use]
    pub fn count(&self, kind: ViolationKind) -> usize {
        self.entries.iter().filter(|v| v.kind == kind).count()
    }

    /// Returns the number of entries that deduct points.
    #[must_use]
    pub fn penalized_count(&self) -> usize {
        self.entries.iter().filter(|v| v.kind.is_penalized()).count()
    }

    /// Returns whether the report has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of scoring a finished plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Final score in 0..=100.
    pub score: u8,
    pub violations: ViolationReport,
    /// Improvement hints in a stable order.
    pub suggestions: Vec<String>,
    /// Number of distinct main ingredients.
    pub distinct_ingredients: usize,
    /// Number of days using the home cuisine.
    pub home_cuisine_days: usize,
}

/// Scores a finished plan.
///
/// Calling this twice on the same plan yields identical output.
///
/// # Arguments
///
/// * `plan` - The finished plan
/// * `window` - The usage window the plan was built against
/// * `home_cuisine` - The cuisine given preferential treatment
#[must_use]
pub fn score(plan: &PlanInProgress, window: &UsageWindow, home_cuisine: Cuisine) -> QualityReport {
    let violations: ViolationReport = collect_violations(plan, window);

    let distinct_ingredients: usize = plan
        .assignments()
        .iter()
        .map(|a| a.recipe.ingredient_key())
        .collect::<BTreeSet<String>>()
        .len();
    let home_cuisine_days: usize = plan
        .assignments()
        .iter()
        .filter(|a| a.recipe.is_cuisine(home_cuisine))
        .count();

    let penalty: i32 = i32::try_from(violations.penalized_count())
        .unwrap_or(i32::MAX)
        .saturating_mul(VIOLATION_PENALTY);
    let raw_score: i32 = BASE_SCORE
        .saturating_sub(penalty)
        .saturating_add(diversity_bonus(distinct_ingredients))
        .saturating_add(home_cuisine_bonus(home_cuisine_days));
    let score: u8 = u8::try_from(raw_score.clamp(0, BASE_SCORE)).unwrap_or(0);

    let mut suggestions: Vec<String> = Vec::new();
    if distinct_ingredients < 5 {
        suggestions.push(String::from(SUGGEST_DIVERSITY));
    }
    if home_cuisine_days == 0 {
        suggestions.push(String::from(SUGGEST_HOME_CUISINE));
    }
    if violations.penalized_count() > 0 {
        suggestions.push(String::from(SUGGEST_REDUCE_REPETITION));
    }

    QualityReport {
        score,
        violations,
        suggestions,
        distinct_ingredients,
        home_cuisine_days,
    }
}

/// +10 for five or more distinct ingredients, +5 for three or more.
const fn diversity_bonus(distinct_ingredients: usize) -> i32 {
    if distinct_ingredients >= 5 {
        10
    } else if distinct_ingredients >= 3 {
        5
    } else {
        0
    }
}

/// +15 for three or more home-cuisine days, +10 for at least one.
const fn home_cuisine_bonus(home_cuisine_days: usize) -> i32 {
    if home_cuisine_days >= 3 {
        15
    } else if home_cuisine_days >= 1 {
        10
    } else {
        0
    }
}

fn collect_violations(plan: &PlanInProgress, window: &UsageWindow) -> ViolationReport {
    let mut report: ViolationReport = ViolationReport::new();
    let mut prior_uses: BTreeMap<String, u32> = BTreeMap::new();
    let mut previous: Option<(Day, &RecipeCandidate)> = None;

    for assignment in plan.assignments() {
        let day: Day = assignment.day;
        let recipe: &RecipeCandidate = &assignment.recipe;
        let key: String = recipe.ingredient_key();
        let uses_before: u32 = prior_uses.get(&key).copied().unwrap_or(0);

        if !passes_recency(recipe, window) {
            report.push(Violation {
                kind: ViolationKind::Recency,
                days: vec![day],
                recipe: Some(recipe.name.clone()),
                ingredient: None,
                description: format!(
                    "'{}' on {day} was already served within the lookback window",
                    recipe.name
                ),
            });
        }

        if !passes_staple_cap(recipe, window, uses_before) {
            report.push(Violation {
                kind: ViolationKind::StapleCap,
                days: vec![day],
                recipe: Some(recipe.name.clone()),
                ingredient: Some(recipe.main_ingredient.clone()),
                description: format!(
                    "Staple '{}' on {day} exceeds one use per plan",
                    recipe.main_ingredient
                ),
            });
        }

        if let Some((previous_day, previous_recipe)) = previous {
            if !passes_adjacency(recipe, window, Some(previous_recipe)) {
                report.push(Violation {
                    kind: ViolationKind::Adjacency,
                    days: vec![previous_day, day],
                    recipe: Some(recipe.name.clone()),
                    ingredient: Some(recipe.main_ingredient.clone()),
                    description: format!(
                        "Staple '{}' served on consecutive days: {previous_day} -> {day}",
                        recipe.main_ingredient
                    ),
                });
            }
        }

        if assignment.path == SelectionPath::Fallback {
            report.push(Violation {
                kind: ViolationKind::Fallback,
                days: vec![day],
                recipe: Some(recipe.name.clone()),
                ingredient: None,
                description: format!(
                    "No candidate passed the constraint rules on {day}; '{}' was chosen by fallback",
                    recipe.name
                ),
            });
        }

        *prior_uses.entry(key).or_insert(0) += 1;
        previous = Some((day, recipe));
    }

    for (ingredient, days) in ingredient_days(plan) {
        if days.len() > 1 {
            report.push(Violation {
                kind: ViolationKind::IngredientRepetition,
                description: format!("Ingredient '{ingredient}' used {} times", days.len()),
                days,
                recipe: None,
                ingredient: Some(ingredient),
            });
        }
    }

    report
}

/// Groups days by case-folded main ingredient, in order of first appearance.
///
/// Each group is labelled with the ingredient as first written.
fn ingredient_days(plan: &PlanInProgress) -> Vec<(String, Vec<Day>)> {
    let mut groups: Vec<(String, String, Vec<Day>)> = Vec::new();

    for assignment in plan.assignments() {
        let key: String = assignment.recipe.ingredient_key();
        match groups.iter_mut().find(|(k, _, _)| *k == key) {
            Some((_, _, days)) => days.push(assignment.day),
            None => groups.push((
                key,
                assignment.recipe.main_ingredient.clone(),
                vec![assignment.day],
            )),
        }
    }

    groups
        .into_iter()
        .map(|(_, label, days)| (label, days))
        .collect()
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for single-day selection through `select_for_day`.

use crate::{EngineError, select_for_day};
use mealplan_domain::{
    Cuisine, Day, DomainError, PlanInProgress, RecipeCandidate, RecipeRecord, RecipeSource,
    SelectionPath, UsageWindow,
};

use super::helpers::{create_test_candidate, create_test_record, create_test_window_with_recent};

fn rated(name: &str, main_ingredient: &str, cuisine: &str, rating: i64, favorite: bool) -> RecipeCandidate {
    let record: RecipeRecord = RecipeRecord {
        is_favorite: Some(favorite),
        ..create_test_record(name, main_ingredient, cuisine, rating)
    };
    RecipeCandidate::from_record(&record, RecipeSource::Local).unwrap()
}

#[test]
fn test_selection_records_winner_into_plan() {
    let pool: Vec<RecipeCandidate> = vec![create_test_candidate("Koki", "haricots", "cameroun")];
    let window: UsageWindow = create_test_window_with_recent(&[]);
    let mut plan: PlanInProgress = PlanInProgress::new();

    let winner: RecipeCandidate =
        select_for_day(Day::Monday, &pool, &window, &mut plan, Cuisine::Cameroun).unwrap();

    assert_eq!(winner.name, "Koki");
    assert_eq!(plan.next_day(), Some(Day::Tuesday));
    assert_eq!(plan.use_count("haricots"), 1);
    assert_eq!(
        plan.assignment(Day::Monday).map(|a| a.path),
        Some(SelectionPath::Eligible)
    );
}

#[test]
fn test_selection_rejects_out_of_order_day() {
    let pool: Vec<RecipeCandidate> = vec![create_test_candidate("Koki", "haricots", "cameroun")];
    let window: UsageWindow = create_test_window_with_recent(&[]);
    let mut plan: PlanInProgress = PlanInProgress::new();

    let err: EngineError =
        select_for_day(Day::Tuesday, &pool, &window, &mut plan, Cuisine::Cameroun).unwrap_err();

    assert_eq!(
        err,
        EngineError::DomainViolation(DomainError::DayOutOfOrder {
            expected: Some(Day::Monday),
            actual: Day::Tuesday,
        })
    );
    assert!(plan.assignments().is_empty());
}

#[test]
fn test_home_cuisine_beats_higher_rating() {
    let pool: Vec<RecipeCandidate> = vec![
        rated("Ramen", "nouilles", "asiatique", 5, true),
        rated("Eru", "eru", "cameroun", 2, false),
    ];
    let window: UsageWindow = create_test_window_with_recent(&[]);
    let mut plan: PlanInProgress = PlanInProgress::new();

    let winner: RecipeCandidate =
        select_for_day(Day::Monday, &pool, &window, &mut plan, Cuisine::Cameroun).unwrap();

    assert_eq!(winner.name, "Eru");
}

#[test]
fn test_favorite_breaks_rating_tie() {
    let pool: Vec<RecipeCandidate> = vec![
        rated("Eru", "eru", "cameroun", 4, false),
        rated("Okok", "okok", "cameroun", 4, true),
        rated("Koki", "haricots", "cameroun", 3, true),
    ];
    let window: UsageWindow = create_test_window_with_recent(&[]);
    let mut plan: PlanInProgress = PlanInProgress::new();

    let winner: RecipeCandidate =
        select_for_day(Day::Monday, &pool, &window, &mut plan, Cuisine::Cameroun).unwrap();

    assert_eq!(winner.name, "Okok");
}

#[test]
fn test_home_cuisine_setting_changes_preferred_tier() {
    let pool: Vec<RecipeCandidate> = vec![
        rated("Eru", "eru", "cameroun", 5, false),
        rated("Quiche", "oeufs", "french", 1, false),
    ];
    let window: UsageWindow = create_test_window_with_recent(&[]);
    let mut plan: PlanInProgress = PlanInProgress::new();

    let winner: RecipeCandidate =
        select_for_day(Day::Monday, &pool, &window, &mut plan, Cuisine::French).unwrap();

    assert_eq!(winner.name, "Quiche");
}

#[test]
fn test_readmission_takes_first_two_home_candidates_in_pool_order() {
    let pool: Vec<RecipeCandidate> = vec![
        rated("Eru", "eru", "cameroun", 1, false),
        rated("Koki", "haricots", "cameroun", 2, false),
        rated("Ndolé", "arachides", "cameroun", 5, false),
        rated("Tacos", "boeuf", "mexican", 4, false),
    ];
    let window: UsageWindow = create_test_window_with_recent(&["Eru", "Koki", "Ndolé"]);
    let mut plan: PlanInProgress = PlanInProgress::new();

    let winner: RecipeCandidate =
        select_for_day(Day::Monday, &pool, &window, &mut plan, Cuisine::Cameroun).unwrap();

    assert_eq!(winner.name, "Koki");
    assert_eq!(
        plan.assignment(Day::Monday).map(|a| a.path),
        Some(SelectionPath::HomeCuisineReadmitted)
    );
}

#[test]
fn test_fallback_ignores_every_rule() {
    let pool: Vec<RecipeCandidate> = vec![
        rated("Riz gras", "riz", "cameroun", 3, false),
        rated("Riz sauté", "riz", "asiatique", 5, false),
    ];
    let window: UsageWindow = create_test_window_with_recent(&["Riz sauté"]);
    let mut plan: PlanInProgress = PlanInProgress::new();

    select_for_day(Day::Monday, &pool, &window, &mut plan, Cuisine::Cameroun).unwrap();
    let tuesday: RecipeCandidate =
        select_for_day(Day::Tuesday, &pool, &window, &mut plan, Cuisine::Cameroun).unwrap();

    assert_eq!(tuesday.name, "Riz gras");
    assert_eq!(
        plan.assignment(Day::Tuesday).map(|a| a.path),
        Some(SelectionPath::Fallback)
    );
    assert_eq!(plan.use_count("riz"), 2);
}

#[test]
fn test_non_staple_recipe_may_repeat() {
    let pool: Vec<RecipeCandidate> = vec![create_test_candidate("Koki", "haricots", "cameroun")];
    let window: UsageWindow = create_test_window_with_recent(&[]);
    let mut plan: PlanInProgress = PlanInProgress::new();

    for day in Day::ALL {
        select_for_day(day, &pool, &window, &mut plan, Cuisine::Cameroun).unwrap();
    }

    assert!(plan.is_complete());
    assert!(
        plan.assignments()
            .iter()
            .all(|a| a.path == SelectionPath::Eligible)
    );
    assert_eq!(plan.use_count("haricots"), 7);
}

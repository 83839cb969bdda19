// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the eligibility rules.

use crate::{
    ConstraintRule, Day, PlanInProgress, RecipeCandidate, RestrictedStaples, SelectionPath,
    UsageWindow, failed_rules, is_eligible, passes_adjacency, passes_recency, passes_staple_cap,
    passes_staple_rules,
};

use super::helpers::{create_test_candidate, create_test_window, create_test_window_with_recent};

#[test]
fn test_recency_rejects_recent_name_case_insensitively() {
    let window: UsageWindow = create_test_window_with_recent(&["Ndolé"]);
    let candidate: RecipeCandidate = create_test_candidate("NDOLÉ", "arachides", "cameroun");

    assert!(!passes_recency(&candidate, &window));
}

#[test]
fn test_recency_accepts_unused_name() {
    let window: UsageWindow = create_test_window_with_recent(&["Ndolé"]);
    let candidate: RecipeCandidate = create_test_candidate("Eru", "eru", "cameroun");

    assert!(passes_recency(&candidate, &window));
}

#[test]
fn test_staple_cap_allows_first_use_only() {
    let window: UsageWindow = create_test_window();
    let candidate: RecipeCandidate = create_test_candidate("Riz sauté", "Riz", "asiatique");

    assert!(passes_staple_cap(&candidate, &window, 0));
    assert!(!passes_staple_cap(&candidate, &window, 1));
}

#[test]
fn test_staple_cap_ignores_non_staples() {
    let window: UsageWindow = create_test_window();
    let candidate: RecipeCandidate = create_test_candidate("Poulet DG", "poulet", "cameroun");

    assert!(passes_staple_cap(&candidate, &window, 4));
}

#[test]
fn test_adjacency_rejects_same_staple_on_previous_day() {
    let window: UsageWindow = create_test_window();
    let yesterday: RecipeCandidate = create_test_candidate("Riz gras", "riz", "cameroun");
    let today: RecipeCandidate = create_test_candidate("Riz cantonais", "RIZ", "asiatique");

    assert!(!passes_adjacency(&today, &window, Some(&yesterday)));
    assert!(passes_adjacency(&today, &window, None));
}

#[test]
fn test_adjacency_ignores_different_previous_ingredient() {
    let window: UsageWindow = create_test_window();
    let yesterday: RecipeCandidate = create_test_candidate("Spaghetti", "pasta", "french");
    let today: RecipeCandidate = create_test_candidate("Riz gras", "riz", "cameroun");

    assert!(passes_adjacency(&today, &window, Some(&yesterday)));
}

#[test]
fn test_failed_rules_reports_every_failing_rule() {
    let window: UsageWindow = create_test_window_with_recent(&["Riz gras"]);
    let mut plan: PlanInProgress = PlanInProgress::new();
    plan.record(
        Day::Monday,
        create_test_candidate("Riz cantonais", "riz", "asiatique"),
        SelectionPath::Eligible,
    )
    .unwrap();
    let candidate: RecipeCandidate = create_test_candidate("Riz gras", "riz", "cameroun");

    let failed: Vec<ConstraintRule> = failed_rules(&candidate, &window, &plan, Day::Tuesday);

    assert_eq!(
        failed,
        vec![
            ConstraintRule::Recency,
            ConstraintRule::StapleCap,
            ConstraintRule::Adjacency
        ]
    );
    assert!(!is_eligible(&candidate, &window, &plan, Day::Tuesday));
}

#[test]
fn test_staple_rules_ignore_recency() {
    let window: UsageWindow = create_test_window_with_recent(&["Koki"]);
    let plan: PlanInProgress = PlanInProgress::new();
    let candidate: RecipeCandidate = create_test_candidate("Koki", "haricots", "cameroun");

    assert!(!is_eligible(&candidate, &window, &plan, Day::Monday));
    assert!(passes_staple_rules(&candidate, &window, &plan, Day::Monday));
}

#[test]
fn test_adjacency_only_inspects_previous_day() {
    let window: UsageWindow = UsageWindow::new(RestrictedStaples::new(["riz"]));
    let mut plan: PlanInProgress = PlanInProgress::new();
    plan.record(
        Day::Monday,
        create_test_candidate("Riz gras", "riz", "cameroun"),
        SelectionPath::Eligible,
    )
    .unwrap();
    plan.record(
        Day::Tuesday,
        create_test_candidate("Poulet DG", "poulet", "cameroun"),
        SelectionPath::Eligible,
    )
    .unwrap();
    let candidate: RecipeCandidate = create_test_candidate("Riz jollof", "riz", "international");

    let failed: Vec<ConstraintRule> = failed_rules(&candidate, &window, &plan, Day::Wednesday);

    // Monday's rice still counts against the cap, but not against adjacency
    assert_eq!(failed, vec![ConstraintRule::StapleCap]);
}

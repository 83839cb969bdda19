// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shopping list for a finished plan.

use mealplan_domain::{Cuisine, DayAssignment, fold_key};
use std::collections::HashSet;

/// Returns the pantry items every meal of `cuisine` is assumed to need.
#[must_use]
pub const fn pantry_items(cuisine: Cuisine) -> &'static [&'static str] {
    match cuisine {
        Cuisine::Cameroun => &[
            "oignons",
            "tomates",
            "ail",
            "gingembre",
            "huile de palme",
            "piment",
            "cubes maggi",
            "plantain",
            "taro",
            "arachide",
            "feuilles vertes",
            "poisson fumé",
        ],
        Cuisine::Asiatique => &[
            "sauce soja",
            "gingembre",
            "ail",
            "oignons verts",
            "huile de sésame",
            "nouilles de riz",
            "tofu",
            "lait de coco",
            "curry",
            "pousses de soja",
            "carottes",
            "brocolis",
        ],
        Cuisine::Mexican => &["avocat", "lime", "coriandre", "fromage", "tortillas"],
        Cuisine::French | Cuisine::International => &[],
    }
}

/// Builds the shopping list for `assignments`.
///
/// Each meal contributes its main ingredient, then its cuisine's
/// [`pantry_items`]. Items are de-duplicated case-insensitively and keep the
/// spelling and position of their first appearance.
#[must_use]
pub fn build_shopping_list(assignments: &[DayAssignment]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut items: Vec<String> = Vec::new();

    for assignment in assignments {
        let ingredient: &str = assignment.recipe.main_ingredient.as_str();
        let pantry: &[&str] = pantry_items(assignment.recipe.cuisine);

        for item in std::iter::once(ingredient).chain(pantry.iter().copied()) {
            if seen.insert(fold_key(item)) {
                items.push(item.to_string());
            }
        }
    }

    items
}

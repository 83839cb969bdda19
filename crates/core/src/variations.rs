// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Alternative recipes for a chosen dish.

use mealplan_domain::{Cuisine, RecipeCandidate, RecipeSource};

/// Maximum variations offered for a home-cuisine dish.
pub const HOME_VARIATION_LIMIT: usize = 3;

/// Maximum variations offered for any other dish.
pub const OTHER_VARIATION_LIMIT: usize = 5;

/// Suggests variations of `base` drawn from `pool`.
///
/// A home-cuisine base gets up to three LOCAL home-cuisine recipes sharing its
/// main ingredient. Any other base gets up to five recipes of any source
/// sharing its main ingredient. The base itself is never suggested, and
/// results are ordered by rating (highest first), then pool order.
#[must_use]
pub fn suggest_variations(
    base: &RecipeCandidate,
    pool: &[RecipeCandidate],
    home_cuisine: Cuisine,
) -> Vec<RecipeCandidate> {
    let base_name: String = base.name_key();
    let base_ingredient: String = base.ingredient_key();
    let is_home: bool = base.is_cuisine(home_cuisine);

    let mut matches: Vec<&RecipeCandidate> = pool
        .iter()
        .filter(|c| c.name_key() != base_name && c.ingredient_key() == base_ingredient)
        .filter(|c| !is_home || (c.is_cuisine(home_cuisine) && c.source == RecipeSource::Local))
        .collect();

    matches.sort_by(|a, b| b.rating.cmp(&a.rating));

    let limit: usize = if is_home {
        HOME_VARIATION_LIMIT
    } else {
        OTHER_VARIATION_LIMIT
    };

    matches.into_iter().take(limit).cloned().collect()
}

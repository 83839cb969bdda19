// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RecipeCandidate, RecipeRecord, RecipeSource, RestrictedStaples, UsageWindow};

pub fn create_test_candidate(name: &str, main_ingredient: &str, cuisine: &str) -> RecipeCandidate {
    RecipeCandidate::from_record(
        &RecipeRecord::new(name, main_ingredient, cuisine, 3),
        RecipeSource::Local,
    )
    .expect("test candidate should be valid")
}

pub fn create_test_window() -> UsageWindow {
    UsageWindow::new(RestrictedStaples::default())
}

pub fn create_test_window_with_recent(names: &[&str]) -> UsageWindow {
    let mut window: UsageWindow = create_test_window();
    window
        .recently_used_names
        .extend(names.iter().map(|n| n.to_lowercase()));
    window
}

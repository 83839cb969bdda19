// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recipe record model.
//!
//! Recipes arrive from two origins with differing field availability: the local
//! curated set and the remote catalog. Both are ingested as a raw
//! [`RecipeRecord`] and normalized once into a [`RecipeCandidate`]. Missing
//! fields take their defaults here, never at use time.

use crate::error::DomainError;
use crate::types::{Cuisine, RecipeSource, fold_key};
use serde::{Deserialize, Serialize};

/// Highest rating a recipe can carry.
pub const MAX_RATING: u8 = 5;

/// A raw recipe record as supplied by a recipe store or catalog.
///
/// Field names from the household recipe store (`recipe_name`, `cuisine_type`,
/// `prep_time`, `cook_time`, `jow_recipe_id`, `jow_recipe_url`) are accepted as
/// aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeRecord {
    /// The recipe name.
    #[serde(alias = "recipe_name")]
    pub name: String,
    /// The dominant ingredient.
    pub main_ingredient: Option<String>,
    /// The cuisine tag, free-form.
    #[serde(alias = "cuisine_type")]
    pub cuisine: Option<String>,
    /// Preparation time in minutes. Negative values are clamped to zero.
    #[serde(alias = "prep_time")]
    pub prep_minutes: Option<i64>,
    /// Cooking time in minutes. Negative values are clamped to zero.
    #[serde(alias = "cook_time")]
    pub cook_minutes: Option<i64>,
    /// Rating, expected within 0..=5.
    pub rating: Option<i64>,
    /// Whether the household marked the recipe as a favorite.
    pub is_favorite: Option<bool>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Picture of the dish.
    pub image_url: Option<String>,
    /// Identifier in the remote catalog.
    #[serde(alias = "jow_recipe_id")]
    pub external_id: Option<String>,
    /// Link to the recipe in the remote catalog.
    #[serde(alias = "jow_recipe_url")]
    pub external_url: Option<String>,
}

impl RecipeRecord {
    /// Creates a record carrying only the fields the planner ranks on.
    #[must_use]
    pub fn new(name: &str, main_ingredient: &str, cuisine: &str, rating: i64) -> Self {
        Self {
            name: name.to_string(),
            main_ingredient: Some(main_ingredient.to_string()),
            cuisine: Some(cuisine.to_string()),
            rating: Some(rating),
            ..Self::default()
        }
    }
}

/// A normalized candidate recipe, independent of origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCandidate {
    /// Display name, trimmed.
    pub name: String,
    /// Main ingredient, trimmed.
    pub main_ingredient: String,
    /// Cuisine family.
    pub cuisine: Cuisine,
    /// Preparation time in minutes.
    pub prep_minutes: u32,
    /// Cooking time in minutes.
    pub cook_minutes: u32,
    /// Rating in 0..=5.
    pub rating: u8,
    /// Favorite flag.
    pub is_favorite: bool,
    /// Origin of the record.
    pub source: RecipeSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl RecipeCandidate {
    /// Normalizes a raw record into a candidate tagged with `source`.
    ///
    /// # Arguments
    ///
    /// * `record` - The raw record
    /// * `source` - Which pool the record came from
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty after trimming
    /// - The main ingredient is missing or empty after trimming
    pub fn from_record(record: &RecipeRecord, source: RecipeSource) -> Result<Self, DomainError> {
        let name: &str = record.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidRecipeName(String::from(
                "Recipe name cannot be empty",
            )));
        }

        let main_ingredient: &str = record.main_ingredient.as_deref().unwrap_or("").trim();
        if main_ingredient.is_empty() {
            return Err(DomainError::InvalidMainIngredient {
                recipe: name.to_string(),
            });
        }

        let cuisine: Cuisine = record
            .cuisine
            .as_deref()
            .map_or(Cuisine::International, Cuisine::from_tag_lossy);

        Ok(Self {
            name: name.to_string(),
            main_ingredient: main_ingredient.to_string(),
            cuisine,
            prep_minutes: clamp_minutes(record.prep_minutes),
            cook_minutes: clamp_minutes(record.cook_minutes),
            rating: clamp_rating(record.rating),
            is_favorite: record.is_favorite.unwrap_or(false),
            source,
            notes: non_blank(record.notes.as_deref()),
            image_url: non_blank(record.image_url.as_deref()),
            external_id: non_blank(record.external_id.as_deref()),
            external_url: non_blank(record.external_url.as_deref()),
        })
    }

    /// Returns the case-folded name used for recency and de-duplication.
    #[must_use]
    pub fn name_key(&self) -> String {
        fold_key(&self.name)
    }

    /// Returns the case-folded main ingredient used for repetition rules.
    #[must_use]
    pub fn ingredient_key(&self) -> String {
        fold_key(&self.main_ingredient)
    }

    /// Returns the combined preparation and cooking time.
    #[must_use]
    pub const fn total_minutes(&self) -> u32 {
        self.prep_minutes.saturating_add(self.cook_minutes)
    }

    /// Returns whether this candidate belongs to `cuisine`.
    #[must_use]
    pub fn is_cuisine(&self, cuisine: Cuisine) -> bool {
        self.cuisine == cuisine
    }
}

fn clamp_minutes(value: Option<i64>) -> u32 {
    let minutes: i64 = value.unwrap_or(0).max(0);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

fn clamp_rating(value: Option<i64>) -> u8 {
    let rating: i64 = value.unwrap_or(0).clamp(0, i64::from(MAX_RATING));
    u8::try_from(rating).unwrap_or(0)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

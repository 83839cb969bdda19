// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Day;

/// Errors that can occur while building or mutating domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Recipe name is empty after normalization.
    InvalidRecipeName(String),
    /// Main ingredient is empty after normalization.
    InvalidMainIngredient {
        /// The recipe the ingredient belongs to.
        recipe: String,
    },
    /// Cuisine tag is not one of the known cuisines.
    UnknownCuisine(String),
    /// Day name could not be parsed.
    InvalidDay(String),
    /// A date string could not be parsed.
    DateParseError {
        /// The date string that failed to parse.
        date_string: String,
        /// The parse error message.
        error: String,
    },
    /// A day was assigned out of Monday..Sunday order.
    DayOutOfOrder {
        /// The next day the plan expects.
        expected: Option<Day>,
        /// The day that was supplied.
        actual: Day,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRecipeName(msg) => write!(f, "Invalid recipe name: {msg}"),
            Self::InvalidMainIngredient { recipe } => {
                write!(f, "Recipe '{recipe}' has no main ingredient")
            }
            Self::UnknownCuisine(tag) => write!(f, "Unknown cuisine: {tag}"),
            Self::InvalidDay(msg) => write!(f, "Invalid day: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DayOutOfOrder { expected, actual } => match expected {
                Some(expected) => write!(
                    f,
                    "Cannot assign {actual}: the next day to assign is {expected}"
                ),
                None => write!(f, "Cannot assign {actual}: the plan is already complete"),
            },
        }
    }
}

impl std::error::Error for DomainError {}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mealplan_domain::{Day, DomainError};
use thiserror::Error;

/// Errors that stop a planning run.
///
/// Constraint failures on a single day are not errors; they are absorbed by
/// the selector's fallback chain.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// No candidate at all is available for the listed days.
    #[error("No candidate recipes available for {}", format_days(.days))]
    EmptyCandidatePool {
        /// Every day whose aggregated pool was empty.
        days: Vec<Day>,
    },

    /// The planner configuration was rejected before selection began.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration field.
        field: String,
        /// A human-readable description of the problem.
        message: String,
    },

    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
}

fn format_days(days: &[Day]) -> String {
    days.iter()
        .map(|d| d.as_str())
        .collect::<Vec<&str>>()
        .join(", ")
}

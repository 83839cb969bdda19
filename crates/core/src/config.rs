// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Planner configuration.
//!
//! `PlannerConfig` is the caller-facing, serde-friendly shape. It is checked
//! once by [`PlannerConfig::validate`] before any selection begins and turned
//! into a [`ValidatedConfig`] the rest of the engine relies on.

use crate::error::EngineError;
use mealplan_domain::{Cuisine, DEFAULT_RESTRICTED_STAPLES, RestrictedStaples};
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

/// Default lookback window for recipe recency.
pub const DEFAULT_LOOKBACK_WEEKS: i64 = 4;

/// Default cap on external catalog records kept per day.
pub const DEFAULT_EXTERNAL_LIMIT: usize = 10;

/// Default home cuisine tag.
pub const DEFAULT_HOME_CUISINE: &str = "cameroun";

/// Caller-supplied planner options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Weeks of history inspected by the recency rule.
    pub lookback_weeks: i64,
    /// Staple ingredients subject to the cap and adjacency rules.
    pub restricted_staples: Vec<String>,
    /// Cuisine tag given guaranteed representation.
    pub home_cuisine: String,
    /// Maximum external records kept per day.
    pub external_limit: usize,
    /// Date the lookback window ends on, `YYYY-MM-DD`. Defaults to today (UTC).
    pub reference_date: Option<String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            lookback_weeks: DEFAULT_LOOKBACK_WEEKS,
            restricted_staples: DEFAULT_RESTRICTED_STAPLES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            home_cuisine: String::from(DEFAULT_HOME_CUISINE),
            external_limit: DEFAULT_EXTERNAL_LIMIT,
            reference_date: None,
        }
    }
}

/// Configuration that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub lookback_weeks: u32,
    pub restricted_staples: RestrictedStaples,
    pub home_cuisine: Cuisine,
    pub external_limit: usize,
    pub reference_date: Date,
}

impl PlannerConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfig` if:
    /// - `lookback_weeks` is zero or negative
    /// - `home_cuisine` is not a known cuisine tag
    /// - a restricted staple entry is blank
    /// - `reference_date` is not a `YYYY-MM-DD` date
    pub fn validate(&self) -> Result<ValidatedConfig, EngineError> {
        // Rule: lookback must be positive
        if self.lookback_weeks <= 0 {
            return Err(invalid(
                "lookback_weeks",
                format!("must be greater than 0, got {}", self.lookback_weeks),
            ));
        }
        let lookback_weeks: u32 = u32::try_from(self.lookback_weeks).map_err(|_| {
            invalid(
                "lookback_weeks",
                format!("{} weeks is out of range", self.lookback_weeks),
            )
        })?;

        // Rule: home cuisine must be a known tag
        let home_cuisine: Cuisine = self
            .home_cuisine
            .parse()
            .map_err(|err| invalid("home_cuisine", format!("{err}")))?;

        // Rule: staple entries must not be blank
        if self.restricted_staples.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid(
                "restricted_staples",
                String::from("staple entries cannot be empty"),
            ));
        }

        let reference_date: Date = match &self.reference_date {
            Some(value) => parse_date(value)
                .map_err(|err| invalid("reference_date", format!("{err}")))?,
            None => time::OffsetDateTime::now_utc().date(),
        };

        Ok(ValidatedConfig {
            lookback_weeks,
            restricted_staples: RestrictedStaples::new(&self.restricted_staples),
            home_cuisine,
            external_limit: self.external_limit,
            reference_date,
        })
    }
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, mealplan_domain::DomainError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|err| {
        mealplan_domain::DomainError::DateParseError {
            date_string: value.to_string(),
            error: err.to_string(),
        }
    })
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message,
    }
}

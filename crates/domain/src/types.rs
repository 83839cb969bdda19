// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A day of the fixed Monday..Sunday planning cycle.
///
/// Serializes as the English name. Deserializes through `FromStr`, so any
/// casing of the English or French name is accepted, including map keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in planning order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the zero-based position of this day in the week.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }

    /// Returns the day immediately before this one.
    ///
    /// Monday has no predecessor; the cycle does not wrap.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Monday => None,
            Self::Tuesday => Some(Self::Monday),
            Self::Wednesday => Some(Self::Tuesday),
            Self::Thursday => Some(Self::Wednesday),
            Self::Friday => Some(Self::Thursday),
            Self::Saturday => Some(Self::Friday),
            Self::Sunday => Some(Self::Saturday),
        }
    }

    /// Returns the English name of the day.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl FromStr for Day {
    type Err = DomainError;

    /// Parses English or French day names, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "lundi" => Ok(Self::Monday),
            "tuesday" | "mardi" => Ok(Self::Tuesday),
            "wednesday" | "mercredi" => Ok(Self::Wednesday),
            "thursday" | "jeudi" => Ok(Self::Thursday),
            "friday" | "vendredi" => Ok(Self::Friday),
            "saturday" | "samedi" => Ok(Self::Saturday),
            "sunday" | "dimanche" => Ok(Self::Sunday),
            _ => Err(DomainError::InvalidDay(s.to_string())),
        }
    }
}

impl TryFrom<String> for Day {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cuisine family tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    Cameroun,
    Asiatique,
    Mexican,
    French,
    /// Catch-all for catalog records that carry no usable cuisine tag.
    International,
}

impl Cuisine {
    /// Returns the canonical lowercase tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cameroun => "cameroun",
            Self::Asiatique => "asiatique",
            Self::Mexican => "mexican",
            Self::French => "french",
            Self::International => "international",
        }
    }

    /// Maps a raw tag to a cuisine, treating anything unrecognised as
    /// `International`.
    ///
    /// Used at ingestion time, where an unknown tag must not reject the record.
    #[must_use]
    pub fn from_tag_lossy(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::International)
    }
}

impl FromStr for Cuisine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cameroun" => Ok(Self::Cameroun),
            "asiatique" => Ok(Self::Asiatique),
            "mexican" => Ok(Self::Mexican),
            "french" => Ok(Self::French),
            "international" => Ok(Self::International),
            _ => Err(DomainError::UnknownCuisine(s.to_string())),
        }
    }
}

impl std::fmt::Display for Cuisine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a candidate recipe came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    /// The local curated recipe set.
    Local,
    /// The remote recipe catalog.
    External,
}

impl std::fmt::Display for RecipeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::External => write!(f, "external"),
        }
    }
}

/// Case-folds a name or ingredient for comparison.
///
/// Trims surrounding whitespace and lowercases, so " Riz " and "riz" compare equal.
#[must_use]
pub fn fold_key(value: &str) -> String {
    value.trim().to_lowercase()
}

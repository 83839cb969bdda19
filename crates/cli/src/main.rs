// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # mealplan
//!
//! Plans a week of meal slots from a JSON request file and prints the outcome
//! as JSON on standard output. Logs go to standard error.
//!
//! The request file carries `local_pool`, `external_pool_by_day`,
//! `past_plans` and an optional `config`. Command-line flags override the
//! file's `config`, which overrides the built-in defaults. `RUST_LOG`
//! directives, when set, replace the `-v`/`-q` verbosity.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use mealplan::{
    Day, PlanOutcome, PlanRequest, PlannerConfig, RecipeCandidate, RecipeRecord, ValidatedConfig,
    aggregate, fold_key, suggest_variations,
};
use serde::Serialize;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    // RUST_LOG directives take precedence over -v/-q
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(args.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Weekly meal planner
#[derive(Debug, Parser)]
#[command(name = "mealplan", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Plan Monday through Sunday
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        input: InputArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Suggest variations of one recipe from a day's pool
    #[command(visible_alias = "v")]
    Variations {
        #[command(flatten)]
        input: InputArgs,

        /// Name of the recipe to vary
        #[arg(long)]
        recipe: String,

        /// Day whose pool is searched (English or French name)
        #[arg(long, default_value = "monday")]
        day: Day,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::Plan { input, pretty } => plan(&input, pretty),
            Self::Variations {
                input,
                recipe,
                day,
                pretty,
            } => variations(&input, &recipe, day, pretty),
        }
    }
}

/// The request file plus the configuration flags layered on top of it.
#[derive(Clone, Debug, clap::Args)]
struct InputArgs {
    /// Request file (JSON); `-` reads standard input
    input: PathBuf,

    /// Weeks of history inspected by the recency rule
    #[arg(long, allow_negative_numbers = true)]
    lookback_weeks: Option<i64>,

    /// Cuisine given guaranteed representation
    #[arg(long)]
    home_cuisine: Option<String>,

    /// Restricted staple ingredient; repeat to replace the configured set
    #[arg(long = "staple")]
    staples: Vec<String>,

    /// Maximum external recipes kept per day
    #[arg(long)]
    external_limit: Option<usize>,

    /// Date the lookback window ends on (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,
}

impl InputArgs {
    /// Reads the request and applies the flag overrides to its config.
    fn load(&self) -> Result<PlanRequest> {
        let text: String = read_input(&self.input)?;
        let mut request: PlanRequest = serde_json::from_str(&text)
            .wrap_err_with(|| format!("failed to parse request {}", self.input.display()))?;
        self.apply_overrides(&mut request.config);
        Ok(request)
    }

    fn apply_overrides(&self, config: &mut PlannerConfig) {
        if let Some(weeks) = self.lookback_weeks {
            config.lookback_weeks = weeks;
        }
        if let Some(cuisine) = &self.home_cuisine {
            config.home_cuisine.clone_from(cuisine);
        }
        if !self.staples.is_empty() {
            config.restricted_staples.clone_from(&self.staples);
        }
        if let Some(limit) = self.external_limit {
            config.external_limit = limit;
        }
        if let Some(today) = &self.today {
            config.reference_date = Some(today.clone());
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text: String = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .wrap_err("failed to read request from standard input")?;
        return Ok(text);
    }

    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn plan(input: &InputArgs, pretty: bool) -> Result<()> {
    let request: PlanRequest = input.load()?;
    let outcome: PlanOutcome = request.plan().wrap_err("planning failed")?;

    info!(
        score = outcome.quality.score,
        suggestions = outcome.quality.suggestions.len(),
        "Plan ready"
    );
    print_json(&outcome, pretty)
}

fn variations(input: &InputArgs, recipe: &str, day: Day, pretty: bool) -> Result<()> {
    let request: PlanRequest = input.load()?;
    let config: ValidatedConfig = request
        .config
        .validate()
        .wrap_err("invalid configuration")?;

    let external: &[RecipeRecord] = request
        .external_pool_by_day
        .get(&day)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let kept: &[RecipeRecord] = &external[..external.len().min(config.external_limit)];
    let pool: Vec<RecipeCandidate> = aggregate(&request.local_pool, kept);

    let key: String = fold_key(recipe);
    let base: &RecipeCandidate = pool
        .iter()
        .find(|c| c.name_key() == key)
        .ok_or_else(|| eyre!("recipe '{recipe}' is not in the {day} pool"))?;

    let found: Vec<RecipeCandidate> = suggest_variations(base, &pool, config.home_cuisine);
    info!(recipe = %base.name, %day, variations = found.len(), "Variations ready");
    print_json(&found, pretty)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered: String = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

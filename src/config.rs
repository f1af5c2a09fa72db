use crate::error::{OrResult, OrderError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

/// Direction of the search. `Minimize` removes crossings, `Maximize` is
/// mostly useful for stress-testing layouts.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Optimize {
    #[default]
    Minimize,
    Maximize,
}

impl Optimize {
    /// True when score `a` is strictly better than score `b`.
    #[inline(always)]
    pub fn is_better(self, a: u64, b: u64) -> bool {
        match self {
            Optimize::Minimize => a < b,
            Optimize::Maximize => a > b,
        }
    }

    /// Same test on a relative change (`new - current`, already normalized).
    #[inline(always)]
    pub fn is_improving_delta(self, delta: f64) -> bool {
        match self {
            Optimize::Minimize => delta < 0.0,
            Optimize::Maximize => delta > 0.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    #[serde(default)]
    pub search: SearchParams,
    #[command(flatten)]
    #[serde(default)]
    pub selection: SelectionParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[arg(long, default_value_t = 1000)]
    pub iterations: usize,
    #[arg(long, default_value_t = 5)]
    pub max_flips: usize,
    #[arg(long, default_value_t = 0.01)]
    pub temp0: f64,
    #[arg(long, default_value_t = Optimize::Minimize)]
    pub optimize: Optimize,
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            iterations: 1000,
            max_flips: 5,
            temp0: 0.01,
            optimize: Optimize::Minimize,
            seed: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectionParams {
    /// File listing the chromosomes allowed to move, one per line.
    #[arg(long)]
    pub shuffle_file: Option<String>,
    /// Pattern selecting the chromosomes allowed to move.
    #[arg(long)]
    pub shuffle_rx: Option<String>,
    /// Pattern selecting chromosomes that keep their position.
    #[arg(long)]
    pub static_rx: Option<String>,
}

impl SearchParams {
    pub fn validate(&self) -> OrResult<()> {
        if self.iterations == 0 {
            return Err(OrderError::Config("iterations must be positive".into()));
        }
        if self.max_flips == 0 {
            return Err(OrderError::Config("max_flips must be positive".into()));
        }
        if !self.temp0.is_finite() || self.temp0 <= 0.0 {
            return Err(OrderError::Config(format!(
                "temp0 must be a positive number, got {}",
                self.temp0
            )));
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(iterations, "iterations");
        update_if_present!(max_flips, "max_flips");
        update_if_present!(temp0, "temp0");
        update_if_present!(optimize, "optimize");
        update_if_present!(seed, "seed");
    }
}

impl SelectionParams {
    pub fn validate(&self) -> OrResult<()> {
        if self.shuffle_file.is_some() && self.shuffle_rx.is_some() {
            return Err(OrderError::Config(
                "shuffle_file and shuffle_rx are mutually exclusive".into(),
            ));
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli: &SelectionParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(shuffle_file, "shuffle_file");
        update_if_present!(shuffle_rx, "shuffle_rx");
        update_if_present!(static_rx, "static_rx");
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> OrResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Explicit command-line flags win over values read from a file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.search.merge_from_cli(&cli.search, matches);
        self.selection.merge_from_cli(&cli.selection, matches);
    }

    pub fn validate(&self) -> OrResult<()> {
        self.search.validate()?;
        self.selection.validate()
    }
}

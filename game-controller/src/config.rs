use anyhow::{Context, Result, anyhow};
use game_core::WordProvider;
use game_types::{
    DEFAULT_POINTS_PER_DRAWING, DEFAULT_ROUND_DURATION_SECONDS, SettingsOverride, WordDifficulty,
};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Upper bound for POINTS_PER_DRAWING
pub const MAX_POINTS_PER_DRAWING: u32 = 1_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub player_name: String,
    pub round_duration_seconds: u32,
    pub points_per_drawing: u32,
    pub default_difficulty: WordDifficulty,
    pub tick_interval: Duration,
    pub start_delay: Duration,
    pub celebration_delay: Duration,
    pub word_list_path: Option<PathBuf>,
}

impl Config {
    /// Read the configuration from environment variables, falling back to
    /// the defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            player_name: lookup("PLAYER_NAME").unwrap_or(defaults.player_name),
            round_duration_seconds: parse_or(
                &lookup,
                "ROUND_DURATION_SECONDS",
                defaults.round_duration_seconds,
            )?,
            points_per_drawing: parse_or(
                &lookup,
                "POINTS_PER_DRAWING",
                defaults.points_per_drawing,
            )?,
            default_difficulty: match lookup("DEFAULT_DIFFICULTY") {
                Some(value) => value
                    .parse()
                    .map_err(|e: String| anyhow!("Invalid DEFAULT_DIFFICULTY: {}", e))?,
                None => defaults.default_difficulty,
            },
            tick_interval: Duration::from_millis(parse_or(&lookup, "TICK_INTERVAL_MS", 1000u64)?),
            start_delay: Duration::from_millis(parse_or(&lookup, "START_DELAY_MS", 800u64)?),
            celebration_delay: Duration::from_millis(parse_or(
                &lookup,
                "CELEBRATION_DELAY_MS",
                600u64,
            )?),
            word_list_path: lookup("WORD_LIST_PATH").map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.round_duration_seconds == 0 {
            return Err(anyhow!("ROUND_DURATION_SECONDS must be at least 1"));
        }
        if self.points_per_drawing > MAX_POINTS_PER_DRAWING {
            return Err(anyhow!(
                "POINTS_PER_DRAWING must be at most {}",
                MAX_POINTS_PER_DRAWING
            ));
        }
        if self.tick_interval.is_zero() {
            return Err(anyhow!("TICK_INTERVAL_MS must be at least 1"));
        }
        Ok(())
    }

    /// Session settings derived from this configuration
    pub fn settings(&self) -> SettingsOverride {
        SettingsOverride {
            round_duration: Some(self.round_duration_seconds),
            points_per_drawing: Some(self.points_per_drawing),
        }
    }

    /// The configured word list, or the built-in one when none is set
    pub fn load_words(&self) -> Result<WordProvider> {
        match &self.word_list_path {
            Some(path) => WordProvider::from_file(path),
            None => Ok(WordProvider::builtin()),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {}", key, value)),
        None => Ok(default),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: "You".to_string(),
            round_duration_seconds: DEFAULT_ROUND_DURATION_SECONDS,
            points_per_drawing: DEFAULT_POINTS_PER_DRAWING,
            default_difficulty: WordDifficulty::Medium,
            tick_interval: Duration::from_secs(1),
            start_delay: Duration::from_millis(800),
            celebration_delay: Duration::from_millis(600),
            word_list_path: None,
        }
    }
}

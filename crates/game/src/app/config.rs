use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

pub(crate) const CONFIG_PATH_ENV_VAR: &str = "TOWER_CONFIG";
pub(crate) const SEED_ENV_VAR: &str = "TOWER_SEED";

const MIN_ARENA_WIDTH: u32 = 64;
const MIN_ARENA_HEIGHT: u32 = 120;

/// Tunables read once at startup. Every field has a default, so an empty
/// object is a valid config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameConfig {
    pub(crate) arena_width: u32,
    pub(crate) arena_height: u32,
    pub(crate) window_scale: u32,
    pub(crate) target_tps: u32,
    pub(crate) player_speed: f32,
    pub(crate) attack_cooldown_ms: u64,
    pub(crate) slash_lifetime_ticks: u32,
    pub(crate) enemy_hp: u32,
    pub(crate) seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: 320,
            arena_height: 240,
            window_scale: 3,
            target_tps: 60,
            player_speed: 3.0,
            attack_cooldown_ms: 300,
            slash_lifetime_ticks: 10,
            enemy_hp: 2,
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Parse(String),
    #[error("validation failed at {path}: {message}")]
    Invalid { path: &'static str, message: String },
    #[error("invalid {var} value '{value}': expected an unsigned integer")]
    BadEnvValue { var: &'static str, value: String },
    #[error("failed to read environment variable {var}: {source}")]
    EnvVar {
        var: &'static str,
        #[source]
        source: env::VarError,
    },
}

/// Loads the config named by `TOWER_CONFIG` (defaults when unset) and applies
/// the `TOWER_SEED` override.
pub(crate) fn load_game_config() -> Result<GameConfig, ConfigError> {
    let mut config = match read_env(CONFIG_PATH_ENV_VAR)? {
        Some(path) => load_from_path(Path::new(&path))?,
        None => GameConfig::default(),
    };
    apply_seed_override(&mut config, read_env(SEED_ENV_VAR)?)?;
    validate(&config)?;
    Ok(config)
}

pub(crate) fn load_from_path(path: &Path) -> Result<GameConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_game_config(&raw)?;
    info!(path = %path.display(), "config_loaded");
    Ok(config)
}

pub(crate) fn parse_game_config(raw: &str) -> Result<GameConfig, ConfigError> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    match serde_path_to_error::deserialize::<_, GameConfig>(&mut deserializer) {
        Ok(config) => Ok(config),
        Err(error) => {
            let path = error.path().to_string();
            let source = error.into_inner();
            if path.is_empty() || path == "." {
                Err(ConfigError::Parse(format!("parse config json: {source}")))
            } else {
                Err(ConfigError::Parse(format!(
                    "parse config json at {path}: {source}"
                )))
            }
        }
    }
}

pub(crate) fn apply_seed_override(
    config: &mut GameConfig,
    raw: Option<String>,
) -> Result<(), ConfigError> {
    let Some(value) = raw else {
        return Ok(());
    };
    let seed = value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::BadEnvValue {
            var: SEED_ENV_VAR,
            value: value.clone(),
        })?;
    info!(seed, "seed_override");
    config.seed = Some(seed);
    Ok(())
}

pub(crate) fn validate(config: &GameConfig) -> Result<(), ConfigError> {
    if config.arena_width < MIN_ARENA_WIDTH {
        return Err(expected_at_least(
            "arena_width",
            MIN_ARENA_WIDTH,
            config.arena_width,
        ));
    }
    if config.arena_height < MIN_ARENA_HEIGHT {
        return Err(expected_at_least(
            "arena_height",
            MIN_ARENA_HEIGHT,
            config.arena_height,
        ));
    }
    if config.window_scale == 0 {
        return Err(expected_at_least("window_scale", 1, 0));
    }
    if config.target_tps == 0 {
        return Err(expected_at_least("target_tps", 1, 0));
    }
    if !config.player_speed.is_finite() || config.player_speed <= 0.0 {
        return Err(ConfigError::Invalid {
            path: "player_speed",
            message: format!("expected a positive number, got {}", config.player_speed),
        });
    }
    if config.slash_lifetime_ticks == 0 {
        return Err(expected_at_least("slash_lifetime_ticks", 1, 0));
    }
    if config.enemy_hp == 0 {
        return Err(expected_at_least("enemy_hp", 1, 0));
    }
    Ok(())
}

fn expected_at_least(path: &'static str, minimum: u32, actual: u32) -> ConfigError {
    ConfigError::Invalid {
        path,
        message: format!("expected at least {minimum}, got {actual}"),
    }
}

fn read_env(var: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(ConfigError::EnvVar { var, source }),
    }
}

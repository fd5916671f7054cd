use std::time::Duration;

use tower_engine::{LoopConfig, Scene};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::config::{load_game_config, ConfigError, GameConfig};
use super::gameplay;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> Result<AppWiring, ConfigError> {
    init_tracing();
    info!("=== Slime Tower Startup ===");

    let game_config = load_game_config()?;
    info!(
        arena_width = game_config.arena_width,
        arena_height = game_config.arena_height,
        target_tps = game_config.target_tps,
        seed = ?game_config.seed,
        "game_config"
    );

    Ok(AppWiring {
        config: loop_config_for(&game_config),
        scene: gameplay::build_scene(&game_config),
    })
}

fn loop_config_for(game_config: &GameConfig) -> LoopConfig {
    LoopConfig {
        window_title: "Slime Tower".to_string(),
        arena_width: game_config.arena_width,
        arena_height: game_config.arena_height,
        window_scale: game_config.window_scale,
        target_tps: game_config.target_tps,
        metrics_log_interval: Duration::from_secs(5),
        ..LoopConfig::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

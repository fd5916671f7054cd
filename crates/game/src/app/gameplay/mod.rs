use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tower_engine::{
    overlaps, Clock, DrawKind, InputAction, InputSnapshot, MonotonicClock, Rect, Scene,
    SceneCommand, SceneFrame, UiPanel, Vec2,
};
use tracing::{debug, info, trace};

use super::config::GameConfig;

const TUTORIAL_FLOOR: u32 = 1;
const PLAYER_SIZE: f32 = 24.0;
const NPC_POSITION: Vec2 = Vec2 { x: 50.0, y: 50.0 };
const NPC_SIZE: f32 = 24.0;
const DOOR_WIDTH: f32 = 32.0;
const DOOR_HEIGHT: f32 = 10.0;
const DOOR_PUSH_BACK: f32 = 10.0;
const SPAWN_BOTTOM_OFFSET: f32 = 40.0;
const ENEMY_SIZE: f32 = 24.0;
const ENEMY_BASE_SPEED: f32 = 0.5;
const ENEMY_SPEED_PER_FLOOR: f32 = 0.1;
const ENEMY_EXTRA_PER_FLOOR: u32 = 2;
const ENEMY_SPAWN_MARGIN: f32 = 20.0;
const ENEMY_SPAWN_BOTTOM_RESERVE: f32 = 80.0;
const SLASH_SIZE: f32 = 20.0;
const SLASH_REACH: f32 = 25.0;
const CASH_OUT_CODE_RANGE: u32 = 9999;
const DEFAULT_PLAYER_NAME: &str = "Adventurer";

const FLOOR_COLOR: [u8; 4] = [0x3a, 0x3a, 0x3a, 0xff];
const DOOR_LOCKED_COLOR: [u8; 4] = [0x8b, 0x45, 0x13, 0xff];
const DOOR_OPEN_COLOR: [u8; 4] = [0x00, 0x00, 0x00, 0xff];
const PLAYER_COLOR: [u8; 4] = [0x00, 0xff, 0x00, 0xff];
const NPC_COLOR: [u8; 4] = [0xff, 0xff, 0x00, 0xff];
const ENEMY_COLOR: [u8; 4] = [0xff, 0x00, 0x00, 0xff];
const SLASH_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

const DOOR_LOCKED_HINT: &str = "Locked. Maybe talk to that guy in the corner?";
const NPC_GREETING: &str = "Stranger... wait. What is your name?";
const NPC_QUEST_LINE: &str = "Only the potion on floor 100 can save her!";
const NAME_PROMPT: &str = "Your name:";

include!("types.rs");
include!("events.rs");
include!("combat.rs");
include!("level.rs");
include!("narrative.rs");
include!("simulation.rs");
include!("scene_impl.rs");
include!("util.rs");

pub(crate) fn build_scene(config: &GameConfig) -> Box<dyn Scene> {
    let settings = SimulationSettings::from_config(config);
    let simulation = Simulation::new(settings, Box::new(MonotonicClock::new()));
    Box::new(TowerScene::new(simulation))
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}

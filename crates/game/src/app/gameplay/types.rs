/// Facing direction of the player. Only changes on non-zero movement input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    fn offset(self, distance: f32) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -distance),
            Self::Down => Vec2::new(0.0, distance),
            Self::Left => Vec2::new(-distance, 0.0),
            Self::Right => Vec2::new(distance, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Player {
    body: Rect,
    speed: f32,
    facing: Facing,
    /// Clock reading at which the current swing ends; `None` when idle.
    attack_ends_at: Option<Duration>,
}

impl Player {
    fn new(position: Vec2, speed: f32) -> Self {
        Self {
            body: Rect::new(position.x, position.y, PLAYER_SIZE, PLAYER_SIZE),
            speed,
            facing: Facing::default(),
            attack_ends_at: None,
        }
    }

    fn attacking(&self) -> bool {
        self.attack_ends_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Npc {
    body: Rect,
    talked: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct Door {
    body: Rect,
    open: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct Enemy {
    body: Rect,
    hp: u32,
    speed: f32,
}

impl Enemy {
    fn is_dead(&self) -> bool {
        self.hp == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SlashEffect {
    body: Rect,
    /// Frames left to draw.
    timer: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum NarrativeState {
    #[default]
    Intro,
    Dialogue,
    Playing,
    Cleared,
}

impl NarrativeState {
    fn is_frozen(self) -> bool {
        matches!(self, Self::Dialogue | Self::Cleared)
    }
}

/// Floor 1 carries the locked-door and NPC tutorial; every later floor is a plain fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FloorPhase {
    Tutorial,
    Dungeon { floor: u32 },
}

impl FloorPhase {
    fn for_floor(floor: u32) -> Self {
        if floor == TUTORIAL_FLOOR {
            Self::Tutorial
        } else {
            Self::Dungeon { floor }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum DialogueStep {
    #[default]
    AskName,
    Plea,
    Quest,
}

impl DialogueStep {
    fn index(self) -> u8 {
        match self {
            Self::AskName => 0,
            Self::Plea => 1,
            Self::Quest => 2,
        }
    }
}

/// Tunables the simulation reads every tick. Built from [`GameConfig`].
#[derive(Debug, Clone, PartialEq)]
struct SimulationSettings {
    arena_width: f32,
    arena_height: f32,
    player_speed: f32,
    attack_cooldown: Duration,
    slash_lifetime_frames: u32,
    enemy_hp: u32,
    seed: Option<u64>,
}

impl SimulationSettings {
    fn from_config(config: &GameConfig) -> Self {
        Self {
            arena_width: config.arena_width as f32,
            arena_height: config.arena_height as f32,
            player_speed: config.player_speed,
            attack_cooldown: Duration::from_millis(config.attack_cooldown_ms),
            slash_lifetime_frames: config.slash_lifetime_ticks,
            enemy_hp: config.enemy_hp,
            seed: config.seed,
        }
    }

    fn spawn_point(&self) -> Vec2 {
        Vec2::new(
            self.arena_width / 2.0,
            self.arena_height - SPAWN_BOTTOM_OFFSET,
        )
    }

    fn initial_player_position(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    fn door_rect(&self) -> Rect {
        Rect::new(
            self.arena_width / 2.0 - DOOR_WIDTH / 2.0,
            0.0,
            DOOR_WIDTH,
            DOOR_HEIGHT,
        )
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// Populates floors and moves the run between them.
#[derive(Debug, Clone)]
struct LevelDirector {
    arena_width: f32,
    arena_height: f32,
    enemy_hp: u32,
    spawn_point: Vec2,
}

impl LevelDirector {
    fn new(settings: &SimulationSettings) -> Self {
        Self {
            arena_width: settings.arena_width,
            arena_height: settings.arena_height,
            enemy_hp: settings.enemy_hp,
            spawn_point: settings.spawn_point(),
        }
    }

    /// Puts the player back at the spawn point and replaces the enemy set.
    fn start_level(&self, state: &mut SimulationState, rng: &mut ChaCha8Rng) {
        state.player.body.set_position(self.spawn_point);
        state.player.attack_ends_at = None;

        let floor = state.floor;
        let count = floor.saturating_add(ENEMY_EXTRA_PER_FLOOR);
        let speed = enemy_speed_for_floor(floor);
        let x_span = self.arena_width - ENEMY_SPAWN_MARGIN * 2.0;
        let y_span = self.arena_height - ENEMY_SPAWN_MARGIN - ENEMY_SPAWN_BOTTOM_RESERVE;
        state.enemies.clear();
        state.enemies.extend((0..count).map(|_| {
            let x = rng.random::<f32>() * x_span + ENEMY_SPAWN_MARGIN;
            let y = rng.random::<f32>() * y_span + ENEMY_SPAWN_MARGIN;
            Enemy {
                body: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
                hp: self.enemy_hp,
                speed,
            }
        }));

        info!(floor, enemy_count = count, enemy_speed = speed, "level_started");
    }

    /// Moves a cleared run one floor deeper. Ignored unless the floor is cleared.
    fn advance_floor(
        &self,
        state: &mut SimulationState,
        rng: &mut ChaCha8Rng,
        events: &mut SimEventBus,
    ) -> bool {
        if state.narrative != NarrativeState::Cleared {
            debug!(narrative = ?state.narrative, "advance_floor_ignored");
            return false;
        }

        state.floor = state.floor.saturating_add(1);
        state.door.open = false;
        events.emit(SimEvent::HideFloorDecision);
        self.start_level(state, rng);
        state.narrative = NarrativeState::Playing;
        info!(floor = state.floor, "floor_advanced");
        true
    }
}

fn enemy_speed_for_floor(floor: u32) -> f32 {
    ENEMY_BASE_SPEED + floor as f32 * ENEMY_SPEED_PER_FLOOR
}

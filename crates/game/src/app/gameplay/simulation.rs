/// Everything that changes while a run is in progress.
#[derive(Debug, Clone, PartialEq)]
struct SimulationState {
    floor: u32,
    narrative: NarrativeState,
    player_name: String,
    dialogue_step: DialogueStep,
    player: Player,
    npc: Npc,
    door: Door,
    enemies: Vec<Enemy>,
    slashes: Vec<SlashEffect>,
}

impl SimulationState {
    fn new(settings: &SimulationSettings) -> Self {
        Self {
            floor: TUTORIAL_FLOOR,
            narrative: NarrativeState::Intro,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            dialogue_step: DialogueStep::AskName,
            player: Player::new(settings.initial_player_position(), settings.player_speed),
            npc: Npc {
                body: Rect::new(NPC_POSITION.x, NPC_POSITION.y, NPC_SIZE, NPC_SIZE),
                talked: false,
            },
            door: Door {
                body: settings.door_rect(),
                open: false,
            },
            enemies: Vec::new(),
            slashes: Vec::new(),
        }
    }

    fn phase(&self) -> FloorPhase {
        FloorPhase::for_floor(self.floor)
    }
}

/// Owns one run: state, rules, clock and randomness. Instances share nothing.
struct Simulation {
    settings: SimulationSettings,
    state: SimulationState,
    combat: CombatResolver,
    levels: LevelDirector,
    clock: Box<dyn Clock>,
    rng: ChaCha8Rng,
    events: SimEventBus,
    tick: u64,
}

impl Simulation {
    fn new(settings: SimulationSettings, clock: Box<dyn Clock>) -> Self {
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        info!(seed, "simulation_seeded");
        Self::with_rng(settings, clock, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(settings: SimulationSettings, clock: Box<dyn Clock>, rng: ChaCha8Rng) -> Self {
        Self {
            state: SimulationState::new(&settings),
            combat: CombatResolver::new(&settings),
            levels: LevelDirector::new(&settings),
            settings,
            clock,
            rng,
            events: SimEventBus::default(),
            tick: 0,
        }
    }

    fn state(&self) -> &SimulationState {
        &self.state
    }

    fn drain_events(&mut self) -> Vec<SimEvent> {
        self.events.drain()
    }

    fn advance_floor(&mut self) -> bool {
        self.levels
            .advance_floor(&mut self.state, &mut self.rng, &mut self.events)
    }

    /// Advances the run by one tick.
    fn update(&mut self, input: &InputSnapshot) {
        self.tick = self.tick.wrapping_add(1);
        let now = self.clock.now();
        if CombatResolver::expire_attack(&mut self.state.player, now) {
            trace!(tick = self.tick, "attack_ready");
        }
        if self.state.narrative.is_frozen() {
            return;
        }

        let mut action_pressed = input.is_down(InputAction::Action);
        self.move_player(input);

        if self.state.phase() == FloorPhase::Tutorial {
            self.gate_locked_door();
            if action_pressed && self.try_talk_to_npc() {
                action_pressed = false;
            }
        }

        if self.state.narrative != NarrativeState::Playing {
            return;
        }

        if self.state.enemies.is_empty() {
            if !self.state.door.open {
                self.state.door.open = true;
                info!(floor = self.state.floor, "door_unlocked");
            }
            if overlaps(&self.state.player.body, &self.state.door.body) {
                self.state.narrative = NarrativeState::Cleared;
                self.events.emit(SimEvent::ShowFloorDecision);
                info!(floor = self.state.floor, tick = self.tick, "floor_cleared");
                return;
            }
        }

        if action_pressed {
            self.attack(now);
        }
        self.chase_player();
    }

    fn move_player(&mut self, input: &InputSnapshot) {
        let player = &mut self.state.player;
        let delta = movement_delta(input, player.speed);
        player.facing = facing_for_delta(player.facing, delta);
        player.body = player
            .body
            .translated(delta)
            .clamped_to(self.settings.arena_width, self.settings.arena_height);
    }

    fn gate_locked_door(&mut self) {
        if self.state.npc.talked || !overlaps(&self.state.player.body, &self.state.door.body) {
            return;
        }
        self.state.player.body.y += DOOR_PUSH_BACK;
        self.events.emit(SimEvent::ShowDialogue {
            text: DOOR_LOCKED_HINT.to_string(),
        });
        debug!(tick = self.tick, "door_locked");
    }

    fn try_talk_to_npc(&mut self) -> bool {
        if !overlaps(&self.state.player.body, &self.state.npc.body) {
            return false;
        }
        self.start_npc_dialogue();
        true
    }

    fn attack(&mut self, now: Duration) {
        let state = &mut self.state;
        let Some(outcome) = self.combat.perform_attack(
            &mut state.player,
            &mut state.enemies,
            &mut state.slashes,
            now,
        ) else {
            return;
        };

        info!(
            facing = ?state.player.facing,
            hits = outcome.hits,
            remaining_enemies = state.enemies.len(),
            "attack_performed"
        );
        if outcome.kills > 0 {
            info!(kills = outcome.kills, floor = state.floor, "enemy_killed");
        }
    }

    fn chase_player(&mut self) {
        let player_body = self.state.player.body;
        let target = player_body.position();
        for (enemy_index, enemy) in self.state.enemies.iter_mut().enumerate() {
            chase_step(enemy, target);
            if overlaps(&player_body, &enemy.body) {
                self.events.emit(SimEvent::PlayerContact { enemy_index });
            }
        }
    }

    /// Writes the draw list for one presented frame and ages slash effects.
    fn emit_frame(&mut self, frame: &mut SceneFrame) {
        frame.arena_size = Vec2::new(self.settings.arena_width, self.settings.arena_height);
        frame.clear_color = FLOOR_COLOR;

        let state = &self.state;
        let door_color = if state.door.open {
            DOOR_OPEN_COLOR
        } else {
            DOOR_LOCKED_COLOR
        };
        frame.push(
            DrawKind::Door {
                open: state.door.open,
            },
            state.door.body,
            door_color,
        );
        frame.push(DrawKind::Player, state.player.body, PLAYER_COLOR);
        if state.phase() == FloorPhase::Tutorial {
            frame.push(DrawKind::Npc, state.npc.body, NPC_COLOR);
        }
        for enemy in &state.enemies {
            frame.push(DrawKind::Enemy, enemy.body, ENEMY_COLOR);
        }
        for slash in &state.slashes {
            frame.push_effect(DrawKind::Slash, slash.body, SLASH_COLOR, slash.timer);
        }

        CombatResolver::age_effects(&mut self.state.slashes);
    }
}

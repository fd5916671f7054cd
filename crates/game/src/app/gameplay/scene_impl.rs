/// Host-side view of the dialogue box and floor-decision panel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct UiState {
    dialogue_text: Option<String>,
    text_prompt: Option<String>,
    name_field: String,
    floor_decision_visible: bool,
    cash_out_code: Option<String>,
}

impl DialogueDisplay for UiState {
    fn show(&mut self, text: &str) {
        info!(text, "dialogue_shown");
        self.dialogue_text = Some(text.to_string());
    }

    /// Hides the whole box, name field included.
    fn hide(&mut self) {
        self.dialogue_text = None;
        self.text_prompt = None;
        self.name_field.clear();
    }

    fn request_text_input(&mut self, prompt: &str) {
        self.text_prompt = Some(prompt.to_string());
        self.name_field.clear();
    }

    fn hide_text_input(&mut self) {
        self.text_prompt = None;
        self.name_field.clear();
    }
}

impl FloorDecisionDisplay for UiState {
    fn show_floor_decision(&mut self) {
        self.floor_decision_visible = true;
    }

    fn hide_floor_decision(&mut self) {
        self.floor_decision_visible = false;
    }
}

impl UiState {
    fn panel(&self, floor: u32) -> Option<UiPanel> {
        if let Some(code) = &self.cash_out_code {
            return Some(UiPanel {
                lines: vec!["ESCAPE SUCCESSFUL!".to_string(), format!("Code: {code}")],
                text_field: None,
            });
        }
        if self.floor_decision_visible {
            return Some(UiPanel {
                lines: vec![
                    format!("Floor {floor} cleared!"),
                    "N: deeper / C: cash out".to_string(),
                ],
                text_field: None,
            });
        }

        let mut lines: Vec<String> = self.dialogue_text.iter().cloned().collect();
        let text_field = self.text_prompt.as_ref().map(|prompt| {
            lines.push(prompt.clone());
            self.name_field.clone()
        });
        let panel = UiPanel { lines, text_field };
        (!panel.is_empty()).then_some(panel)
    }
}

/// Adapts a [`Simulation`] to the engine's scene contract and plays the host
/// role for its dialogue and floor-decision signals.
struct TowerScene {
    simulation: Simulation,
    ui: UiState,
}

impl TowerScene {
    fn new(simulation: Simulation) -> Self {
        Self {
            simulation,
            ui: UiState::default(),
        }
    }

    fn handle_floor_decision(&mut self, input: &InputSnapshot) {
        if !self.ui.floor_decision_visible || self.ui.cash_out_code.is_some() {
            return;
        }
        if input.advance_floor_pressed() {
            self.simulation.advance_floor();
        } else if input.cash_out_pressed() {
            let floor = self.simulation.state().floor;
            let code = format_cash_out_code(floor, rand::rng().random_range(0..CASH_OUT_CODE_RANGE));
            info!(floor, code = code.as_str(), "cashed_out");
            self.ui.cash_out_code = Some(code);
        }
    }

    fn flush_events(&mut self) {
        let events = self.simulation.drain_events();
        dispatch_events(events, &mut self.ui);
    }
}

impl Scene for TowerScene {
    fn load(&mut self) {
        let state = self.simulation.state();
        info!(
            floor = state.floor,
            player_name = state.player_name.as_str(),
            "scene_loaded"
        );
    }

    fn update(&mut self, input: &InputSnapshot) -> SceneCommand {
        if input.quit_requested() {
            return SceneCommand::Quit;
        }

        if self.ui.text_prompt.is_some() {
            self.ui.name_field = input.text_input().to_string();
        }
        if input.confirm_pressed() {
            self.simulation.advance_dialogue(input.text_input());
            self.flush_events();
        }
        self.handle_floor_decision(input);

        self.simulation.update(input);
        self.flush_events();
        SceneCommand::None
    }

    fn render(&mut self, frame: &mut SceneFrame) {
        self.simulation.emit_frame(frame);
        frame.panel = self.ui.panel(self.simulation.state().floor);
    }

    fn unload(&mut self) {
        let state = self.simulation.state();
        info!(
            floor = state.floor,
            narrative = ?state.narrative,
            cashed_out = self.ui.cash_out_code.is_some(),
            "scene_unloaded"
        );
    }

    fn wants_text_entry(&self) -> bool {
        self.ui.text_prompt.is_some()
    }

    fn title(&self) -> Option<String> {
        let state = self.simulation.state();
        Some(match state.phase() {
            FloorPhase::Tutorial => format!("Slime Tower - {} - Tutorial", state.player_name),
            FloorPhase::Dungeon { floor } => {
                format!("Slime Tower - {} - Floor {floor}", state.player_name)
            }
        })
    }
}

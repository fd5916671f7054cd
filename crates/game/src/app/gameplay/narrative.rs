impl Simulation {
    fn start_npc_dialogue(&mut self) {
        // The script resumes where it stopped; after the tutorial that is the
        // final step, so the next signal restarts the current level.
        self.state.narrative = NarrativeState::Dialogue;
        self.events.emit(SimEvent::ShowDialogue {
            text: NPC_GREETING.to_string(),
        });
        self.events.emit(SimEvent::RequestTextInput {
            prompt: NAME_PROMPT.to_string(),
        });
        info!(
            floor = self.state.floor,
            step = self.state.dialogue_step.index(),
            "dialogue_started"
        );
    }

    /// Handles the "next" signal from the dialogue box. `name_input` is the
    /// current content of the name field and only matters on the first step.
    fn advance_dialogue(&mut self, name_input: &str) -> bool {
        if self.state.narrative != NarrativeState::Dialogue {
            debug!(narrative = ?self.state.narrative, "dialogue_signal_ignored");
            return false;
        }

        let step = self.state.dialogue_step;
        match step {
            DialogueStep::AskName => {
                if name_input.is_empty() {
                    debug!("empty_name_rejected");
                    return false;
                }
                self.state.player_name = name_input.to_string();
                self.events.emit(SimEvent::HideTextInput);
                self.events.emit(SimEvent::ShowDialogue {
                    text: format!("{}... My MOM! She is sick!", self.state.player_name),
                });
                self.state.dialogue_step = DialogueStep::Plea;
            }
            DialogueStep::Plea => {
                self.events.emit(SimEvent::ShowDialogue {
                    text: NPC_QUEST_LINE.to_string(),
                });
                self.state.dialogue_step = DialogueStep::Quest;
            }
            DialogueStep::Quest => {
                self.events.emit(SimEvent::HideDialogue);
                self.state.narrative = NarrativeState::Playing;
                self.state.npc.talked = true;
                self.state.door.open = true;
                self.levels.start_level(&mut self.state, &mut self.rng);
            }
        }

        info!(
            step = step.index(),
            player_name = self.state.player_name.as_str(),
            "dialogue_advanced"
        );
        true
    }
}

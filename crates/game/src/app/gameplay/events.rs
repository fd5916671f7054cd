/// Signals the simulation raises for its host during a tick.
#[derive(Debug, Clone, PartialEq)]
enum SimEvent {
    ShowDialogue { text: String },
    HideDialogue,
    RequestTextInput { prompt: String },
    HideTextInput,
    ShowFloorDecision,
    HideFloorDecision,
    /// An enemy touched the player. Carries no gameplay consequence yet.
    PlayerContact { enemy_index: usize },
}

#[derive(Debug, Default)]
struct SimEventBus {
    pending: Vec<SimEvent>,
}

impl SimEventBus {
    fn emit(&mut self, event: SimEvent) {
        self.pending.push(event);
    }

    fn drain(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.pending)
    }
}

trait DialogueDisplay {
    fn show(&mut self, text: &str);
    fn hide(&mut self);
    fn request_text_input(&mut self, prompt: &str);
    fn hide_text_input(&mut self);
}

trait FloorDecisionDisplay {
    fn show_floor_decision(&mut self);
    fn hide_floor_decision(&mut self);
}

fn dispatch_events<H>(events: Vec<SimEvent>, host: &mut H)
where
    H: DialogueDisplay + FloorDecisionDisplay,
{
    for event in events {
        match event {
            SimEvent::ShowDialogue { text } => host.show(&text),
            SimEvent::HideDialogue => host.hide(),
            SimEvent::RequestTextInput { prompt } => host.request_text_input(&prompt),
            SimEvent::HideTextInput => host.hide_text_input(),
            SimEvent::ShowFloorDecision => host.show_floor_decision(),
            SimEvent::HideFloorDecision => host.hide_floor_decision(),
            SimEvent::PlayerContact { enemy_index } => {
                trace!(enemy_index, "player_contact");
            }
        }
    }
}

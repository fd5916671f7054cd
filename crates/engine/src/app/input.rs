use std::collections::HashMap;

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, TouchPhase};
use winit::keyboard::{KeyCode, PhysicalKey};

const MAX_TEXT_INPUT_CHARS: usize = 16;
/// Share of the window height, measured from the bottom, taken by touch buttons.
const TOUCH_BUTTON_BAND: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Action,
    Quit,
}

const ACTION_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveUp => 0,
            InputAction::MoveDown => 1,
            InputAction::MoveLeft => 2,
            InputAction::MoveRight => 3,
            InputAction::Action => 4,
            InputAction::Quit => 5,
        }
    }
}

/// Virtual d-pad hint from pointer/touch input. Each axis is -1, 0 or 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchAxis {
    pub x: i8,
    pub y: i8,
}

impl TouchAxis {
    pub fn new(x: i8, y: i8) -> Self {
        Self {
            x: x.signum(),
            y: y.signum(),
        }
    }
}

/// Everything the simulation may read during one tick. Built once per tick by
/// draining the collector, so nothing changes underneath a running update.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    actions: ActionStates,
    touch: TouchAxis,
    confirm_pressed: bool,
    advance_floor_pressed: bool,
    cash_out_pressed: bool,
    text_input: String,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn touch_axis(&self) -> TouchAxis {
        self.touch
    }

    pub fn confirm_pressed(&self) -> bool {
        self.confirm_pressed
    }

    pub fn advance_floor_pressed(&self) -> bool {
        self.advance_floor_pressed
    }

    pub fn cash_out_pressed(&self) -> bool {
        self.cash_out_pressed
    }

    pub fn text_input(&self) -> &str {
        &self.text_input
    }

    pub fn with_quit_requested(mut self, quit_requested: bool) -> Self {
        self.quit_requested = quit_requested;
        self
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }

    pub fn with_touch_axis(mut self, touch: TouchAxis) -> Self {
        self.touch = touch;
        self
    }

    pub fn with_confirm_pressed(mut self, confirm_pressed: bool) -> Self {
        self.confirm_pressed = confirm_pressed;
        self
    }

    pub fn with_advance_floor_pressed(mut self, advance_floor_pressed: bool) -> Self {
        self.advance_floor_pressed = advance_floor_pressed;
        self
    }

    pub fn with_cash_out_pressed(mut self, cash_out_pressed: bool) -> Self {
        self.cash_out_pressed = cash_out_pressed;
        self
    }

    pub fn with_text_input(mut self, text_input: impl Into<String>) -> Self {
        self.text_input = text_input.into();
        self
    }
}

/// Press-edge tracker for keys that must fire once per physical press.
#[derive(Debug, Clone, Copy, Default)]
struct EdgeLatch {
    is_down: bool,
    pressed_edge: bool,
}

impl EdgeLatch {
    fn handle(&mut self, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.is_down {
                    self.pressed_edge = true;
                }
                self.is_down = true;
            }
            ElementState::Released => self.is_down = false,
        }
    }

    /// Records a press with no matching release, as a tap does.
    fn trigger(&mut self) {
        self.pressed_edge = true;
    }

    fn take(&mut self) -> bool {
        let was_pressed = self.pressed_edge;
        self.pressed_edge = false;
        was_pressed
    }
}

/// On-screen buttons in the bottom band, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TouchButton {
    Action,
    Confirm,
    AdvanceFloor,
    CashOut,
}

const TOUCH_BUTTONS: [TouchButton; 4] = [
    TouchButton::Action,
    TouchButton::Confirm,
    TouchButton::AdvanceFloor,
    TouchButton::CashOut,
];

/// Folds window events into held/edge state between ticks.
#[derive(Debug, Default)]
pub(crate) struct InputCollector {
    quit_requested: bool,
    action_states: ActionStates,
    touch: TouchAxis,
    dpad_touch: Option<u64>,
    button_touches: HashMap<u64, TouchButton>,
    confirm: EdgeLatch,
    advance_floor: EdgeLatch,
    cash_out: EdgeLatch,
    overlay_toggle: EdgeLatch,
    text_entry_enabled: bool,
    text_buffer: String,
    window_width: u32,
    window_height: u32,
}

impl InputCollector {
    pub(crate) fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            window_width,
            window_height,
            ..Self::default()
        }
    }

    pub(crate) fn mark_quit_requested(&mut self) {
        self.quit_requested = true;
    }

    pub(crate) fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub(crate) fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    pub(crate) fn set_text_entry_enabled(&mut self, enabled: bool) {
        if self.text_entry_enabled && !enabled {
            self.text_buffer.clear();
        }
        self.text_entry_enabled = enabled;
    }

    pub(crate) fn handle_physical_key(&mut self, key: PhysicalKey, state: ElementState) {
        let is_pressed = state == ElementState::Pressed;
        match key {
            PhysicalKey::Code(KeyCode::KeyW) | PhysicalKey::Code(KeyCode::ArrowUp) => {
                self.action_states.set(InputAction::MoveUp, is_pressed);
            }
            PhysicalKey::Code(KeyCode::KeyS) | PhysicalKey::Code(KeyCode::ArrowDown) => {
                self.action_states.set(InputAction::MoveDown, is_pressed);
            }
            PhysicalKey::Code(KeyCode::KeyA) | PhysicalKey::Code(KeyCode::ArrowLeft) => {
                self.action_states.set(InputAction::MoveLeft, is_pressed);
            }
            PhysicalKey::Code(KeyCode::KeyD) | PhysicalKey::Code(KeyCode::ArrowRight) => {
                self.action_states.set(InputAction::MoveRight, is_pressed);
            }
            PhysicalKey::Code(KeyCode::Space) => {
                self.action_states.set(InputAction::Action, is_pressed);
            }
            PhysicalKey::Code(KeyCode::Enter) | PhysicalKey::Code(KeyCode::NumpadEnter) => {
                self.confirm.handle(state);
            }
            PhysicalKey::Code(KeyCode::KeyN) if !self.text_entry_enabled => {
                self.advance_floor.handle(state);
            }
            PhysicalKey::Code(KeyCode::KeyC) if !self.text_entry_enabled => {
                self.cash_out.handle(state);
            }
            PhysicalKey::Code(KeyCode::F3) => {
                self.overlay_toggle.handle(state);
            }
            PhysicalKey::Code(KeyCode::Backspace) => {
                if is_pressed && self.text_entry_enabled {
                    self.text_buffer.pop();
                }
            }
            PhysicalKey::Code(KeyCode::Escape) => {
                self.action_states.set(InputAction::Quit, is_pressed);
                if is_pressed {
                    self.mark_quit_requested();
                }
            }
            _ => {}
        }
    }

    /// Appends typed characters to the text field while a scene asks for text.
    pub(crate) fn handle_text(&mut self, text: &str) {
        if !self.text_entry_enabled {
            return;
        }
        for ch in text.chars() {
            if ch.is_control() || !ch.is_ascii() {
                continue;
            }
            if self.text_buffer.chars().count() >= MAX_TEXT_INPUT_CHARS {
                break;
            }
            self.text_buffer.push(ch);
        }
    }

    /// Routes one touch point. Touches that start in the bottom band press the
    /// button under them; anything else drives the d-pad by its dominant offset
    /// from the centre of the area above the band. Only the latest d-pad touch
    /// steers.
    pub(crate) fn handle_touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        location: PhysicalPosition<f64>,
    ) {
        match phase {
            TouchPhase::Started => {
                if let Some(button) = self.touch_button_at(location) {
                    self.press_touch_button(id, button);
                } else {
                    self.dpad_touch = Some(id);
                    self.touch = self.dpad_axis_at(location);
                }
            }
            TouchPhase::Moved => {
                if self.dpad_touch == Some(id) {
                    self.touch = self.dpad_axis_at(location);
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.button_touches.remove(&id).is_none() && self.dpad_touch == Some(id) {
                    self.dpad_touch = None;
                    self.touch = TouchAxis::default();
                }
            }
        }
    }

    fn touch_button_at(&self, location: PhysicalPosition<f64>) -> Option<TouchButton> {
        let width = f64::from(self.window_width);
        let height = f64::from(self.window_height);
        if width <= 0.0 || location.y < height * (1.0 - TOUCH_BUTTON_BAND) {
            return None;
        }
        let column = (location.x.max(0.0) / width * TOUCH_BUTTONS.len() as f64) as usize;
        Some(TOUCH_BUTTONS[column.min(TOUCH_BUTTONS.len() - 1)])
    }

    fn press_touch_button(&mut self, id: u64, button: TouchButton) {
        match button {
            TouchButton::Action => {}
            TouchButton::Confirm => self.confirm.trigger(),
            TouchButton::AdvanceFloor if !self.text_entry_enabled => self.advance_floor.trigger(),
            TouchButton::CashOut if !self.text_entry_enabled => self.cash_out.trigger(),
            TouchButton::AdvanceFloor | TouchButton::CashOut => return,
        }
        self.button_touches.insert(id, button);
    }

    fn dpad_axis_at(&self, location: PhysicalPosition<f64>) -> TouchAxis {
        let dx = location.x - f64::from(self.window_width) * 0.5;
        let dy = location.y - f64::from(self.window_height) * (1.0 - TOUCH_BUTTON_BAND) * 0.5;
        if dx == 0.0 && dy == 0.0 {
            TouchAxis::default()
        } else if dx.abs() >= dy.abs() {
            TouchAxis::new(if dx > 0.0 { 1 } else { -1 }, 0)
        } else {
            TouchAxis::new(0, if dy > 0.0 { 1 } else { -1 })
        }
    }

    pub(crate) fn snapshot_for_tick(&mut self) -> InputSnapshot {
        let mut actions = self.action_states;
        if self
            .button_touches
            .values()
            .any(|button| *button == TouchButton::Action)
        {
            actions.set(InputAction::Action, true);
        }
        InputSnapshot {
            quit_requested: self.quit_requested,
            actions,
            touch: self.touch,
            confirm_pressed: self.confirm.take(),
            advance_floor_pressed: self.advance_floor.take(),
            cash_out_pressed: self.cash_out.take(),
            text_input: self.text_buffer.clone(),
        }
    }

    pub(crate) fn take_overlay_toggle_pressed(&mut self) -> bool {
        self.overlay_toggle.take()
    }
}

use super::geometry::{Rect, Vec2};
use super::input::InputSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    Door { open: bool },
    Player,
    Npc,
    Enemy,
    Slash,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub kind: DrawKind,
    pub rect: Rect,
    pub color: [u8; 4],
    /// Remaining lifetime for transient effects, in frames.
    pub remaining_frames: Option<u32>,
}

/// Modal text box drawn over the arena: dialogue lines, an optional name
/// field and the floor-decision prompt all go through here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiPanel {
    pub lines: Vec<String>,
    pub text_field: Option<String>,
}

impl UiPanel {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.text_field.is_none()
    }
}

/// Read-only description of one rendered frame. Draw order is the order of `rects`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneFrame {
    pub arena_size: Vec2,
    pub clear_color: [u8; 4],
    pub rects: Vec<DrawRect>,
    pub panel: Option<UiPanel>,
}

impl SceneFrame {
    pub fn clear(&mut self) {
        self.rects.clear();
        self.panel = None;
    }

    pub fn push(&mut self, kind: DrawKind, rect: Rect, color: [u8; 4]) {
        self.rects.push(DrawRect {
            kind,
            rect,
            color,
            remaining_frames: None,
        });
    }

    pub fn push_effect(&mut self, kind: DrawKind, rect: Rect, color: [u8; 4], remaining: u32) {
        self.rects.push(DrawRect {
            kind,
            rect,
            color,
            remaining_frames: Some(remaining),
        });
    }

    pub fn count_kind(&self, predicate: impl Fn(DrawKind) -> bool) -> usize {
        self.rects.iter().filter(|rect| predicate(rect.kind)).count()
    }
}

pub trait Scene {
    fn load(&mut self);
    fn update(&mut self, input: &InputSnapshot) -> SceneCommand;
    /// Fills `frame` for drawing. Called exactly once per presented frame.
    fn render(&mut self, frame: &mut SceneFrame);
    fn unload(&mut self) {}
    fn wants_text_entry(&self) -> bool {
        false
    }
    fn title(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_clear_keeps_arena_and_drops_draw_list() {
        let mut frame = SceneFrame {
            arena_size: Vec2::new(320.0, 240.0),
            ..SceneFrame::default()
        };
        frame.push(DrawKind::Player, Rect::new(0.0, 0.0, 4.0, 4.0), [0, 255, 0, 255]);
        frame.panel = Some(UiPanel {
            lines: vec!["hello".to_string()],
            text_field: None,
        });

        frame.clear();

        assert!(frame.rects.is_empty());
        assert!(frame.panel.is_none());
        assert_eq!(frame.arena_size, Vec2::new(320.0, 240.0));
    }

    #[test]
    fn effects_carry_remaining_lifetime() {
        let mut frame = SceneFrame::default();
        frame.push(DrawKind::Enemy, Rect::new(0.0, 0.0, 4.0, 4.0), [255, 0, 0, 255]);
        frame.push_effect(
            DrawKind::Slash,
            Rect::new(0.0, 0.0, 4.0, 4.0),
            [255, 255, 255, 255],
            7,
        );
        assert_eq!(frame.rects[0].remaining_frames, None);
        assert_eq!(frame.rects[1].remaining_frames, Some(7));
        assert_eq!(frame.count_kind(|kind| kind == DrawKind::Slash), 1);
    }

    #[test]
    fn empty_panel_reports_empty() {
        assert!(UiPanel::default().is_empty());
        assert!(!UiPanel {
            lines: Vec::new(),
            text_field: Some(String::new()),
        }
        .is_empty());
    }
}

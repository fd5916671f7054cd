//! Windowing, input, fixed-step loop and software rendering shared by the
//! tower game. Gameplay lives in the game crate behind the [`Scene`] trait.

pub mod app;

pub use app::{
    overlaps, run_app, AppError, Clock, DrawKind, DrawRect, InputAction, InputSnapshot,
    LoopConfig, LoopMetricsSnapshot, ManualClock, MonotonicClock, Rect, Renderer, Scene,
    SceneCommand, SceneFrame, TouchAxis, UiPanel, Vec2, SLOW_FRAME_ENV_VAR,
};

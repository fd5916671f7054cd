mod clock;
mod geometry;
mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use geometry::{overlaps, Rect, Vec2};
pub use input::{InputAction, InputSnapshot, TouchAxis};
pub use loop_runner::{run_app, AppError, LoopConfig, SLOW_FRAME_ENV_VAR};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::Renderer;
pub use scene::{DrawKind, DrawRect, Scene, SceneCommand, SceneFrame, UiPanel};

pub mod circuit;
pub mod config;
pub mod core;
pub mod input;
pub mod particles;
pub mod render;
pub mod runner;
pub mod tutor;

// Re-export key types at crate root for convenience
pub use circuit::battery::{Battery, BatteryPhase};
pub use circuit::layout::{Layout, Rect};
pub use circuit::path::{LoopPath, RailPoint, Side};
pub use config::{ConfigError, EngineConfig};
pub use core::rng::Rng;
pub use core::time::IntervalTimer;
pub use input::queue::{InputEvent, InputQueue};
pub use particles::emission::{Emission, EmissionPool};
pub use particles::pool::{Electron, ElectronPool};
pub use render::projection::project;
pub use render::snapshot::{FieldMarker, FrameSnapshot, PointInstance};
pub use runner::CircuitRunner;
pub use tutor::{LessonPhase, Role, TranscriptTurn, Tutor, TutorReply};

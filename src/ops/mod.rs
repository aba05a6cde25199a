//! Operations subsystem - the key-command state machine and the
//! configuration it owns.

pub mod engine;
pub mod presets;
pub mod settings;

pub use engine::{OpsEngine, StepResult};
pub use presets::PresetBank;
pub use settings::{OpsConfig, TempScale};

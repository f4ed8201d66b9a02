// Configuration loading

pub mod settings;

pub use settings::{ConflictPolicy, Settings};

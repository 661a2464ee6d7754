//! Core module - configuration and shared error types
//!
//! - `error` - Persistence error type shared by settings and save files
//! - `settings` - [`EngineSettings`] with JSON load/save

pub mod error;
pub mod settings;

pub use error::{PersistenceError, PersistenceResult};
pub use settings::{load_settings, save_settings, settings_path, EngineSettings};

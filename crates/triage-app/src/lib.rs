//! triage-app - Selection engine and application state for triage
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management around the selection engine: the `SelectionSet` owns every
//! row's classification and the derived master-control states, and
//! `handler::update` maps user gestures onto it.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod selection;
pub mod state;

// Re-export primary types
pub use config::{load_settings, DialogSettings, Settings};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use selection::{SelectionPhase, SelectionSet, Snapshot};
pub use state::{AppState, DialogPhase, UiMode};

//! triage-tui - Terminal UI for triage
//!
//! This crate provides the ratatui-based dialog. It drives the TEA loop
//! from triage-app with terminal rendering and event polling; the loop is
//! synchronous because every gesture is handled to completion before the
//! next one is read.

pub mod event;
pub mod runner;
pub mod widgets;

// Re-export main entry points
pub use runner::{run_dialog, DialogOutcome};

//! The synchronous dialog loop: init terminal, draw, poll, update, restore.

use triage_app::{update, AppState, DialogPhase, Message, SelectionSet, UiMode};
use triage_core::prelude::*;
use triage_core::Choice;

use crate::event;
use crate::widgets::{dialog, warning};

/// Result of running the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// User committed a complete selection
    Committed(Vec<(String, Choice)>),
    /// User dismissed the dialog (q/Esc/Ctrl+C)
    Cancelled,
}

/// Display the classification dialog and wait for a commit or cancel.
///
/// Gestures are processed strictly in arrival order; each message and its
/// follow-ups are drained before the next poll, so one gesture produces
/// one coherent state transition.
pub fn run_dialog(selection: SelectionSet) -> Result<DialogOutcome> {
    if selection.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut terminal = ratatui::init();
    let mut state = AppState::new(selection);

    let outcome = loop {
        terminal
            .draw(|frame| {
                dialog::render_dialog(frame, &state);
                if state.ui_mode == UiMode::Warning {
                    warning::render_warning(frame, &state);
                }
            })
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            let mut next = update(&mut state, message).message;
            while let Some(message) = next {
                next = update(&mut state, message).message;
            }
        }

        match state.phase {
            DialogPhase::Editing => {}
            DialogPhase::Committed => {
                // Commit stores the pairs before flipping the phase.
                let pairs = state.result.take().unwrap_or_default();
                break DialogOutcome::Committed(pairs);
            }
            DialogPhase::Cancelled => break DialogOutcome::Cancelled,
        }
    };

    ratatui::restore();

    match &outcome {
        DialogOutcome::Committed(pairs) => info!(rows = pairs.len(), "dialog committed"),
        DialogOutcome::Cancelled => info!("dialog cancelled"),
    }
    Ok(outcome)
}

//! Main update function - handles state transitions (TEA pattern)

use tracing::warn;
use triage_core::Error;

use crate::message::Message;
use crate::state::{AppState, DialogPhase, UiMode};

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Cursor Messages
        // ─────────────────────────────────────────────────────────
        Message::CursorUp => {
            state.cursor_up();
            UpdateResult::none()
        }
        Message::CursorDown => {
            state.cursor_down();
            UpdateResult::none()
        }
        Message::CursorTop => {
            state.cursor_top();
            UpdateResult::none()
        }
        Message::CursorBottom => {
            state.cursor_bottom();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::SetChoice(choice) => {
            state.selection.toggle_item(state.cursor, choice);
            UpdateResult::none()
        }
        Message::ActivateMaster(choice) => {
            state.selection.activate_master(choice);
            UpdateResult::none()
        }
        Message::ClearAll => {
            state.selection.clear_all();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Lifecycle Messages
        // ─────────────────────────────────────────────────────────
        Message::Confirm => match state.selection.commit() {
            Ok(pairs) => {
                state.result = Some(pairs);
                state.phase = DialogPhase::Committed;
                UpdateResult::none()
            }
            Err(Error::IncompleteSelection { labels }) => {
                state.warning_labels = labels;
                state.ui_mode = UiMode::Warning;
                UpdateResult::none()
            }
            Err(err) => {
                warn!("commit failed unexpectedly: {err}");
                UpdateResult::none()
            }
        },

        Message::DismissWarning => {
            state.warning_labels.clear();
            state.ui_mode = UiMode::Editing;
            UpdateResult::none()
        }

        Message::Cancel => {
            state.phase = DialogPhase::Cancelled;
            UpdateResult::none()
        }
    }
}

//! Key event handlers for UI modes

use triage_core::Choice;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Map a key press to a message, depending on the current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Warning => handle_warning_key(key),
        UiMode::Editing => handle_editing_key(state, key),
    }
}

/// Warning modal: Ctrl+C still force-cancels, any other key dismisses
fn handle_warning_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Cancel),
        _ => Some(Message::DismissWarning),
    }
}

fn handle_editing_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Char('Q') | InputKey::Esc => Some(Message::Cancel),
        InputKey::CharCtrl('c') => Some(Message::Cancel),

        // Row cursor
        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::Home => Some(Message::CursorTop),
        InputKey::End => Some(Message::CursorBottom),

        // Classify the current row
        InputKey::Left | InputKey::Char('h') | InputKey::Char('g') => {
            Some(Message::SetChoice(Choice::Gui))
        }
        InputKey::Right | InputKey::Char('l') | InputKey::Char('c') => {
            Some(Message::SetChoice(Choice::Custom))
        }
        // Space toggles: flips a classified row, classifies an unset row as GUI
        InputKey::Space => {
            let next = match state.selection.choice(state.cursor) {
                Some(choice) => choice.opposite(),
                None => Choice::Gui,
            };
            Some(Message::SetChoice(next))
        }

        // Master controls
        InputKey::Char('G') | InputKey::Char('1') => Some(Message::ActivateMaster(Choice::Gui)),
        InputKey::Char('C') | InputKey::Char('2') => Some(Message::ActivateMaster(Choice::Custom)),

        // Reset
        InputKey::Char('x') => Some(Message::ClearAll),

        // Commit
        InputKey::Enter => Some(Message::Confirm),

        _ => None,
    }
}

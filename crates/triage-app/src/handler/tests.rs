//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::selection::SelectionSet;
use crate::state::{AppState, DialogPhase, UiMode};
use triage_core::{Choice, MasterPolicy, MasterState, MasterStyle};

/// Helper to build a three-row dialog state with the default variant
fn test_state() -> AppState {
    test_state_with(MasterPolicy::Clear, MasterStyle::Checkbox)
}

fn test_state_with(policy: MasterPolicy, style: MasterStyle) -> AppState {
    AppState::new(SelectionSet::new(
        ["getUserData", "fetchUserInfo", "getProfile"],
        policy,
        style,
    ))
}

#[test]
fn test_cancel_message_sets_cancelled_phase() {
    let mut state = test_state();
    assert!(!state.should_quit());

    update(&mut state, Message::Cancel);

    assert_eq!(state.phase, DialogPhase::Cancelled);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_cancel_message() {
    let state = test_state();
    let result = handle_key(&state, InputKey::Char('q'));
    assert!(matches!(result, Some(Message::Cancel)));
}

#[test]
fn test_escape_key_produces_cancel_message() {
    let state = test_state();
    let result = handle_key(&state, InputKey::Esc);
    assert!(matches!(result, Some(Message::Cancel)));
}

#[test]
fn test_ctrl_c_produces_cancel_message() {
    let state = test_state();
    let result = handle_key(&state, InputKey::CharCtrl('c'));
    assert!(matches!(result, Some(Message::Cancel)));
}

#[test]
fn test_arrow_keys_move_cursor() {
    let mut state = test_state();

    let result = update(&mut state, Message::Key(InputKey::Down));
    assert_eq!(result.message, Some(Message::CursorDown));
    update(&mut state, Message::CursorDown);
    assert_eq!(state.cursor, 1);

    update(&mut state, Message::CursorUp);
    assert_eq!(state.cursor, 0);
}

#[test]
fn test_g_and_c_classify_current_row() {
    let mut state = test_state();

    update(&mut state, Message::SetChoice(Choice::Gui));
    assert_eq!(state.selection.choice(0), Some(Choice::Gui));

    update(&mut state, Message::CursorDown);
    update(&mut state, Message::SetChoice(Choice::Custom));
    assert_eq!(state.selection.choice(1), Some(Choice::Custom));
}

#[test]
fn test_space_toggles_current_row() {
    let mut state = test_state();

    // Unset row: space classifies as GUI
    let msg = handle_key(&state, InputKey::Space);
    assert_eq!(msg, Some(Message::SetChoice(Choice::Gui)));

    update(&mut state, Message::SetChoice(Choice::Gui));
    let msg = handle_key(&state, InputKey::Space);
    assert_eq!(msg, Some(Message::SetChoice(Choice::Custom)));
}

#[test]
fn test_master_keys_map_to_activate_master() {
    let state = test_state();
    assert_eq!(
        handle_key(&state, InputKey::Char('G')),
        Some(Message::ActivateMaster(Choice::Gui))
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('2')),
        Some(Message::ActivateMaster(Choice::Custom))
    );
}

#[test]
fn test_activate_master_message_applies_bulk_choice() {
    let mut state = test_state();
    update(&mut state, Message::ActivateMaster(Choice::Gui));

    assert_eq!(state.selection.incomplete().count(), 0);
    assert_eq!(state.selection.master(Choice::Gui), MasterState::On);
}

#[test]
fn test_clear_all_message_resets_rows() {
    let mut state = test_state();
    update(&mut state, Message::ActivateMaster(Choice::Custom));
    update(&mut state, Message::ClearAll);

    assert_eq!(state.selection.incomplete().count(), 3);
    assert_eq!(state.selection.master(Choice::Custom), MasterState::Off);
}

#[test]
fn test_confirm_with_incomplete_rows_opens_warning() {
    let mut state = test_state();
    update(&mut state, Message::SetChoice(Choice::Gui));

    update(&mut state, Message::Confirm);

    assert_eq!(state.ui_mode, UiMode::Warning);
    assert_eq!(state.phase, DialogPhase::Editing);
    assert_eq!(state.warning_labels, vec!["fetchUserInfo", "getProfile"]);
    assert!(state.result.is_none());
}

#[test]
fn test_any_key_dismisses_warning() {
    let mut state = test_state();
    update(&mut state, Message::Confirm);
    assert_eq!(state.ui_mode, UiMode::Warning);

    let msg = handle_key(&state, InputKey::Char('z'));
    assert_eq!(msg, Some(Message::DismissWarning));

    update(&mut state, Message::DismissWarning);
    assert_eq!(state.ui_mode, UiMode::Editing);
    assert!(state.warning_labels.is_empty());
}

#[test]
fn test_ctrl_c_in_warning_cancels() {
    let mut state = test_state();
    update(&mut state, Message::Confirm);

    let msg = handle_key(&state, InputKey::CharCtrl('c'));
    assert_eq!(msg, Some(Message::Cancel));
}

#[test]
fn test_confirm_with_complete_rows_commits() {
    let mut state = test_state();
    update(&mut state, Message::SetChoice(Choice::Gui));
    update(&mut state, Message::CursorDown);
    update(&mut state, Message::SetChoice(Choice::Custom));
    update(&mut state, Message::CursorDown);
    update(&mut state, Message::SetChoice(Choice::Gui));

    update(&mut state, Message::Confirm);

    assert_eq!(state.phase, DialogPhase::Committed);
    assert_eq!(
        state.result,
        Some(vec![
            ("getUserData".to_string(), Choice::Gui),
            ("fetchUserInfo".to_string(), Choice::Custom),
            ("getProfile".to_string(), Choice::Gui),
        ])
    );
}

#[test]
fn test_full_gesture_sequence_through_key_events() {
    // Drive the whole dialog through raw key events only, like the TUI does.
    let mut state = test_state();
    let keys = [
        InputKey::Char('G'),  // all GUI
        InputKey::Down,       // cursor to row 1
        InputKey::Char('c'),  // row 1 -> Custom
        InputKey::Enter,      // commit
    ];
    for key in keys {
        let mut next = update(&mut state, Message::Key(key)).message;
        while let Some(msg) = next {
            next = update(&mut state, msg).message;
        }
    }

    assert_eq!(state.phase, DialogPhase::Committed);
    let result = state.result.unwrap();
    assert_eq!(result[0].1, Choice::Gui);
    assert_eq!(result[1].1, Choice::Custom);
    assert_eq!(result[2].1, Choice::Gui);
}

#[test]
fn test_flip_variant_double_master_through_messages() {
    let mut state = test_state_with(MasterPolicy::Flip, MasterStyle::Checkbox);
    update(&mut state, Message::ActivateMaster(Choice::Gui));
    update(&mut state, Message::ActivateMaster(Choice::Gui));

    for i in 0..3 {
        assert_eq!(state.selection.choice(i), Some(Choice::Custom));
    }
    assert_eq!(state.selection.master(Choice::Custom), MasterState::On);
}

#[test]
fn test_tick_is_noop() {
    let mut state = test_state();
    let result = update(&mut state, Message::Tick);
    assert_eq!(result, UpdateResult::none());
    assert_eq!(state.phase, DialogPhase::Editing);
}

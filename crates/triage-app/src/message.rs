//! Message types for the application (TEA pattern)

use triage_core::Choice;

use crate::input_key::InputKey;

/// All possible messages/actions in the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic redraw
    Tick,

    // ─────────────────────────────────────────────────────────
    // Cursor Messages
    // ─────────────────────────────────────────────────────────
    /// Move the row cursor up one row
    CursorUp,
    /// Move the row cursor down one row
    CursorDown,
    /// Jump to the first row
    CursorTop,
    /// Jump to the last row
    CursorBottom,

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Classify the row under the cursor
    SetChoice(Choice),
    /// Activate a master control (bulk apply per the configured policy)
    ActivateMaster(Choice),
    /// Reset every row to unclassified
    ClearAll,

    // ─────────────────────────────────────────────────────────
    // Lifecycle Messages
    // ─────────────────────────────────────────────────────────
    /// Validate and commit the selection
    Confirm,
    /// Close the incomplete-selection warning
    DismissWarning,
    /// Dismiss the dialog without committing
    Cancel,
}

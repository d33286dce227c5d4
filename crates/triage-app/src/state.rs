//! Application state (Model in TEA pattern)

use triage_core::Choice;

use crate::selection::SelectionSet;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal dialog: row cursor active, all gestures accepted
    #[default]
    Editing,

    /// Blocking warning listing the rows that are still unclassified.
    /// Shown when commit fails; any key dismisses it.
    Warning,
}

/// Dialog lifecycle as seen by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Editing,
    /// Commit succeeded; `AppState::result` holds the pairs
    Committed,
    /// Dismissed without committing; the selection is discarded
    Cancelled,
}

/// Full application state for one dialog session
#[derive(Debug)]
pub struct AppState {
    /// The selection engine (exclusively owned by this session)
    pub selection: SelectionSet,
    /// Index of the row under the cursor
    pub cursor: usize,
    pub ui_mode: UiMode,
    pub phase: DialogPhase,
    /// Labels shown in the warning modal after a failed commit
    pub warning_labels: Vec<String>,
    /// The committed `(label, choice)` pairs, set once on success
    pub result: Option<Vec<(String, Choice)>>,
}

impl AppState {
    pub fn new(selection: SelectionSet) -> Self {
        Self {
            selection,
            cursor: 0,
            ui_mode: UiMode::Editing,
            phase: DialogPhase::Editing,
            warning_labels: Vec::new(),
            result: None,
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.selection.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_bottom(&mut self) {
        self.cursor = self.selection.len().saturating_sub(1);
    }

    /// True once the event loop should stop (committed or cancelled)
    pub fn should_quit(&self) -> bool {
        self.phase != DialogPhase::Editing
    }
}

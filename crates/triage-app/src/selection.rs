//! The selection engine: per-row choices plus derived master-control state.
//!
//! A [`SelectionSet`] owns the ordered rows of the dialog and the two master
//! controls. All mutation flows through its public operations; each external
//! gesture produces exactly one coherent transition (derived state is
//! recomputed once, then a single [`Snapshot`] notification is delivered).
//! Logical re-entrancy -- a notification triggering another mutation while
//! one is still being applied -- is suppressed by an explicit guard flag.

use std::fmt;

use triage_core::prelude::*;
use triage_core::{Choice, MasterPolicy, MasterState, MasterStyle};

/// One row of the dialog: a label and its current classification.
///
/// Duplicate labels are distinct rows, so rows are addressed by position.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Item {
    label: String,
    choice: Option<Choice>,
}

/// Lifecycle of a selection set.
///
/// `Committed` is terminal: it is reached only through a successful
/// [`SelectionSet::commit`], after which further mutation is a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    #[default]
    Editing,
    Committed,
}

/// State snapshot delivered to the presentation layer after each mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// `(label, choice)` per row, in input order.
    pub choices: Vec<(String, Option<Choice>)>,
    /// Derived state of the GUI master control (checkbox style only).
    pub gui_master: MasterState,
    /// Derived state of the Custom master control (checkbox style only).
    pub custom_master: MasterState,
}

/// Synchronous observer invoked with a snapshot after every mutation.
pub type Observer = Box<dyn FnMut(&Snapshot)>;

/// The ordered rows plus the two master controls.
pub struct SelectionSet {
    items: Vec<Item>,
    gui_master: MasterState,
    custom_master: MasterState,
    policy: MasterPolicy,
    style: MasterStyle,
    phase: SelectionPhase,
    /// Re-entrancy guard: true while a mutation is being applied.
    updating: bool,
    observer: Option<Observer>,
}

impl fmt::Debug for SelectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSet")
            .field("items", &self.items)
            .field("gui_master", &self.gui_master)
            .field("custom_master", &self.custom_master)
            .field("policy", &self.policy)
            .field("style", &self.style)
            .field("phase", &self.phase)
            .field("updating", &self.updating)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl SelectionSet {
    /// Create a selection set from an ordered list of labels.
    ///
    /// Labels are kept in input order; duplicates become distinct rows.
    /// Every row starts unclassified and both masters start Off.
    pub fn new(
        labels: impl IntoIterator<Item = impl Into<String>>,
        policy: MasterPolicy,
        style: MasterStyle,
    ) -> Self {
        let items = labels
            .into_iter()
            .map(|label| Item {
                label: label.into(),
                choice: None,
            })
            .collect();

        Self {
            items,
            gui_master: MasterState::Off,
            custom_master: MasterState::Off,
            policy,
            style,
            phase: SelectionPhase::Editing,
            updating: false,
            observer: None,
        }
    }

    /// Register a synchronous observer notified after every mutation.
    pub fn set_observer(&mut self, observer: impl FnMut(&Snapshot) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn policy(&self) -> MasterPolicy {
        self.policy
    }

    pub fn style(&self) -> MasterStyle {
        self.style
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn is_committed(&self) -> bool {
        self.phase == SelectionPhase::Committed
    }

    /// Row labels in input order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.label.as_str())
    }

    /// A single row's current classification. `None` if unclassified.
    pub fn choice(&self, index: usize) -> Option<Choice> {
        self.items.get(index).and_then(|item| item.choice)
    }

    /// Derived state of a master control.
    ///
    /// Always `Off` in button style, which keeps no persisted master state.
    pub fn master(&self, choice: Choice) -> MasterState {
        match choice {
            Choice::Gui => self.gui_master,
            Choice::Custom => self.custom_master,
        }
    }

    /// Whether every row carries `choice`. False for an empty set, so a
    /// master can never show On over zero rows.
    pub fn all_selected(&self, choice: Choice) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.choice == Some(choice))
    }

    /// Labels whose rows are still unclassified, in input order.
    ///
    /// Lazy and restartable: a plain pass over current state, no caching.
    pub fn incomplete(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter(|item| item.choice.is_none())
            .map(|item| item.label.as_str())
    }

    /// Current state as an owned snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            choices: self
                .items
                .iter()
                .map(|item| (item.label.clone(), item.choice))
                .collect(),
            gui_master: self.gui_master,
            custom_master: self.custom_master,
        }
    }

    /// Set one row's classification, overwriting any prior value.
    ///
    /// An out-of-range index is a caller bug: debug assertion, no-op in
    /// release. Returns the post-mutation snapshot, or `None` if the
    /// mutation was suppressed.
    pub fn toggle_item(&mut self, index: usize, choice: Choice) -> Option<Snapshot> {
        if index >= self.items.len() {
            debug_assert!(false, "toggle_item: row index {index} out of range");
            error!(index, len = self.items.len(), "toggle_item: row index out of range");
            return None;
        }
        self.mutate(|set| {
            set.items[index].choice = Some(choice);
        })
    }

    /// Activate a master control: the bulk operation.
    ///
    /// If every row already carries `choice` (the control is being
    /// "unchecked"), the configured [`MasterPolicy`] decides the effect:
    /// clear every row, or flip every row to the opposite category.
    /// Otherwise every row is set to `choice`. The "all selected" predicate
    /// is recomputed fresh here, so the button style needs no persisted
    /// master state.
    pub fn activate_master(&mut self, choice: Choice) -> Option<Snapshot> {
        let all = self.all_selected(choice);
        let policy = self.policy;
        self.mutate(|set| {
            let target = if all {
                match policy {
                    MasterPolicy::Clear => None,
                    MasterPolicy::Flip => Some(choice.opposite()),
                }
            } else {
                Some(choice)
            };
            for item in &mut set.items {
                item.choice = target;
            }
        })
    }

    /// Reset every row to unclassified and both masters to Off.
    pub fn clear_all(&mut self) -> Option<Snapshot> {
        self.mutate(|set| {
            for item in &mut set.items {
                item.choice = None;
            }
        })
    }

    /// The validation gate.
    ///
    /// Fails with [`Error::IncompleteSelection`] listing exactly the
    /// unclassified labels (input order) while any remain; the set stays
    /// editable. On success returns the ordered `(label, choice)` pairs and
    /// enters the terminal `Committed` phase.
    pub fn commit(&mut self) -> Result<Vec<(String, Choice)>> {
        // Re-committing is idempotent: choices cannot change once committed,
        // so the same pairs come back.
        if self.is_committed() {
            debug!("commit called on an already-committed selection set");
        }

        let missing: Vec<String> = self.incomplete().map(str::to_string).collect();
        if !missing.is_empty() {
            debug!(count = missing.len(), "commit rejected: unclassified rows remain");
            return Err(Error::incomplete(missing));
        }

        self.phase = SelectionPhase::Committed;
        let result = self
            .items
            .iter()
            .map(|item| {
                // Unwrap is safe: the incomplete check above proved every
                // row is classified.
                (item.label.clone(), item.choice.unwrap())
            })
            .collect();
        info!(rows = self.items.len(), "selection committed");
        Ok(result)
    }

    /// Single mutation entry point: guard, apply, resync derived state,
    /// notify. One external gesture, one coherent transition.
    fn mutate(&mut self, f: impl FnOnce(&mut Self)) -> Option<Snapshot> {
        if self.updating {
            warn!("mutation suppressed: already applying a transition");
            return None;
        }
        if self.is_committed() {
            debug_assert!(false, "mutation after commit");
            error!("mutation ignored: selection set already committed");
            return None;
        }

        self.updating = true;
        f(self);
        self.sync_masters();
        let snap = self.snapshot();
        if let Some(observer) = self.observer.as_mut() {
            observer(&snap);
        }
        self.updating = false;
        Some(snap)
    }

    /// Recompute both derived master states from the full row set.
    ///
    /// Checkbox style: `On` iff every row carries that category (which also
    /// makes mutual exclusivity hold for nonempty sets). Button style keeps
    /// no persisted master state.
    fn sync_masters(&mut self) {
        match self.style {
            MasterStyle::Checkbox => {
                self.gui_master = MasterState::from_all_selected(self.all_selected(Choice::Gui));
                self.custom_master =
                    MasterState::from_all_selected(self.all_selected(Choice::Custom));
            }
            MasterStyle::Button => {
                self.gui_master = MasterState::Off;
                self.custom_master = MasterState::Off;
            }
        }
    }

    #[cfg(test)]
    fn set_updating(&mut self, updating: bool) {
        self.updating = updating;
    }
}

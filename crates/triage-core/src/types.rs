//! Domain types for the classification dialog

use std::fmt;

use serde::{Deserialize, Serialize};

/// A row's classification: one of the two categories.
///
/// An unclassified row is represented as `Option<Choice>::None` by the
/// selection engine; there is no `Unset` variant here on purpose, so a
/// committed result can never carry an unclassified row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// Handled by GUI components
    #[serde(rename = "GUI")]
    Gui,
    /// Handled by custom logic
    Custom,
}

impl Choice {
    /// The literal string consumers expect ("GUI" / "Custom").
    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Gui => "GUI",
            Choice::Custom => "Custom",
        }
    }

    /// The other category.
    pub fn opposite(&self) -> Choice {
        match self {
            Choice::Gui => Choice::Custom,
            Choice::Custom => Choice::Gui,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived on/off state of a master control (checkbox style only).
///
/// Never independently authoritative: recomputed from the full row set
/// after every mutation. `On` iff every row carries that master's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MasterState {
    #[default]
    Off,
    On,
}

impl MasterState {
    pub fn is_on(&self) -> bool {
        matches!(self, MasterState::On)
    }

    /// Derive from an "all rows match" predicate.
    pub fn from_all_selected(all: bool) -> Self {
        if all {
            MasterState::On
        } else {
            MasterState::Off
        }
    }
}

/// What activating a master control does when every row already carries
/// its category (the "uncheck" gesture). The source prototypes disagree,
/// so this is an explicit configuration axis rather than a guessed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasterPolicy {
    /// Unchecking clears every row back to unclassified.
    #[default]
    Clear,
    /// Unchecking flips every row to the opposite category.
    Flip,
}

/// How master controls are presented and tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasterStyle {
    /// Header checkboxes with persisted derived on/off state.
    #[default]
    Checkbox,
    /// Stateless header buttons; "all selected" is recomputed on demand
    /// when the button fires.
    Button,
}

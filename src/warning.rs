use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::engine::ValidationResult;

/// Rendering state of one field's warning. The presentation layer maps
/// `Invalid` to a visible message and `Clean` to no decoration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum WarningState {
    #[default]
    Clean,
    Invalid { message: String },
}

static CLEAN: WarningState = WarningState::Clean;

impl WarningState {
    pub fn is_active(&self) -> bool {
        matches!(self, WarningState::Invalid { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            WarningState::Clean => "",
            WarningState::Invalid { message } => message,
        }
    }
}

/// Per-field warning states, keyed by field id. An entry is created lazily
/// the first time a field fails validation; a valid result clears it.
/// Fields never affect each other's state.
#[derive(Debug, Default)]
pub struct WarningBoard {
    states: AHashMap<String, WarningState>,
}

impl WarningBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one field's validation result. Only that field's state can
    /// change; a previously cleared warning stays cleared unless this
    /// field itself fails again.
    pub fn apply(&mut self, field_id: &str, result: &ValidationResult, message: &str) {
        if result.valid {
            self.clear(field_id);
        } else {
            self.states.insert(
                field_id.to_string(),
                WarningState::Invalid {
                    message: message.to_string(),
                },
            );
        }
    }

    pub fn clear(&mut self, field_id: &str) {
        if let Some(state) = self.states.get_mut(field_id) {
            *state = WarningState::Clean;
        }
    }

    /// Reset every field, e.g. after a successful demo submission.
    pub fn clear_all(&mut self) {
        for state in self.states.values_mut() {
            *state = WarningState::Clean;
        }
    }

    /// A field with no recorded state is `Clean`.
    pub fn get(&self, field_id: &str) -> &WarningState {
        self.states.get(field_id).unwrap_or(&CLEAN)
    }

    pub fn active_count(&self) -> usize {
        self.states.values().filter(|state| state.is_active()).count()
    }
}

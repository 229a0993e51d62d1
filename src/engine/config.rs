use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{validate_field, FailureReason, FieldKind, FormOutcome, ValidationResult};
use crate::stats::GLOBAL_STATS;

/// Static configuration for one field: its identity, which checks apply,
/// and per-reason overrides of the default user-facing messages.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub id: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub messages: HashMap<FailureReason, String>,
}

impl FieldSpec {
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        FieldSpec {
            id: id.into(),
            kind,
            messages: HashMap::new(),
        }
    }

    // This method will help users to discover the builder
    pub fn builder(id: impl Into<String>, kind: FieldKind) -> FieldSpecBuilder {
        FieldSpecBuilder {
            id: id.into(),
            kind,
            messages: HashMap::new(),
        }
    }

    /// The user-facing message for a failure reason, falling back to the
    /// reason's default when no override is configured.
    pub fn message_for(&self, reason: FailureReason) -> &str {
        self.messages
            .get(&reason)
            .map(String::as_str)
            .unwrap_or_else(|| reason.default_message())
    }
}

pub struct FieldSpecBuilder {
    id: String,
    kind: FieldKind,
    messages: HashMap<FailureReason, String>,
}

impl FieldSpecBuilder {
    pub fn message(mut self, reason: FailureReason, message: impl Into<String>) -> Self {
        self.messages.insert(reason, message.into());
        self
    }

    pub fn build(self) -> FieldSpec {
        FieldSpec {
            id: self.id,
            kind: self.kind,
            messages: self.messages,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CreateFormError {
    #[error("Field ids must be non-empty")]
    EmptyFieldId,
    #[error("Duplicate field id: {0}")]
    DuplicateFieldId(String),
}

/// An ordered set of fields making up one form. The order decides which
/// single failure is surfaced on a submission attempt; field validity is
/// otherwise independent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FormSpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl FormSpec {
    pub fn new(
        name: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Result<Self, CreateFormError> {
        let mut seen = std::collections::HashSet::new();
        for field in &fields {
            if field.id.is_empty() {
                return Err(CreateFormError::EmptyFieldId);
            }
            if !seen.insert(field.id.as_str()) {
                return Err(CreateFormError::DuplicateFieldId(field.id.clone()));
            }
        }
        Ok(FormSpec {
            name: name.into(),
            fields,
        })
    }

    pub fn field(&self, field_id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.id == field_id)
    }

    /// Validate a full submission attempt. Fields are evaluated in spec
    /// order and evaluation stops at the first failure; a field with no
    /// supplied value is validated as empty text.
    pub fn validate(&self, values: &HashMap<String, String>) -> FormOutcome {
        for field in &self.fields {
            let raw = values.get(&field.id).map(String::as_str).unwrap_or("");
            let result = validate_field(field, raw);
            if let Some(reason) = result.reason {
                GLOBAL_STATS.forms_rejected.increment(1);
                return FormOutcome::Rejected {
                    field_id: field.id.clone(),
                    reason,
                    message: field.message_for(reason).to_string(),
                };
            }
        }
        GLOBAL_STATS.forms_accepted.increment(1);
        FormOutcome::Accepted
    }

    /// Live re-validation of a single edited field. Only that field's own
    /// checks run; other fields are never re-evaluated. Returns `None` for
    /// an unknown field id.
    pub fn revalidate_field(&self, field_id: &str, raw: &str) -> Option<ValidationResult> {
        self.field(field_id).map(|spec| validate_field(spec, raw))
    }
}

use serde::{Deserialize, Serialize};

use crate::stats::GLOBAL_STATS;
use crate::validators::{
    Birthdate, EmailFormat, FieldValidator, MessageLength, PasswordPolicy, RequiredText,
    RutChecksum, RutFormat,
};

pub mod config;

pub use config::{CreateFormError, FieldSpec, FieldSpecBuilder, FormSpec};

/// Which validators apply to a field. For kinds with more than one check,
/// the checks run in a fixed order and stop at the first failure.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum FieldKind {
    /// National identity number: shape check, then modulo-11 checksum.
    Rut,
    Email,
    Password,
    Birthdate,
    /// Free text that must be non-empty after trimming.
    RequiredText,
    /// Contact message: non-empty and within the length cap.
    Message,
}

/// User-recoverable reasons a field can fail. Each maps to a default
/// user-facing message, overridable per field in [FieldSpec].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureReason {
    IdentityFormatInvalid,
    IdentityChecksumInvalid,
    EmailInvalid,
    PasswordPolicyViolated,
    BirthdateInvalid,
    RequiredFieldEmpty,
    MessageLengthInvalid,
}

impl FailureReason {
    pub fn default_message(&self) -> &'static str {
        match self {
            FailureReason::IdentityFormatInvalid => {
                "RUT con formato inválido. Use 12.345.678-9 o 12345678-9."
            }
            FailureReason::IdentityChecksumInvalid => {
                "RUT inválido (dígito verificador no coincide)."
            }
            FailureReason::EmailInvalid => "Email inválido.",
            FailureReason::PasswordPolicyViolated => {
                "Contraseña inválida. Debe tener 8-30 caracteres e incluir minúscula, mayúscula, número y símbolo."
            }
            FailureReason::BirthdateInvalid => {
                "Fecha de nacimiento inválida. Debes tener al menos 18 años."
            }
            FailureReason::RequiredFieldEmpty => "Campo requerido.",
            FailureReason::MessageLengthInvalid => "Mensaje requerido (máximo 1000 caracteres).",
        }
    }

    pub(crate) fn as_label(&self) -> &'static str {
        match self {
            FailureReason::IdentityFormatInvalid => "identity_format",
            FailureReason::IdentityChecksumInvalid => "identity_checksum",
            FailureReason::EmailInvalid => "email",
            FailureReason::PasswordPolicyViolated => "password_policy",
            FailureReason::BirthdateInvalid => "birthdate",
            FailureReason::RequiredFieldEmpty => "required_field",
            FailureReason::MessageLengthInvalid => "message_length",
        }
    }
}

/// Outcome of validating one field. Produced fresh per call; never mutated.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub reason: Option<FailureReason>,
}

impl ValidationResult {
    fn passed() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    fn failed(reason: FailureReason) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason),
        }
    }
}

/// Outcome of a full-form submission attempt. On `Rejected` the consuming
/// layer must suppress the submission; fields after the failing one were
/// not evaluated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum FormOutcome {
    Accepted,
    Rejected {
        field_id: String,
        reason: FailureReason,
        message: String,
    },
}

static RUT_CHECKS: [(&dyn FieldValidator, FailureReason); 2] = [
    (&RutFormat, FailureReason::IdentityFormatInvalid),
    (&RutChecksum, FailureReason::IdentityChecksumInvalid),
];
static EMAIL_CHECKS: [(&dyn FieldValidator, FailureReason); 1] =
    [(&EmailFormat, FailureReason::EmailInvalid)];
static PASSWORD_CHECKS: [(&dyn FieldValidator, FailureReason); 1] =
    [(&PasswordPolicy, FailureReason::PasswordPolicyViolated)];
static BIRTHDATE_CHECKS: [(&dyn FieldValidator, FailureReason); 1] =
    [(&Birthdate, FailureReason::BirthdateInvalid)];
static REQUIRED_TEXT_CHECKS: [(&dyn FieldValidator, FailureReason); 1] =
    [(&RequiredText, FailureReason::RequiredFieldEmpty)];
static MESSAGE_CHECKS: [(&dyn FieldValidator, FailureReason); 1] =
    [(&MessageLength, FailureReason::MessageLengthInvalid)];

impl FieldKind {
    fn checks(&self) -> &'static [(&'static dyn FieldValidator, FailureReason)] {
        match self {
            FieldKind::Rut => &RUT_CHECKS,
            FieldKind::Email => &EMAIL_CHECKS,
            FieldKind::Password => &PASSWORD_CHECKS,
            FieldKind::Birthdate => &BIRTHDATE_CHECKS,
            FieldKind::RequiredText => &REQUIRED_TEXT_CHECKS,
            FieldKind::Message => &MESSAGE_CHECKS,
        }
    }
}

/// Run one field's ordered checks against a raw value, stopping at the
/// first failure.
pub fn validate_field(spec: &FieldSpec, raw: &str) -> ValidationResult {
    GLOBAL_STATS.field_validations.increment(1);
    for (validator, reason) in spec.kind.checks() {
        if !validator.is_valid(raw) {
            GLOBAL_STATS.record_field_rejection(*reason);
            return ValidationResult::failed(*reason);
        }
    }
    ValidationResult::passed()
}

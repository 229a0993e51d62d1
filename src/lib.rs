// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod engine;
mod normalization;
mod standard_forms;
mod stats;
mod submission;
mod tokio;
mod validators;
mod warning;

// This is the public API of the fieldcheck core library
pub use engine::{
    validate_field, CreateFormError, FailureReason, FieldKind, FieldSpec, FieldSpecBuilder,
    FormOutcome, FormSpec, ValidationResult,
};
pub use normalization::normalize_rut;
pub use standard_forms::{checkout_form, contact_form, login_form, registration_form};
pub use submission::MockSubmitter;
pub use validators::{
    compute_check_digit, Birthdate, EmailFormat, FieldValidator, MessageLength, PasswordPolicy,
    RequiredText, RutChecksum, RutFormat, MAX_MESSAGE_CHARS,
};
pub use warning::{WarningBoard, WarningState};

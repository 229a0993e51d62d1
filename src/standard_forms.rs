//! Ready-made specs for the site's four forms. Field order is the order
//! failures are surfaced in on a submission attempt.

use crate::engine::{FailureReason, FieldKind, FieldSpec, FormSpec};

/// Registration: identity number, birthdate (age is always derived from it),
/// email, password.
pub fn registration_form() -> FormSpec {
    FormSpec::new(
        "registration",
        vec![
            FieldSpec::new("rut", FieldKind::Rut),
            FieldSpec::new("birthdate", FieldKind::Birthdate),
            FieldSpec::new("email", FieldKind::Email),
            FieldSpec::new("password", FieldKind::Password),
        ],
    )
    .expect("registration form spec is valid")
}

/// Checkout: identity number, buyer names and phone as required text,
/// email, birthdate.
pub fn checkout_form() -> FormSpec {
    FormSpec::new(
        "checkout",
        vec![
            FieldSpec::new("rut", FieldKind::Rut),
            FieldSpec::builder("firstName", FieldKind::RequiredText)
                .message(FailureReason::RequiredFieldEmpty, "Nombre requerido.")
                .build(),
            FieldSpec::builder("lastName", FieldKind::RequiredText)
                .message(FailureReason::RequiredFieldEmpty, "Apellido requerido.")
                .build(),
            FieldSpec::new("email", FieldKind::Email),
            FieldSpec::builder("phone", FieldKind::RequiredText)
                .message(FailureReason::RequiredFieldEmpty, "Teléfono requerido.")
                .build(),
            FieldSpec::new("birthdate", FieldKind::Birthdate),
        ],
    )
    .expect("checkout form spec is valid")
}

/// Login: email shape plus password presence. The composition policy only
/// applies at registration time.
pub fn login_form() -> FormSpec {
    FormSpec::new(
        "login",
        vec![
            FieldSpec::new("email", FieldKind::Email),
            FieldSpec::new("password", FieldKind::RequiredText),
        ],
    )
    .expect("login form spec is valid")
}

/// Contact: email plus a length-capped message.
pub fn contact_form() -> FormSpec {
    FormSpec::new(
        "contact",
        vec![
            FieldSpec::new("email", FieldKind::Email),
            FieldSpec::new("message", FieldKind::Message),
        ],
    )
    .expect("contact form spec is valid")
}

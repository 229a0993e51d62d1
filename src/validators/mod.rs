mod birthdate;
mod email_format;
mod message_length;
mod password_policy;
mod required_text;
mod rut_checksum;
mod rut_format;

pub use crate::validators::birthdate::Birthdate;
pub use crate::validators::email_format::EmailFormat;
pub use crate::validators::message_length::{MessageLength, MAX_MESSAGE_CHARS};
pub use crate::validators::password_policy::PasswordPolicy;
pub use crate::validators::required_text::RequiredText;
pub use crate::validators::rut_checksum::{compute_check_digit, RutChecksum};
pub use crate::validators::rut_format::RutFormat;

/// A single pure check over one raw field value. Implementations are total:
/// they accept any string and never panic.
pub trait FieldValidator: Send + Sync {
    fn is_valid(&self, raw: &str) -> bool;
}

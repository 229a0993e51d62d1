use crate::validators::FieldValidator;

pub struct PasswordPolicy;

const MIN_PASSWORD_CHARS: usize = 8;
const MAX_PASSWORD_CHARS: usize = 30;

impl FieldValidator for PasswordPolicy {
    fn is_valid(&self, raw: &str) -> bool {
        let length = raw.chars().count();
        if !(MIN_PASSWORD_CHARS..=MAX_PASSWORD_CHARS).contains(&length) {
            return false;
        }
        let has_lower = raw.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = raw.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = raw.chars().any(|c| c.is_ascii_digit());
        // Anything outside [A-Za-z0-9] counts as a symbol, including spaces
        let has_symbol = raw.chars().any(|c| !c.is_ascii_alphanumeric());
        has_lower && has_upper && has_digit && has_symbol
    }
}

use crate::validators::FieldValidator;

pub struct MessageLength;

/// Maximum characters accepted in a contact-form message.
pub const MAX_MESSAGE_CHARS: usize = 1000;

impl FieldValidator for MessageLength {
    fn is_valid(&self, raw: &str) -> bool {
        let length = raw.trim().chars().count();
        length > 0 && length <= MAX_MESSAGE_CHARS
    }
}

#[cfg(test)]
mod test {
    use crate::validators::*;

    #[test]
    fn bounds_are_inclusive_of_max() {
        assert!(MessageLength.is_valid("hola"));
        assert!(MessageLength.is_valid(&"x".repeat(MAX_MESSAGE_CHARS)));
        assert!(!MessageLength.is_valid(&"x".repeat(MAX_MESSAGE_CHARS + 1)));
        assert!(!MessageLength.is_valid(""));
        assert!(!MessageLength.is_valid("   "));
    }

    #[test]
    fn length_ignores_surrounding_whitespace() {
        let padded = format!("  {}  ", "x".repeat(MAX_MESSAGE_CHARS));
        assert!(MessageLength.is_valid(&padded));
    }
}

use crate::validators::FieldValidator;

pub struct RequiredText;

impl FieldValidator for RequiredText {
    fn is_valid(&self, raw: &str) -> bool {
        !raw.trim().is_empty()
    }
}

use crate::normalization::normalize_rut;
use crate::validators::FieldValidator;

use lazy_static::lazy_static;
use regex::Regex;

pub struct RutFormat;

lazy_static! {
    // Applied to normalized input: one or more digits, a literal hyphen, and
    // exactly one trailing check character (digit or 'k').
    static ref RUT_SHAPE: Regex = Regex::new("^[0-9]+-[0-9k]$").unwrap();
}

impl FieldValidator for RutFormat {
    fn is_valid(&self, raw: &str) -> bool {
        RUT_SHAPE.is_match(&normalize_rut(raw))
    }
}

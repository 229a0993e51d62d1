use crate::normalization::normalize_rut;
use crate::validators::{FieldValidator, RutFormat};

pub struct RutChecksum;

/// Expected check digit for the numeric part of a RUT.
///
/// Weighted modulo-11: digits are multiplied right to left by a factor
/// cycling 2, 3, 4, 5, 6, 7, 2, ... and summed; `11 - (sum % 11)` maps to
/// '0' when 11, 'k' when 10, and the decimal digit otherwise.
/// Returns `None` if the input is empty or contains a non-digit.
pub fn compute_check_digit(numeric_part: &str) -> Option<char> {
    if numeric_part.is_empty() {
        return None;
    }
    let mut sum: u32 = 0;
    let mut factor: u32 = 2;
    for c in numeric_part.chars().rev() {
        sum += c.to_digit(10)? * factor;
        factor = if factor == 7 { 2 } else { factor + 1 };
    }
    match 11 - (sum % 11) {
        11 => Some('0'),
        10 => Some('k'),
        remainder => char::from_digit(remainder, 10),
    }
}

impl FieldValidator for RutChecksum {
    fn is_valid(&self, raw: &str) -> bool {
        if !RutFormat.is_valid(raw) {
            return false;
        }
        let normalized = normalize_rut(raw);
        let Some((numeric_part, supplied)) = normalized.rsplit_once('-') else {
            return false;
        };
        match compute_check_digit(numeric_part) {
            // The format check guarantees `supplied` is a single character
            Some(expected) => supplied == expected.to_string(),
            None => false,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::validators::*;

    #[test]
    fn check_digit_spot_values() {
        // 8*2 + 7*3 + 6*4 + 5*5 + 4*6 + 3*7 + 2*2 + 1*3 = 138, 11 - (138 % 11) = 5
        assert_eq!(compute_check_digit("12345678"), Some('5'));
        // sum = 2, remainder 9
        assert_eq!(compute_check_digit("1"), Some('9'));
        // sum = 0, remainder 11 -> '0'
        assert_eq!(compute_check_digit("0"), Some('0'));
        // sum = 12, 12 % 11 = 1, remainder 10 -> 'k'
        assert_eq!(compute_check_digit("6"), Some('k'));
    }

    #[test]
    fn check_digit_rejects_non_digits() {
        assert_eq!(compute_check_digit(""), None);
        assert_eq!(compute_check_digit("1234a678"), None);
        assert_eq!(compute_check_digit("12 345"), None);
    }

    #[test]
    fn validate_ruts() {
        let valid_ruts = vec!["12345678-5", "12.345.678-5", "1-9", "6-k", "6-K", "0-0"];
        for rut in valid_ruts {
            assert!(RutChecksum.is_valid(rut), "{}", rut);
        }
    }

    #[test]
    fn reject_wrong_check_digit() {
        let invalid_ruts = vec![
            "12345678-0",
            "12345678-k",
            "1-8",
            // Remainder 10 accepts only 'k', never a digit
            "6-0", "6-1", "6-2", "6-3", "6-4", "6-5", "6-6", "6-7", "6-8", "6-9",
        ];
        for rut in invalid_ruts {
            assert!(!RutChecksum.is_valid(rut), "{}", rut);
        }
    }

    #[test]
    fn reject_malformed_before_checksum() {
        let malformed = vec!["", "12345678", "123-456-5", "abc-5"];
        for rut in malformed {
            assert!(!RutChecksum.is_valid(rut), "{}", rut);
        }
    }
}

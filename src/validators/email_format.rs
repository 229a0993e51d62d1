use crate::validators::FieldValidator;

use lazy_static::lazy_static;
use regex::Regex;

pub struct EmailFormat;

// RFC 5322 caps the local part at 64 characters
const MAX_LOCAL_PART_CHARS: usize = 64;

lazy_static! {
    // RFC5322-derived shape: a dot-atom local part (no leading, trailing or
    // consecutive dots) or a quoted-string local part, then a domain of
    // dot-separated labels whose final label has at least two alphanumeric
    // characters.
    static ref EMAIL_SHAPE: Regex = Regex::new(
        r#"(?i)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"[^"\\]*")@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9]{2,}$"#
    )
    .unwrap();
}

impl FieldValidator for EmailFormat {
    fn is_valid(&self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if !EMAIL_SHAPE.is_match(trimmed) {
            return false;
        }
        // The domain cannot contain '@', so the last one separates the parts
        match trimmed.rsplit_once('@') {
            Some((local_part, _)) => local_part.chars().count() <= MAX_LOCAL_PART_CHARS,
            None => false,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::validators::*;

    #[test]
    fn accepts_common_addresses() {
        let valid_emails = vec![
            "user@example.com",
            "a@b.co",
            "first.last@example.com",
            "user+tag@sub.example.com",
            "USER@EXAMPLE.COM",
            "\"quoted local\"@example.com",
            " user@example.com ",
        ];
        for email in valid_emails {
            assert!(EmailFormat.is_valid(email), "{}", email);
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        let invalid_emails = vec![
            "",
            "user",
            "user@",
            "@example.com",
            "user@@example.com",
            // Final label must have at least two characters
            "user@example",
            "user@example.c",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@-example.com",
            "user@example..com",
            "user@example.com extra",
        ];
        for email in invalid_emails {
            assert!(!EmailFormat.is_valid(email), "{}", email);
        }
    }

    #[test]
    fn caps_local_part_at_64_chars() {
        let local_64 = "a".repeat(64);
        let local_65 = "a".repeat(65);
        assert!(EmailFormat.is_valid(&format!("{}@example.com", local_64)));
        assert!(!EmailFormat.is_valid(&format!("{}@example.com", local_65)));
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

// Structural check only: something@something.something with no whitespace
// and no extra '@'. Deliberately looser than RFC 5322.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn rejects_whitespace_anywhere() {
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email("a@b.com\n"));
        assert!(!is_valid_email("a@b.\tcom"));
    }

    #[test]
    fn stays_permissive_about_odd_but_structural_input() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("a@b..com"));
        assert!(is_valid_email("ünïcode@exämple.org"));
    }
}

//! Input validation shared by the verification flow and the donor form.

use regex::Regex;

/// Loose email shape check: something before `@`, something after, a dot in
/// the domain. Deliverability is the provider's problem.
pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"\S+@\S+\.\S+").is_ok_and(|re| re.is_match(email))
}

/// Strips whitespace from a phone number as entered; validation and storage
/// both operate on this form.
pub fn normalized_phone(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Phone numbers are stored as exactly ten digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = normalized_phone(phone);
    digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, is_valid_phone, normalized_phone};

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("donor.name+tag@example.co.uk"));
    }

    #[test]
    fn rejects_missing_at_or_domain() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@host"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn phone_requires_exactly_ten_digits() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("98765 43210"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("98765432101"));
        assert!(!is_valid_phone("98765abc10"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn normalization_only_drops_whitespace() {
        assert_eq!(normalized_phone(" 98 76 54 32 10 "), "9876543210");
        assert_eq!(normalized_phone("987-654-3210"), "987-654-3210");
    }
}

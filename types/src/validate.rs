//! Pure per-field format validators.
//!
//! Each validator maps a raw string to an error message; `None` means the
//! value is acceptable. Validators never touch shared state, so the engine
//! can re-run them on blur, on step advancement, and on submit without
//! ordering concerns.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::fields;

static AADHAAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{12}$").expect("aadhaar pattern is valid")
});
static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[6-9]\d{9}$").expect("mobile pattern is valid")
});
static PINCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{6}$").expect("pincode pattern is valid")
});
static PAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("pan pattern is valid")
});

/// Fields with a registered validator, in schema order.
///
/// Global validity (the submit precondition) quantifies over exactly this
/// set; derived fields are vouched for by the PIN lookup instead.
#[must_use]
pub fn governed_fields() -> &'static [&'static str] {
    &[
        fields::AADHAAR_NAME,
        fields::AADHAAR_NUMBER,
        fields::MOBILE,
        fields::PINCODE,
        fields::PAN_HOLDER,
        fields::PAN_NUMBER,
    ]
}

/// Validate a single field value.
///
/// Returns `Some(message)` when the value is rejected. Fields without a
/// registered validator (`state`, `city`) are always accepted here; their
/// correctness is delegated to the PIN lookup.
#[must_use]
pub fn validate(field: &str, value: &str) -> Option<&'static str> {
    match field {
        fields::AADHAAR_NUMBER => reject_unless(
            AADHAAR_RE.is_match(value),
            "Aadhaar must be exactly 12 digits.",
        ),
        fields::MOBILE => reject_unless(
            MOBILE_RE.is_match(value),
            "Enter a valid 10-digit Indian mobile.",
        ),
        fields::PINCODE => reject_unless(PINCODE_RE.is_match(value), "PIN must be 6 digits."),
        fields::PAN_NUMBER => reject_unless(
            PAN_RE.is_match(value),
            "PAN format should be AAAAA9999A.",
        ),
        fields::AADHAAR_NAME | fields::PAN_HOLDER => {
            reject_unless(!value.trim().is_empty(), "Name is required.")
        }
        _ => None,
    }
}

fn reject_unless(valid: bool, message: &'static str) -> Option<&'static str> {
    if valid { None } else { Some(message) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aadhaar_requires_twelve_digits() {
        assert_eq!(validate(fields::AADHAAR_NUMBER, "123456789012"), None);
        assert!(validate(fields::AADHAAR_NUMBER, "12345678901").is_some());
        assert!(validate(fields::AADHAAR_NUMBER, "1234567890123").is_some());
        assert!(validate(fields::AADHAAR_NUMBER, "12345678901a").is_some());
        assert!(validate(fields::AADHAAR_NUMBER, "").is_some());
    }

    #[test]
    fn mobile_requires_indian_prefix() {
        assert_eq!(validate(fields::MOBILE, "9876543210"), None);
        assert_eq!(validate(fields::MOBILE, "6000000000"), None);
        assert!(validate(fields::MOBILE, "1234567890").is_some());
        assert!(validate(fields::MOBILE, "987654321").is_some());
        assert!(validate(fields::MOBILE, "98765432100").is_some());
    }

    #[test]
    fn pincode_is_six_digits() {
        assert_eq!(validate(fields::PINCODE, "560001"), None);
        assert!(validate(fields::PINCODE, "5600").is_some());
        assert!(validate(fields::PINCODE, "56000a").is_some());
    }

    #[test]
    fn pan_pattern_is_strict() {
        assert_eq!(validate(fields::PAN_NUMBER, "ABCDE1234F"), None);
        // Lowercase input is uppercased before validation by FormValues;
        // the validator itself only accepts the canonical form.
        assert!(validate(fields::PAN_NUMBER, "abcde1234f").is_some());
        assert!(validate(fields::PAN_NUMBER, "ABCD1234F").is_some());
        assert!(validate(fields::PAN_NUMBER, "ABCDE12345").is_some());
    }

    #[test]
    fn names_require_non_whitespace() {
        assert_eq!(validate(fields::AADHAAR_NAME, "Jane Doe"), None);
        assert!(validate(fields::AADHAAR_NAME, "   ").is_some());
        assert!(validate(fields::PAN_HOLDER, "").is_some());
    }

    #[test]
    fn ungoverned_fields_always_pass() {
        assert_eq!(validate(fields::STATE, ""), None);
        assert_eq!(validate(fields::CITY, "anything"), None);
        assert_eq!(validate("unknown", ""), None);
    }

    #[test]
    fn governed_set_excludes_derived_fields() {
        let governed = governed_fields();
        assert!(!governed.contains(&fields::STATE));
        assert!(!governed.contains(&fields::CITY));
        assert_eq!(governed.len(), 6);
    }
}

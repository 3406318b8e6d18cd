//! Validators - Field Validation Strategies
//!
//! Every text field carries one validator. A validator only answers whether a
//! value is acceptable; the message shown on failure belongs to the field.

use std::ops::RangeInclusive;
use std::panic::{self, AssertUnwindSafe};
use std::sync::LazyLock;

use regex::Regex;

/// Shape of an email address, matching the Android `EMAIL_ADDRESS` pattern
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("email pattern is a valid regex")
});

/// A predicate over the text of a field
pub trait Validator: Send + Sync {
    /// Returns true when `value` is acceptable
    fn validate(&self, value: &str) -> bool;
}

impl<F> Validator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, value: &str) -> bool {
        self(value)
    }
}

/// Runs a validator, treating a panic inside it as a failed validation.
pub fn validate_contained(validator: &dyn Validator, label: &str, value: &str) -> bool {
    match panic::catch_unwind(AssertUnwindSafe(|| validator.validate(value))) {
        Ok(valid) => valid,
        Err(_) => {
            tracing::warn!(label, "validator panicked, treating value as invalid");
            false
        }
    }
}

/// Accepts anything
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyValue;

impl Validator for AnyValue {
    fn validate(&self, _value: &str) -> bool {
        true
    }
}

/// Requires at least one non-whitespace character
#[derive(Debug, Clone, Copy, Default)]
pub struct NonBlank;

impl Validator for NonBlank {
    fn validate(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }
}

/// Requires at least `min` characters
#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    min: usize,
}

impl MinLength {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Validator for MinLength {
    fn validate(&self, value: &str) -> bool {
        value.chars().count() >= self.min
    }
}

/// Requires an email shaped value
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailAddress;

impl Validator for EmailAddress {
    fn validate(&self, value: &str) -> bool {
        EMAIL_PATTERN.is_match(value)
    }
}

/// Requires a value that parses as a signed integer
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl Validator for Integer {
    fn validate(&self, value: &str) -> bool {
        value.parse::<i64>().is_ok()
    }
}

/// Requires an integer inside an inclusive range
#[derive(Debug, Clone)]
pub struct IntRange {
    range: RangeInclusive<i64>,
}

impl IntRange {
    pub fn new(range: RangeInclusive<i64>) -> Self {
        Self { range }
    }
}

impl Validator for IntRange {
    fn validate(&self, value: &str) -> bool {
        value
            .parse::<i64>()
            .is_ok_and(|number| self.range.contains(&number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern_compiles() {
        assert!(LazyLock::force(&EMAIL_PATTERN).is_match("a@b.com"));
    }

    #[test]
    fn email_accepts_simple_address() {
        assert!(EmailAddress.validate("a@b.com"));
        assert!(EmailAddress.validate("david.merchan+forms@mail.example.co"));
    }

    #[test]
    fn email_rejects_malformed_values() {
        assert!(!EmailAddress.validate("not-an-email"));
        assert!(!EmailAddress.validate("a@b"));
        assert!(!EmailAddress.validate("@b.com"));
        assert!(!EmailAddress.validate("a@.com"));
        assert!(!EmailAddress.validate(""));
    }

    #[test]
    fn integer_accepts_only_numbers() {
        assert!(Integer.validate("42"));
        assert!(Integer.validate("-7"));
        assert!(!Integer.validate("forty-two"));
        assert!(!Integer.validate(""));
        assert!(!Integer.validate("4.2"));
    }

    #[test]
    fn int_range_is_inclusive() {
        let age = IntRange::new(1..=90);
        assert!(age.validate("1"));
        assert!(age.validate("90"));
        assert!(!age.validate("91"));
        assert!(!age.validate("0"));
        assert!(!age.validate("ninety"));
    }

    #[test]
    fn non_blank_ignores_whitespace() {
        assert!(NonBlank.validate("David"));
        assert!(!NonBlank.validate(""));
        assert!(!NonBlank.validate("   "));
    }

    #[test]
    fn min_length_counts_characters() {
        let validator = MinLength::new(9);
        assert!(!validator.validate("12345678"));
        assert!(validator.validate("123456789"));
        assert!(validator.validate("ñññññññññ"));
    }

    #[test]
    fn closures_are_validators() {
        let even_length = |value: &str| value.len() % 2 == 0;
        assert!(even_length.validate("ab"));
        assert!(!even_length.validate("abc"));
    }

    #[test]
    fn panicking_validator_counts_as_invalid() {
        let faulty = |_: &str| -> bool { panic!("validator fault") };
        assert!(!validate_contained(&faulty, "Faulty", "anything"));
        assert!(validate_contained(&AnyValue, "Any", "anything"));
    }
}

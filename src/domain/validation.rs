use std::sync::LazyLock;

use regex::Regex;

use super::{Draft, FieldError, FieldErrors, FieldName, RangeBound, Record};

pub const AGE_MIN: i64 = 18;
pub const AGE_MAX: i64 = 50;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\S+@\S+$").expect("email pattern must compile"));
// ASCII digits only; `str::parse` rejects every other script
static INTEGER_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern must compile"));
static DECIMAL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.[0-9]*|\.[0-9]+)$").expect("decimal pattern must compile")
});

/// Checks every field of `draft` and either builds a [`Record`] or reports
/// all failing fields at once.
///
/// Rules are field-independent:
/// - `name` must be non-empty,
/// - `email` must be non-empty and shaped like `<non-space>+@<non-space>+`,
/// - `age` must parse as an integer within [`AGE_MIN`]..=[`AGE_MAX`]; text
///   with a fractional part is rejected as not whole, any other text that
///   is not an integer counts as missing.
pub fn validate(draft: &Draft) -> Result<Record, FieldErrors> {
    let mut errors = FieldErrors::new();
    let name = check_name(&draft.name)
        .map_err(|err| errors.insert(err))
        .ok();
    let email = check_email(&draft.email)
        .map_err(|err| errors.insert(err))
        .ok();
    let age = check_age(&draft.age).map_err(|err| errors.insert(err)).ok();

    match (name, email, age) {
        (Some(name), Some(email), Some(age)) => Ok(Record::from_validated(
            name.to_string(),
            email.to_string(),
            age,
        )),
        _ => Err(errors),
    }
}

fn check_name(raw: &str) -> Result<&str, FieldError> {
    if raw.is_empty() {
        return Err(FieldError::Required(FieldName::Name));
    }
    Ok(raw)
}

fn check_email(raw: &str) -> Result<&str, FieldError> {
    if raw.is_empty() {
        return Err(FieldError::Required(FieldName::Email));
    }
    if !EMAIL_PATTERN.is_match(raw) {
        return Err(FieldError::Format(FieldName::Email));
    }
    Ok(raw)
}

fn check_age(raw: &str) -> Result<u8, FieldError> {
    let trimmed = raw.trim();
    if DECIMAL_SHAPE.is_match(trimmed) {
        return Err(FieldError::NotWhole(FieldName::Age));
    }
    if !INTEGER_SHAPE.is_match(trimmed) {
        return Err(FieldError::Required(FieldName::Age));
    }
    let out_of_range = |below: bool| FieldError::Range {
        field: FieldName::Age,
        entered: trimmed.to_string(),
        bound: if below {
            RangeBound::AtLeast(AGE_MIN)
        } else {
            RangeBound::AtMost(AGE_MAX)
        },
    };
    // digits that overflow i64 are still a number, just far outside the range
    let value: i64 = trimmed
        .parse()
        .map_err(|_| out_of_range(trimmed.starts_with('-')))?;
    if value < AGE_MIN {
        return Err(out_of_range(true));
    }
    if value > AGE_MAX {
        return Err(out_of_range(false));
    }
    u8::try_from(value).map_err(|_| out_of_range(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, age: &str) -> Draft {
        Draft::new(name, email, age)
    }

    #[test]
    fn accepts_well_formed_draft() {
        let record = validate(&draft("Alice", "a@x.com", "30")).expect("valid");
        assert_eq!(record.name(), "Alice");
        assert_eq!(record.email(), "a@x.com");
        assert_eq!(record.age(), 30);
    }

    #[test]
    fn empty_name_is_required() {
        let errors = validate(&draft("", "a@x.com", "30")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FieldName::Name),
            Some(&FieldError::Required(FieldName::Name))
        );
        assert_eq!(
            errors.get(FieldName::Name).unwrap().to_string(),
            "Name is required"
        );
    }

    #[test]
    fn reports_every_failing_field_at_once() {
        let errors = validate(&Draft::default()).unwrap_err();
        assert_eq!(errors.len(), 3);
        let fields: Vec<_> = errors.iter().map(FieldError::field).collect();
        assert_eq!(fields, FieldName::ALL.to_vec());
        assert_eq!(errors.first_field(), Some(FieldName::Name));
    }

    #[test]
    fn email_without_at_sign_is_format_error() {
        let errors = validate(&draft("Bob", "foo", "30")).unwrap_err();
        assert_eq!(
            errors.get(FieldName::Email),
            Some(&FieldError::Format(FieldName::Email))
        );
        assert_eq!(
            errors.get(FieldName::Email).unwrap().to_string(),
            "Invalid email"
        );
    }

    #[test]
    fn email_pattern_only_needs_non_space_around_at() {
        assert!(validate(&draft("Bob", "a@b", "30")).is_ok());
        assert!(validate(&draft("Bob", "A@B.ORG", "30")).is_ok());
        assert!(validate(&draft("Bob", "a @b", "30")).is_err());
        assert!(validate(&draft("Bob", "@b", "30")).is_err());
        assert!(validate(&draft("Bob", "a@", "30")).is_err());
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert!(validate(&draft("Eve", "e@x.io", "18")).is_ok());
        assert!(validate(&draft("Eve", "e@x.io", "50")).is_ok());
        for outside in ["17", "51", "0", "-3"] {
            let errors = validate(&draft("Eve", "e@x.io", outside)).unwrap_err();
            assert!(
                matches!(errors.get(FieldName::Age), Some(FieldError::Range { .. })),
                "{outside} should be out of range"
            );
        }
    }

    #[test]
    fn range_message_names_the_crossed_bound() {
        let errors = validate(&draft("Eve", "e@x.io", "17")).unwrap_err();
        assert_eq!(
            errors.get(FieldName::Age).unwrap().to_string(),
            "Age must be at least 18 but you entered 17"
        );
        let errors = validate(&draft("Eve", "e@x.io", "51")).unwrap_err();
        assert_eq!(
            errors.get(FieldName::Age).unwrap().to_string(),
            "Age must be at most 50 but you entered 51"
        );
    }

    #[test]
    fn non_numeric_age_counts_as_missing() {
        for raw in ["", "   ", "abc", "3e1", ".", "+"] {
            let errors = validate(&draft("Eve", "e@x.io", raw)).unwrap_err();
            assert_eq!(
                errors.get(FieldName::Age),
                Some(&FieldError::Required(FieldName::Age)),
                "{raw:?} should be treated as absent"
            );
        }
    }

    #[test]
    fn non_ascii_digits_count_as_missing() {
        for raw in ["٣٠", "３０", "2٥"] {
            let errors = validate(&draft("Eve", "e@x.io", raw)).unwrap_err();
            assert_eq!(
                errors.get(FieldName::Age),
                Some(&FieldError::Required(FieldName::Age)),
                "{raw:?} should be treated as absent"
            );
        }
    }

    #[test]
    fn fractional_age_asks_for_a_whole_number() {
        for raw in ["25.5", "30.", ".5", "-1.25"] {
            let errors = validate(&draft("Eve", "e@x.io", raw)).unwrap_err();
            assert_eq!(
                errors.get(FieldName::Age),
                Some(&FieldError::NotWhole(FieldName::Age)),
                "{raw:?} should be rejected as fractional"
            );
        }
        let errors = validate(&draft("Eve", "e@x.io", "25.5")).unwrap_err();
        assert_eq!(
            errors.get(FieldName::Age).unwrap().to_string(),
            "Age must be a whole number"
        );
    }

    #[test]
    fn overflowing_age_is_a_range_error() {
        let errors = validate(&draft("Eve", "e@x.io", "99999999999999999999")).unwrap_err();
        assert!(matches!(
            errors.get(FieldName::Age),
            Some(FieldError::Range {
                bound: RangeBound::AtMost(AGE_MAX),
                ..
            })
        ));
        let errors = validate(&draft("Eve", "e@x.io", "-99999999999999999999")).unwrap_err();
        assert!(matches!(
            errors.get(FieldName::Age),
            Some(FieldError::Range {
                bound: RangeBound::AtLeast(AGE_MIN),
                ..
            })
        ));
    }

    #[test]
    fn surrounding_whitespace_in_age_is_ignored() {
        let record = validate(&draft("Eve", "e@x.io", " 42 ")).expect("valid");
        assert_eq!(record.age(), 42);
    }
}

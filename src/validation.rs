use std::fmt;

use crate::profile::Profile;

/// Reason a draft cannot be saved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    InvalidAge,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingName => {
                write!(f, "Given name and family name are required")
            }
            ValidationError::InvalidAge => {
                write!(f, "Age must be a valid number")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a draft before it replaces the stored record.
///
/// Names must contain something besides whitespace. A non-empty age
/// must read as a number; surrounding whitespace is ignored and a
/// whitespace-only age counts as zero.
///
/// Only decimal notation counts as a number. Hexadecimal (`0x1A`),
/// binary (`0b11`) and `Infinity` spellings are rejected, unlike a
/// lenient `Number()`-style coercion that accepts all three.
pub fn validate(draft: &Profile) -> Result<(), ValidationError> {
    if draft.given_name.trim().is_empty() || draft.family_name.trim().is_empty()
    {
        return Err(ValidationError::MissingName);
    }

    if !draft.age.is_empty() && !is_number(&draft.age) {
        return Err(ValidationError::InvalidAge);
    }

    Ok(())
}

fn is_number(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return true;
    }
    // `f64::from_str` also accepts "nan" and "inf" spellings
    let alphabetic = text
        .trim_start_matches(['+', '-'])
        .starts_with(|c: char| c.is_ascii_alphabetic());
    !alphabetic && text.parse::<f64>().is_ok()
}

//! Customer contact details collected by the order form.

use serde::{Deserialize, Serialize};

use crate::error::{CommerceError, FieldError};

/// Country prefix of every accepted phone number.
pub const PHONE_PREFIX: &str = "+996";

/// Shape of a complete phone number; `#` stands for a digit.
const PHONE_MASK: &str = "+996 (###) ##-##-##";

/// Number of subscriber digits after the prefix.
const PHONE_DIGITS: usize = 9;

/// Who is ordering and where to deliver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    /// Required.
    pub first_name: String,
    /// Optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Required, formatted as `+996 (XXX) XX-XX-XX`.
    pub phone_number: String,
    /// Optional, must look like an address when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Required.
    pub delivery_address: String,
}

impl ContactDetails {
    /// Check every field, reporting all problems at once.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let mut errors = Vec::new();

        if self.first_name.trim().is_empty() {
            errors.push(FieldError::new("firstName", "first name is required"));
        }

        if self.phone_number.trim().is_empty() {
            errors.push(FieldError::new("phoneNumber", "phone number is required"));
        } else if !is_valid_phone(&self.phone_number) {
            errors.push(FieldError::new(
                "phoneNumber",
                "phone number must look like +996 (XXX) XX-XX-XX",
            ));
        }

        if self.delivery_address.trim().is_empty() {
            errors.push(FieldError::new(
                "deliveryAddress",
                "delivery address is required",
            ));
        }

        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            if !is_valid_email(email) {
                errors.push(FieldError::new("email", "email address is not valid"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::Validation(errors))
        }
    }
}

/// Check a phone number against the `+996 (XXX) XX-XX-XX` mask.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_MASK.len()
        && phone.chars().zip(PHONE_MASK.chars()).all(|(c, m)| match m {
            '#' => c.is_ascii_digit(),
            _ => c == m,
        })
}

/// Check the loose `local@domain.tld` shape the order form accepts.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Reformat free-form phone input into the `+996 (XXX) XX-XX-XX` mask.
///
/// Applied on every keystroke: anything not starting with the country
/// prefix resets to the bare prefix, extra digits are dropped, and a
/// partial number yields a partial mask.
pub fn format_phone_number(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    let Some(rest) = cleaned.strip_prefix(PHONE_PREFIX) else {
        return PHONE_PREFIX.to_string();
    };

    let digits: Vec<char> = rest
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();
    let part = |range: std::ops::Range<usize>| -> String {
        digits
            .get(range.start.min(digits.len())..range.end.min(digits.len()))
            .map(|chars| chars.iter().collect())
            .unwrap_or_default()
    };

    match digits.len() {
        0 => format!("{PHONE_PREFIX} ("),
        1..=3 => format!("{PHONE_PREFIX} ({}", part(0..3)),
        4..=5 => format!("{PHONE_PREFIX} ({}) {}", part(0..3), part(3..5)),
        6..=7 => format!(
            "{PHONE_PREFIX} ({}) {}-{}",
            part(0..3),
            part(3..5),
            part(5..7)
        ),
        _ => format!(
            "{PHONE_PREFIX} ({}) {}-{}-{}",
            part(0..3),
            part(3..5),
            part(5..7),
            part(7..9)
        ),
    }
}

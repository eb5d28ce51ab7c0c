//! Value normalization for decoded fields.
//!
//! Plain text, numeric, date and currency fields are kept as the trimmed
//! slice: the legacy format mixes textual and numeric encodings, so values
//! stay strings. Two quirks of the format get named rules of their own.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::layout::{FieldKind, FieldRule, FieldSpec};

/// Canonical CNPJ shape: `NN.NNN.NNN/NNNN-NN`.
static REGISTRATION_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}").expect("registration id pattern is valid")
});

/// Normalize an already trimmed slice for `field`.
///
/// An explicit field rule takes precedence over the kind.
pub fn normalize(field: &FieldSpec, trimmed: &str) -> String {
    if let Some(FieldRule::BlankWhenAllZeros) = field.rule {
        if let Some(blank) = blank_zero_day(trimmed) {
            return blank;
        }
    }

    match field.kind {
        FieldKind::RegistrationId => match_registration_id(trimmed).to_string(),
        FieldKind::PlainText | FieldKind::Numeric | FieldKind::Date | FieldKind::Currency => {
            trimmed.to_string()
        }
    }
}

/// Day rule: a value of one or more `'0'` and nothing else is "not applicable".
///
/// Returns `Some("")` when the rule applies, `None` otherwise.
pub fn blank_zero_day(trimmed: &str) -> Option<String> {
    if !trimmed.is_empty() && trimmed.chars().all(|c| c == '0') {
        Some(String::new())
    } else {
        None
    }
}

/// Registration id rule: the first canonical CNPJ inside the slice, or the
/// slice unchanged when there is none.
pub fn match_registration_id(trimmed: &str) -> &str {
    REGISTRATION_ID
        .find(trimmed)
        .map(|m| m.as_str())
        .unwrap_or(trimmed)
}

//! Contact form validation and submission phases.
//!
//! Rules run in a fixed order per field: presence, email shape, minimum
//! message length. Submission is a small state machine: `Idle -> Sending ->
//! Succeeded -> Dismissed`; a rejected submit stays `Idle` and points at the
//! first invalid field. The success panel is dismissed after a delay; the
//! fields panel never comes back.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeSet;

/// Field-level failures. `Display` is the inline message shown to users.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Message must be at least {min} characters")]
    TooShort { min: usize },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldRule {
    pub required: bool,
    pub email: bool,
    pub min_len: Option<usize>,
}

impl FieldRule {
    /// Rule for a form control named `name`.
    pub fn for_field(name: &str, required: bool, min_message_len: usize) -> Self {
        Self {
            required,
            email: name == "email",
            min_len: (name == "message").then_some(min_message_len),
        }
    }
}

/// Validate `value` (trimmed first) against `rule`.
///
/// # Errors
///
/// Returns the first [`ValidationError`] the value fails.
pub fn validate(rule: FieldRule, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if rule.required && value.is_empty() {
        return Err(ValidationError::Required);
    }
    if rule.email && !value.is_empty() && !is_email(value) {
        return Err(ValidationError::InvalidEmail);
    }
    if let Some(min) = rule.min_len {
        if text_length(value) < min {
            return Err(ValidationError::TooShort { min });
        }
    }
    Ok(())
}

/// Length in UTF-16 code units, the unit browsers report for
/// `HTMLInputElement.value.length`. An emoji outside the BMP counts as two.
pub fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot in the
/// domain with text on both sides of at least one dot.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Dismissed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Validation failed; focus the field at this index.
    Rejected { first_invalid: usize },
    /// All fields passed; start the (simulated) send.
    Accepted,
    /// Already sending or sent.
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct FormState {
    phase: SubmitPhase,
    invalid: BTreeSet<String>,
}

impl FormState {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Whether `field` is currently showing an error.
    pub fn has_error(&self, field: &str) -> bool {
        self.invalid.contains(field)
    }

    /// Remember the latest validation result for `field`.
    pub fn record(&mut self, field: &str, result: &Result<(), ValidationError>) {
        if result.is_ok() {
            self.invalid.remove(field);
        } else {
            self.invalid.insert(field.to_owned());
        }
    }

    /// Decide a submit given `(field name, result)` pairs in document order.
    pub fn submit(&mut self, results: &[(String, Result<(), ValidationError>)]) -> SubmitDecision {
        if self.phase != SubmitPhase::Idle {
            return SubmitDecision::Ignored;
        }
        for (name, result) in results {
            self.record(name, result);
        }
        if let Some(first_invalid) = results.iter().position(|(_, result)| result.is_err()) {
            return SubmitDecision::Rejected { first_invalid };
        }
        self.phase = SubmitPhase::Sending;
        SubmitDecision::Accepted
    }

    /// The simulated send finished.
    pub fn finish(&mut self) -> bool {
        if self.phase != SubmitPhase::Sending {
            return false;
        }
        self.phase = SubmitPhase::Succeeded;
        self.invalid.clear();
        true
    }

    /// Hide the success panel. Only the first call after a successful send
    /// returns `true`.
    pub fn dismiss(&mut self) -> bool {
        if self.phase != SubmitPhase::Succeeded {
            return false;
        }
        self.phase = SubmitPhase::Dismissed;
        true
    }
}

//! Contact form state, validation rules, and submission lifecycle

use super::field::{FieldKind, FormField};
use crate::content::INQUIRY_TYPES;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

/// Minimum length of a non-empty message, in characters
pub const MESSAGE_MIN_LEN: usize = 10;

/// Index of the submit button row, one past the last editable field
pub const SUBMIT_ROW: usize = 5;

// local@domain.tld shape: no whitespace, one @, a dot after it
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name regex"));

/// A failed validation for one field; at most one exists per field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Lifecycle of one submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// Validate a single field. Rules apply in order; the first failure wins.
pub fn validate_field(field: &FormField) -> Result<(), FieldError> {
    let value = field.as_text().trim();

    if field.required && value.is_empty() {
        return Err(FieldError::new(field.name, "This field is required"));
    }

    if field.kind == FieldKind::Email && !value.is_empty() && !EMAIL_RE.is_match(value) {
        return Err(FieldError::new(
            field.name,
            "Please enter a valid email address",
        ));
    }

    if field.name == "name" && !value.is_empty() && !NAME_RE.is_match(value) {
        return Err(FieldError::new(
            field.name,
            "Name should only contain letters and spaces",
        ));
    }

    // An empty optional message is exempt from the length rule
    if field.name == "message" && !value.is_empty() && value.chars().count() < MESSAGE_MIN_LEN {
        return Err(FieldError::new(
            field.name,
            "Message should be at least 10 characters long",
        ));
    }

    Ok(())
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The contact form: five fields plus the submit row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub inquiry: FormField,
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    pub submission: SubmissionState,
    errors: HashMap<&'static str, String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            inquiry: FormField::choice("inquiry-type", "Inquiry Type", INQUIRY_TYPES),
            name: FormField::text("name", "Your Name", true),
            email: FormField::email("email", "Your Email", true),
            subject: FormField::text("subject", "Subject (optional)", false),
            message: FormField::multiline("message", "Your Message", true),
            active_field_index: 0,
            submission: SubmissionState::default(),
            errors: HashMap::new(),
        }
    }

    fn fields(&self) -> [&FormField; 5] {
        [
            &self.inquiry,
            &self.name,
            &self.email,
            &self.subject,
            &self.message,
        ]
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Type a character into the active field, clearing its stale error
    pub fn input_char(&mut self, c: char) {
        if self.is_submit_row_active() {
            return;
        }
        self.note_edit();
        let name = {
            let field = self.get_active_field_mut();
            field.push_char(c);
            field.name
        };
        self.clear_error(name);
    }

    /// Delete the last character of the active field, clearing its stale error
    pub fn backspace(&mut self) {
        if self.is_submit_row_active() {
            return;
        }
        self.note_edit();
        let name = {
            let field = self.get_active_field_mut();
            field.pop_char();
            field.name
        };
        self.clear_error(name);
    }

    /// Cycle the active choice field forwards or backwards
    pub fn cycle_option(&mut self, forward: bool) {
        if self.is_submit_row_active() {
            return;
        }
        self.note_edit();
        let field = self.get_active_field_mut();
        if forward {
            field.next_option();
        } else {
            field.prev_option();
        }
    }

    // A settled submission returns to Idle as soon as the user edits again
    fn note_edit(&mut self) {
        if matches!(
            self.submission,
            SubmissionState::Succeeded | SubmissionState::Failed
        ) {
            self.submission = SubmissionState::Idle;
        }
    }

    /// Validate the active field and record the outcome (the blur check)
    pub fn validate_active(&mut self) {
        if self.is_submit_row_active() {
            return;
        }
        let outcome = self
            .get_field(self.active_field_index)
            .map(|field| (field.name, validate_field(field).err()));
        if let Some((name, err)) = outcome {
            match err {
                Some(e) => self.set_error(name, e.message),
                None => self.clear_error(name),
            }
        }
    }

    /// Validate every field, annotating each one. Never short-circuits, so
    /// the user sees all problems at once. Returns true when all pass.
    pub fn validate_all(&mut self) -> bool {
        let outcomes: Vec<(&'static str, Option<FieldError>)> = self
            .fields()
            .into_iter()
            .map(|field| (field.name, validate_field(field).err()))
            .collect();

        let mut all_valid = true;
        for (name, err) in outcomes {
            match err {
                Some(e) => {
                    all_valid = false;
                    self.set_error(name, e.message);
                }
                None => self.clear_error(name),
            }
        }
        all_valid
    }

    /// Record an error for a field, replacing any existing one
    pub fn set_error(&mut self, field: &'static str, message: String) {
        self.errors.insert(field, message);
    }

    /// Remove a field's error; no-op when none is present
    pub fn clear_error(&mut self, field: &'static str) {
        self.errors.remove(field);
    }

    /// The currently displayed error for a field, if any
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Return the form to its untouched state
    pub fn reset(&mut self) {
        self.inquiry.clear();
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.errors.clear();
        self.active_field_index = 0;
        self.submission = SubmissionState::Idle;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        6 // inquiry, name, email, subject, message, submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.inquiry,
            1 => &mut self.name,
            2 => &mut self.email,
            3 => &mut self.subject,
            // For the submit row (index 5), return message as dummy
            // (won't be used for text input)
            _ => &mut self.message,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.inquiry),
            1 => Some(&self.name),
            2 => Some(&self.email),
            3 => Some(&self.subject),
            4 => Some(&self.message),
            // Index 5 is the submit row, no FormField for it
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name.set_text("John Doe");
        form.email.set_text("john@example.com");
        form.message.set_text("Interested in your services");
        form
    }

    mod validation_rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_field_empty_fails() {
            let field = FormField::text("name", "Your Name", true);
            let err = validate_field(&field).unwrap_err();
            assert_eq!(err.field, "name");
            assert_eq!(err.message, "This field is required");
        }

        #[test]
        fn test_required_field_whitespace_only_fails() {
            let mut field = FormField::text("name", "Your Name", true);
            field.set_text("   ");
            let err = validate_field(&field).unwrap_err();
            assert_eq!(err.message, "This field is required");
        }

        #[test]
        fn test_required_error_wins_over_later_rules() {
            // An empty required email reports only the required rule
            let field = FormField::email("email", "Your Email", true);
            let err = validate_field(&field).unwrap_err();
            assert_eq!(err.message, "This field is required");
        }

        #[test]
        fn test_optional_field_empty_passes() {
            let field = FormField::text("subject", "Subject", false);
            assert!(validate_field(&field).is_ok());
        }

        #[test]
        fn test_email_valid_shapes_pass() {
            for value in ["john@example.com", "a@b.co", "first.last@sub.domain.org"] {
                let mut field = FormField::email("email", "Your Email", true);
                field.set_text(value);
                assert!(validate_field(&field).is_ok(), "{value} should pass");
            }
        }

        #[test]
        fn test_email_invalid_shapes_fail() {
            for value in ["not-an-email", "a b@c.de", "no-dot@domain", "@missing.local"] {
                let mut field = FormField::email("email", "Your Email", true);
                field.set_text(value);
                let err = validate_field(&field).unwrap_err();
                assert_eq!(err.message, "Please enter a valid email address", "{value}");
            }
        }

        #[test]
        fn test_name_with_digits_fails() {
            let mut field = FormField::text("name", "Your Name", true);
            field.set_text("John123");
            let err = validate_field(&field).unwrap_err();
            assert_eq!(err.message, "Name should only contain letters and spaces");
        }

        #[test]
        fn test_name_with_apostrophe_fails() {
            let mut field = FormField::text("name", "Your Name", true);
            field.set_text("O'Brien");
            let err = validate_field(&field).unwrap_err();
            assert_eq!(err.message, "Name should only contain letters and spaces");
        }

        #[test]
        fn test_name_letters_and_spaces_passes() {
            let mut field = FormField::text("name", "Your Name", true);
            field.set_text("John Smith");
            assert!(validate_field(&field).is_ok());
        }

        #[test]
        fn test_name_rule_only_applies_to_name_field() {
            let mut field = FormField::text("subject", "Subject", false);
            field.set_text("Pricing for Q3 2026?");
            assert!(validate_field(&field).is_ok());
        }

        #[test]
        fn test_short_message_fails() {
            let mut field = FormField::multiline("message", "Your Message", true);
            field.set_text("short");
            let err = validate_field(&field).unwrap_err();
            assert_eq!(
                err.message,
                "Message should be at least 10 characters long"
            );
        }

        #[test]
        fn test_ten_char_message_passes() {
            let mut field = FormField::multiline("message", "Your Message", true);
            field.set_text("0123456789");
            assert!(validate_field(&field).is_ok());
        }

        #[test]
        fn test_message_length_counts_trimmed_value() {
            let mut field = FormField::multiline("message", "Your Message", true);
            field.set_text("   short   ");
            let err = validate_field(&field).unwrap_err();
            assert_eq!(
                err.message,
                "Message should be at least 10 characters long"
            );
        }

        #[test]
        fn test_empty_optional_message_exempt_from_length_rule() {
            let field = FormField::multiline("message", "Your Message", false);
            assert!(validate_field(&field).is_ok());
        }

        #[test]
        fn test_choice_field_always_has_a_value() {
            let form = ContactForm::new();
            assert!(validate_field(&form.inquiry).is_ok());
            assert!(!form.inquiry.as_text().is_empty());
        }
    }

    mod error_map {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_error_replaces_existing() {
            let mut form = ContactForm::new();
            form.set_error("name", "first".to_string());
            form.set_error("name", "second".to_string());
            assert_eq!(form.error_for("name"), Some("second"));
            assert_eq!(form.error_count(), 1);
        }

        #[test]
        fn test_clear_absent_error_twice_is_noop() {
            let mut form = ContactForm::new();
            form.clear_error("name");
            form.clear_error("name");
            assert_eq!(form.error_for("name"), None);
            assert_eq!(form.error_count(), 0);
        }

        #[test]
        fn test_input_clears_stale_error() {
            let mut form = ContactForm::new();
            form.active_field_index = 1; // name
            form.set_error("name", "This field is required".to_string());
            form.input_char('J');
            assert_eq!(form.error_for("name"), None);
        }

        #[test]
        fn test_backspace_clears_stale_error() {
            let mut form = ContactForm::new();
            form.active_field_index = 2; // email
            form.email.set_text("x");
            form.set_error("email", "Please enter a valid email address".to_string());
            form.backspace();
            assert_eq!(form.error_for("email"), None);
            assert_eq!(form.email.as_text(), "");
        }

        #[test]
        fn test_validate_active_annotates_and_clears() {
            let mut form = ContactForm::new();
            form.active_field_index = 1; // name
            form.validate_active();
            assert_eq!(form.error_for("name"), Some("This field is required"));

            form.name.set_text("John Smith");
            form.validate_active();
            assert_eq!(form.error_for("name"), None);
        }
    }

    mod validate_all {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_reports_every_required_field() {
            let mut form = ContactForm::new();
            assert!(!form.validate_all());
            // name, email, message; the preselected inquiry and the
            // optional subject pass
            assert_eq!(form.error_count(), 3);
            assert_eq!(form.error_for("name"), Some("This field is required"));
            assert_eq!(form.error_for("email"), Some("This field is required"));
            assert_eq!(form.error_for("message"), Some("This field is required"));
            assert_eq!(form.error_for("subject"), None);
            assert_eq!(form.error_for("inquiry-type"), None);
        }

        #[test]
        fn test_does_not_short_circuit_on_first_failure() {
            let mut form = ContactForm::new();
            form.name.set_text("John123");
            form.message.set_text("short");
            assert!(!form.validate_all());
            assert_eq!(
                form.error_for("name"),
                Some("Name should only contain letters and spaces")
            );
            assert_eq!(form.error_for("email"), Some("This field is required"));
            assert_eq!(
                form.error_for("message"),
                Some("Message should be at least 10 characters long")
            );
        }

        #[test]
        fn test_valid_form_passes_and_clears_stale_errors() {
            let mut form = filled_form();
            form.set_error("name", "stale".to_string());
            assert!(form.validate_all());
            assert_eq!(form.error_count(), 0);
        }

        #[test]
        fn test_revalidation_overwrites_rather_than_accumulates() {
            let mut form = ContactForm::new();
            form.email.set_text("not-an-email");
            assert!(!form.validate_all());
            assert!(!form.validate_all());
            assert_eq!(form.error_count(), 3);
        }
    }

    mod form_navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count_includes_submit_row() {
            let form = ContactForm::new();
            assert_eq!(form.field_count(), 6);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = ContactForm::new();
            for _ in 0..6 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, SUBMIT_ROW);
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = ContactForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "inquiry-type");
            assert_eq!(form.get_field(1).unwrap().name, "name");
            assert_eq!(form.get_field(2).unwrap().name, "email");
            assert_eq!(form.get_field(3).unwrap().name, "subject");
            assert_eq!(form.get_field(4).unwrap().name, "message");
            assert!(form.get_field(5).is_none()); // submit row
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SUBMIT_ROW);
        }

        #[test]
        fn test_input_on_submit_row_is_ignored() {
            let mut form = ContactForm::new();
            form.set_active_field(SUBMIT_ROW);
            form.input_char('x');
            form.backspace();
            assert_eq!(form.message.as_text(), "");
        }

        #[test]
        fn test_cycle_option_moves_through_inquiry_types() {
            let mut form = ContactForm::new();
            let first = form.inquiry.as_text().to_string();
            form.cycle_option(true);
            assert_ne!(form.inquiry.as_text(), first);
            form.cycle_option(false);
            assert_eq!(form.inquiry.as_text(), first);
        }
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_submission_state_is_idle() {
            let form = ContactForm::new();
            assert_eq!(form.submission, SubmissionState::Idle);
        }

        #[test]
        fn test_edit_returns_settled_submission_to_idle() {
            let mut form = ContactForm::new();
            form.submission = SubmissionState::Failed;
            form.active_field_index = 1;
            form.input_char('J');
            assert_eq!(form.submission, SubmissionState::Idle);
        }

        #[test]
        fn test_edit_does_not_interrupt_sending() {
            let mut form = ContactForm::new();
            form.submission = SubmissionState::Sending;
            form.active_field_index = 1;
            form.input_char('J');
            assert_eq!(form.submission, SubmissionState::Sending);
        }

        #[test]
        fn test_reset_clears_values_errors_and_state() {
            let mut form = filled_form();
            form.inquiry.next_option();
            form.set_error("name", "stale".to_string());
            form.active_field_index = 4;
            form.submission = SubmissionState::Failed;

            form.reset();

            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.message.as_text(), "");
            assert_eq!(form.inquiry.as_text(), INQUIRY_TYPES[0].0);
            assert_eq!(form.error_count(), 0);
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.submission, SubmissionState::Idle);
        }
    }
}

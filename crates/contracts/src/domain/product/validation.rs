//! Submission-time validation for the product form.
//!
//! Every field is checked independently and contributes its own entry to the
//! report; there is no short-circuit across fields. Callers render
//! `Required` as the generic required-field text and `Message` verbatim.

use super::aggregate::ProductForm;

/// Verdict for a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Field is empty/blank and must be filled in
    Required,
    /// Field is present but violates a semantic rule
    Message(&'static str),
}

impl FieldError {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FieldError::Required => None,
            FieldError::Message(text) => Some(text),
        }
    }
}

/// Per-field validation report. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<FieldError>,
    pub amount: Option<FieldError>,
    pub actual_amount: Option<FieldError>,
    pub brand: Option<FieldError>,
    pub type_color: Option<FieldError>,
    pub article: Option<FieldError>,
    pub code_color: Option<FieldError>,
}

impl FormErrors {
    /// True iff no field carries an error, i.e. the form may be submitted.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.amount.is_none()
            && self.actual_amount.is_none()
            && self.brand.is_none()
            && self.type_color.is_none()
            && self.article.is_none()
            && self.code_color.is_none()
    }
}

/// "#" followed by exactly six hex digits, e.g. "#FF0000".
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

fn check_required(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required)
    } else {
        None
    }
}

impl ProductForm {
    /// Validate the form for submission. Pure: reads the form, allocates the
    /// report, touches nothing else.
    pub fn validate(&self) -> FormErrors {
        let amount = match self.amount {
            None => Some(FieldError::Required),
            Some(amount) if amount < 0.0 => {
                Some(FieldError::Message("Amount cannot be negative"))
            }
            Some(_) => None,
        };

        // Negativity takes precedence over the exceeds-amount rule; the
        // cross-field comparison only applies to two non-negative values.
        let actual_amount = match self.actual_amount {
            None => Some(FieldError::Required),
            Some(actual) if actual < 0.0 => {
                Some(FieldError::Message("Actual amount cannot be negative"))
            }
            Some(actual) => match self.amount {
                Some(amount) if amount >= 0.0 && actual > amount => {
                    Some(FieldError::Message("Actual amount cannot exceed amount"))
                }
                _ => None,
            },
        };

        let code_color = if self.code_color.trim().is_empty() {
            Some(FieldError::Required)
        } else if !is_hex_color(&self.code_color) {
            Some(FieldError::Message(
                "Color code must be in HEX format (e.g., #FF0000)",
            ))
        } else {
            None
        };

        FormErrors {
            name: check_required(&self.name),
            amount,
            actual_amount,
            brand: check_required(&self.brand),
            type_color: check_required(&self.type_color),
            article: check_required(&self.article),
            code_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "Paint 1".to_string(),
            amount: Some(10.5),
            actual_amount: Some(8.0),
            brand: "TAMIYA".to_string(),
            type_color: "ENAMEL".to_string(),
            article: "12345".to_string(),
            code_color: "#ff0000".to_string(),
        }
    }

    // ── Happy path ─────────────────────────────────────────────────────────

    #[test]
    fn valid_form_produces_empty_report() {
        let errors = valid_form().validate();
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn boundary_values_are_valid() {
        let mut form = valid_form();
        form.amount = Some(0.0);
        form.actual_amount = Some(0.0);
        assert!(form.validate().is_empty());

        // actualAmount == amount is allowed, only strictly-greater fails
        form.amount = Some(15.0);
        form.actual_amount = Some(15.0);
        assert!(form.validate().is_empty());
    }

    // ── Required fields ────────────────────────────────────────────────────

    #[test]
    fn all_fields_empty_flags_every_field() {
        let form = ProductForm {
            name: String::new(),
            amount: None,
            actual_amount: None,
            brand: String::new(),
            type_color: String::new(),
            article: String::new(),
            code_color: String::new(),
        };
        let errors = form.validate();
        assert!(!errors.is_empty());
        assert_eq!(errors.name, Some(FieldError::Required));
        assert_eq!(errors.amount, Some(FieldError::Required));
        assert_eq!(errors.actual_amount, Some(FieldError::Required));
        assert_eq!(errors.brand, Some(FieldError::Required));
        assert_eq!(errors.type_color, Some(FieldError::Required));
        assert_eq!(errors.article, Some(FieldError::Required));
        assert_eq!(errors.code_color, Some(FieldError::Required));
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        let errors = form.validate();
        assert_eq!(errors.name, Some(FieldError::Required));
        // only the blank field is flagged
        assert!(errors.brand.is_none());
        assert!(errors.article.is_none());
    }

    #[test]
    fn single_missing_field_fails_whole_form() {
        let mut form = valid_form();
        form.brand = String::new();
        let errors = form.validate();
        assert!(!errors.is_empty());
        assert_eq!(errors.brand, Some(FieldError::Required));
    }

    // ── Numeric rules ──────────────────────────────────────────────────────

    #[test]
    fn negative_amount_gets_specific_message() {
        let mut form = valid_form();
        form.amount = Some(-1.0);
        let errors = form.validate();
        assert_eq!(
            errors.amount,
            Some(FieldError::Message("Amount cannot be negative"))
        );
    }

    #[test]
    fn negative_actual_amount_gets_specific_message() {
        let mut form = valid_form();
        form.actual_amount = Some(-1.0);
        let errors = form.validate();
        assert_eq!(
            errors.actual_amount,
            Some(FieldError::Message("Actual amount cannot be negative"))
        );
    }

    #[test]
    fn actual_amount_above_amount_gets_specific_message() {
        let mut form = valid_form();
        form.amount = Some(10.0);
        form.actual_amount = Some(15.0);
        let errors = form.validate();
        assert_eq!(
            errors.actual_amount,
            Some(FieldError::Message("Actual amount cannot exceed amount"))
        );
        assert!(errors.amount.is_none());
    }

    #[test]
    fn negativity_wins_over_exceeds_amount() {
        // Both rules hold for actualAmount (-1 > -5); the negativity message
        // must win.
        let mut form = valid_form();
        form.amount = Some(-5.0);
        form.actual_amount = Some(-1.0);
        let errors = form.validate();
        assert_eq!(
            errors.amount,
            Some(FieldError::Message("Amount cannot be negative"))
        );
        assert_eq!(
            errors.actual_amount,
            Some(FieldError::Message("Actual amount cannot be negative"))
        );
    }

    #[test]
    fn exceeds_check_skipped_when_amount_missing() {
        let mut form = valid_form();
        form.amount = None;
        form.actual_amount = Some(5.0);
        let errors = form.validate();
        assert_eq!(errors.amount, Some(FieldError::Required));
        assert!(errors.actual_amount.is_none());
    }

    #[test]
    fn exceeds_check_skipped_when_amount_negative() {
        let mut form = valid_form();
        form.amount = Some(-1.0);
        form.actual_amount = Some(5.0);
        let errors = form.validate();
        assert_eq!(
            errors.amount,
            Some(FieldError::Message("Amount cannot be negative"))
        );
        assert!(errors.actual_amount.is_none());
    }

    // ── Color code ─────────────────────────────────────────────────────────

    #[test]
    fn malformed_color_code_gets_specific_message() {
        let mut form = valid_form();
        form.code_color = "invalid-color".to_string();
        let errors = form.validate();
        assert_eq!(
            errors.code_color,
            Some(FieldError::Message(
                "Color code must be in HEX format (e.g., #FF0000)"
            ))
        );
    }

    #[test]
    fn hex_color_accepts_both_cases() {
        assert!(is_hex_color("#FF0000"));
        assert!(is_hex_color("#ff0000"));
        assert!(is_hex_color("#AbCdEf"));
        assert!(is_hex_color("#123456"));
    }

    #[test]
    fn hex_color_rejects_wrong_shapes() {
        assert!(!is_hex_color("FF0000"));
        assert!(!is_hex_color("#FFF"));
        assert!(!is_hex_color("#FF00000"));
        assert!(!is_hex_color("#ff00zz"));
        assert!(!is_hex_color("##ff000"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn validate_does_not_mutate_the_form() {
        let form = valid_form();
        let before = form.clone();
        let _ = form.validate();
        assert_eq!(form, before);
    }

    #[test]
    fn field_error_message_accessor() {
        assert_eq!(FieldError::Required.message(), None);
        assert_eq!(
            FieldError::Message("Amount cannot be negative").message(),
            Some("Amount cannot be negative")
        );
    }
}

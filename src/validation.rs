//! Input validation and sanitization for feedback submissions

use crate::error::{FeedbackError, Result};

/// Longest accepted feedback text, in characters
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Longest accepted customer name, in characters
pub const MAX_CUSTOMER_LENGTH: usize = 100;

/// Validation utilities for input sanitization and edge case handling
#[derive(Debug, Copy, Clone)]
pub struct InputValidator;

impl InputValidator {
    /// Validate raw feedback text
    pub fn validate_feedback_text(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(FeedbackError::InvalidText(
                "feedback text cannot be empty".to_string(),
            ));
        }

        if text.chars().count() > MAX_TEXT_LENGTH {
            return Err(FeedbackError::InvalidText(format!(
                "feedback text too long (max {MAX_TEXT_LENGTH} characters)"
            )));
        }

        Ok(())
    }

    /// Validate an optional star rating
    pub fn validate_rating(rating: Option<u8>) -> Result<()> {
        match rating {
            Some(r) if !(1..=5).contains(&r) => Err(FeedbackError::InvalidRating(r)),
            _ => Ok(()),
        }
    }

    /// Validate a customer display name
    pub fn validate_customer_name(name: &str) -> Result<()> {
        if name.chars().count() > MAX_CUSTOMER_LENGTH {
            return Err(FeedbackError::InvalidText(format!(
                "customer name too long (max {MAX_CUSTOMER_LENGTH} characters)"
            )));
        }

        if name.contains('\0') || name.contains('\r') || name.contains('\n') {
            return Err(FeedbackError::InvalidText(
                "customer name contains invalid characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Strip control characters (except whitespace) and trim
    #[must_use]
    pub fn sanitize_text(text: &str) -> String {
        text.chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t' || *c == '\r')
            .collect::<String>()
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_rejected() {
        assert!(InputValidator::validate_feedback_text("").is_err());
        assert!(InputValidator::validate_feedback_text("   ").is_err());
        assert!(InputValidator::validate_feedback_text("Great food").is_ok());
    }

    #[test]
    fn test_rating_range() {
        assert!(InputValidator::validate_rating(None).is_ok());
        assert!(InputValidator::validate_rating(Some(1)).is_ok());
        assert!(InputValidator::validate_rating(Some(5)).is_ok());
        assert!(matches!(
            InputValidator::validate_rating(Some(0)),
            Err(FeedbackError::InvalidRating(0))
        ));
        assert!(InputValidator::validate_rating(Some(6)).is_err());
    }

    #[test]
    fn test_sanitize_text() {
        assert_eq!(
            InputValidator::sanitize_text("  great\u{0} food  "),
            "great food"
        );
    }
}

//! Contact form validation

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FarmError, Result};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const THANK_YOU: &str = "Thank you for your message! We will get back to you soon.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InquiryReceipt {
    pub accepted: bool,
    pub message: &'static str,
}

/// Check that every field is filled in and the email looks like one.
pub fn validate_inquiry(inquiry: &Inquiry) -> Result<InquiryReceipt> {
    let fields = [
        &inquiry.name,
        &inquiry.email,
        &inquiry.subject,
        &inquiry.message,
    ];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(FarmError::InvalidInput(MISSING_FIELDS.to_string()));
    }

    let email_re = Regex::new(EMAIL_PATTERN)?;
    if !email_re.is_match(inquiry.email.trim()) {
        return Err(FarmError::InvalidInput(INVALID_EMAIL.to_string()));
    }

    tracing::info!("Accepted inquiry '{}'", inquiry.subject.trim());

    Ok(InquiryReceipt {
        accepted: true,
        message: THANK_YOU,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry(email: &str, message: &str) -> Inquiry {
        Inquiry {
            name: "Asha".to_string(),
            email: email.to_string(),
            subject: "Soil test".to_string(),
            message: message.to_string(),
        }
    }

    fn error_message(err: FarmError) -> String {
        match err {
            FarmError::InvalidInput(msg) => msg,
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_valid_inquiry() {
        let receipt = validate_inquiry(&inquiry("asha@example.org", "Hello")).unwrap();
        assert!(receipt.accepted);
        assert_eq!(receipt.message, THANK_YOU);
    }

    #[test]
    fn test_missing_field() {
        let err = validate_inquiry(&inquiry("asha@example.org", "   ")).unwrap_err();
        assert_eq!(error_message(err), MISSING_FIELDS);
    }

    #[test]
    fn test_bad_emails() {
        for email in ["asha", "asha@example", "as ha@example.org", "@example.org"] {
            let err = validate_inquiry(&inquiry(email, "Hello")).unwrap_err();
            assert_eq!(error_message(err), INVALID_EMAIL, "{}", email);
        }
    }
}

//! Message content validation.
//!
//! Rich sanitization (markup stripping, profanity filtering) is owned by an
//! external text-processing service; this module only enforces the
//! structural limits the storage layer depends on.

use crate::error::CoreError;

/// Maximum message length in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Validate raw message content before it reaches storage.
///
/// Rejects empty (or whitespace-only) content and content above
/// [`MAX_MESSAGE_CHARS`]. Returns the trimmed content on success.
pub fn validate_content(content: &str) -> Result<&str, CoreError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("message content is required".into()));
    }
    if trimmed.chars().count() > MAX_MESSAGE_CHARS {
        return Err(CoreError::Validation(format!(
            "message content exceeds {MAX_MESSAGE_CHARS} characters"
        )));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_normal_content() {
        assert_eq!(validate_content("  hey there  ").unwrap(), "hey there");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(validate_content("").is_err());
        assert!(validate_content("   \n\t").is_err());
    }

    #[test]
    fn rejects_oversized_content() {
        let big = "x".repeat(MAX_MESSAGE_CHARS + 1);
        assert!(validate_content(&big).is_err());
    }

    #[test]
    fn limit_is_measured_in_chars_not_bytes() {
        // Multi-byte characters up to the limit are fine.
        let content = "é".repeat(MAX_MESSAGE_CHARS);
        assert!(validate_content(&content).is_ok());
    }
}

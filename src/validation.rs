//! Input validation for posts and authors.

use crate::error::{QuillError, Result};

/// Maximum allowed length for a post title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum allowed length for post content or an author bio.
pub const MAX_BODY_LENGTH: usize = 200_000;

/// Maximum allowed length for a record ID.
pub const MAX_ID_LENGTH: usize = 64;

/// Maximum allowed length for an author name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Characters forbidden in IDs to prevent path traversal.
const FORBIDDEN_ID_CHARS: &[char] = &['/', '\\', '\0'];

/// Validates a post title.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(QuillError::Validation("Title cannot be empty".to_string()));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(QuillError::Validation(format!(
            "Title exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(())
}

/// Validates post content or an author bio.
pub fn validate_body(body: &str) -> Result<()> {
    if body.len() > MAX_BODY_LENGTH {
        return Err(QuillError::Validation(format!(
            "Body exceeds maximum length of {} characters",
            MAX_BODY_LENGTH
        )));
    }
    Ok(())
}

/// Validates a record ID to prevent path traversal attacks.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(QuillError::Validation("ID cannot be empty".to_string()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(QuillError::Validation(format!(
            "ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }
    if id.contains("..") {
        return Err(QuillError::Validation(
            "ID cannot contain '..' (path traversal)".to_string(),
        ));
    }
    for c in FORBIDDEN_ID_CHARS {
        if id.contains(*c) {
            return Err(QuillError::Validation(format!(
                "ID cannot contain '{}'",
                c.escape_default()
            )));
        }
    }
    Ok(())
}

/// Validates an author name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(QuillError::Validation("Name cannot be empty".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(QuillError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Loose email shape check: one '@' with text on both sides, no whitespace.
pub fn validate_email(email: &str) -> Result<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(QuillError::Validation(format!(
            "Invalid email address: {}",
            email
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title_empty() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_validate_title_valid() {
        assert!(validate_title("A valid title").is_ok());
    }

    #[test]
    fn test_validate_title_too_long() {
        let long_title = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert!(validate_title(&long_title).is_err());
    }

    #[test]
    fn test_validate_id_path_traversal() {
        assert!(validate_id("../../../etc/passwd").is_err());
        assert!(validate_id("post-1234").is_ok());
    }

    #[test]
    fn test_validate_id_forbidden_chars() {
        assert!(validate_id("post/1234").is_err());
        assert!(validate_id("post\\1234").is_err());
        assert!(validate_id("post\01234").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("ada.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@").is_err());
        assert!(validate_email("a da@example.com").is_err());
    }
}

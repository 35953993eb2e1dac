//! Non-empty text fields (item title, explanation)

use super::ValidationError;

/// Text with at least one non-whitespace character, stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemText(String);

impl ItemText {
    /// Validate `s` as the value of `field`.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - The stored value is `s` unchanged, surrounding whitespace included
    ///
    /// # Example
    /// ```
    /// use itemctl_server::models::ItemText;
    ///
    /// assert!(ItemText::new("title", "Rust basics").is_ok());
    /// assert!(ItemText::new("title", "").is_err());
    /// assert!(ItemText::new("title", "   ").is_err());
    /// ```
    pub fn new(field: &'static str, s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

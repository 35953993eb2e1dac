//! Item creation input

use serde::Deserialize;

use super::{ItemText, ValidationError};

/// Raw POST body, before validation.
///
/// `title` and `explanation` are optional here so that an absent field is
/// reported as a validation error rather than a decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    pub title: Option<String>,
    pub explanation: Option<String>,
    pub category_id: i32,
    pub curriculum_id: i32,
}

/// Validated item ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub title: ItemText,
    pub explanation: ItemText,
    pub category_id: i32,
    pub curriculum_id: i32,
}

impl NewItem {
    /// Build from already-validated parts.
    pub fn new(
        title: ItemText,
        explanation: ItemText,
        category_id: i32,
        curriculum_id: i32,
    ) -> Self {
        Self {
            title,
            explanation,
            category_id,
            curriculum_id,
        }
    }
}

impl TryFrom<CreateItemRequest> for NewItem {
    type Error = ValidationError;

    fn try_from(req: CreateItemRequest) -> Result<Self, Self::Error> {
        let title = req
            .title
            .ok_or(ValidationError::Missing { field: "title" })?;
        let explanation = req.explanation.ok_or(ValidationError::Missing {
            field: "explanation",
        })?;

        Ok(Self::new(
            ItemText::new("title", &title)?,
            ItemText::new("explanation", &explanation)?,
            req.category_id,
            req.curriculum_id,
        ))
    }
}

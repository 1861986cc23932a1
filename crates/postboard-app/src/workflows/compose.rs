//! Post-creation draft

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::queries::CreatePostVariables;
use crate::views::UserId;

/// Text entered in the creation form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    /// Title (required)
    pub title: String,
    /// Body (optional, sent as an empty string when blank)
    pub content: String,
}

impl PostDraft {
    /// Draft with both fields set.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replace the body.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Empty both fields.
    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    /// True when nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }

    /// The schema requires a title; reject blank ones before sending.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Input("title is required".into()));
        }
        Ok(())
    }

    /// Mutation variables with `owner` as the post's user.
    pub fn to_variables(&self, owner: &UserId) -> AppResult<CreatePostVariables> {
        self.validate()?;
        Ok(CreatePostVariables {
            title: self.title.clone(),
            content: self.content.clone(),
            user_id: owner.clone(),
        })
    }
}

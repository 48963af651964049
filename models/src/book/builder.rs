use crate::error::model_error::ModelError;
use crate::{Book, ErrorLocation};

use std::panic::Location;

/// Builder for creating validated Book instances.
#[derive(Debug, Default)]
pub struct BookBuilder {
    id: Option<u32>,
    title: Option<String>,
    author: Option<String>,
    level: Option<String>,
    language: Option<String>,
    content: Option<String>,
}

impl BookBuilder {
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Build the Book with validation.
    ///
    /// `author`, `level` and `language` are optional and default to empty.
    #[track_caller]
    pub fn build(self) -> Result<Book, ModelError> {
        let id = self.id.ok_or_else(|| ModelError::Validation {
            message: String::from("Book id is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if id == 0 {
            return Err(ModelError::Validation {
                message: String::from("Book id must be non-zero"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let title = self.title.ok_or_else(|| ModelError::Validation {
            message: String::from("Book title is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if title.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Book title cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let content = self.content.ok_or_else(|| ModelError::Validation {
            message: String::from("Book content is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if content.trim().is_empty() {
            return Err(ModelError::Validation {
                message: format!("Book '{title}' has no content"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Book {
            id,
            title,
            author: self.author.unwrap_or_default(),
            level: self.level.unwrap_or_default(),
            language: self.language.unwrap_or_default(),
            content,
        })
    }
}

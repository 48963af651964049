mod builder;

pub use builder::BookBuilder;

use serde::{Deserialize, Serialize};

/// A reading book offered in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    /// School level, e.g. "Grade 1".
    pub level: String,
    pub language: String,
    pub content: String,
}

impl Book {
    pub fn builder() -> BookBuilder {
        BookBuilder::default()
    }
}

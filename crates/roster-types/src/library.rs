use crate::Record;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Tag set fed by [`Book::genre`].
pub const GENRES: &str = "genres";

/// A book, keyed by its title and grouped by genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title, unique within a library
    pub title: String,
    /// Author name
    pub author: String,
    /// Publication year
    pub year: i32,
    /// Genre label
    pub genre: String,
}

impl Book {
    /// Build a book from borrowed parts.
    #[must_use]
    pub fn new(title: &str, author: &str, year: i32, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
        }
    }
}

impl Record for Book {
    type Key = String;

    const KIND: &'static str = "book";

    fn key(&self) -> &String {
        &self.title
    }

    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.title.as_str())
    }

    fn group(&self) -> Option<&str> {
        Some(self.genre.as_str())
    }

    fn tags(&self) -> Vec<(&'static str, &str)> {
        vec![(GENRES, self.genre.as_str())]
    }
}

//! Library management: books keyed by title, members and their checkouts

use crate::catalog::{EntityCatalog, reverse_of};
use crate::error::{CatalogError, CatalogResult};
use roster_types::{Book, Record};
use roster_types::library::GENRES;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{info, warn};

/// Genres every branch stocks
pub const BASELINE_GENRES: [&str; 2] = ["Fiction", "Classic"];

fn seed_books() -> Vec<Book> {
    vec![
        Book::new("The Great Gatsby", "F. Scott Fitzgerald", 1925, "Classic"),
        Book::new("To Kill a Mockingbird", "Harper Lee", 1960, "Fiction"),
        Book::new("1984", "George Orwell", 1949, "Science Fiction"),
        Book::new("Pride and Prejudice", "Jane Austen", 1813, "Classic"),
        Book::new("The Catcher in the Rye", "J.D. Salinger", 1951, "Fiction"),
        Book::new("The Hobbit", "J.R.R. Tolkien", 1937, "Fantasy"),
        Book::new("Fahrenheit 451", "Ray Bradbury", 1953, "Science Fiction"),
        Book::new("Jane Eyre", "Charlotte Brontë", 1847, "Classic"),
        Book::new("Wuthering Heights", "Emily Brontë", 1847, "Classic"),
        Book::new("The Road", "Cormac McCarthy", 2006, "Fiction"),
        Book::new("Beloved", "Toni Morrison", 1987, "Fiction"),
        Book::new("The Goldfinch", "Donna Tartt", 2013, "Fiction"),
        Book::new("The Underground Railroad", "Colson Whitehead", 2016, "Fiction"),
    ]
}

fn seed_users() -> Vec<String> {
    ["Alice", "Bob", "Charlie", "Diana"].into_iter().map(String::from).collect()
}

/// Books, library members and what each member has checked out
#[derive(Debug, Clone, Serialize)]
pub struct LibraryManagement {
    books: EntityCatalog<Book>,
    users: Vec<String>,
    checkouts: BTreeMap<String, Vec<String>>,
}

impl Default for LibraryManagement {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryManagement {
    pub fn new() -> Self {
        Self::with_records(seed_books(), seed_users())
    }

    pub fn with_records(books: Vec<Book>, users: Vec<String>) -> Self {
        let checkouts = users.iter().map(|user| (user.clone(), Vec::new())).collect();
        Self { books: EntityCatalog::new(books), users, checkouts }
    }

    pub fn books(&self) -> &EntityCatalog<Book> {
        &self.books
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }

    pub fn find_book_index(&self, title: &str) -> Option<usize> {
        self.books.find_index(title)
    }

    pub fn sort_books_by_year(&self) -> Vec<Book> {
        self.books.sorted_by_key(|b| b.year)
    }

    pub fn reverse_users(&self) -> Vec<String> {
        reverse_of(&self.users)
    }

    /// Register a member with an empty checkout list.
    ///
    /// Members are a plain list: adding a name twice lists it twice.
    pub fn append_user(&mut self, user: &str) {
        self.users.push(user.to_string());
        self.checkouts.entry(user.to_string()).or_default();
        info!(user, "user added");
    }

    /// Remove the first listing of `user`.
    ///
    /// The checkout list goes once no listing of the name remains.
    pub fn remove_user(&mut self, user: &str) -> CatalogResult<()> {
        let Some(pos) = self.users.iter().position(|u| u == user) else {
            warn!(user, "user not found");
            return Err(CatalogError::not_found("user", user));
        };
        self.users.remove(pos);
        if !self.users.iter().any(|u| u == user) {
            self.checkouts.remove(user);
        }
        info!(user, "user removed");
        Ok(())
    }

    /// `(latest, earliest)` publication year
    pub fn find_max_min_year(&self) -> CatalogResult<(i32, i32)> {
        self.books.min_max_by(|b| b.year)
    }

    pub fn add_genre(&mut self, genre: &str) {
        self.books.add_tag(GENRES, genre);
        info!(genre, "genre added");
    }

    pub fn remove_genre(&mut self, genre: &str) {
        self.books.remove_tag(GENRES, genre);
        info!(genre, "genre removed");
    }

    pub fn list_all_genres(&self) -> Vec<&str> {
        self.books.list_tags(GENRES)
    }

    pub fn find_common_genres<I, S>(&self, other: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.books.intersect_tags(GENRES, other)
    }

    pub fn find_unique_genres(&self) -> BTreeSet<String> {
        self.books.difference_tags(GENRES, BASELINE_GENRES)
    }

    pub fn clear_genres(&mut self) {
        self.books.clear_tags(GENRES);
        info!("all genres cleared");
    }

    pub fn add_book(&mut self, title: &str, author: &str, year: i32, genre: &str) -> CatalogResult<()> {
        self.books
            .add(Book::new(title, author, year, genre))
            .inspect_err(|err| warn!(title, "{err}"))?;
        info!(title, "book added");
        Ok(())
    }

    pub fn remove_book(&mut self, title: &str) -> CatalogResult<Book> {
        let removed = self.books.remove(title).inspect_err(|err| warn!(title, "{err}"))?;
        info!(title, "book removed");
        Ok(removed)
    }

    pub fn get_book_details(&self, title: &str) -> Option<&Book> {
        self.books.get(title)
    }

    /// Titles by `author`, in catalog order
    pub fn list_books_by_author(&self, author: &str) -> Vec<String> {
        self.books.iter().filter(|b| b.author == author).map(|b| b.title.clone()).collect()
    }

    pub fn list_books_by_genre(&self, genre: &str) -> Vec<String> {
        self.books.list_by_group(genre)
    }

    pub fn count_books_by_author(&self, author: &str) -> usize {
        self.books.count_where(|b| b.author == author)
    }

    /// Lend `title` to `user`; both must be known
    pub fn checkout_book(&mut self, user: &str, title: &str) -> CatalogResult<()> {
        if !self.books.contains(title) {
            warn!(user, title, "book not found");
            return Err(CatalogError::not_found(Book::KIND, title));
        }
        let Some(loans) = self.checkouts.get_mut(user) else {
            warn!(user, title, "user not found");
            return Err(CatalogError::not_found("user", user));
        };
        loans.push(title.to_string());
        info!(user, title, "book checked out");
        Ok(())
    }

    /// Take `title` back from `user`
    pub fn return_book(&mut self, user: &str, title: &str) -> CatalogResult<()> {
        let Some(loans) = self.checkouts.get_mut(user) else {
            warn!(user, title, "user not found");
            return Err(CatalogError::not_found("user", user));
        };
        let Some(pos) = loans.iter().position(|t| t == title) else {
            warn!(user, title, "book not checked out");
            return Err(CatalogError::not_found("checkout", format!("{user}/{title}")));
        };
        loans.remove(pos);
        info!(user, title, "book returned");
        Ok(())
    }

    /// Titles `user` currently holds
    pub fn checkouts(&self, user: &str) -> &[String] {
        self.checkouts.get(user).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn update_book_details(&mut self, title: &str, details: Book) -> CatalogResult<()> {
        self.books.update(title, details).inspect_err(|err| warn!(title, "{err}"))?;
        info!(title, "book details updated");
        Ok(())
    }

    pub fn merge_library_catalogs(&mut self, other: impl IntoIterator<Item = Book>) -> usize {
        let inserted = self.books.merge(other);
        info!(inserted, "library catalogs merged");
        inserted
    }

    pub fn get_all_book_titles(&self) -> Vec<String> {
        self.books.keys()
    }

    pub fn clear_library_catalog(&mut self) {
        self.books.clear();
        info!("library catalog cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_and_return() {
        let mut library = LibraryManagement::new();

        library.checkout_book("Alice", "1984").unwrap();
        assert_eq!(library.checkouts("Alice"), &["1984".to_string()]);

        library.return_book("Alice", "1984").unwrap();
        assert!(library.checkouts("Alice").is_empty());
        assert!(library.return_book("Alice", "1984").is_err());
    }

    #[test]
    fn test_checkout_requires_known_book_and_user() {
        let mut library = LibraryManagement::new();

        assert_eq!(
            library.checkout_book("Alice", "Dune"),
            Err(CatalogError::not_found("book", "Dune"))
        );
        assert_eq!(
            library.checkout_book("Zed", "1984"),
            Err(CatalogError::not_found("user", "Zed"))
        );
    }

    #[test]
    fn test_new_user_can_borrow() {
        let mut library = LibraryManagement::new();

        library.append_user("Eve");
        library.checkout_book("Eve", "Beloved").unwrap();
        assert_eq!(library.reverse_users()[0], "Eve");

        library.remove_user("Eve").unwrap();
        assert!(library.checkouts("Eve").is_empty());
        assert!(library.remove_user("Eve").is_err());
    }

    #[test]
    fn test_books_by_author_and_year_range() {
        let library = LibraryManagement::new();

        assert_eq!(library.count_books_by_author("Emily Brontë"), 1);
        assert_eq!(library.list_books_by_genre("Fantasy"), vec!["The Hobbit"]);
        assert_eq!(library.find_max_min_year(), Ok((2016, 1813)));
        assert_eq!(library.find_book_index("1984"), Some(2));
    }
}

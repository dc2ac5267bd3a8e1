use crate::domain::model::{Book, Item, Periodical};
use crate::utils::error::{LibraryError, Result};

/// Catalog number given to every book built through [`create_item`].
pub const PLACEHOLDER_CATALOG_NUMBER: &str = "Unknown ISBN";

pub const SUPPORTED_KINDS: [&str; 2] = ["book", "magazine"];

/// Builds an item from a kind tag and raw field text.
///
/// `extra` is the author for a book and the issue number for a magazine.
/// The kind is matched case-insensitively. Nothing is added to any catalog.
pub fn create_item(kind: &str, title: &str, publication_year: i32, extra: &str) -> Result<Item> {
    if kind.eq_ignore_ascii_case("book") {
        Ok(Book::new(title, publication_year, extra, PLACEHOLDER_CATALOG_NUMBER).into())
    } else if kind.eq_ignore_ascii_case("magazine") {
        let issue_number = extra.parse::<i32>().map_err(|e| {
            LibraryError::invalid_argument(format!("Invalid issue number '{}': {}", extra, e))
        })?;
        Ok(Periodical::new(title, publication_year, issue_number).into())
    } else {
        Err(LibraryError::invalid_argument(
            "Invalid item type. Try 'book' or 'magazine'.",
        ))
    }
}

use crate::domain::ports::{Borrowable, Describe};
use serde::Serialize;
use std::fmt;

/// A catalog entry. Only books carry borrow-state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    Book(Book),
    #[serde(rename = "magazine")]
    Periodical(Periodical),
}

impl Item {
    pub fn title(&self) -> &str {
        match self {
            Item::Book(book) => &book.title,
            Item::Periodical(periodical) => &periodical.title,
        }
    }

    pub fn publication_year(&self) -> i32 {
        match self {
            Item::Book(book) => book.publication_year,
            Item::Periodical(periodical) => periodical.publication_year,
        }
    }

    pub fn as_book(&self) -> Option<&Book> {
        match self {
            Item::Book(book) => Some(book),
            Item::Periodical(_) => None,
        }
    }

    pub fn as_book_mut(&mut self) -> Option<&mut Book> {
        match self {
            Item::Book(book) => Some(book),
            Item::Periodical(_) => None,
        }
    }

    /// True for an available book and for every periodical.
    pub fn is_available(&self) -> bool {
        match self {
            Item::Book(book) => !book.is_borrowed(),
            Item::Periodical(_) => true,
        }
    }
}

impl Describe for Item {
    fn describe(&self) -> String {
        match self {
            Item::Book(book) => book.describe(),
            Item::Periodical(periodical) => periodical.describe(),
        }
    }
}

impl From<Book> for Item {
    fn from(book: Book) -> Self {
        Item::Book(book)
    }
}

impl From<Periodical> for Item {
    fn from(periodical: Periodical) -> Self {
        Item::Periodical(periodical)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    title: String,
    publication_year: i32,
    author: String,
    catalog_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    borrower: Option<String>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        publication_year: i32,
        author: impl Into<String>,
        catalog_number: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            publication_year,
            author: author.into(),
            catalog_number: catalog_number.into(),
            borrower: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn catalog_number(&self) -> &str {
        &self.catalog_number
    }

    pub fn borrower(&self) -> Option<&str> {
        self.borrower.as_deref()
    }
}

impl Describe for Book {
    fn describe(&self) -> String {
        format!(
            "Book: {} ({}) by {}",
            self.title, self.publication_year, self.author
        )
    }
}

impl Borrowable for Book {
    fn borrow(&mut self, borrower: &str) -> BorrowOutcome {
        match &self.borrower {
            Some(existing) => {
                tracing::debug!(title = %self.title, holder = %existing, "borrow refused");
                BorrowOutcome::AlreadyBorrowed {
                    title: self.title.clone(),
                    borrower: existing.clone(),
                }
            }
            None => {
                tracing::debug!(title = %self.title, borrower, "book borrowed");
                self.borrower = Some(borrower.to_string());
                BorrowOutcome::Borrowed {
                    title: self.title.clone(),
                    borrower: borrower.to_string(),
                }
            }
        }
    }

    fn return_item(&mut self) -> ReturnOutcome {
        match self.borrower.take() {
            Some(borrower) => {
                tracing::debug!(title = %self.title, borrower = %borrower, "book returned");
                ReturnOutcome::Returned {
                    title: self.title.clone(),
                    borrower,
                }
            }
            None => ReturnOutcome::NotBorrowed {
                title: self.title.clone(),
            },
        }
    }

    fn is_borrowed(&self) -> bool {
        self.borrower.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Periodical {
    title: String,
    publication_year: i32,
    issue_number: i32,
}

impl Periodical {
    pub fn new(title: impl Into<String>, publication_year: i32, issue_number: i32) -> Self {
        Self {
            title: title.into(),
            publication_year,
            issue_number,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn issue_number(&self) -> i32 {
        self.issue_number
    }
}

impl Describe for Periodical {
    fn describe(&self) -> String {
        format!(
            "Magazine: {} (Issue {}, {})",
            self.title, self.issue_number, self.publication_year
        )
    }
}

/// Result of a borrow attempt. A conflict is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowOutcome {
    Borrowed { title: String, borrower: String },
    AlreadyBorrowed { title: String, borrower: String },
}

impl BorrowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BorrowOutcome::Borrowed { .. })
    }
}

impl fmt::Display for BorrowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorrowOutcome::Borrowed { title, borrower } => {
                write!(f, "{} is now borrowed by {}. Enjoy reading!", title, borrower)
            }
            BorrowOutcome::AlreadyBorrowed { title, borrower } => write!(
                f,
                "Oops! {} is already with {}. Maybe check back later?",
                title, borrower
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned { title: String, borrower: String },
    NotBorrowed { title: String },
}

impl ReturnOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ReturnOutcome::Returned { .. })
    }
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnOutcome::Returned { title, borrower } => write!(
                f,
                "{} has been returned by {}. Thanks for bringing it back!",
                title, borrower
            ),
            ReturnOutcome::NotBorrowed { title } => {
                write!(f, "{} wasn't even borrowed. Maybe you got confused?", title)
            }
        }
    }
}

use crate::domain::model::{BorrowOutcome, ReturnOutcome};

/// Human-readable one-line summary of a catalog entry.
pub trait Describe {
    fn describe(&self) -> String;
}

/// Borrow-state tracking. Implemented only by books.
pub trait Borrowable {
    fn borrow(&mut self, borrower: &str) -> BorrowOutcome;
    fn return_item(&mut self) -> ReturnOutcome;
    fn is_borrowed(&self) -> bool;
}

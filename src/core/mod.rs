pub mod catalog;
pub mod factory;
pub mod session;

pub use crate::domain::model::{BorrowOutcome, Item, ReturnOutcome};
pub use crate::domain::ports::{Borrowable, Describe};
pub use crate::utils::error::Result;

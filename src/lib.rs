pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::CatalogConfig;
pub use core::{catalog::Catalog, factory::create_item, session::Session};
pub use domain::model::{Book, BorrowOutcome, Item, Periodical, ReturnOutcome};
pub use domain::ports::{Borrowable, Describe};
pub use utils::error::{LibraryError, Result};

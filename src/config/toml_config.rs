use crate::core::catalog::Catalog;
use crate::core::factory::{create_item, SUPPORTED_KINDS};
use crate::domain::model::{Book, Item};
use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seed data for a catalog, loaded from TOML.
///
/// ```toml
/// [catalog]
/// name = "Branch library"
///
/// [[items]]
/// kind = "book"
/// title = "Pride and Prejudice"
/// year = 1813
/// extra = "Jane Austen"
/// catalog_number = "987654321"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSection {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedItem {
    pub kind: String,
    pub title: String,
    pub year: i32,
    /// Author for books, issue number for magazines.
    pub extra: String,
    /// Only honoured for books.
    pub catalog_number: Option<String>,
}

impl SeedItem {
    fn new(kind: &str, title: &str, year: i32, extra: &str, catalog_number: Option<&str>) -> Self {
        Self {
            kind: kind.to_string(),
            title: title.to_string(),
            year,
            extra: extra.to_string(),
            catalog_number: catalog_number.map(str::to_string),
        }
    }

    pub fn to_item(&self) -> Result<Item> {
        match &self.catalog_number {
            Some(number) if self.kind.eq_ignore_ascii_case("book") => {
                Ok(Book::new(&self.title, self.year, &self.extra, number).into())
            }
            _ => create_item(&self.kind, &self.title, self.year, &self.extra),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogSection::default(),
            items: vec![
                SeedItem::new("book", "To Kill a Mockingbird", 1960, "Harper Lee", Some("123456789")),
                SeedItem::new("book", "Pride and Prejudice", 1813, "Jane Austen", Some("987654321")),
                SeedItem::new("magazine", "Time", 2023, "5", None),
            ],
        }
    }
}

impl CatalogConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LibraryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LibraryError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown names stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LibraryError::ConfigParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn display_name(&self) -> &str {
        self.catalog.name.as_deref().unwrap_or("Library")
    }

    /// Runs every seed through the factory, in file order.
    pub fn build_catalog(&self) -> Result<Catalog> {
        let catalog = self
            .items
            .iter()
            .map(SeedItem::to_item)
            .collect::<Result<Catalog>>()?;
        for item in catalog.iter() {
            tracing::debug!(title = item.title(), available = item.is_available(), "seeded");
        }
        tracing::info!(name = self.display_name(), items = catalog.len(), "catalog built");
        Ok(catalog)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        for (index, item) in self.items.iter().enumerate() {
            validate_one_of(&format!("items[{}].kind", index), &item.kind, &SUPPORTED_KINDS)?;
            validate_non_empty_string(&format!("items[{}].title", index), &item.title)?;
        }
        Ok(())
    }
}

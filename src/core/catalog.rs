use crate::domain::model::Item;
use crate::utils::error::{LibraryError, Result};

/// Ordered in-memory collection of items.
///
/// Insertion order is preserved and duplicate titles are allowed; lookups
/// return the first match. There is no removal. The catalog is owned by
/// whoever builds it and lent to the session, so nothing here is global.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: impl Into<Item>) {
        let item = item.into();
        tracing::debug!(title = item.title(), position = self.items.len(), "item added");
        self.items.push(item);
    }

    /// Available items in insertion order: every periodical plus every book
    /// nobody currently holds. Recomputed on each call.
    pub fn list_available(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(|item| item.is_available())
    }

    pub fn find_by_title(&self, title: &str) -> Result<&Item> {
        let index = self.position_of(title)?;
        Ok(&self.items[index])
    }

    pub fn find_by_title_mut(&mut self, title: &str) -> Result<&mut Item> {
        let index = self.position_of(title)?;
        Ok(&mut self.items[index])
    }

    fn position_of(&self, title: &str) -> Result<usize> {
        self.items
            .iter()
            .position(|item| titles_match(item.title(), title))
            .ok_or_else(|| {
                tracing::debug!(title, "title lookup missed");
                LibraryError::not_found(title)
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Case-insensitive title equality, compared one character at a time.
///
/// Each pair matches when equal, when their upper-case forms agree, or when
/// the lower-case forms of those upper-case forms agree. Only single-character
/// mappings are used, so `ς`/`σ`/`Σ` and `İ`/`i` compare equal.
pub fn titles_match(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_match(x, y))
}

fn chars_match(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_upper(a), simple_upper(b));
    upper_a == upper_b || simple_lower(upper_a) == simple_lower(upper_b)
}

// Multi-char upper-case expansions (`ß` -> "SS") leave the char as is.
fn simple_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// `İ` is the only char whose lower-case form expands; its first char is `i`.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

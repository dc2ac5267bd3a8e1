use small_library::{
    create_item, Borrowable, Catalog, CatalogConfig, Describe, Item, LibraryError,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn available_titles(catalog: &Catalog) -> Vec<String> {
    catalog
        .list_available()
        .map(|item| item.title().to_string())
        .collect()
}

fn borrow(catalog: &mut Catalog, title: &str, who: &str) -> String {
    match catalog.find_by_title_mut(title).unwrap() {
        Item::Book(book) => book.borrow(who).to_string(),
        Item::Periodical(_) => panic!("{} is not a book", title),
    }
}

#[test]
fn test_factory_items_flow_through_catalog() {
    let mut catalog = Catalog::new();
    catalog.add_item(create_item("book", "A", 2001, "Author A").unwrap());
    catalog.add_item(create_item("book", "B", 2002, "Author B").unwrap());
    catalog.add_item(create_item("magazine", "Time", 2023, "5").unwrap());

    assert_eq!(available_titles(&catalog), vec!["A", "B", "Time"]);

    assert_eq!(
        borrow(&mut catalog, "a", "Alice"),
        "A is now borrowed by Alice. Enjoy reading!"
    );
    assert_eq!(available_titles(&catalog), vec!["B", "Time"]);

    assert_eq!(
        borrow(&mut catalog, "A", "Bob"),
        "Oops! A is already with Alice. Maybe check back later?"
    );
    assert_eq!(available_titles(&catalog), vec!["B", "Time"]);

    let outcome = catalog
        .find_by_title_mut("A")
        .unwrap()
        .as_book_mut()
        .unwrap()
        .return_item();
    assert_eq!(
        outcome.to_string(),
        "A has been returned by Alice. Thanks for bringing it back!"
    );
    assert_eq!(available_titles(&catalog), vec!["A", "B", "Time"]);
}

#[test]
fn test_listing_renders_describe_lines() {
    let mut catalog = Catalog::new();
    catalog.add_item(create_item("Book", "T", 2000, "Author X").unwrap());
    catalog.add_item(create_item("Magazine", "Time", 2023, "5").unwrap());

    let lines: Vec<String> = catalog.list_available().map(Describe::describe).collect();
    assert_eq!(
        lines,
        vec!["Book: T (2000) by Author X", "Magazine: Time (Issue 5, 2023)"]
    );
}

#[test]
fn test_duplicate_titles_borrow_the_first() {
    let mut catalog = Catalog::new();
    catalog.add_item(create_item("book", "Twin", 1990, "First").unwrap());
    catalog.add_item(create_item("book", "Twin", 1991, "Second").unwrap());

    borrow(&mut catalog, "twin", "Alice");

    let remaining: Vec<&str> = catalog
        .list_available()
        .filter_map(|item| item.as_book().map(|b| b.author()))
        .collect();
    assert_eq!(remaining, vec!["Second"]);
}

#[test]
fn test_lookup_miss_and_factory_errors_share_error_type() {
    let catalog = Catalog::new();
    assert!(matches!(
        catalog.find_by_title("Nothing"),
        Err(LibraryError::NotFound { .. })
    ));
    assert!(matches!(
        create_item("newspaper", "Daily", 2024, "Editor"),
        Err(LibraryError::InvalidArgument { .. })
    ));
    assert!(matches!(
        create_item("magazine", "Time", 2023, "five"),
        Err(LibraryError::InvalidArgument { .. })
    ));
}

#[test]
fn test_catalog_from_toml_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[catalog]
name = "Branch"

[[items]]
kind = "book"
title = "Dune"
year = 1965
extra = "Frank Herbert"
catalog_number = "0441013597"

[[items]]
kind = "magazine"
title = "Wired"
year = 2024
extra = "7"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let config = CatalogConfig::from_file(temp_file.path()).unwrap();
    let catalog = config.build_catalog().unwrap();

    let dune = catalog.find_by_title("DUNE").unwrap().as_book().unwrap();
    assert_eq!(dune.catalog_number(), "0441013597");
    assert_eq!(dune.author(), "Frank Herbert");
    assert!(!dune.is_borrowed());
    assert_eq!(available_titles(&catalog), vec!["Dune", "Wired"]);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = CatalogConfig::from_file("/definitely/not/here/catalog.toml").unwrap_err();
    assert!(matches!(err, LibraryError::IoError(_)));
}

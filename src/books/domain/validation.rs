use crate::books::catalog::Catalog;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};

pub const MISSING_ISBN: &str = "Missing Isbn";
pub const DUPLICATE_ISBN: &str = "Duplicate Isbn";

// checks a candidate for insertion against the current catalog
pub fn verify(book: &BookEntity, catalog: &Catalog) -> LibraryResult<()> {
    if book.isbn.is_empty() {
        return Err(LibraryError::validation(MISSING_ISBN));
    }
    if catalog.contains(book.isbn.as_str()) {
        return Err(LibraryError::duplicate_key(DUPLICATE_ISBN));
    }
    Ok(())
}

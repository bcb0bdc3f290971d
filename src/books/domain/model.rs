use crate::core::domain::Identifiable;

// BookEntity is a catalog entry as held in the store; its isbn doubles as the storage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

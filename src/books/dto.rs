use std::fmt;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use crate::books::domain::model::BookEntity;

// BookDto is the wire shape of a book. Requests must be a json object; keys that are
// missing or null decode as empty strings and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for BookDto {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BookDtoVisitor)
    }
}

struct BookDtoVisitor;

impl<'de> Visitor<'de> for BookDtoVisitor {
    type Value = BookDto;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a json object with isbn, title and author")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<BookDto, A::Error> {
        let mut book = BookDto::default();
        while let Some(key) = map.next_key::<String>()? {
            let field = match key.as_str() {
                "isbn" => &mut book.isbn,
                "title" => &mut book.title,
                "author" => &mut book.author,
                _ => {
                    let _ = map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };
            *field = map.next_value::<Option<String>>()?.unwrap_or_default();
        }
        Ok(book)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_serialize_all_keys() {
        let book = BookDto::new("1", "Star Wars", "George Lucas");
        let out = serde_json::to_string(&book).expect("should serialize");
        assert_eq!(r#"{"isbn":"1","title":"Star Wars","author":"George Lucas"}"#, out);
    }

    #[tokio::test]
    async fn test_should_default_missing_keys() {
        let book: BookDto = serde_json::from_str(r#"{"isbn":"7"}"#).expect("should decode");
        assert_eq!(BookDto::new("7", "", ""), book);

        let book: BookDto = serde_json::from_str("{}").expect("should decode");
        assert_eq!(BookDto::default(), book);
    }

    #[tokio::test]
    async fn test_should_default_null_values() {
        let book: BookDto = serde_json::from_str(r#"{"isbn":"5","title":null,"author":"A"}"#)
            .expect("should decode");
        assert_eq!(BookDto::new("5", "", "A"), book);
    }

    #[tokio::test]
    async fn test_should_ignore_unknown_keys() {
        let book: BookDto = serde_json::from_str(r#"{"title":"t","pages":12,"tags":["x"],"author":"a","isbn":"9"}"#)
            .expect("should decode");
        assert_eq!(BookDto::new("9", "t", "a"), book);
    }

    #[tokio::test]
    async fn test_should_reject_non_objects() {
        assert!(serde_json::from_str::<BookDto>(r#"["6","T","A"]"#).is_err());
        assert!(serde_json::from_str::<BookDto>(r#""6""#).is_err());
        assert!(serde_json::from_str::<BookDto>("42").is_err());
    }

    #[tokio::test]
    async fn test_should_reject_wrong_field_types() {
        assert!(serde_json::from_str::<BookDto>(r#"{"isbn":1}"#).is_err());
        assert!(serde_json::from_str::<BookDto>("not json").is_err());
    }
}

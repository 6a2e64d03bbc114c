use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is the wire shape of a book for the inventory endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub quantity: i64,
}

impl BookDto {
    pub fn new(id: &str, title: &str, author: &str, quantity: i64) -> BookDto {
        BookDto {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            quantity,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn version(&self) -> i64 {
        0
    }
}

impl Book for BookDto {
    fn quantity(&self) -> i64 {
        self.quantity
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            quantity: other.quantity,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        BookEntity::new(other.id.as_str(), other.title.as_str(), other.author.as_str(), other.quantity)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("2", "The Great Gatsby", "F. Scott Fitzgerald", 5);
        assert_eq!("2", book.id.as_str());
        assert_eq!("The Great Gatsby", book.title.as_str());
        assert_eq!(5, book.quantity);
    }

    #[tokio::test]
    async fn test_should_use_wire_shape() {
        let book = BookDto::new("3", "War and Peace", "Leo Tolstoy", 6);
        let json = serde_json::to_value(&book).expect("serialize");
        assert_eq!(json!({"id": "3", "title": "War and Peace", "author": "Leo Tolstoy", "quantity": 6}), json);
    }

    #[tokio::test]
    async fn test_should_hide_entity_bookkeeping() {
        let mut entity = BookEntity::new("3", "War and Peace", "Leo Tolstoy", 6);
        entity.version = 4;
        let dto = BookDto::from(&entity);
        assert_eq!(BookDto::new("3", "War and Peace", "Leo Tolstoy", 6), dto);
        let back = BookEntity::from(&dto);
        assert_eq!(0, back.version);
        assert_eq!(entity.quantity, back.quantity);
    }
}

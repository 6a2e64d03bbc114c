use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity is the stored record of a title in the catalog; quantity counts the copies
// currently on the shelf and version counts the changes made to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub quantity: i64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(id: &str, title: &str, author: &str, quantity: i64) -> Self {
        Self {
            id: id.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            quantity,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn quantity(&self) -> i64 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("1", "In Search of Lost Time", "Marcel Proust", 2);
        assert_eq!("1", book.id().as_str());
        assert_eq!("Marcel Proust", book.author.as_str());
        assert_eq!(0, book.version());
        assert!(book.is_available());
    }

    #[tokio::test]
    async fn test_should_not_be_available_without_copies() {
        let book = BookEntity::new("1", "title", "author", 0);
        assert!(!book.is_available());
    }
}

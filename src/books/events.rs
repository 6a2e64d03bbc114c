use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::Book;
use crate::utils::date::serializer;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InventoryEventKind {
    BookAdded,
    CheckedOut,
    Returned,
}

// InventoryEvent records one committed change to the copies of a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEvent {
    pub event_id: String,
    pub kind: InventoryEventKind,
    pub branch_id: String,
    pub book_id: String,
    // copies added (positive) or removed (negative) by this change
    pub delta: i64,
    // copies on the shelf once the change is applied
    pub quantity: i64,
    pub version: i64,
    #[serde(with = "serializer")]
    pub occurred_at: NaiveDateTime,
}

impl InventoryEvent {
    pub fn book_added(branch_id: &str, book: &dyn Book) -> Self {
        Self::from_book(InventoryEventKind::BookAdded, branch_id, book, book.quantity())
    }

    /// Classifies a committed quantity change by the sign of `delta`.
    pub fn quantity_changed(branch_id: &str, book: &dyn Book, delta: i64) -> Self {
        let kind = if delta < 0 { InventoryEventKind::CheckedOut } else { InventoryEventKind::Returned };
        Self::from_book(kind, branch_id, book, delta)
    }

    fn from_book(kind: InventoryEventKind, branch_id: &str, book: &dyn Book, delta: i64) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            kind,
            branch_id: branch_id.to_string(),
            book_id: book.id(),
            delta,
            quantity: book.quantity(),
            version: book.version(),
            occurred_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::events::{InventoryEvent, InventoryEventKind};

    #[tokio::test]
    async fn test_should_build_book_added() {
        let book = BookEntity::new("1", "In Search of Lost Time", "Marcel Proust", 2);
        let event = InventoryEvent::book_added("main", &book);
        assert_eq!(InventoryEventKind::BookAdded, event.kind);
        assert_eq!("1", event.book_id.as_str());
        assert_eq!("main", event.branch_id.as_str());
        assert_eq!(2, event.delta);
        assert_eq!(2, event.quantity);
        assert_eq!(0, event.version);
    }

    #[tokio::test]
    async fn test_should_classify_quantity_change() {
        let mut book = BookEntity::new("3", "War and Peace", "Leo Tolstoy", 5);
        book.version = 1;
        let event = InventoryEvent::quantity_changed("main", &book, -1);
        assert_eq!(InventoryEventKind::CheckedOut, event.kind);
        assert_eq!(-1, event.delta);
        assert_eq!(5, event.quantity);
        assert_eq!(1, event.version);

        let event = InventoryEvent::quantity_changed("main", &book, 1);
        assert_eq!(InventoryEventKind::Returned, event.kind);
    }

    #[tokio::test]
    async fn test_should_serialize_event() {
        let book = BookEntity::new("2", "The Great Gatsby", "F. Scott Fitzgerald", 5);
        let json = serde_json::to_value(InventoryEvent::book_added("main", &book)).expect("serialize event");
        assert_eq!("BookAdded", json["kind"]);
        assert_eq!("2", json["book_id"]);
        assert!(json["occurred_at"].is_string());
    }
}

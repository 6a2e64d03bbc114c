use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn quantity(&self) -> i64;

    fn is_available(&self) -> bool {
        self.quantity() > 0
    }
}

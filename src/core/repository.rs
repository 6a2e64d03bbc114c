use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // all entities in insertion order
    async fn list(&self) -> LibraryResult<Vec<Entity>>;

    // number of stored entities
    async fn count(&self) -> LibraryResult<usize>;
}

use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored records
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}


// Configuration abstracts the inventory policy for a library branch
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    // reject a new book whose id is already on the shelf
    pub unique_ids: bool,
    // upper bound for the number of copies of a single book, unbounded when absent
    pub max_quantity: Option<i64>,
    pub seed_catalog: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            unique_ids: true,
            max_quantity: None,
            seed_catalog: true,
        }
    }

    pub fn with_unique_ids(mut self, unique_ids: bool) -> Self {
        self.unique_ids = unique_ids;
        self
    }

    pub fn with_max_quantity(mut self, max_quantity: Option<i64>) -> Self {
        self.max_quantity = max_quantity;
        self
    }

    pub fn with_seed_catalog(mut self, seed_catalog: bool) -> Self {
        self.seed_catalog = seed_catalog;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert!(config.unique_ids);
        assert_eq!(None, config.max_quantity);
        assert!(config.seed_catalog);
    }

    #[tokio::test]
    async fn test_should_override_config() {
        let config = Configuration::new("test")
            .with_unique_ids(false)
            .with_max_quantity(Some(10))
            .with_seed_catalog(false);
        assert!(!config.unique_ids);
        assert_eq!(Some(10), config.max_quantity);
        assert!(!config.seed_catalog);
    }
}

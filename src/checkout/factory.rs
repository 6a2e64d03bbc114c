use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;

pub fn create_checkout_service(config: &Configuration, book_repository: Arc<dyn BookRepository>,
                               publisher: Arc<dyn EventPublisher>) -> Arc<dyn CheckoutService> {
    Arc::new(CheckoutServiceImpl::new(config, book_repository, publisher))
}

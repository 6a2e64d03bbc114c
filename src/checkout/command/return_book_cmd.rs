use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand {
    checkout_service: Arc<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub fn new(checkout_service: Arc<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    book_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.checkout_service.returned(req.book_id.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::factory::create_book_repository;
    use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;

    async fn commands(config: &Configuration) -> (CheckoutBookCommand, ReturnBookCommand) {
        let repo = create_book_repository(config).await.expect("should create repository");
        let svc = create_checkout_service(config, repo, create_publisher(GatewayPublisherVia::Memory));
        (CheckoutBookCommand::new(svc.clone()), ReturnBookCommand::new(svc))
    }

    #[tokio::test]
    async fn test_should_run_checkout_and_return_book() {
        let (checkout_cmd, return_cmd) = commands(&Configuration::new("test")).await;

        let res = checkout_cmd.execute(CheckoutBookCommandRequest::new("3".to_string())).await.expect("should checkout book");
        assert_eq!(5, res.book.quantity);
        let res = return_cmd.execute(ReturnBookCommandRequest::new("3".to_string())).await.expect("should return book");
        assert_eq!("3", res.book.id.as_str());
        assert_eq!(6, res.book.quantity);
    }

    #[tokio::test]
    async fn test_should_fail_return_beyond_capacity() {
        let (_, return_cmd) = commands(&Configuration::new("test").with_max_quantity(Some(6))).await;

        let res = return_cmd.execute(ReturnBookCommandRequest::new("3".to_string())).await;
        assert!(matches!(res, Err(CommandError::Overflow { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_return_missing_book() {
        let (_, return_cmd) = commands(&Configuration::new("test")).await;

        let res = return_cmd.execute(ReturnBookCommandRequest::new("404".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}

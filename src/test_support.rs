//! Shared unit-test doubles.

use async_trait::async_trait;
use mockall::mock;

use crate::contact::{
    domain::{ContactMessage, NewContactMessage},
    ports::{ContactMessageStore, StoreResult},
};

mock! {
    pub Store {}

    #[async_trait]
    impl ContactMessageStore for Store {
        async fn create(&self, payload: NewContactMessage) -> StoreResult<ContactMessage>;
        async fn list(&self) -> StoreResult<Vec<ContactMessage>>;
    }
}

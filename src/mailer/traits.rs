//! Trait abstraction for the send operation to enable mocking in tests

use super::error::SendError;
use crate::state::FieldRecord;
use async_trait::async_trait;

/// Acknowledgement returned by the email service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub status: u16,
    pub text: String,
}

/// Delivers a field record through a service template
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        record: &FieldRecord,
    ) -> Result<SendReceipt, SendError>;
}

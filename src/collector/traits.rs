//! Trait abstraction for the collector client to enable mocking in tests

use super::client::CollectorClient;
use super::error::Result;
use super::payload::SubmissionPayload;
use async_trait::async_trait;

/// Trait for collector operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectorApi: Send + Sync {
    /// Post a submission, returning the parsed JSON reply
    async fn submit(&self, payload: &SubmissionPayload) -> Result<serde_json::Value>;
}

#[async_trait]
impl CollectorApi for CollectorClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<serde_json::Value> {
        CollectorClient::submit(self, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::SubmitError;
    use crate::state::FormState;
    use std::sync::Arc;

    #[test]
    fn test_mock_through_trait_object() {
        let mut mock = MockCollectorApi::new();
        mock.expect_submit()
            .withf(|payload| payload.form_id == 8 && payload.fields.len() == 8)
            .times(1)
            .returning(|_| Err(SubmitError::InvalidResponse("expected value".to_string())));
        let collector: Arc<dyn CollectorApi> = Arc::new(mock);

        let payload = SubmissionPayload::from_state(&FormState::new());
        let result = tokio_test::block_on(collector.submit(&payload));

        assert!(matches!(result, Err(SubmitError::InvalidResponse(_))));
    }
}

//! The Completion Gateway: mediates between session history and the service.

use std::sync::Arc;

use tracing::debug;

use ecosort_session::{BoundedHistory, Turn};

use crate::client::CompletionService;
use crate::error::Result;

/// Wraps the external text-generation service with the history policy.
///
/// `complete` appends the user turn, submits the full bounded snapshot and
/// appends the assistant turn only on success. On failure the user turn is
/// retained and no assistant turn is recorded, so a retried question keeps
/// its context without polluting history with a phantom reply.
pub struct CompletionGateway {
    service: Arc<dyn CompletionService>,
}

impl CompletionGateway {
    /// Create a gateway over the given completion service.
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    /// Generate a reply to `user_text` in the context of `history`.
    pub async fn complete(&self, history: &mut BoundedHistory, user_text: &str) -> Result<String> {
        history.push(Turn::user(user_text));

        let reply = self.service.submit(history.snapshot()).await?;

        history.push(Turn::assistant(reply.clone()));
        debug!(turns = history.len(), "Completion recorded in history");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use ecosort_session::Role;

    use crate::error::GatewayError;

    struct EchoService;

    #[async_trait]
    impl CompletionService for EchoService {
        async fn submit(&self, turns: &[Turn]) -> Result<String> {
            let last = turns.last().unwrap();
            Ok(format!("ответ на: {}", last.content))
        }
    }

    struct TimeoutService;

    #[async_trait]
    impl CompletionService for TimeoutService {
        async fn submit(&self, _turns: &[Turn]) -> Result<String> {
            Err(GatewayError::Request("timed out".into()))
        }
    }

    #[tokio::test]
    async fn test_success_appends_both_turns() {
        let gateway = CompletionGateway::new(Arc::new(EchoService));
        let mut history = BoundedHistory::new("система", 10);

        let reply = gateway.complete(&mut history, "куда деть стекло?").await.unwrap();
        assert_eq!(reply, "ответ на: куда деть стекло?");

        let snapshot = history.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[1].role, Role::User);
        assert_eq!(snapshot[2].role, Role::Assistant);
        assert_eq!(snapshot[2].content, reply);
    }

    #[tokio::test]
    async fn test_failure_retains_user_turn_only() {
        let gateway = CompletionGateway::new(Arc::new(TimeoutService));
        let mut history = BoundedHistory::new("система", 10);

        let result = gateway.complete(&mut history, "вопрос").await;
        assert!(result.is_err());

        // The user turn stays; no phantom assistant turn is recorded.
        let snapshot = history.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[1].role, Role::User);
        assert_eq!(snapshot[1].content, "вопрос");
    }
}

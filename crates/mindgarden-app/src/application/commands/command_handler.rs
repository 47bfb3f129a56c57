use async_trait::async_trait;

use mindgarden_domain::shared::DomainError;

/// Marker for a write the application layer accepts.
pub trait Command: Send + Sync {}

/// Executes one command type and reports its outcome.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    type Result;

    async fn handle(&self, cmd: C) -> Result<Self::Result, DomainError>;
}

//! Handler contract.

use async_trait::async_trait;

use crate::{DomainEvent, HandlerError};

/// A unit of work run once per dispatch of the events it is registered for.
///
/// The dispatcher runs each handler as its own task; a handler signals
/// completion simply by returning. Returned errors are contained by the
/// dispatcher and never reach the code that triggered the dispatch, so
/// handlers that talk to external systems should log enough context to
/// diagnose a failure on their own.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Returns the name of this handler, used in logs, metrics and reports.
    fn name(&self) -> &'static str;

    /// Handles a single event.
    async fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError>;
}

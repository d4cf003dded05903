//! Event dispatcher: fans an event out to its handlers and waits for all of them.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinSet;

use crate::{DomainEvent, EventHandler, HandlerRegistry};

/// Dispatcher settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Upper bound on a single handler's run time. `None` waits forever.
    ///
    /// A handler that exceeds the limit is cancelled and reported as
    /// [`HandlerStatus::TimedOut`]; the dispatch carries on regardless.
    pub handler_timeout: Option<Duration>,
}

impl DispatcherConfig {
    /// Creates a config with no handler timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that cancels handlers running longer than `timeout`.
    pub fn with_handler_timeout(timeout: Duration) -> Self {
        Self {
            handler_timeout: Some(timeout),
        }
    }
}

/// How a single handler invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerStatus {
    /// The handler returned `Ok`.
    Completed,
    /// The handler returned an error.
    Failed(String),
    /// The handler panicked.
    Panicked,
    /// The handler was cancelled after exceeding the configured timeout.
    TimedOut,
}

impl HandlerStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, HandlerStatus::Completed)
    }
}

/// Outcome of one handler within a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOutcome {
    pub handler: &'static str,
    pub status: HandlerStatus,
}

/// Summary of a dispatch call, one outcome per invoked handler in
/// registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub event_name: String,
    pub outcomes: Vec<HandlerOutcome>,
}

impl DispatchReport {
    fn empty(event_name: &str) -> Self {
        Self {
            event_name: event_name.to_string(),
            outcomes: Vec::new(),
        }
    }

    /// Number of handlers that were invoked.
    pub fn invoked(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of handlers that completed successfully.
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status.is_success())
            .count()
    }

    /// Outcomes of the handlers that did not complete successfully.
    pub fn failures(&self) -> impl Iterator<Item = &HandlerOutcome> {
        self.outcomes.iter().filter(|o| !o.status.is_success())
    }

    /// Returns true if every invoked handler completed successfully.
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(|o| o.status.is_success())
    }
}

/// Owns the handler registry and runs handlers for dispatched events.
///
/// Handlers are registered through `&mut self`, so registration has to be
/// finished before the dispatcher is wrapped in an `Arc` and shared with the
/// use cases. After that the registry is read-only.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    registry: HandlerRegistry,
    config: DispatcherConfig,
}

impl EventDispatcher {
    /// Creates a dispatcher with an empty registry and no handler timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher with an empty registry and the given config.
    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            registry: HandlerRegistry::new(),
            config,
        }
    }

    /// Creates a dispatcher that takes ownership of an existing registry.
    pub fn from_registry(registry: HandlerRegistry, config: DispatcherConfig) -> Self {
        Self { registry, config }
    }

    /// Registers a handler for an event name.
    pub fn register(&mut self, event_name: impl Into<String>, handler: Arc<dyn EventHandler>) {
        let event_name = event_name.into();
        tracing::debug!(event = %event_name, handler = handler.name(), "handler registered");
        self.registry.register(event_name, handler);
    }

    /// Read access to the registry.
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn config(&self) -> DispatcherConfig {
        self.config
    }

    /// Runs every handler registered for `event.name()` and waits for all of
    /// them to finish.
    ///
    /// Each handler runs as its own task, so handlers execute concurrently
    /// and in no particular order. Every handler registered at call time is
    /// invoked exactly once. Handler errors, panics and timeouts are logged
    /// and recorded in the returned report; they are never returned as an
    /// error and never stop the other handlers.
    ///
    /// The handler tasks are owned by the returned future: dropping it
    /// before it resolves aborts every handler still running.
    ///
    /// Must be called from within a tokio runtime.
    #[tracing::instrument(skip(self, event), fields(event = %event.name()))]
    pub async fn dispatch(&self, event: DomainEvent) -> DispatchReport {
        let handlers = self.registry.handlers_for(event.name());
        if handlers.is_empty() {
            tracing::debug!("no handlers registered");
            return DispatchReport::empty(event.name());
        }

        let started = Instant::now();
        let event = Arc::new(event);
        let timeout = self.config.handler_timeout;

        let mut tasks = JoinSet::new();
        for (index, handler) in handlers.iter().enumerate() {
            let handler = Arc::clone(handler);
            let event = Arc::clone(&event);
            tasks.spawn(async move { (index, run_handler(handler, &event, timeout).await) });
        }

        metrics::counter!("event_handlers_invoked_total").increment(handlers.len() as u64);

        // A slot left empty belongs to a task that panicked; the set is
        // never aborted while it is being drained.
        let mut statuses: Vec<Option<HandlerStatus>> = vec![None; handlers.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, status)) => statuses[index] = Some(status),
                Err(e) if e.is_panic() => {}
                Err(e) => tracing::warn!(error = %e, "handler task ended unexpectedly"),
            }
        }

        let mut outcomes = Vec::with_capacity(handlers.len());
        for (handler, status) in handlers.iter().zip(statuses) {
            let handler = handler.name();
            let status = status.unwrap_or(HandlerStatus::Panicked);

            if !status.is_success() {
                metrics::counter!(
                    "event_handler_failures_total",
                    "event" => event.name().to_string(),
                    "handler" => handler
                )
                .increment(1);
                tracing::warn!(handler, ?status, "event handler did not complete");
            }

            outcomes.push(HandlerOutcome { handler, status });
        }

        let duration = started.elapsed().as_secs_f64();
        metrics::counter!("events_dispatched_total", "event" => event.name().to_string())
            .increment(1);
        metrics::histogram!("event_dispatch_duration_seconds").record(duration);
        tracing::debug!(handlers = outcomes.len(), duration, "dispatch complete");

        DispatchReport {
            event_name: event.name().to_string(),
            outcomes,
        }
    }
}

async fn run_handler(
    handler: Arc<dyn EventHandler>,
    event: &DomainEvent,
    timeout: Option<Duration>,
) -> HandlerStatus {
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, handler.handle(event)).await {
            Ok(result) => result,
            Err(_) => return HandlerStatus::TimedOut,
        },
        None => handler.handle(event).await,
    };

    match result {
        Ok(()) => HandlerStatus::Completed,
        Err(e) => HandlerStatus::Failed(e.to_string()),
    }
}

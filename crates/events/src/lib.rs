//! In-process domain event dispatch.
//!
//! This crate provides the notification side of the order service:
//! - [`DomainEvent`], an immutable named payload built after a state change
//! - [`EventHandler`], the contract every handler implements
//! - [`HandlerRegistry`] and [`EventDispatcher`], which fan an event out to
//!   every registered handler and wait until all of them have finished
//! - [`BrokerChannel`], the publish port used by [`OrderCreatedHandler`]
//!
//! Handler failures never reach the caller of [`EventDispatcher::dispatch`];
//! they are logged and reported back in a [`DispatchReport`].

pub mod broker;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;
pub mod handlers;
pub mod registry;

pub use broker::{BrokerChannel, InMemoryBroker, LoggingBroker, Publishing};
pub use dispatcher::{DispatchReport, DispatcherConfig, EventDispatcher, HandlerOutcome, HandlerStatus};
pub use error::{BrokerError, EventError, HandlerError};
pub use event::{DomainEvent, ORDER_CREATED};
pub use handler::EventHandler;
pub use handlers::OrderCreatedHandler;
pub use registry::HandlerRegistry;

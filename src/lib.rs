//! In-process request mediation building blocks.
//!
//! `remit` packages a small convention for structuring application
//! operations:
//!
//! - every operation is a plain request record — a [`Command`] when it
//!   mutates state, a [`Query`] when it only reads;
//! - each request type has exactly one handler ([`CommandHandler`] /
//!   [`QueryHandler`]) which returns a uniform [`Response`] envelope
//!   carrying a success flag, an optional failure message, and a typed
//!   payload;
//! - callers hand requests to a [`Dispatch`] implementation, which routes
//!   each request to the handler registered for its type. The routing
//!   itself (registry, DI wiring) belongs to the host application and is
//!   deliberately not part of this crate.
//!
//! Domain failures are data, not errors: a handler that cannot complete an
//! operation returns `Ok(Response::fail("..."))` and the caller branches
//! on the flag. The `Err` channel of [`Result`] is reserved for
//! infrastructure faults such as cancellation.
//!
//! # Quick start
//!
//! ```rust
//! use async_trait::async_trait;
//! use remit::{command, CommandHandler, Request, RequestContext, Response, Result};
//!
//! command! {
//!     /// Close an open order.
//!     CloseOrder { order_id: u64 } -> ()
//! }
//!
//! struct CloseOrderHandler;
//!
//! #[async_trait]
//! impl CommandHandler<CloseOrder> for CloseOrderHandler {
//!     async fn handle(&self, command: CloseOrder, _ctx: RequestContext) -> Result<Response<()>> {
//!         if command.order_id == 0 {
//!             return Ok(Response::fail("Could not update Order."));
//!         }
//!         Ok(Response::ok())
//!     }
//! }
//!
//! assert_eq!(CloseOrder::NAME, "CloseOrder");
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod context;
mod error;
mod handler;
mod logging;
mod mediator;
mod request;
mod response;

pub use context::RequestContext;
pub use error::{Error, Result};
pub use handler::{CommandHandler, QueryHandler};
pub use logging::Logged;
pub use mediator::Dispatch;
pub use request::{Command, Query, Request};
pub use response::Response;

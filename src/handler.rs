//! Handler traits: one handler per request type.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error::Result;
use crate::request::{Command, Query};
use crate::response::Response;

/// Handles one command type.
///
/// Domain failures are data: return `Ok(Response::fail(..))` and let the
/// caller branch on the flag. The `Err` channel carries infrastructure
/// faults only.
///
/// Handlers are invoked one at a time per incoming call; they hold no
/// dispatch-level shared state and this crate makes no ordering guarantee
/// across calls.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    /// Execute the command.
    async fn handle(&self, command: C, ctx: RequestContext) -> Result<Response<C::Output>>;
}

/// Handles one query type.
///
/// Queries must not mutate domain state; a handler may read projections or
/// caches directly.
#[async_trait]
pub trait QueryHandler<Q: Query>: Send + Sync {
    /// Execute the query.
    async fn handle(&self, query: Q, ctx: RequestContext) -> Result<Response<Q::Output>>;
}

//! The dispatch seam between callers and handlers.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error::Result;
use crate::request::Request;
use crate::response::Response;

/// Routes a request to the single handler registered for its type.
///
/// This trait names the mediation collaborator without implementing it:
/// the registry or DI wiring that locates handlers belongs to the host
/// application. Callers depend on `Dispatch<R>` (generically or as
/// `&dyn Dispatch<R>`, the trait is object safe per request type) and stay
/// decoupled from the concrete handler.
///
/// An implementation typically delegates straight to the matching
/// [`CommandHandler`](crate::CommandHandler) or
/// [`QueryHandler`](crate::QueryHandler), optionally wrapped in
/// [`Logged`](crate::Logged).
#[async_trait]
pub trait Dispatch<R: Request>: Send + Sync {
    /// Route the request to its handler and return the handler's envelope.
    async fn dispatch(&self, request: R, ctx: RequestContext) -> Result<Response<R::Output>>;
}

//! Logging decorator for handlers.

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::error::{Error, Result};
use crate::handler::{CommandHandler, QueryHandler};
use crate::request::{Command, Query};
use crate::response::Response;

/// Wraps a handler with cancellation checks and structured log events.
///
/// Before invoking the inner handler the decorator checks the context's
/// token and short-circuits with [`Error::Cancelled`] when it has already
/// fired. Outcomes are logged with the request's stable name and the
/// dispatch correlation id: debug for successful envelopes, warn for
/// failed ones.
#[derive(Debug, Clone)]
pub struct Logged<H> {
    inner: H,
}

impl<H> Logged<H> {
    /// Wrap a handler.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    /// Consume the decorator and return the wrapped handler.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

#[async_trait]
impl<C, H> CommandHandler<C> for Logged<H>
where
    C: Command,
    H: CommandHandler<C>,
{
    async fn handle(&self, command: C, ctx: RequestContext) -> Result<Response<C::Output>> {
        if ctx.is_cancelled() {
            return Err(Error::Cancelled { request: C::NAME });
        }
        tracing::debug!(
            request = C::NAME,
            request_id = ctx.request_id(),
            "dispatching command"
        );
        let response = self.inner.handle(command, ctx.clone()).await?;
        record_outcome(C::NAME, ctx.request_id(), &response);
        Ok(response)
    }
}

#[async_trait]
impl<Q, H> QueryHandler<Q> for Logged<H>
where
    Q: Query,
    H: QueryHandler<Q>,
{
    async fn handle(&self, query: Q, ctx: RequestContext) -> Result<Response<Q::Output>> {
        if ctx.is_cancelled() {
            return Err(Error::Cancelled { request: Q::NAME });
        }
        tracing::debug!(
            request = Q::NAME,
            request_id = ctx.request_id(),
            "dispatching query"
        );
        let response = self.inner.handle(query, ctx.clone()).await?;
        record_outcome(Q::NAME, ctx.request_id(), &response);
        Ok(response)
    }
}

fn record_outcome<T>(request: &'static str, request_id: &str, response: &Response<T>) {
    if response.success {
        tracing::debug!(request, request_id, "handler returned success");
    } else {
        tracing::warn!(
            request,
            request_id,
            message = response.message.as_deref().unwrap_or(""),
            "handler returned failure"
        );
    }
}

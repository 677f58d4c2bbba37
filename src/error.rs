//! Error types for request mediation.

use thiserror::Error;

/// Errors surfaced by dispatch plumbing and strict envelope conversion.
///
/// Handlers do not use this type for domain failures — those travel as
/// data inside a [`Response`](crate::Response) with the success flag
/// cleared.
#[derive(Error, Debug)]
pub enum Error {
    /// A failed envelope converted through
    /// [`Response::into_result`](crate::Response::into_result).
    #[error("{message}")]
    Failure {
        /// The envelope's failure message, empty when it carried none.
        message: String,
    },

    /// The request's cancellation token fired before the handler ran.
    #[error("request '{request}' was cancelled")]
    Cancelled {
        /// Stable name of the cancelled request.
        request: &'static str,
    },

    /// A wrapped error from the host application.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for mediation operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display_is_bare_message() {
        let err = Error::Failure {
            message: "Could not update Order.".to_string(),
        };
        assert_eq!(err.to_string(), "Could not update Order.");
    }

    #[test]
    fn test_cancelled_display_names_request() {
        let err = Error::Cancelled {
            request: "CloseOrder",
        };
        let msg = err.to_string();
        assert!(msg.contains("CloseOrder"));
        assert!(msg.contains("cancelled"));
    }

    #[test]
    fn test_other_is_transparent() {
        let io = std::io::Error::other("pipe closed");
        let err: Error = Box::<dyn std::error::Error + Send + Sync>::from(io).into();
        assert_eq!(err.to_string(), "pipe closed");
    }
}

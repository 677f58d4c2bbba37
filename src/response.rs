//! The uniform outcome envelope returned by every handler.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Outcome of one application operation.
///
/// Every handler returns this envelope: a success flag, a human-readable
/// message (populated on failure by convention), and a typed payload.
/// Payload-free operations use the default `Response<()>`.
///
/// The fields are independent on purpose — nothing forbids a successful
/// envelope with a message, or reading the payload of a failed one.
/// Callers that want the strict two-state view convert at the boundary
/// with [`Response::into_result`].
///
/// # Examples
///
/// ```rust
/// use remit::Response;
///
/// let orders = vec!["A-1001".to_string(), "A-1002".to_string()];
/// let response = Response::ok().with_results(orders);
/// assert!(response.success);
/// assert_eq!(response.results.len(), 2);
///
/// let failed: Response = Response::fail("Could not update Order.");
/// assert!(!failed.success);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T = ()> {
    /// Whether the operation succeeded.
    pub success: bool,

    /// Human-readable failure message. Present on failure by convention.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Typed payload produced by the operation.
    pub results: T,
}

impl Response<()> {
    /// A successful, payload-free envelope.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
            results: (),
        }
    }

    /// A failed envelope carrying the given message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            results: (),
        }
    }
}

impl<T> Response<T> {
    /// A successful envelope around a payload.
    pub fn with(results: T) -> Self {
        Self {
            success: true,
            message: None,
            results,
        }
    }

    /// Whether the operation succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Attach a payload, keeping the success flag and message.
    ///
    /// Chaining replaces the previous payload — last write wins.
    pub fn with_results<U>(self, results: U) -> Response<U> {
        Response {
            success: self.success,
            message: self.message,
            results,
        }
    }

    /// Re-type the envelope with the payload left at its default value.
    pub fn with_no_results<U: Default>(self) -> Response<U> {
        self.with_results(U::default())
    }

    /// Transform the payload, keeping the success flag and message.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            success: self.success,
            message: self.message,
            results: f(self.results),
        }
    }

    /// The strict view: the payload on success, [`Error::Failure`]
    /// carrying the message otherwise.
    pub fn into_result(self) -> Result<T, Error> {
        if self.success {
            Ok(self.results)
        } else {
            Err(Error::Failure {
                message: self.message.unwrap_or_default(),
            })
        }
    }

    /// Build an envelope from a fallible computation.
    ///
    /// An `Err` becomes a failed envelope with the error's display text as
    /// the message and the payload at its default value.
    pub fn from_result(result: Result<T, Error>) -> Self
    where
        T: Default,
    {
        match result {
            Ok(results) => Self::with(results),
            Err(err) => Response {
                success: false,
                message: Some(err.to_string()),
                results: T::default(),
            },
        }
    }
}

impl<T: Default> Default for Response<T> {
    fn default() -> Self {
        Self::with(T::default())
    }
}

impl<T: Default> From<Result<T, Error>> for Response<T> {
    fn from(result: Result<T, Error>) -> Self {
        Self::from_result(result)
    }
}

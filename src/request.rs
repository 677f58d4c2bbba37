//! Request markers and the operation grouping macros.
//!
//! A request is a plain data record handed to exactly one handler — no
//! behavior, no validation of its own. The [`Command`] and [`Query`]
//! markers split the vocabulary CQRS-style: commands mutate state, queries
//! only read it.
//!
//! The [`command!`](crate::command) and [`query!`](crate::query) macros
//! keep a request's record, output type, and marker wiring declared in one
//! place, mirroring the convention of grouping an operation's pieces under
//! a single construct.

/// A unit of application logic: plain data handed to exactly one handler.
pub trait Request: Send + 'static {
    /// What a successful handler produces for this request.
    type Output: Send;

    /// Stable name used in logs and traces.
    ///
    /// Keep this a literal: renaming the type must not silently rename its
    /// telemetry, so it is never derived from `type_name`.
    const NAME: &'static str;
}

/// Marker for state-mutating requests.
pub trait Command: Request {}

/// Marker for read-only requests.
pub trait Query: Request {}

/// Declare a command record together with its trait wiring.
///
/// Expands to the plain request struct, its [`Request`] impl (output type
/// and stable name), and the [`Command`] marker.
///
/// # Examples
///
/// ```rust
/// use remit::{command, Request};
///
/// command! {
///     /// Place a new order for a trader.
///     PlaceOrder { trader_id: u64, quantity: u32 } -> u64
/// }
///
/// assert_eq!(PlaceOrder::NAME, "PlaceOrder");
/// ```
#[macro_export]
macro_rules! command {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$fmeta:meta])* $field:ident: $ty:ty),* $(,)? } -> $output:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $($(#[$fmeta])* pub $field: $ty),*
        }

        impl $crate::Request for $name {
            type Output = $output;
            const NAME: &'static str = stringify!($name);
        }

        impl $crate::Command for $name {}
    };
}

/// Declare a query record together with its trait wiring.
///
/// Same shape as [`command!`](crate::command), but marks the request as a
/// read-only [`Query`].
#[macro_export]
macro_rules! query {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$fmeta:meta])* $field:ident: $ty:ty),* $(,)? } -> $output:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $($(#[$fmeta])* pub $field: $ty),*
        }

        impl $crate::Request for $name {
            type Output = $output;
            const NAME: &'static str = stringify!($name);
        }

        impl $crate::Query for $name {}
    };
}

#[cfg(test)]
mod tests {
    use crate::Request;

    command! {
        /// Heartbeat with no fields.
        Ping {} -> ()
    }

    query! {
        GetOrderCount { trader_id: u64 } -> usize
    }

    #[test]
    fn test_macro_sets_stable_name() {
        assert_eq!(Ping::NAME, "Ping");
        assert_eq!(GetOrderCount::NAME, "GetOrderCount");
    }

    #[test]
    fn test_generated_record_is_plain_data() {
        let query = GetOrderCount { trader_id: 7 };
        assert_eq!(query.clone(), query);
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"trader_id":7}"#);
    }
}

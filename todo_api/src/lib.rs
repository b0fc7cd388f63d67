//! Client for the jsonplaceholder todo service.
//!
//! Every call resolves to an [`Outcome`]: either the decoded payload or one
//! [`ApiError`] from a closed taxonomy. Transport and decoding failures are
//! classified in a single place ([`classify`]) and never escape as panics or
//! raw transport errors.

mod classify;
mod client;
mod errors;
mod outcome;
pub mod transport;
pub mod types;
pub use self::classify::{classify, CallError, Endpoint};
pub use self::client::{TodoApiClient, BASE_ENDPOINT};
pub use self::errors::{ApiError, FailureDetail};
pub use self::outcome::Outcome;
pub use self::transport::{HttpTransport, Transport, TransportError, TransportResponse};
pub use self::types::Task;

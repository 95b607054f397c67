//! Request/response boundary.
//!
//! Transport-agnostic synchronous handlers, one per calculation. Each
//! endpoint module defines a serde `Request`/`Response` pair with the wire
//! field names clients send, a `handle` function that parses a JSON
//! payload, and a `calculate` function over the already-parsed request.
//!
//! Responsibilities split the same way on every endpoint:
//!
//! - **This layer** parses payloads, validates parameter types and ranges
//!   (rejecting out-of-domain values before a calculator ever runs), maps
//!   calculator-reported degenerate configurations to status-coded
//!   failures, and serializes quantities back to plain numbers.
//! - **The calculators** ([`crate::models`]) only ever see inputs that
//!   satisfy their documented preconditions.
//!
//! Handlers are plain functions: no transport, no shared state, and no
//! synchronization. Serving them concurrently is trivially safe.

pub mod error;
pub mod exchanger;
pub mod fin;
pub mod report;
pub mod wall;

pub use error::{ApiError, ApiResult};

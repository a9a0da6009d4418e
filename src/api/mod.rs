//! Product catalog API.
//!
//! Turns a [`ProductQuery`] into exactly one HTTP request and validates the
//! page that comes back.
//!
//! ```text
//! ProductQuery ──→ build_request ──→ GET ──→ PageResult::from_json
//! ```

mod client;
mod error;
mod query;
mod types;

pub use client::ProductApi;
pub use error::{ClientError, FetchError, FALLBACK_MESSAGE};
pub use query::{build_request, Endpoint, ProductQuery, RequestSpec};
pub use types::{PageResult, Record};

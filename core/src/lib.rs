//! Client for the Pinboard bookmark service's v1 HTTP API.
//!
//! # Overview
//! `PinboardClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network (host-does-IO pattern). `Session`
//! drives those builders through a `Transport` and exposes the operations as
//! futures: log in, list bookmarks, add a bookmark, delete a bookmark, and a
//! generic authenticated request.
//!
//! # Design
//! - Every call is one GET round-trip; the URL carries all parameters plus
//!   `auth_token=<username>:<token>` and `format=json`.
//! - The token is the only mutable state and only a successful login sets it.
//! - No retries: a 429 reaches the caller as `ApiError::RateLimited`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod session;
pub mod transport;
pub mod types;

pub use client::PinboardClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::QueryParam;
pub use session::Session;
pub use transport::{Transport, UreqTransport};
pub use types::{ApiResponse, Post, ResultCode};

//! Served mode: axum HTTP server
//!
//! Exposes the corpus and every derived structure as JSON endpoints and
//! serves the embedded dashboard page. The router is built over an
//! `Arc<Corpus>`; the corpus is immutable so no locking is needed.

pub mod handler;
pub mod server;

pub use server::{router, HttpServer, ServerConfig};

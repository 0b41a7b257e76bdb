//! Shadematch Server - HTTP REST API for foundation shade matching
//!
//! This crate exposes the `matcher` core over HTTP. The browser client
//! samples a pixel from an uploaded photo and posts its color here; the
//! server answers with the ranked shade recommendation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `GET /api/metadata` - Version, uptime and catalog size
//! - `GET /api/shades` - The shade catalog
//! - `POST /api/foundation-match` - Match `{"rgb": [r, g, b]}`
//!
//! Error responses always have the shape `{"error": "<message>"}`:
//! 400 for bad RGB input, 404 for unknown routes, 405 for a wrong method,
//! 408 when a request runs past the timeout, 413 for an oversized body and
//! 500 for anything else.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{boundary_layers, build_router, start_server};
pub use state::ServerState;

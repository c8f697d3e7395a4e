//! carelist server - HTTP REST API for the healthcare professional directory
//!
//! This crate exposes the read-only directory queries over HTTP. It supports:
//!
//! - **Listing**: all professionals, optionally filtered by specialty
//!   (partial, accent-insensitive) and availability
//! - **Lookup**: one professional by id
//! - **Search**: free text over names and/or specialties
//! - **Aggregates**: specialty head counts and directory statistics
//! - **Health & Metrics**: liveness/readiness probes and Prometheus metrics
//!
//! # Features
//!
//! - **Middleware**: compression, CORS, request ID tracking, structured logging,
//!   timeouts, and panic-to-500 conversion
//! - **Configuration**: environment variable and file-based configuration
//! - **Hot reload**: SIGHUP swaps in a freshly loaded dataset atomically
//! - **Graceful Shutdown**: proper signal handling for production deployments
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
//! - `GET /professionals?specialty=&available=` - Filtered listing
//! - `GET /professionals/{id}` - Professional by id
//! - `GET /specialties` - Specialties with head counts
//! - `GET /search?q=&type=` - Search by name and/or specialty
//! - `GET /statistics` - Directory statistics
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;

//! # Item Registry HTTP Server Module
//!
//! Combines the endpoint routers into a single Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/items` - List and create items
//! - `/items/{id}` - Fetch and delete a single item

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;

//! item-registry - A minimal in-memory item registry served over HTTP
//!
//! Items are created, listed, fetched and deleted through a small REST API
//! with JSON or YAML output and `id`/`timestamp` ordering.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod store;

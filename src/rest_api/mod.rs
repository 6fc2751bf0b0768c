//! # Items REST API Module
//!
//! HTTP endpoints for creating, listing, fetching and deleting items, with
//! query validation and JSON/YAML response encoding.

pub mod errors;
pub mod parser;
pub mod response;
pub mod server;

pub use errors::{RestError, RestResult};
pub use parser::QueryParams;
pub use response::{Encoded, Format};
pub use server::{ItemsState, RestServer};

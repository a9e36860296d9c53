//! Remote file retrieval.

pub mod http;

pub use http::{partial_path, HttpFetcher};

//! HTTP client for reading the summary from a running server.

pub mod http;

pub use http::SummaryClient;

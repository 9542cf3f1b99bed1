//! HTTP transport shell around the scout pipeline.
pub mod gateway_server;

pub use gateway_server::*;

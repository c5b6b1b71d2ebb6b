//! Outpost - Minimal HTTP/1.0 Server
//!
//! Core library: request parsing, regex routing, response serialization.

pub mod config;
pub mod http;
pub mod router;
pub mod server;

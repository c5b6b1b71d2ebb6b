//! HTTP/1.0 protocol implementation.
//!
//! One request is served per connection; there is no keep-alive.
//!
//! # Architecture
//!
//! - **`line`**: extracts LF-terminated lines from the byte stream
//! - **`parser`**: parses the request line, headers and body into a `Request`
//! - **`request`**: parsed request representation
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//! - **`headers`**: insertion-ordered header map shared by both sides
//! - **`pages`**: built-in 404/500 error pages and the provider seam
//! - **`connection`**: orchestrates parse → route → write for one connection
//!
//! # Per-connection flow
//!
//! ```text
//!   ┌─────────────┐      ┌─────────────┐      ┌─────────────┐
//!   │   Parsing   │ ───▶ │   Routing   │ ───▶ │   Writing   │
//!   └─────────────┘      └─────────────┘      └─────────────┘
//!     parse error:         404/405/500          response sent,
//!     drop connection,     become normal        connection
//!     send nothing         responses            closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use outpost::http::connection::Connection;
//! use outpost::router::Router;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut router = Router::new();
//!     router.route("^/hello$", "GET", |_req| {
//!         Ok(outpost::http::response::Response::ok("hi"))
//!     })?;
//!     let router = Arc::new(router);
//!
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let router = router.clone();
//!         tokio::spawn(async move {
//!             let conn = Connection::new(socket, router, None);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod headers;
pub mod line;
pub mod pages;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

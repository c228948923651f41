//! rimo - Minimal asynchronous one-shot HTTP server
//!
//! Serves a fixed route set (request counter, wall-clock time, a static
//! JSON echo) with one request per connection and a hard per-connection
//! deadline.

pub mod config;
pub mod error;
pub mod http;
pub mod router;
pub mod server;
pub mod state;

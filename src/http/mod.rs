//! HTTP protocol implementation.
//!
//! One request per connection: the server parses a single HTTP/1.x
//! request, writes one response and closes. A per-connection deadline
//! races the whole exchange and aborts the socket when it fires.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection lifecycle state machine
//! - **`deadline`**: one-shot cancellable timer raced against the I/O
//! - **`parser`**: parses incoming requests from byte buffers
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Started   │ ← Arm the deadline
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for a complete request
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Routing   │ ← Build the response (synchronous)
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Writing   │ ← Send response, half-close, cancel deadline
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Closed    │
//!        └─────────────┘
//!
//! A fired deadline or any parse/I-O error moves the connection to the
//! terminal Aborted state from wherever it currently is.
//! ```

pub mod connection;
pub mod deadline;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

use std::sync::Arc;
use std::time::Duration;

use bytes::{Buf, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::error::ServerError;
use crate::http::deadline::Deadline;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::router;
use crate::state::ServerState;

/// Ceiling on buffered request bytes. A request still incomplete at
/// this size aborts the connection.
const MAX_REQUEST_BYTES: usize = 8192;

/// One accepted connection, driven through a single request/response
/// exchange and then closed.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    state: ConnectionState,
    server_state: Arc<ServerState>,
    timeout: Duration,
}

pub enum ConnectionState {
    Started,
    Reading,
    Routing(Request),
    Writing(ResponseWriter),
    Closed,
    Aborted,
}

impl Connection {
    pub fn new(stream: TcpStream, server_state: Arc<ServerState>, timeout: Duration) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(MAX_REQUEST_BYTES),
            state: ConnectionState::Started,
            server_state,
            timeout,
        }
    }

    /// Drives the connection through its lifecycle:
    /// Started → Reading → Routing → Writing → Closed, with Aborted
    /// reachable from any of them.
    ///
    /// The deadline armed at the start covers every stage. It is raced
    /// against each pending read and write; when it wins, the losing
    /// I/O future is dropped before we touch the connection again, and
    /// the socket itself goes down with the `Connection` value. After a
    /// successful write the deadline is cancelled so it cannot fire
    /// against a finished exchange.
    ///
    /// Errors returned here are local to this connection; the listener
    /// only logs them.
    pub async fn run(&mut self) -> Result<(), ServerError> {
        let mut deadline = Deadline::arm(self.timeout);

        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Started => {
                    self.state = ConnectionState::Reading;
                }

                ConnectionState::Reading => {
                    let read = tokio::select! {
                        res = Self::read_request(&mut self.stream, &mut self.buffer) => Some(res),
                        _ = deadline.expired() => None,
                    };

                    match read {
                        Some(Ok(request)) => {
                            self.state = ConnectionState::Routing(request);
                        }
                        Some(Err(e)) => return Err(self.abort(e)),
                        None => return Err(self.abort(ServerError::Timeout)),
                    }
                }

                ConnectionState::Routing(request) => {
                    // Synchronous and non-blocking; the deadline can only
                    // interrupt at the I/O suspension points around it.
                    let response = router::route(&request, &self.server_state);
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(mut writer) => {
                    let written = tokio::select! {
                        res = writer.write_to_stream(&mut self.stream) => Some(res),
                        _ = deadline.expired() => None,
                    };

                    match written {
                        Some(Ok(())) => {}
                        Some(Err(e)) => return Err(self.abort(e.into())),
                        None => return Err(self.abort(ServerError::Timeout)),
                    }

                    // Half-close the send direction so the peer can
                    // finish reading the response before full closure.
                    // Still under the deadline: a stalled shutdown is
                    // cut off like a stalled read or write.
                    let flushed = tokio::select! {
                        res = self.stream.shutdown() => Some(res),
                        _ = deadline.expired() => None,
                    };

                    match flushed {
                        Some(Ok(())) => {}
                        Some(Err(e)) => return Err(self.abort(e.into())),
                        None => return Err(self.abort(ServerError::Timeout)),
                    }

                    deadline.cancel();
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed | ConnectionState::Aborted => break,
            }
        }

        Ok(())
    }

    /// Reads from the socket until the buffer holds one complete
    /// request. End-of-stream before a full request is an abort, as is
    /// any malformed byte sequence or a request still incomplete past
    /// [`MAX_REQUEST_BYTES`]; none of these are retried.
    async fn read_request(
        stream: &mut TcpStream,
        buffer: &mut BytesMut,
    ) -> Result<Request, ServerError> {
        loop {
            // Try parsing whatever we already have.
            match parse_http_request(buffer) {
                Ok((request, consumed)) => {
                    buffer.advance(consumed);
                    return Ok(request);
                }

                Err(ParseError::Incomplete) => {
                    // Prevent unbounded buffer growth while the client
                    // keeps sending bytes that never complete a request.
                    if buffer.len() >= MAX_REQUEST_BYTES {
                        return Err(ParseError::RequestTooLarge.into());
                    }
                    // Otherwise fall through to read more data.
                }

                Err(e) => return Err(e.into()),
            }

            let n = stream.read_buf(buffer).await?;

            if n == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "client closed before sending a complete request",
                )
                .into());
            }
        }
    }

    fn abort(&mut self, err: ServerError) -> ServerError {
        self.state = ConnectionState::Aborted;
        err
    }
}

use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid request line")]
    InvalidRequest,
    #[error("invalid header line")]
    InvalidHeader,
    #[error("invalid Content-Length value")]
    InvalidContentLength,
    /// The request grew past the connection's buffer ceiling before it
    /// was complete. Raised by the read loop, not the parser itself.
    #[error("request too large")]
    RequestTooLarge,
    /// Not an error in the malformed sense: the buffer simply does not
    /// yet hold a complete request and the caller must read more bytes.
    #[error("incomplete request")]
    Incomplete,
}

/// Attempts to parse one complete HTTP/1.x request from `buf`.
///
/// On success returns the request and the number of bytes consumed so
/// the caller can drain its buffer. `Err(Incomplete)` asks for more
/// bytes; every other error means the bytes are irrecoverably malformed.
/// Never blocks and has no side effects on `buf`.
///
/// Unknown method tokens are not rejected here: they parse as
/// [`Method::Other`] so the router can answer 400 naming the method.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str = std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let (method, path, version) = parse_request_line(request_line)?;

    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.trim().to_string(), value.trim().to_string());
    }

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("Content-Length"))
        .map(|(_, v)| v.parse::<usize>().map_err(|_| ParseError::InvalidContentLength))
        .transpose()?
        .unwrap_or(0);

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = body_bytes[..content_length].to_vec();

    let request = Request {
        method,
        path,
        version,
        headers,
        body,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

/// Splits the request line into method, target and version.
///
/// A line with no target (`GET HTTP/1.1`) is accepted with an empty
/// path; the router maps it to 404 like any unknown target.
fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
    let mut parts = line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let second = parts.next().ok_or(ParseError::InvalidRequest)?;

    let (path, version) = match parts.next() {
        Some(version) => (second.to_string(), version.to_string()),
        None if second.starts_with("HTTP/") => (String::new(), second.to_string()),
        None => return Err(ParseError::InvalidRequest),
    };

    Ok((Method::from_token(method_str), path, version))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

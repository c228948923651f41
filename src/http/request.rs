use std::collections::HashMap;
use std::fmt;

/// HTTP request methods.
///
/// The server only routes GET and POST. Anything else still parses,
/// carrying its literal token so the 400 response can name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    /// Any other method token, kept verbatim from the request line.
    Other(String),
}

impl Method {
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            other => Method::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
            Method::Other(name) => f.write_str(name),
        }
    }
}

/// A parsed HTTP request.
///
/// Immutable once produced by the parser; owned by the connection
/// handling it.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Request target, e.g. "/count". May be empty if the request line
    /// carried no target.
    pub path: String,
    /// HTTP version string, typically "HTTP/1.1".
    pub version: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Request {
    /// Looks up a header value by name, case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

}

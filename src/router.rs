//! Pure request-to-response mapping.
//!
//! The route table is fixed: `GET /count`, `GET /time`, a 404 for every
//! other GET target, a static JSON echo for POST, and a 400 naming the
//! method for anything else. The counter and clock reads are the only
//! stateful dependencies, both reached through [`ServerState`].

use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::state::ServerState;

const SERVER_NAME: &str = "rimo";

/// Maps a parsed request to its response. Pure apart from the counter
/// increment on `GET /count`; never blocks.
pub fn route(request: &Request, state: &ServerState) -> Response {
    match &request.method {
        Method::Get => route_get(request, state),

        Method::Post => ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/json")
            .body(static_echo_body())
            .build(),

        Method::Other(name) => ResponseBuilder::new(StatusCode::BadRequest)
            .header("Content-Type", "text/plain")
            .body(format!("Invalid request-method '{name}'"))
            .build(),
    }
}

/// GET dispatch. An empty target falls through to 404 like any
/// unrecognized path.
fn route_get(request: &Request, state: &ServerState) -> Response {
    match request.path.as_str() {
        "/count" => ResponseBuilder::new(StatusCode::Ok)
            .header("Server", SERVER_NAME)
            .header("Content-Type", "text/html")
            .body(count_page(state.next_request_count()))
            .build(),

        "/time" => ResponseBuilder::new(StatusCode::Ok)
            .header("Server", SERVER_NAME)
            .header("Content-Type", "text/html")
            .body(time_page(state.unix_time()))
            .build(),

        _ => ResponseBuilder::new(StatusCode::NotFound)
            .header("Server", SERVER_NAME)
            .header("Content-Type", "text/plain")
            .body("File not found\r\n")
            .build(),
    }
}

fn count_page(count: u64) -> String {
    format!(
        "<html>\n\
         <head><title>Request count</title></head>\n\
         <body>\n\
         <h1>Request count</h1>\n\
         <p>There have been {count} requests so far.</p>\n\
         </body>\n\
         </html>\n"
    )
}

fn time_page(seconds: u64) -> String {
    format!(
        "<html>\n\
         <head><title>Current time</title></head>\n\
         <body>\n\
         <h1>Current time</h1>\n\
         <p>The current time is {seconds} seconds since the epoch.</p>\n\
         </body>\n\
         </html>\n"
    )
}

fn static_echo_body() -> Vec<u8> {
    serde_json::json!({ "devesh": "gadha" }).to_string().into_bytes()
}

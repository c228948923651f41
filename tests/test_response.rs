use rimo::http::response::{ResponseBuilder, StatusCode};
use rimo::http::writer::serialize_response;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_builder_sets_content_length_automatically() {
    let resp = ResponseBuilder::new(StatusCode::Ok).body("hello").build();

    assert_eq!(resp.headers.get("Content-Length").unwrap(), "5");
    assert_eq!(resp.content_length(), 5);
}

#[test]
fn test_builder_keeps_explicit_content_length() {
    let resp = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "99")
        .body("hello")
        .build();

    assert_eq!(resp.headers.get("Content-Length").unwrap(), "99");
}

#[test]
fn test_builder_empty_body_has_zero_content_length() {
    let resp = ResponseBuilder::new(StatusCode::NotFound).build();

    assert_eq!(resp.headers.get("Content-Length").unwrap(), "0");
}

#[test]
fn test_serialized_response_status_line() {
    let resp = ResponseBuilder::new(StatusCode::NotFound)
        .body("File not found\r\n")
        .build();

    let wire = serialize_response(&resp);
    let text = String::from_utf8(wire).unwrap();

    assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(text.ends_with("\r\n\r\nFile not found\r\n"));
}

#[test]
fn test_serialized_response_declares_connection_close() {
    let resp = ResponseBuilder::new(StatusCode::Ok).body("x").build();

    let wire = serialize_response(&resp);
    let text = String::from_utf8(wire).unwrap();

    assert!(text.contains("Connection: close\r\n"));
}

#[test]
fn test_serialized_response_carries_headers() {
    let resp = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/html")
        .body("<html></html>")
        .build();

    let wire = serialize_response(&resp);
    let text = String::from_utf8(wire).unwrap();

    assert!(text.contains("Content-Type: text/html\r\n"));
    assert!(text.contains("Content-Length: 13\r\n"));
}

#[test]
fn test_responses_default_to_one_shot() {
    let resp = ResponseBuilder::new(StatusCode::Ok).build();

    assert!(!resp.keep_alive);
}

//! Assertion helpers for tests.

use axum::http::StatusCode;
use image::GenericImageView;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a success response carrying an image with the expected content
/// type and pixel dimensions.
pub fn assert_image(response: &TestResponse, content_type: &str, width: u32, height: u32) {
    assert_ok(response);
    assert_eq!(
        response.content_type(),
        Some(content_type),
        "Unexpected Content-Type"
    );

    let content_length = response
        .headers
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    assert_eq!(content_length, Some(response.body.len()));

    let image = image::load_from_memory(&response.body).expect("Body is not a decodable image");
    assert_eq!(
        (image.width(), image.height()),
        (width, height),
        "Unexpected output dimensions"
    );
}

/// Assert an error response with the JSON `{status, error}` envelope,
/// whose message mentions `needle`.
pub fn assert_error(response: &TestResponse, expected: StatusCode, needle: &str) {
    assert_status(response, expected);

    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(expected.as_u16() as u64));

    let message = json["error"].as_str().unwrap_or_default();
    assert!(
        message.contains(needle),
        "Expected error mentioning '{needle}', got: {message}"
    );
}

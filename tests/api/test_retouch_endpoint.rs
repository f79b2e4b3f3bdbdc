// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Retouch endpoint tests for POST /retouch
//!
//! These tests drive the full router and verify that:
//! - Valid uploads come back as JPEG with the same dimensions
//! - Failures are reported as `{"error": ...}` without crashing
//! - Strict status codes map each failure kind to its own status
//! - Output is stable for identical input

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use image::{ColorType, DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use retouch_node::{
    api::{create_app, AppState, ErrorResponse},
    config::RetouchConfig,
};
use std::io::Cursor;
use tower::util::ServiceExt;

const BOUNDARY: &str = "retouch-test-boundary";

/// Helper: Encode a synthetic portrait-sized image
fn encode_image(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

fn portrait_jpeg(w: u32, h: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(w, h, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    encode_image(DynamicImage::ImageRgb8(img), ImageFormat::Jpeg)
}

/// Helper: Build a multipart body with one field
fn multipart_request(field: &str, filename: Option<&str>, data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    match filename {
        Some(name) => body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field, name
            )
            .as_bytes(),
        ),
        None => body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n", field).as_bytes(),
        ),
    }
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/retouch")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn app_with(config: RetouchConfig) -> Router {
    create_app(AppState::new(config))
}

fn default_app() -> Router {
    create_app(AppState::new_for_test())
}

fn strict_app() -> Router {
    app_with(RetouchConfig {
        strict_status_codes: true,
        ..Default::default()
    })
}

fn content_type(response: &Response) -> String {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn error_body(response: Response) -> ErrorResponse {
    serde_json::from_slice(&body_bytes(response).await).expect("error body should be JSON")
}

#[cfg(test)]
mod retouch_endpoint_tests {
    use super::*;

    // =============================================================================
    // Success Path
    // =============================================================================

    /// Scenario: 512x512 JPEG portrait comes back as a 512x512 JPEG
    #[tokio::test]
    async fn test_retouch_512_jpeg_portrait() {
        let request = multipart_request("file", Some("portrait.jpg"), &portrait_jpeg(512, 512));

        let response = default_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "image/jpeg");

        let bytes = body_bytes(response).await;
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let output = image::load_from_memory(&bytes).unwrap();
        assert_eq!((output.width(), output.height()), (512, 512));
    }

    /// PNG input is accepted and returned as JPEG of the same size
    #[tokio::test]
    async fn test_retouch_png_input() {
        let img = RgbImage::from_pixel(40, 24, Rgb([180, 140, 120]));
        let png = encode_image(DynamicImage::ImageRgb8(img), ImageFormat::Png);

        let response = default_app()
            .oneshot(multipart_request("file", Some("face.png"), &png))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let output = image::load_from_memory(&body_bytes(response).await).unwrap();
        assert_eq!((output.width(), output.height()), (40, 24));
    }

    /// Alpha channel is dropped and the output is 3-channel
    #[tokio::test]
    async fn test_retouch_rgba_input_produces_rgb_output() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([200, 150, 100, 64]));
        let png = encode_image(DynamicImage::ImageRgba8(img), ImageFormat::Png);

        let response = default_app()
            .oneshot(multipart_request("file", Some("layer.png"), &png))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "image/jpeg");
        let output = image::load_from_memory(&body_bytes(response).await).unwrap();
        assert_eq!(output.color(), ColorType::Rgb8);
    }

    /// Identical input bytes give byte-identical output
    #[tokio::test]
    async fn test_retouch_is_deterministic() {
        let input = portrait_jpeg(64, 48);

        let first = default_app()
            .oneshot(multipart_request("file", Some("a.jpg"), &input))
            .await
            .unwrap();
        let second = default_app()
            .oneshot(multipart_request("file", Some("a.jpg"), &input))
            .await
            .unwrap();

        assert_eq!(body_bytes(first).await, body_bytes(second).await);
    }

    // =============================================================================
    // Failure Path (default: status 200 with error payload)
    // =============================================================================

    /// Scenario: 10 garbage bytes give 200 with a non-empty error
    #[tokio::test]
    async fn test_retouch_garbage_payload() {
        let response = default_app()
            .oneshot(multipart_request("file", Some("junk.bin"), b"0123456789"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("application/json"));
        let error = error_body(response).await;
        assert!(!error.error.is_empty());
        assert!(error.error.contains("decode"));
    }

    /// Empty upload yields the error payload, not a crash
    #[tokio::test]
    async fn test_retouch_empty_upload() {
        let response = default_app()
            .oneshot(multipart_request("file", Some("empty.jpg"), b""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(!error_body(response).await.error.is_empty());
    }

    /// Upload larger than the cap is rejected
    #[tokio::test]
    async fn test_retouch_upload_over_cap() {
        let app = app_with(RetouchConfig {
            max_upload_bytes: 1024,
            ..Default::default()
        });
        let response = app
            .oneshot(multipart_request("file", Some("big.jpg"), &vec![0xAB; 4096]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let error = error_body(response).await;
        assert!(error.error.contains("maximum size"));
    }

    /// Mixed sequential calls keep working with no carried-over state
    #[tokio::test]
    async fn test_retouch_repeated_mixed_calls() {
        let app = default_app();
        let good = portrait_jpeg(24, 24);

        for i in 0..10 {
            let request = if i % 2 == 0 {
                multipart_request("file", Some("ok.jpg"), &good)
            } else {
                multipart_request("file", Some("bad.jpg"), b"not an image")
            };

            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            if i % 2 == 0 {
                assert_eq!(content_type(&response), "image/jpeg");
            } else {
                assert!(!error_body(response).await.error.is_empty());
            }
        }
    }

    // =============================================================================
    // Strict Status Codes
    // =============================================================================

    #[tokio::test]
    async fn test_strict_decode_error_is_bad_request() {
        let response = strict_app()
            .oneshot(multipart_request("file", Some("junk.bin"), b"0123456789"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!error_body(response).await.error.is_empty());
    }

    #[tokio::test]
    async fn test_strict_over_cap_is_payload_too_large() {
        let app = app_with(RetouchConfig {
            max_upload_bytes: 1024,
            strict_status_codes: true,
            ..Default::default()
        });
        let response = app
            .oneshot(multipart_request("file", Some("big.jpg"), &vec![0xAB; 4096]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_strict_success_is_still_ok() {
        let response = strict_app()
            .oneshot(multipart_request("file", Some("ok.jpg"), &portrait_jpeg(16, 16)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "image/jpeg");
    }
}

//! Request handlers.
//!
//! Every request to `/advise` or `/api/advise` is one full pipeline run.
//! Handlers only read [`SharedState`]; nothing survives between requests.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::pipeline::PipelineError;
use crate::tts::TtsError;

use super::page;
use super::state::SharedState;

// ---------------------------------------------------------------------------
// Photo upload
// ---------------------------------------------------------------------------

/// The two photos from one submission.  Empty file fields count as missing.
#[derive(Debug, Default)]
struct PhotoPair {
    soil: Option<Vec<u8>>,
    sky: Option<Vec<u8>>,
}

impl PhotoPair {
    fn both(self) -> Option<(Vec<u8>, Vec<u8>)> {
        Some((self.soil?, self.sky?))
    }
}

async fn read_photos(mut multipart: Multipart) -> Result<PhotoPair, MultipartError> {
    let mut photos = PhotoPair::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        let data = field.bytes().await?;
        if data.is_empty() {
            continue;
        }
        match name.as_deref() {
            Some("soil") => photos.soil = Some(data.to_vec()),
            Some("sky") => photos.sky = Some(data.to_vec()),
            other => log::debug!("web: ignoring form field {other:?}"),
        }
    }

    Ok(photos)
}

/// HTTP status for a failed run.
fn status_for(err: &PipelineError) -> StatusCode {
    match err {
        PipelineError::Soil(_) | PipelineError::Sky(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::Speech(TtsError::Io(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        PipelineError::Speech(_) => StatusCode::BAD_GATEWAY,
        PipelineError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// ---------------------------------------------------------------------------
// HTML
// ---------------------------------------------------------------------------

/// GET / — the capture form.
pub async fn capture() -> Html<String> {
    Html(page::capture_page())
}

/// POST /advise — run the pipeline and render the result page.
///
/// A submission missing either photo just shows the form again.
pub async fn advise(State(state): State<SharedState>, multipart: Multipart) -> Response {
    let photos = match read_photos(multipart).await {
        Ok(photos) => photos,
        Err(e) => {
            log::warn!("web: malformed upload: {e}");
            return (e.status(), Html(page::error_page(&e.body_text()))).into_response();
        }
    };

    let Some((soil, sky)) = photos.both() else {
        log::debug!("web: waiting for both photos");
        return Html(page::capture_page()).into_response();
    };

    match state.pipeline.run(soil.clone(), sky.clone()).await {
        Ok(report) => {
            log::info!("web: advisory served ({} bytes audio)", report.audio.len());
            Html(page::result_page(&report, &soil, &sky)).into_response()
        }
        Err(e) => {
            log::warn!("web: advisory failed: {e}");
            (status_for(&e), Html(page::error_page(&e.to_string()))).into_response()
        }
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// POST /api/advise — same pipeline, JSON in the response.
pub async fn api_advise(State(state): State<SharedState>, multipart: Multipart) -> Response {
    let photos = match read_photos(multipart).await {
        Ok(photos) => photos,
        Err(e) => return json_error(e.status(), &e.body_text()),
    };

    let Some((soil, sky)) = photos.both() else {
        return json_error(
            StatusCode::BAD_REQUEST,
            "both `soil` and `sky` photos are required",
        );
    };

    match state.pipeline.run(soil, sky).await {
        Ok(report) => Json(report.to_json()).into_response(),
        Err(e) => {
            log::warn!("web: api advisory failed: {e}");
            json_error(status_for(&e), &e.to_string())
        }
    }
}

fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_seconds: u64,
    pub version: &'static str,
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request},
        Router,
    };
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::pipeline::AdvisoryPipeline;
    use crate::tts::MockSynthesizer;
    use crate::web::{router, AppState};

    const BOUNDARY: &str = "krishi-test-boundary";

    fn solid_png(color: [u8; 3]) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb(color)));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).expect("encode png");
        buf.into_inner()
    }

    fn app(mock: MockSynthesizer) -> Router {
        app_with_config(AppConfig::default(), mock)
    }

    fn app_with_config(config: AppConfig, mock: MockSynthesizer) -> Router {
        let pipeline = AdvisoryPipeline::new(Arc::new(mock), "hi");
        router(Arc::new(AppState::new(config, pipeline)))
    }

    fn multipart_request(uri: &str, parts: &[(&str, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, data) in parts {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{name}.png\"\r\nContent-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn root_serves_capture_form() {
        let response = app(MockSynthesizer::ok(b"mp3"))
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Step 1"));
        assert!(html.contains("Step 2"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app(MockSynthesizer::ok(b"mp3"))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn advise_renders_result_page() {
        let soil = solid_png([60, 220, 80]);
        let sky = solid_png([110, 160, 235]);
        let request = multipart_request("/advise", &[("soil", &soil[..]), ("sky", &sky[..])]);

        let response = app(MockSynthesizer::ok(b"ID3")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Moist (Bright Green/Blue-Green)"));
        assert!(html.contains("Cirrus (Thin, White Clouds)"));
        assert!(html.contains("चक्रवात"));
        assert!(html.contains("data:audio/mpeg;base64,SUQz"));
        assert_eq!(html.matches("data:image/png;base64,").count(), 2);
    }

    #[tokio::test]
    async fn advise_with_one_photo_shows_form_again() {
        let soil = solid_png([60, 220, 80]);
        let request = multipart_request("/advise", &[("soil", &soil[..])]);

        let response = app(MockSynthesizer::ok(b"mp3")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("action=\"/advise\""));
        assert!(!html.contains("किसान सलाह"));
    }

    #[tokio::test]
    async fn advise_treats_empty_file_field_as_missing() {
        let soil = solid_png([60, 220, 80]);
        let request = multipart_request("/advise", &[("soil", &soil[..]), ("sky", &b""[..])]);

        let response = app(MockSynthesizer::ok(b"mp3")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("action=\"/advise\""));
    }

    #[tokio::test]
    async fn advise_reports_speech_failure_as_bad_gateway() {
        let soil = solid_png([60, 220, 80]);
        let sky = solid_png([110, 160, 235]);
        let request = multipart_request("/advise", &[("soil", &soil[..]), ("sky", &sky[..])]);

        let response = app(MockSynthesizer::failing("service unreachable"))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(body_text(response).await.contains("service unreachable"));
    }

    #[tokio::test]
    async fn advise_rejects_undecodable_photo() {
        let sky = solid_png([110, 160, 235]);
        let request = multipart_request("/advise", &[("soil", &b"garbage"[..]), ("sky", &sky[..])]);

        let response = app(MockSynthesizer::ok(b"mp3")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_text(response).await.contains("soil photo rejected"));
    }

    #[tokio::test]
    async fn api_advise_returns_json() {
        let soil = solid_png([92, 64, 51]);
        let sky = solid_png([90, 190, 120]);
        let request = multipart_request("/api/advise", &[("soil", &soil[..]), ("sky", &sky[..])]);

        let response = app(MockSynthesizer::ok(b"ID3")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["moisture"], "Dry");
        assert_eq!(json["cloud"], "Cumulus");
        assert_eq!(json["audio_base64"], "SUQz");
        assert!(json["advice"].as_str().unwrap().contains("सिंचाई"));
    }

    #[tokio::test]
    async fn api_advise_requires_both_photos() {
        let sky = solid_png([90, 190, 120]);
        let request = multipart_request("/api/advise", &[("sky", &sky[..])]);

        let response = app(MockSynthesizer::ok(b"mp3")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(json["error"].as_str().unwrap().contains("required"));
    }

    #[tokio::test]
    async fn oversized_upload_is_payload_too_large() {
        let mut config = AppConfig::default();
        config.server.max_upload_mb = 1;
        let big = vec![0u8; 2 * 1024 * 1024];
        let sky = solid_png([110, 160, 235]);

        let response = app_with_config(config.clone(), MockSynthesizer::ok(b"mp3"))
            .oneshot(multipart_request("/advise", &[("soil", &big[..]), ("sky", &sky[..])]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let response = app_with_config(config, MockSynthesizer::ok(b"mp3"))
            .oneshot(multipart_request("/api/advise", &[("soil", &big[..]), ("sky", &sky[..])]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(json["error"].is_string());
    }

    #[test]
    fn status_mapping() {
        use crate::vision::VisionError;

        assert_eq!(
            status_for(&PipelineError::Sky(VisionError::EmptyImage { width: 0, height: 0 })),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(&PipelineError::Speech(TtsError::Timeout)),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&PipelineError::Speech(TtsError::Io(std::io::Error::other("disk")))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&PipelineError::Internal("join".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

use aerodetect_core::backend::{HttpBackend, PredictionBackend};
use aerodetect_core::dispatch::{dispatch, PredictionRequest, SubmissionOutcome};
use aerodetect_core::error::PredictionError;
use aerodetect_core::media::SelectedFile;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_string_contains, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn png(name: &str) -> SelectedFile {
    SelectedFile::new(name, "image/png", b"png-bytes".to_vec())
}

#[tokio::test]
async fn images_posted_as_repeated_files_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/images/"))
        .and(body_string_contains("name=\"files\"; filename=\"a.png\""))
        .and(body_string_contains("name=\"files\"; filename=\"b.png\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "result_images": ["R0", "R1"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&server.uri()).expect("valid backend");
    let request = PredictionRequest::Images(vec![png("a.png"), png("b.png")]);

    let outcome = dispatch(&backend, &request).await;
    assert_eq!(
        outcome,
        SubmissionOutcome::ImagesReady {
            results: vec![Some("R0".into()), Some("R1".into())]
        }
    );
}

#[tokio::test]
async fn video_posted_as_video_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/video/"))
        .and(body_string_contains("name=\"video\"; filename=\"clip.mp4\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "video_url": "/results/clip.mp4" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&server.uri()).expect("valid backend");
    let video = SelectedFile::new("clip.mp4", "video/mp4", b"mp4-bytes".to_vec());

    let outcome = dispatch(&backend, &PredictionRequest::Video(video)).await;
    let expected = Url::parse(&format!("{}/results/clip.mp4", server.uri())).unwrap();
    assert_eq!(outcome, SubmissionOutcome::VideoReady { url: expected });
}

#[tokio::test]
async fn file_contents_sent_with_known_length() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/video/"))
        .and(header_exists("content-length"))
        .and(body_string_contains("mp4-frame-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "video_url": "/r.mp4" })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&server.uri()).expect("valid backend");
    let video = SelectedFile::new("clip.mp4", "video/mp4", b"mp4-frame-data".to_vec());

    let outcome = dispatch(&backend, &PredictionRequest::Video(video)).await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn video_status_error_carries_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/video/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&server.uri()).expect("valid backend");
    let video = SelectedFile::new("clip.mp4", "video/mp4", vec![1u8]);

    let outcome = dispatch(&backend, &PredictionRequest::Video(video)).await;
    assert_eq!(
        outcome,
        SubmissionOutcome::Failed(PredictionError::Status {
            status: 500,
            message: "boom".into()
        })
    );
}

#[tokio::test]
async fn images_route_ignores_status_without_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/images/"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "result_images": ["R0"] })))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&server.uri()).expect("valid backend");
    let outcome = dispatch(&backend, &PredictionRequest::Images(vec![png("a.png")])).await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn non_json_reply_is_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/images/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&server.uri()).expect("valid backend");
    let outcome = dispatch(&backend, &PredictionRequest::Images(vec![png("a.png")])).await;
    assert!(matches!(
        outcome,
        SubmissionOutcome::Failed(PredictionError::Decode(_))
    ));
}

#[tokio::test]
async fn unreachable_server_is_request_failure() {
    // Port 9 (discard) is closed on test hosts
    let backend = HttpBackend::new("http://127.0.0.1:9").expect("valid backend");
    let result = backend.predict_images(&[png("a.png")]).await;
    assert!(matches!(result, Err(PredictionError::Request(_))));
}

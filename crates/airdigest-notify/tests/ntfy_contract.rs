//! ntfy contract tests.
//!
//! Verify the POST shape (path, headers, raw text body) and that failures
//! stop at the dispatch boundary as a logged `false`.

use airdigest_core::DigestConfig;
use airdigest_core::error::DigestError;
use airdigest_notify::NtfyNotifier;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: String) -> DigestConfig {
    DigestConfig {
        topic: "daily-digest".into(),
        server,
        cutoff: "07:00".into(),
        api_base: "http://unused.invalid".into(),
    }
}

#[tokio::test]
async fn test_send_posts_text_with_descriptive_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/daily-digest"))
        .and(header("Title", "NTS Daily Schedule"))
        .and(header("Priority", "default"))
        .and(header("Tags", "radio,music"))
        .and(header(
            "Actions",
            "view, Channel 1, https://www.nts.live/1; view, Channel 2, https://www.nts.live/2",
        ))
        .and(body_string("🎵 sat 01 jun\n\nCHANNEL 1\n  No broadcasts scheduled\n"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let notifier = NtfyNotifier::new(&test_config(mock_server.uri())).unwrap();
    notifier
        .send(
            "🎵 sat 01 jun\n\nCHANNEL 1\n  No broadcasts scheduled\n",
            "NTS Daily Schedule",
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_send_surfaces_http_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/daily-digest"))
        .respond_with(ResponseTemplate::new(429).set_body_string("too many requests"))
        .mount(&mock_server)
        .await;

    let notifier = NtfyNotifier::new(&test_config(mock_server.uri())).unwrap();
    let err = notifier.send("message", "title").await.unwrap_err();

    match err {
        DigestError::Dispatch(reason) => {
            assert!(reason.contains("429"), "reason was: {reason}");
            assert!(reason.contains("too many requests"));
        }
        other => panic!("expected Dispatch error, got: {other}"),
    }
}

#[tokio::test]
async fn test_dispatch_reports_outcome_as_bool() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/daily-digest"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let notifier = NtfyNotifier::new(&test_config(mock_server.uri())).unwrap();
    assert!(notifier.dispatch("message", "title").await);

    // Unreachable server: dispatch swallows the error and reports false.
    let dead = test_config("http://127.0.0.1:1".into());
    let notifier = NtfyNotifier::new(&dead).unwrap();
    assert!(!notifier.dispatch("message", "title").await);
}

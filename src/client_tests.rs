//! Tests for the client façade: validation short-circuit, request
//! construction, and response-status classification.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde::Deserialize;

use crate::card::MessageCard;
use crate::client::{Client, DEFAULT_TIMEOUT, Options};
use crate::error::{HttpError, SendError, ValidationError};
use crate::http::{HttpClient, HttpRequest, HttpResponse};

const WEBHOOK_URL: &str = "https://outlook.office.com/webhook/xxx";

/// Mock transport serving a scripted sequence of responses and
/// recording every request it receives.
#[derive(Debug)]
struct MockTransport {
    responses: std::sync::Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: std::sync::Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockTransport {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses),
            requests: std::sync::Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn status(status: http::StatusCode) -> Self {
        Self::with_body(status, Vec::new())
    }

    fn with_body(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self::new(vec![Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            body,
        ))])
    }

    fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockTransport {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

impl HttpClient for Arc<MockTransport> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

fn test_card() -> MessageCard {
    MessageCard::new().with_text("Hello World")
}

fn client_with(transport: MockTransport) -> Client<MockTransport> {
    Client::with_transport(transport, Options::default())
}

mod options {
    use super::*;

    #[test]
    fn default_is_thirty_seconds_and_quiet() {
        let options = Options::default();
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert!(!options.verbose);
    }

    #[test]
    fn zero_timeout_falls_back_to_default() {
        let client = Client::with_transport(
            MockTransport::status(http::StatusCode::OK),
            Options {
                timeout: Duration::ZERO,
                verbose: false,
            },
        );
        assert_eq!(client.options().timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn explicit_timeout_is_kept() {
        let client = Client::with_transport(
            MockTransport::status(http::StatusCode::OK),
            Options {
                timeout: Duration::from_secs(60),
                verbose: true,
            },
        );
        assert_eq!(client.options().timeout, Duration::from_secs(60));
        assert!(client.options().verbose);
    }
}

mod request_shape {
    use super::*;

    #[tokio::test]
    async fn posts_serialized_card_to_webhook_url() {
        let transport = Arc::new(MockTransport::status(http::StatusCode::OK));
        let client = Client::with_transport(transport.clone(), Options::default());

        client.send(WEBHOOK_URL, &test_card()).await.unwrap();

        let requests = transport.captured_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, http::Method::POST);
        assert_eq!(requests[0].url.as_str(), WEBHOOK_URL);

        let body = String::from_utf8(requests[0].body.clone().unwrap()).unwrap();
        assert!(body.contains("Hello World"));
        assert!(body.contains(r#""@type":"MessageCard""#));
    }

    #[tokio::test]
    async fn sets_json_content_type_with_charset() {
        let transport = Arc::new(MockTransport::status(http::StatusCode::OK));
        let client = Client::with_transport(transport.clone(), Options::default());

        client.send(WEBHOOK_URL, &test_card()).await.unwrap();

        let requests = transport.captured_requests();
        assert_eq!(
            requests[0].headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json;charset=utf-8"
        );
    }

    #[tokio::test]
    async fn verbose_mode_does_not_change_the_request() {
        let quiet = Arc::new(MockTransport::status(http::StatusCode::OK));
        let noisy = Arc::new(MockTransport::status(http::StatusCode::OK));

        Client::with_transport(quiet.clone(), Options::default())
            .send(WEBHOOK_URL, &test_card())
            .await
            .unwrap();
        Client::with_transport(
            noisy.clone(),
            Options {
                verbose: true,
                ..Options::default()
            },
        )
        .send(WEBHOOK_URL, &test_card())
        .await
        .unwrap();

        let a = quiet.captured_requests();
        let b = noisy.captured_requests();
        assert_eq!(a[0].body, b[0].body);
        assert_eq!(a[0].url, b[0].url);
    }
}

mod validation_short_circuit {
    use super::*;

    #[tokio::test]
    async fn empty_url_never_reaches_transport() {
        let transport = Arc::new(MockTransport::status(http::StatusCode::OK));
        let client = Client::with_transport(transport.clone(), Options::default());

        let err = client.send("", &test_card()).await.unwrap_err();

        assert!(matches!(
            err,
            SendError::Validation(ValidationError::UrlParse { .. })
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn unparseable_url_reports_parse_failure() {
        let transport = Arc::new(MockTransport::status(http::StatusCode::OK));
        let client = Client::with_transport(transport.clone(), Options::default());

        let err = client.send("http://", &test_card()).await.unwrap_err();

        assert!(matches!(
            err,
            SendError::Validation(ValidationError::UrlParse { .. })
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn wrong_prefix_reports_mismatch() {
        let transport = Arc::new(MockTransport::status(http::StatusCode::OK));
        let client = Client::with_transport(transport.clone(), Options::default());

        let err = client
            .send("https://example.com/webhook/xxx", &test_card())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SendError::Validation(ValidationError::UrlPrefix { .. })
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn empty_card_never_reaches_transport() {
        let transport = Arc::new(MockTransport::status(http::StatusCode::OK));
        let client = Client::with_transport(transport.clone(), Options::default());

        let err = client
            .send(WEBHOOK_URL, &MessageCard::new())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SendError::Validation(ValidationError::MissingText)
        ));
        assert_eq!(transport.calls(), 0);
    }
}

mod status_classification {
    use super::*;

    #[tokio::test]
    async fn ok_created_and_no_content_are_success() {
        for status in [
            http::StatusCode::OK,
            http::StatusCode::CREATED,
            http::StatusCode::NO_CONTENT,
        ] {
            let client = client_with(MockTransport::status(status));
            let result = client.send(WEBHOOK_URL, &test_card()).await;
            assert!(result.is_ok(), "status {status} should be success");
        }
    }

    #[tokio::test]
    async fn not_found_maps_to_not_found() {
        let client = client_with(MockTransport::status(http::StatusCode::NOT_FOUND));
        let err = client.send(WEBHOOK_URL, &test_card()).await.unwrap_err();
        assert!(matches!(err, SendError::NotFound));
    }

    #[tokio::test]
    async fn unauthorized_and_forbidden_map_to_access_denied() {
        for status in [http::StatusCode::UNAUTHORIZED, http::StatusCode::FORBIDDEN] {
            let client = client_with(MockTransport::status(status));
            let err = client.send(WEBHOOK_URL, &test_card()).await.unwrap_err();
            assert!(
                matches!(err, SendError::UserAccessDenied),
                "status {status} should map to UserAccessDenied"
            );
        }
    }

    #[tokio::test]
    async fn too_many_requests_maps_to_throttle_error() {
        let client = client_with(MockTransport::status(http::StatusCode::TOO_MANY_REQUESTS));
        let err = client.send(WEBHOOK_URL, &test_card()).await.unwrap_err();
        assert!(matches!(err, SendError::TooManyRequests));
    }

    #[tokio::test]
    async fn other_statuses_map_to_unexpected_status_with_code() {
        for (status, code) in [
            (http::StatusCode::BAD_REQUEST, 400),
            (http::StatusCode::INTERNAL_SERVER_ERROR, 500),
            (http::StatusCode::BAD_GATEWAY, 502),
        ] {
            let client = client_with(MockTransport::status(status));
            let err = client.send(WEBHOOK_URL, &test_card()).await.unwrap_err();
            match err {
                SendError::UnexpectedStatus(got) => assert_eq!(got.as_u16(), code),
                other => panic!("expected UnexpectedStatus, got {other:?}"),
            }
        }
    }
}

mod transport_failure {
    use super::*;

    #[tokio::test]
    async fn connection_error_surfaces_as_transport_error() {
        let client = client_with(MockTransport::failing(HttpError::Connection(
            "pling".into(),
        )));

        let err = client.send(WEBHOOK_URL, &test_card()).await.unwrap_err();

        match err {
            SendError::Transport {
                method,
                url,
                source,
            } => {
                assert_eq!(method, http::Method::POST);
                assert_eq!(url, WEBHOOK_URL);
                assert!(matches!(source, HttpError::Connection(_)));
            }
            other => panic!("expected Transport, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn timeout_surfaces_as_transport_error() {
        let client = client_with(MockTransport::failing(HttpError::Timeout));

        let err = client.send(WEBHOOK_URL, &test_card()).await.unwrap_err();

        assert!(matches!(
            err,
            SendError::Transport {
                source: HttpError::Timeout,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn transport_failure_makes_exactly_one_attempt() {
        let transport = Arc::new(MockTransport::failing(HttpError::Timeout));
        let client = Client::with_transport(transport.clone(), Options::default());

        let _ = client.send(WEBHOOK_URL, &test_card()).await;

        assert_eq!(transport.calls(), 1);
    }
}

mod response_decoding {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Ack {
        ok: bool,
    }

    #[tokio::test]
    async fn decodes_json_body_into_target() {
        let client = client_with(MockTransport::with_body(
            http::StatusCode::OK,
            br#"{"ok":true}"#.to_vec(),
        ));

        let ack: Ack = client
            .send_with_response(WEBHOOK_URL, &test_card())
            .await
            .unwrap();

        assert!(ack.ok);
    }

    #[tokio::test]
    async fn malformed_body_yields_decode_error_with_raw_body() {
        let client = client_with(MockTransport::with_body(
            http::StatusCode::OK,
            b"not json at all".to_vec(),
        ));

        let err = client
            .send_with_response::<Ack>(WEBHOOK_URL, &test_card())
            .await
            .unwrap_err();

        match err {
            SendError::Decode {
                method, url, body, ..
            } => {
                assert_eq!(method, http::Method::POST);
                assert_eq!(url, WEBHOOK_URL);
                assert_eq!(body, "not json at all");
            }
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_statuses_classify_before_decoding() {
        let client = client_with(MockTransport::with_body(
            http::StatusCode::NOT_FOUND,
            b"not json".to_vec(),
        ));

        let err = client
            .send_with_response::<Ack>(WEBHOOK_URL, &test_card())
            .await
            .unwrap_err();

        assert!(matches!(err, SendError::NotFound));
    }

    #[tokio::test]
    async fn plain_send_ignores_response_body() {
        let client = client_with(MockTransport::with_body(
            http::StatusCode::OK,
            b"whatever the service replies".to_vec(),
        ));

        assert!(client.send(WEBHOOK_URL, &test_card()).await.is_ok());
    }
}

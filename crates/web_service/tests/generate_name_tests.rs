//! HTTP-level tests for the name-generation endpoint.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::{test, web, App};
use async_trait::async_trait;
use gemini_client::{GeminiClient, GeminiClientTrait, GeminiError};
use namegen_core::Config;
use tempfile::NamedTempFile;
use web_service::server::{app_config, AppState};

const TEMPLATE: &str = "You are the Wu-Tang name oracle. Answer with one stage name.";

/// Programmable in-process provider.
enum Behavior {
    Text(String),
    Fail { status: u16, message: String },
}

struct FakeGemini {
    behavior: Behavior,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl FakeGemini {
    fn text(text: &str) -> Arc<Self> {
        Arc::new(Self {
            behavior: Behavior::Text(text.to_string()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    fn fail(status: u16, message: &str) -> Arc<Self> {
        Arc::new(Self {
            behavior: Behavior::Fail {
                status,
                message: message.to_string(),
            },
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeminiClientTrait for FakeGemini {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.behavior {
            Behavior::Text(text) => Ok(text.clone()),
            Behavior::Fail { status, message } => Err(GeminiError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

fn prompt_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    write!(file, "{TEMPLATE}").expect("write template");
    file
}

fn test_config(prompt: &NamedTempFile, api_key: Option<&str>) -> Config {
    Config {
        api_key: api_key.map(String::from),
        prompt_path: prompt.path().to_path_buf(),
        ..Config::default()
    }
}

macro_rules! init_app {
    ($config:expr, $client:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new($config, $client)))
                .configure(app_config),
        )
        .await
    };
}

async fn post_name(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    body: serde_json::Value,
) -> (u16, serde_json::Value) {
    let req = test::TestRequest::post()
        .uri("/generate-name")
        .set_json(body)
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let body: serde_json::Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn test_missing_name_is_400_and_skips_provider() {
    let prompt = prompt_file();
    let client = FakeGemini::text("RZA");
    let app = init_app!(test_config(&prompt, Some("key")), client.clone());

    let (status, body) = post_name(&app, serde_json::json!({})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Name is required");
    assert_eq!(client.calls(), 0);
}

#[actix_web::test]
async fn test_whitespace_name_is_400_and_skips_provider() {
    let prompt = prompt_file();
    let client = FakeGemini::text("RZA");
    let app = init_app!(test_config(&prompt, Some("key")), client.clone());

    for name in ["", "   ", "\t\n"] {
        let (status, body) = post_name(&app, serde_json::json!({ "name": name })).await;
        assert_eq!(status, 400, "name: {name:?}");
        assert_eq!(body["error"], "Name is required");
    }
    assert_eq!(client.calls(), 0);
}

#[actix_web::test]
async fn test_missing_credential_is_500_and_skips_provider() {
    let prompt = prompt_file();
    let client = FakeGemini::text("RZA");
    let app = init_app!(test_config(&prompt, None), client.clone());

    let (status, body) = post_name(&app, serde_json::json!({ "name": "Tony" })).await;
    assert_eq!(status, 500);
    assert_eq!(body["error"], "API configuration error");
    assert_eq!(client.calls(), 0);
}

#[actix_web::test]
async fn test_success_returns_trimmed_text() {
    let prompt = prompt_file();
    let client = FakeGemini::text("  RZA THE ABBOT \n");
    let app = init_app!(test_config(&prompt, Some("key")), client.clone());

    let (status, body) = post_name(&app, serde_json::json!({ "name": "Tony" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["generatedName"], "RZA THE ABBOT");
    assert_eq!(client.calls(), 1);
}

#[actix_web::test]
async fn test_prompt_is_composed_from_template_and_trimmed_name() {
    let prompt = prompt_file();
    let client = FakeGemini::text("RZA");
    let app = init_app!(test_config(&prompt, Some("key")), client.clone());

    post_name(&app, serde_json::json!({ "name": "  Tony  " })).await;

    let sent = client.last_prompt.lock().unwrap().clone().expect("prompt");
    assert!(sent.starts_with(TEMPLATE));
    assert!(sent.contains("\n\nUser Input:\nTony\n\nLLM Output:"));
}

#[actix_web::test]
async fn test_blank_provider_text_is_500_model_error() {
    let prompt = prompt_file();
    let client = FakeGemini::text("   \n  ");
    let app = init_app!(test_config(&prompt, Some("key")), client.clone());

    let (status, body) = post_name(&app, serde_json::json!({ "name": "Tony" })).await;
    assert_eq!(status, 500);
    assert_eq!(body["error"], "Model configuration error. Please try again.");
    assert_eq!(client.calls(), 1);
}

#[actix_web::test]
async fn test_provider_failure_classification() {
    let cases = [
        (
            "quota exceeded for this project",
            429,
            "Service temporarily unavailable. Please try again later.",
        ),
        (
            "network timeout while contacting host",
            503,
            "Network error. Please check your connection and try again.",
        ),
        (
            "requested model is overloaded",
            503,
            "Model configuration error. Please try again.",
        ),
        (
            "API_KEY_INVALID",
            500,
            "API key configuration error",
        ),
        (
            "some opaque provider hiccup",
            500,
            "Failed to generate name. Please try again.",
        ),
        // matching is case-sensitive; an upper-cased message falls through
        (
            "QUOTA EXCEEDED",
            500,
            "Failed to generate name. Please try again.",
        ),
    ];

    for (provider_message, expected_status, expected_body) in cases {
        let prompt = prompt_file();
        let client = FakeGemini::fail(500, provider_message);
        let app = init_app!(test_config(&prompt, Some("key")), client);

        let (status, body) = post_name(&app, serde_json::json!({ "name": "Tony" })).await;
        assert_eq!(status, expected_status, "message: {provider_message}");
        assert_eq!(body["error"], expected_body, "message: {provider_message}");
    }
}

#[actix_web::test]
async fn test_unreadable_template_is_500_config_error() {
    let client = FakeGemini::text("RZA");
    let config = Config {
        api_key: Some("key".to_string()),
        prompt_path: "/nonexistent/prompt.txt".into(),
        ..Config::default()
    };
    let app = init_app!(config, client.clone());

    let (status, body) = post_name(&app, serde_json::json!({ "name": "Tony" })).await;
    assert_eq!(status, 500);
    assert_eq!(body["error"], "API configuration error");
    assert_eq!(client.calls(), 0);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let prompt = prompt_file();
    let client = FakeGemini::text("RZA");
    let app = init_app!(test_config(&prompt, Some("key")), client);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

/// Full stack: actix handler -> real GeminiClient -> wiremock provider.
#[actix_web::test]
async fn test_end_to_end_against_mock_provider() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": " RZA THE ABBOT "}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let prompt = prompt_file();
    let config = Config {
        api_key: Some("key".to_string()),
        api_base: mock_server.uri(),
        prompt_path: prompt.path().to_path_buf(),
        ..Config::default()
    };
    let client: Arc<dyn GeminiClientTrait> = Arc::new(GeminiClient::new(&config));
    let app = init_app!(config, client);

    let (status, body) = post_name(&app, serde_json::json!({ "name": "Tony" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["generatedName"], "RZA THE ABBOT");
}

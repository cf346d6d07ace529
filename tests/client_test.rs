use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zimage::{GenerationRequest, ZImageClient, ZImageConfig, ZImageError};

/// Clear proxy settings so requests reach the local mock server.
fn disable_proxy_for_test() {
    std::env::remove_var("HTTP_PROXY");
    std::env::remove_var("HTTPS_PROXY");
    std::env::remove_var("http_proxy");
    std::env::remove_var("https_proxy");
    std::env::set_var("NO_PROXY", "localhost,127.0.0.1");
}

fn client_for(base_url: &str) -> ZImageClient {
    ZImageClient::new(ZImageConfig::new().with_base_url(base_url))
        .expect("client construction should not fail")
}

fn sample_request() -> GenerationRequest {
    GenerationRequest {
        prompt: "a red fox in the snow".to_string(),
        height: 512,
        width: 512,
        steps: 9,
        guidance_scale: 0.0,
        seed: 42,
        use_flash_attn_3: false,
    }
}

#[tokio::test]
#[serial]
async fn test_generate_success_returns_data_uri() {
    disable_proxy_for_test();

    let mock_server = MockServer::start().await;

    // The body matcher pins the exact wire payload, renamed field
    // included.
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_json(json!({
            "prompt": "a red fox in the snow",
            "height": 512,
            "width": 512,
            "num_inference_steps": 9,
            "guidance_scale": 0.0,
            "seed": 42,
            "use_flash_attn_3": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image_base64": "QUJD" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let data_uri = client
        .image()
        .generate_data_uri(sample_request())
        .await
        .expect("generation should succeed");

    assert_eq!(data_uri, "data:image/png;base64,QUJD");
}

#[tokio::test]
#[serial]
async fn test_generate_surfaces_backend_detail() {
    disable_proxy_for_test();

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "detail": "out of memory" })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result = client.image().generate(sample_request()).await;

    match result {
        Err(err @ ZImageError::BackendError(_)) => {
            assert_eq!(err.to_string(), "out of memory");
        }
        other => panic!("Expected BackendError, got: {:?}", other),
    }
}

#[tokio::test]
#[serial]
async fn test_generate_falls_back_on_unparsable_error_body() {
    disable_proxy_for_test();

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Internal Error</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result = client.image().generate(sample_request()).await;

    match result {
        Err(err @ ZImageError::BackendError(_)) => {
            assert_eq!(err.to_string(), "Generation failed");
        }
        other => panic!("Expected BackendError, got: {:?}", other),
    }
}

#[tokio::test]
#[serial]
async fn test_generate_rejects_success_without_image_field() {
    disable_proxy_for_test();

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result = client.image().generate(sample_request()).await;

    match result {
        Err(ZImageError::ResponseError(msg)) => {
            assert!(msg.contains("image_base64"), "unexpected message: {}", msg);
        }
        other => panic!("Expected ResponseError, got: {:?}", other),
    }
}

#[tokio::test]
#[serial]
async fn test_generate_rejects_invalid_json_success() {
    disable_proxy_for_test();

    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("invalid json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result = client.image().generate(sample_request()).await;

    assert!(matches!(result, Err(ZImageError::ResponseError(_))));
}

#[tokio::test]
#[serial]
async fn test_generate_network_failure() {
    disable_proxy_for_test();

    // Nothing listens here.
    let client = client_for("http://localhost:9999");
    let result = client.image().generate(sample_request()).await;

    assert!(matches!(result, Err(ZImageError::RequestError(_))));
}

#[tokio::test]
#[serial]
async fn test_concurrent_generations_do_not_cross_contaminate() {
    disable_proxy_for_test();

    let mock_server = MockServer::start().await;

    let mut fox_request = sample_request();
    fox_request.prompt = "fox".to_string();
    let mut owl_request = sample_request();
    owl_request.prompt = "owl".to_string();
    owl_request.seed = 7;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_json(serde_json::to_value(&fox_request).unwrap()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image_base64": "Rk9Y" })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(body_json(serde_json::to_value(&owl_request).unwrap()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image_base64": "T1dM" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let results = futures::future::join_all(vec![
        client.image().generate(fox_request),
        client.image().generate(owl_request),
    ])
    .await;

    assert_eq!(results[0].as_ref().unwrap().image_base64, "Rk9Y");
    assert_eq!(results[1].as_ref().unwrap().image_base64, "T1dM");
}

#[tokio::test]
#[serial]
async fn test_health_check_roundtrip() {
    disable_proxy_for_test();

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "ok", "model_loaded": true })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let health = client.health().check().await.expect("health should parse");

    assert_eq!(health.status, "ok");
    assert!(health.model_loaded);
    assert!(health.is_ready());
}

#[tokio::test]
#[serial]
async fn test_health_check_backend_error() {
    disable_proxy_for_test();

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(json!({ "detail": "Model is not loaded or failed to load." })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result = client.health().check().await;

    match result {
        Err(err @ ZImageError::BackendError(_)) => {
            assert_eq!(err.to_string(), "Model is not loaded or failed to load.");
        }
        other => panic!("Expected BackendError, got: {:?}", other),
    }
}

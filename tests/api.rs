use std::sync::Arc;
use std::time::Duration;

use business_advisor::config::Config;
use business_advisor::dispatcher::Dispatcher;
use business_advisor::server::{router, AppState};
use business_advisor::types::ChallengeResult;
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CHALLENGE: &str = "How can we increase our market share in the renewable energy sector?";

fn completion(content: &str) -> Value {
    json!({ "choices": [ { "message": { "role": "assistant", "content": content } } ] })
}

async fn mount_advisor(server: &MockServer, role: &str, status: u16, content: &str, delay_ms: u64) {
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(completion(content))
    } else {
        ResponseTemplate::new(status).set_body_string(content)
    };
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains(role))
        .respond_with(template.set_delay(Duration::from_millis(delay_ms)))
        .mount(server)
        .await;
}

/// Start the API against the mocked LLM and return its base URL.
async fn spawn_app(llm: &MockServer) -> String {
    let base_url = llm.uri();
    let config = Config::from_lookup(move |key| match key {
        "LLM_API_KEY" => Some("test-key".to_string()),
        "LLM_BASE_URL" => Some(base_url.clone()),
        _ => None,
    })
    .unwrap();
    let dispatcher = Dispatcher::from_config(&config).unwrap();
    let app = router(Arc::new(AppState { dispatcher }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn challenge_returns_three_scored_responses_in_order() {
    let llm = MockServer::start().await;
    mount_advisor(
        &llm,
        "Financial Expert",
        200,
        "Allocate capital to storage R&D.\nScores: Capital: 7.5, Market: 8.2, Model: 6.9",
        200,
    )
    .await;
    mount_advisor(
        &llm,
        "Market Strategist",
        200,
        "Partner with installers.\n\nscores: capital: 6, market: 9.1, model: 7",
        0,
    )
    .await;
    mount_advisor(&llm, "Business Model Innovator", 200, "Offer energy-as-a-service.", 50).await;

    let base = spawn_app(&llm).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/challenge", base))
        .json(&json!({ "challenge": CHALLENGE }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let result: ChallengeResult = response.json().await.unwrap();
    assert_eq!(result.challenge, CHALLENGE);
    assert_eq!(result.advisor_responses.len(), 3);

    let financial = &result.advisor_responses[0];
    assert_eq!(financial.advisor_id, "financial_expert");
    assert_eq!(financial.response, "Allocate capital to storage R&D.");
    assert_eq!((financial.scores.capital, financial.scores.market, financial.scores.model), (7.5, 8.2, 6.9));

    // lowercase marker: scores parse, but the text is left as-is
    let market = &result.advisor_responses[1];
    assert_eq!(market.advisor_id, "market_strategist");
    assert_eq!(market.scores.market, 9.1);
    assert!(market.response.contains("scores: capital: 6"));

    let innovator = &result.advisor_responses[2];
    assert_eq!(innovator.advisor_id, "business_model_innovator");
    assert_eq!(innovator.response, "Offer energy-as-a-service.");
    assert_eq!((innovator.scores.capital, innovator.scores.market, innovator.scores.model), (5.0, 5.0, 5.0));
}

#[tokio::test]
async fn blank_challenge_is_a_client_error_and_skips_llm() {
    let llm = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("unused")))
        .expect(0)
        .mount(&llm)
        .await;

    let base = spawn_app(&llm).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/challenge", base))
        .json(&json!({ "challenge": "   " }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Challenge text cannot be empty");
}

#[tokio::test]
async fn null_or_blank_completion_still_yields_three_responses() {
    let llm = MockServer::start().await;
    mount_advisor(&llm, "Financial Expert", 200, "Fine. Scores: Capital: 6, Market: 6, Model: 6", 0).await;
    mount_advisor(&llm, "Market Strategist", 200, "   ", 0).await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("Business Model Innovator"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [ { "message": { "role": "assistant", "content": null } } ]
        })))
        .mount(&llm)
        .await;

    let base = spawn_app(&llm).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/challenge", base))
        .json(&json!({ "challenge": CHALLENGE }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let result: ChallengeResult = response.json().await.unwrap();
    assert_eq!(result.advisor_responses.len(), 3);
    for empty in &result.advisor_responses[1..] {
        assert_eq!(empty.response.trim(), "");
        assert_eq!((empty.scores.capital, empty.scores.market, empty.scores.model), (5.0, 5.0, 5.0));
    }
    assert_eq!(result.advisor_responses[2].advisor_id, "business_model_innovator");
}

#[tokio::test]
async fn failing_advisor_is_a_server_error() {
    let llm = MockServer::start().await;
    mount_advisor(&llm, "Financial Expert", 200, "Fine. Scores: Capital: 5, Market: 5, Model: 5", 0).await;
    mount_advisor(&llm, "Market Strategist", 400, "context length exceeded", 0).await;
    mount_advisor(&llm, "Business Model Innovator", 200, "Fine.", 0).await;

    let base = spawn_app(&llm).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/challenge", base))
        .json(&json!({ "challenge": CHALLENGE }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("Market Strategist"), "detail was {detail}");
    assert!(detail.contains("context length exceeded"), "detail was {detail}");
    assert!(body.get("advisor_responses").is_none());
}

#[tokio::test]
async fn missing_challenge_field_is_rejected() {
    let llm = MockServer::start().await;
    let base = spawn_app(&llm).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/challenge", base))
        .json(&json!({ "question": "wrong field" }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn root_and_health_respond() {
    let llm = MockServer::start().await;
    let base = spawn_app(&llm).await;
    let client = reqwest::Client::new();

    let root: Value = client.get(format!("{}/", base)).send().await.unwrap().json().await.unwrap();
    assert!(root["message"].as_str().unwrap().contains("/api/challenge"));

    let health: Value = client.get(format!("{}/health", base)).send().await.unwrap().json().await.unwrap();
    assert_eq!(health, json!({ "status": "ok", "advisors": 3 }));
}

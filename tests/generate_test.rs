//! AI generation tests against a mock Venice endpoint

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{CystyleTest, MockVenice};
use serde_json::{json, Value};

const SPOOKY_THEME: &str = r##"{
    "fontFamilyName": "Creepster",
    "foundation": { "bodyBgColor": "#000000" },
    "motd": { "title": "Boo" },
    "cssEffects": { "videowrapCrtEffect": true },
    "javascript": { "enableMatrixRain": true }
}"##;

#[tokio::test]
async fn test_generate_merges_over_defaults() {
    let mock = MockVenice::replying(SPOOKY_THEME)
        .await
        .expect("Failed to start mock");
    let app = CystyleTest::with_venice(&mock)
        .await
        .expect("Failed to start server");
    let id = app.create_session().await.expect("Failed to create session");

    // Earlier edits do not survive a generation
    app.patch(
        &format!("/sessions/{}/config", id),
        &json!({ "advancedCss": "#old{}", "foundation": { "linkColor": "#123456" } }),
    )
    .await
    .unwrap();
    app.post_empty(&format!("/sessions/{}/user-styles", id))
        .await
        .unwrap();

    let resp = app
        .post(
            &format!("/sessions/{}/generate", id),
            &json!({ "prompt": "a spooky halloween theme" }),
        )
        .await
        .expect("Failed to generate");
    assert_eq!(resp.status(), 200);

    let config: Value = resp.json().await.unwrap();
    assert_eq!(config["fontFamilyName"], "Creepster");
    assert_eq!(config["foundation"]["bodyBgColor"], "#000000");
    assert_eq!(config["foundation"]["linkColor"], "#818cf8");
    assert_eq!(config["motd"]["title"], "Boo");
    assert_eq!(config["motd"]["titleFontSize"], "100px");
    assert_eq!(config["cssEffects"]["videowrapCrtEffect"], true);
    assert_eq!(config["cssEffects"]["letItSnow"], false);
    assert_eq!(config["javascript"]["enableMatrixRain"], true);
    assert_eq!(config["advancedCss"], "");
    assert_eq!(config["userStyles"], json!([]));

    let stored: Value = app
        .get(&format!("/sessions/{}/config", id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stored, config);
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_generate_request_shape() {
    let mock = MockVenice::replying("{}").await.expect("Failed to start mock");
    let app = CystyleTest::with_venice(&mock)
        .await
        .expect("Failed to start server");
    let id = app.create_session().await.unwrap();

    app.post(
        &format!("/sessions/{}/generate", id),
        &json!({ "prompt": "neon arcade" }),
    )
    .await
    .unwrap();

    let request = mock.last_request().expect("No request recorded");
    assert_eq!(request["response_format"]["type"], "json_schema");
    assert!(request["response_format"]["json_schema"]["schema"]["properties"]["cssEffects"].is_object());
    let content = request["messages"][0]["content"].as_str().unwrap();
    assert!(content.contains("Description: \"neon arcade\""));
}

#[tokio::test]
async fn test_empty_prompt_makes_no_call() {
    let mock = MockVenice::replying(SPOOKY_THEME)
        .await
        .expect("Failed to start mock");
    let app = CystyleTest::with_venice(&mock)
        .await
        .expect("Failed to start server");
    let id = app.create_session().await.unwrap();

    let resp = app
        .post(&format!("/sessions/{}/generate", id), &json!({ "prompt": "  \n " }))
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Please enter a description for your theme.");
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_invalid_response_keeps_config() {
    let mock = MockVenice::replying("this is not json")
        .await
        .expect("Failed to start mock");
    let app = CystyleTest::with_venice(&mock)
        .await
        .expect("Failed to start server");
    let id = app.create_session().await.unwrap();
    app.patch(
        &format!("/sessions/{}/config", id),
        &json!({ "fontFamilyName": "VT323" }),
    )
    .await
    .unwrap();

    let resp = app
        .post(&format!("/sessions/{}/generate", id), &json!({ "prompt": "retro" }))
        .await
        .unwrap();
    assert_eq!(resp.status(), 502);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["error"],
        "The AI returned an invalid theme structure. Please try again."
    );

    let config: Value = app
        .get(&format!("/sessions/{}/config", id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(config["fontFamilyName"], "VT323");

    let status: Value = app
        .get(&format!("/sessions/{}/generate/status", id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["pending"], false);
    assert_eq!(
        status["lastError"],
        "The AI returned an invalid theme structure. Please try again."
    );
}

#[tokio::test]
async fn test_service_error_reported() {
    let mock = MockVenice::failing(StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .expect("Failed to start mock");
    let app = CystyleTest::with_venice(&mock)
        .await
        .expect("Failed to start server");
    let id = app.create_session().await.unwrap();

    let resp = app
        .post(&format!("/sessions/{}/generate", id), &json!({ "prompt": "retro" }))
        .await
        .unwrap();
    assert_eq!(resp.status(), 502);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("An error occurred:"));
}

#[tokio::test]
async fn test_missing_credential_reported() {
    let app = CystyleTest::start().await.expect("Failed to start server");
    let id = app.create_session().await.unwrap();

    let resp = app
        .post(&format!("/sessions/{}/generate", id), &json!({ "prompt": "retro" }))
        .await
        .unwrap();
    assert_eq!(resp.status(), 503);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["error"],
        "CYSTYLE_TEST_NO_SUCH_KEY environment variable not found."
    );
}

#[tokio::test]
async fn test_second_generation_rejected_while_pending() {
    let mock = MockVenice::slow(SPOOKY_THEME, Duration::from_millis(600))
        .await
        .expect("Failed to start mock");
    let app = CystyleTest::with_venice(&mock)
        .await
        .expect("Failed to start server");
    let id = app.create_session().await.unwrap();
    let generate_path = format!("/sessions/{}/generate", id);

    let first = {
        let client = app.client.clone();
        let url = format!("{}{}", app.base_url(), generate_path);
        tokio::spawn(async move {
            client
                .post(url)
                .json(&json!({ "prompt": "first" }))
                .send()
                .await
        })
    };

    // Let the first request reach the mock
    tokio::time::sleep(Duration::from_millis(200)).await;

    let status: Value = app
        .get(&format!("/sessions/{}/generate/status", id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["pending"], true);
    assert!(status["message"].is_string());

    let second = app
        .post(&generate_path, &json!({ "prompt": "second" }))
        .await
        .unwrap();
    assert_eq!(second.status(), 409);

    let first = first.await.unwrap().expect("First request failed");
    assert_eq!(first.status(), 200);
    assert_eq!(mock.calls(), 1);

    let status: Value = app
        .get(&format!("/sessions/{}/generate/status", id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["pending"], false);
    assert!(status["message"].is_null());
}

#[tokio::test]
async fn test_status_message_rotates() {
    let mock = MockVenice::slow("{}", Duration::from_millis(700))
        .await
        .expect("Failed to start mock");
    let app = CystyleTest::with_venice(&mock)
        .await
        .expect("Failed to start server");
    let id = app.create_session().await.unwrap();

    let pending = {
        let client = app.client.clone();
        let url = format!("{}/sessions/{}/generate", app.base_url(), id);
        tokio::spawn(async move {
            client
                .post(url)
                .json(&json!({ "prompt": "anything" }))
                .send()
                .await
        })
    };

    let status_path = format!("/sessions/{}/generate/status", id);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..10 {
        tokio::time::sleep(Duration::from_millis(50)).await;
        let status: Value = app.get(&status_path).await.unwrap().json().await.unwrap();
        if let Some(message) = status["message"].as_str() {
            seen.insert(message.to_string());
        }
    }
    assert!(seen.len() >= 2, "status did not rotate: {:?}", seen);

    pending.await.unwrap().expect("Generation request failed");
}

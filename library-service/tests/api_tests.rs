mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "name": "Ada",
            "email": "a@x.com",
            "password": "correct"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 200);

    let token = body["data"]["token"].as_str().unwrap();
    assert_eq!(token.split('.').count(), 3);
    assert_eq!(
        app.token_service.extract_subject(token),
        Ok("a@x.com".to_string())
    );
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register("Ada", "a@x.com", "correct").await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "name": "Someone Else",
            "email": "a@x.com",
            "password": "another"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_email_is_case_sensitive() {
    let app = TestApp::spawn().await;

    app.register("Ada", "a@x.com", "correct").await;
    let token = app.register("Ada Upper", "A@x.com", "correct").await;

    assert_eq!(
        app.token_service.extract_subject(&token),
        Ok("A@x.com".to_string())
    );
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "name": "Ada",
            "email": "not-an-email",
            "password": "correct"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_empty_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "name": "Ada",
            "email": "a@x.com",
            "password": ""
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    app.register("Ada", "a@x.com", "correct").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "a@x.com",
            "password": "correct"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap();
    assert_eq!(app.token_service.validate(token, "a@x.com"), Ok(true));
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_account_look_alike() {
    let app = TestApp::spawn().await;
    app.register("Ada", "a@x.com", "correct").await;

    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "a@x.com",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let unknown_account = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "ghost@x.com",
            "password": "anything"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_account.status(), StatusCode::UNAUTHORIZED);

    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_account: serde_json::Value = unknown_account.json().await.unwrap();
    assert_eq!(wrong_password, unknown_account);
}

#[tokio::test]
async fn test_current_account_with_valid_token() {
    let app = TestApp::spawn().await;
    let token = app.register("Ada", "a@x.com", "correct").await;

    let response = app
        .get_authenticated("/api/accounts/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "a@x.com");
    assert_eq!(body["data"]["name"], "Ada");
    assert_eq!(body["data"]["role"], "USER");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_current_account_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/accounts/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_account_with_tampered_token() {
    let app = TestApp::spawn().await;
    let token = app.register("Ada", "a@x.com", "correct").await;

    let mut tampered: Vec<char> = token.chars().collect();
    let last = tampered.len() - 1;
    tampered[last] = if tampered[last] == 'A' { 'B' } else { 'A' };
    let tampered: String = tampered.into_iter().collect();

    let response = app
        .get_authenticated("/api/accounts/me", &tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_account_with_foreign_subject() {
    let app = TestApp::spawn().await;
    app.register("Ada", "a@x.com", "correct").await;

    // Authentic token for an email with no account behind it
    let token = app.token_service.mint("ghost@x.com").unwrap();

    let response = app
        .get_authenticated("/api/accounts/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_account_with_expired_token() {
    let app = TestApp::spawn_with_lifetime(1_000).await;
    let token = app.register("Ada", "a@x.com", "correct").await;

    tokio::time::sleep(std::time::Duration::from_millis(2_100)).await;

    let response = app
        .get_authenticated("/api/accounts/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Token expired");
}

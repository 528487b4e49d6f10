mod common;

use chrono::SubsecRound;
use chrono::Utc;
use common::TestApp;
use common::TestDb;
use library_service::account::errors::AccountError;
use library_service::account::models::Account;
use library_service::account::models::AccountId;
use library_service::account::models::DisplayName;
use library_service::account::models::EmailAddress;
use library_service::account::models::Role;
use library_service::account::ports::AccountRepository;
use library_service::outbound::repositories::PostgresAccountRepository;
use reqwest::StatusCode;
use serde_json::json;

fn account(email: &str) -> Account {
    Account {
        id: AccountId::new(),
        name: DisplayName::new("Ada".to_string()).unwrap(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        role: Role::User,
        // Postgres keeps microseconds
        created_at: Utc::now().trunc_subsecs(6),
    }
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_register_twice_returns_conflict() {
    let app = TestApp::spawn_with_postgres().await;

    app.register("Ada", "a@x.com", "correct").await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "name": "Ada Again",
            "email": "a@x.com",
            "password": "other"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_login_against_postgres() {
    let app = TestApp::spawn_with_postgres().await;

    app.register("Ada", "a@x.com", "correct").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({"email": "a@x.com", "password": "correct"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap();

    let response = app
        .get_authenticated("/api/accounts/me", token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_create_duplicate_email() {
    let db = TestDb::new().await;
    let repository = PostgresAccountRepository::new(db.pool.clone());

    repository.create(account("a@x.com")).await.unwrap();
    let result = repository.create(account("a@x.com")).await;

    assert!(matches!(result, Err(AccountError::DuplicateAccount(email)) if email == "a@x.com"));
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_find_by_email_is_case_sensitive() {
    let db = TestDb::new().await;
    let repository = PostgresAccountRepository::new(db.pool.clone());

    let stored = repository.create(account("Ada@Example.com")).await.unwrap();

    let found = repository.find_by_email("Ada@Example.com").await.unwrap();
    assert_eq!(found, Some(stored.clone()));
    assert_eq!(repository.find_by_email("ada@example.com").await.unwrap(), None);

    // A differently cased address is a distinct account
    repository.create(account("ada@example.com")).await.unwrap();
    assert_eq!(
        repository.find_by_id(&stored.id).await.unwrap(),
        Some(stored)
    );
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_update_into_taken_email() {
    let db = TestDb::new().await;
    let repository = PostgresAccountRepository::new(db.pool.clone());

    repository.create(account("a@x.com")).await.unwrap();
    let mut other = repository.create(account("b@x.com")).await.unwrap();

    other.email = EmailAddress::new("a@x.com".to_string()).unwrap();
    let result = repository.update(other).await;

    assert!(matches!(result, Err(AccountError::DuplicateAccount(email)) if email == "a@x.com"));
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_update_and_delete_missing_account() {
    let db = TestDb::new().await;
    let repository = PostgresAccountRepository::new(db.pool.clone());

    let missing = account("ghost@x.com");
    let missing_id = missing.id;

    assert!(matches!(
        repository.update(missing).await,
        Err(AccountError::NotFound(_))
    ));
    assert!(matches!(
        repository.delete(&missing_id).await,
        Err(AccountError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_delete_removes_account() {
    let db = TestDb::new().await;
    let repository = PostgresAccountRepository::new(db.pool.clone());

    let stored = repository.create(account("a@x.com")).await.unwrap();
    repository.delete(&stored.id).await.unwrap();

    assert_eq!(repository.find_by_id(&stored.id).await.unwrap(), None);
    assert!(matches!(
        repository.delete(&stored.id).await,
        Err(AccountError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_delete_on_closed_pool_is_database_error() {
    let db = TestDb::new().await;
    let repository = PostgresAccountRepository::new(db.pool.clone());

    let stored = repository.create(account("a@x.com")).await.unwrap();
    db.pool.close().await;

    assert!(matches!(
        repository.delete(&stored.id).await,
        Err(AccountError::DatabaseError(_))
    ));
}

use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::ports::AuthenticationServicePort;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated account in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount(pub Account);

/// Middleware that validates bearer tokens and adds the account to request extensions
///
/// The token subject must resolve to a live account and the token must
/// validate for that account's email.
pub async fn authenticate<S: AuthenticationServicePort>(
    State(state): State<AppState<S>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?.to_string();

    let subject = state
        .token_service
        .extract_subject(&token)
        .map_err(rejected_token)?;

    let account = state
        .auth_service
        .get_account_by_email(&subject)
        .await
        .map_err(|e| match e {
            AccountError::AccountNotFound(_) => {
                tracing::warn!(email = %subject, "Token subject has no account");
                ApiError::Unauthorized("Invalid or expired token".to_string())
            }
            other => ApiError::from(other),
        })?;

    match state
        .token_service
        .validate(&token, account.email.as_str())
    {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(email = %subject, "Token subject does not match account");
            return Err(ApiError::Unauthorized(
                "Invalid or expired token".to_string(),
            ));
        }
        Err(e) => return Err(rejected_token(e)),
    }

    req.extensions_mut().insert(AuthenticatedAccount(account));

    Ok(next.run(req).await)
}

fn rejected_token(err: JwtError) -> ApiError {
    tracing::warn!(reason = %err, "Token validation failed");
    match err {
        JwtError::ExpiredToken => ApiError::Unauthorized("Token expired".to_string()),
        _ => ApiError::Unauthorized("Invalid or expired token".to_string()),
    }
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
    })
}

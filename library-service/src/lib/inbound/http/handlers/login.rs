use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TokenResponseData;
use crate::account::models::AuthenticateCommand;
use crate::account::ports::AuthenticationServicePort;
use crate::inbound::http::router::AppState;

pub async fn login<S: AuthenticationServicePort>(
    State(state): State<AppState<S>>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let command = AuthenticateCommand::new(body.email, body.password);

    state
        .auth_service
        .authenticate(command)
        .await
        .map_err(ApiError::from)
        .map(|result| {
            ApiSuccess::new(
                StatusCode::OK,
                TokenResponseData {
                    token: result.access_token,
                },
            )
        })
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::ClaimValue;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::Utc;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::AuthenticateCommand;
use crate::account::models::AuthenticationResult;
use crate::account::models::RegisterCommand;
use crate::account::models::Role;
use crate::account::ports::AccountRepository;
use crate::account::ports::AuthenticationServicePort;

/// Claim carrying the account role inside issued tokens.
pub const ROLE_CLAIM: &str = "role";

/// Verified in place of a real hash when the account does not exist.
const DUMMY_PASSWORD: &str = "library-service-dummy-password";

/// Domain service implementation for registration and login.
///
/// Concrete implementation of AuthenticationServicePort with dependency injection.
pub struct AuthenticationService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    token_service: Arc<TokenService>,
    password_hasher: PasswordHasher,
    dummy_hash: String,
}

impl<AR> AuthenticationService<AR>
where
    AR: AccountRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `token_service` - Token issuer shared with the request middleware
    ///
    /// # Errors
    /// * `PasswordHashing` - The dummy hash could not be computed
    pub fn new(repository: Arc<AR>, token_service: Arc<TokenService>) -> Result<Self, AccountError> {
        let password_hasher = PasswordHasher::new();
        let dummy_hash = password_hasher.hash(DUMMY_PASSWORD)?;

        Ok(Self {
            repository,
            token_service,
            password_hasher,
            dummy_hash,
        })
    }

    fn issue_token(&self, account: Account) -> Result<AuthenticationResult, AccountError> {
        let mut claims = HashMap::new();
        claims.insert(
            ROLE_CLAIM.to_string(),
            ClaimValue::from(account.role.as_str()),
        );

        let access_token = self
            .token_service
            .mint_with_claims(account.email.as_str(), claims)?;

        Ok(AuthenticationResult {
            access_token,
            account,
        })
    }
}

#[async_trait]
impl<AR> AuthenticationServicePort for AuthenticationService<AR>
where
    AR: AccountRepository,
{
    async fn register(
        &self,
        command: RegisterCommand,
    ) -> Result<AuthenticationResult, AccountError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let account = Account {
            id: AccountId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            role: Role::User,
            created_at: Utc::now(),
        };

        // Uniqueness is enforced by the store, not pre-checked here
        let created_account = self.repository.create(account).await?;

        tracing::info!(
            account_id = %created_account.id,
            email = %created_account.email,
            "Account registered"
        );

        self.issue_token(created_account)
    }

    async fn authenticate(
        &self,
        command: AuthenticateCommand,
    ) -> Result<AuthenticationResult, AccountError> {
        let account = match self.repository.find_by_email(&command.email).await? {
            Some(account) => account,
            None => {
                // Same cost as a real verification
                let _ = self
                    .password_hasher
                    .verify(&command.password, &self.dummy_hash);
                tracing::warn!(email = %command.email, "Login rejected: unknown account");
                return Err(AccountError::AccountNotFound(command.email));
            }
        };

        if !self
            .password_hasher
            .verify(&command.password, &account.password_hash)
        {
            tracing::warn!(email = %account.email, "Login rejected: invalid credentials");
            return Err(AccountError::InvalidCredentials);
        }

        tracing::info!(account_id = %account.id, email = %account.email, "Account authenticated");

        self.issue_token(account)
    }

    async fn get_account_by_email(&self, email: &str) -> Result<Account, AccountError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AccountError::AccountNotFound(email.to_string()))
    }
}

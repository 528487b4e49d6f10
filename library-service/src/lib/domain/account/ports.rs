use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::AuthenticateCommand;
use crate::account::models::AuthenticationResult;
use crate::account::models::RegisterCommand;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthenticationServicePort: Send + Sync + 'static {
    /// Register a new account and issue a token for it.
    ///
    /// # Arguments
    /// * `command` - Validated name and email plus the plaintext password
    ///
    /// # Returns
    /// Access token and the created account
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password is empty
    /// * `DuplicateAccount` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand)
        -> Result<AuthenticationResult, AccountError>;

    /// Verify credentials and issue a token.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Access token and the authenticated account
    ///
    /// # Errors
    /// * `AccountNotFound` - No account with this email
    /// * `InvalidCredentials` - Password does not match
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(
        &self,
        command: AuthenticateCommand,
    ) -> Result<AuthenticationResult, AccountError>;

    /// Retrieve account by email address.
    ///
    /// # Errors
    /// * `AccountNotFound` - No account with this email
    /// * `DatabaseError` - Database operation failed
    async fn get_account_by_email(&self, email: &str) -> Result<Account, AccountError>;
}

/// Persistence operations for account aggregate.
///
/// Implementations own email uniqueness and must enforce it atomically.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist new account to storage.
    ///
    /// # Errors
    /// * `DuplicateAccount` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve account by identifier.
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;

    /// Retrieve account by email address.
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;

    /// Update existing account in storage.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DuplicateAccount` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, account: Account) -> Result<Account, AccountError>;

    /// Remove account from storage.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &AccountId) -> Result<(), AccountError>;
}

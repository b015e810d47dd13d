//! Account registration, credential validation and token issuance.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{ApiUser, NewApiUser, Role};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::security::{Claims, JwtSigner, PasswordHasher};

/// Registration input with the raw password.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub roles: Vec<Role>,
}

/// Service for account registration and bearer token authentication.
///
/// Passwords are stored as Argon2id hashes; tokens are HS256 JWTs signed
/// with the configured secret.
pub struct AuthManager<R: UserRepository> {
    repository: Arc<R>,
    hasher: PasswordHasher,
    signer: JwtSigner,
}

impl<R: UserRepository> AuthManager<R> {
    /// Creates a new auth manager.
    pub fn new(repository: Arc<R>, signer: JwtSigner) -> Self {
        Self {
            repository,
            hasher: PasswordHasher::new(),
            signer,
        }
    }

    /// Registers a new account.
    ///
    /// Accounts registered without roles get [`Role::User`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database or hashing errors.
    pub async fn register(&self, registration: Registration) -> Result<ApiUser, AppError> {
        if self
            .repository
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(AppError::bad_request(
                "Registration failed",
                json!({ "fields": { "email": [format!("Email '{}' is already taken", registration.email)] } }),
            ));
        }

        if registration.roles.contains(&Role::Administrator) {
            return Err(AppError::bad_request(
                "Registration failed",
                json!({ "fields": { "roles": ["Administrator role cannot be self-assigned"] } }),
            ));
        }

        let mut roles = Vec::with_capacity(registration.roles.len().max(1));
        for role in registration.roles {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
        if roles.is_empty() {
            roles.push(Role::User);
        }

        let password_hash = self.hasher.hash_password(&registration.password)?;

        let user = self
            .repository
            .create(NewApiUser {
                email: registration.email,
                password_hash,
                first_name: registration.first_name,
                last_name: registration.last_name,
                phone_number: registration.phone_number,
                roles,
            })
            .await?;

        tracing::info!(user_id = user.id, "Account registered");
        Ok(user)
    }

    /// Checks credentials and returns the account when they are valid.
    ///
    /// An unknown email and a wrong password both yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or a corrupt stored hash.
    pub async fn validate_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<ApiUser>, AppError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            return Ok(None);
        };

        if self.hasher.verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Issues a bearer token for an account returned by [`Self::validate_user`].
    pub fn create_token(&self, user: &ApiUser) -> Result<String, AppError> {
        self.signer.sign(user)
    }

    /// Verifies a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid or expired.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        self.signer.verify(token)
    }
}

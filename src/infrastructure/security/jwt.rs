//! HS256 bearer tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::{ApiUser, Role};
use crate::error::AppError;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id.
    pub sub: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Signs and verifies access tokens with a shared secret.
#[derive(Clone)]
pub struct JwtSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    lifetime: Duration,
}

impl JwtSigner {
    pub fn new(secret: &str, issuer: impl Into<String>, lifetime_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.into(),
            lifetime: Duration::minutes(lifetime_minutes),
        }
    }

    /// Issues a token for `user` expiring after the configured lifetime.
    pub fn sign(&self, user: &ApiUser) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            roles: user.roles.clone(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to encode access token");
            AppError::unexpected()
        })
    }

    /// Validates signature, issuer and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for any invalid token.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[self.issuer.as_str()]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => "Token has expired",
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => "Token issuer is not trusted",
                    _ => "Invalid token",
                };
                AppError::unauthorized("Unauthorized", json!({ "reason": reason }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: Vec<Role>) -> ApiUser {
        ApiUser {
            id: 7,
            email: "traveller@example.com".to_string(),
            password_hash: String::new(),
            first_name: "Tess".to_string(),
            last_name: "Traveller".to_string(),
            phone_number: None,
            roles,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_sign_then_verify() {
        let signer = JwtSigner::new("test-secret", "hotel-listing", 15);
        let token = signer.sign(&user(vec![Role::Administrator])).unwrap();

        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.email, "traveller@example.com");
        assert!(claims.has_role(Role::Administrator));
        assert_eq!(claims.iss, "hotel-listing");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let signer = JwtSigner::new("secret-a", "hotel-listing", 15);
        let other = JwtSigner::new("secret-b", "hotel-listing", 15);
        let token = signer.sign(&user(vec![Role::User])).unwrap();

        assert!(matches!(other.verify(&token), Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let signer = JwtSigner::new("secret", "someone-else", 15);
        let verifier = JwtSigner::new("secret", "hotel-listing", 15);
        let token = signer.sign(&user(vec![Role::User])).unwrap();

        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Past the default 60s leeway.
        let signer = JwtSigner::new("secret", "hotel-listing", -5);
        let token = signer.sign(&user(vec![Role::User])).unwrap();

        let err = signer.verify(&token).unwrap_err();
        assert_eq!(err.into_info().details["reason"], "Token has expired");
    }

    #[test]
    fn test_garbage_is_rejected() {
        let signer = JwtSigner::new("secret", "hotel-listing", 15);
        assert!(signer.verify("not.a.jwt").is_err());
    }
}

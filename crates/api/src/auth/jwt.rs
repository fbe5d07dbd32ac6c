//! JWT access-token generation and validation.
//!
//! Tokens are HS256-signed JWTs containing a [`Claims`] payload. There are no
//! refresh tokens; a client logs in again once its token expires.

use interview_prep_core::roles::Role;
use interview_prep_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signing secret used when `JWT_SECRET` is not set. Local development only.
const DEV_JWT_SECRET: &str = "dev-only-insecure-secret";

/// Default token lifetime in hours.
const DEFAULT_EXPIRY_HOURS: i64 = 24;

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    pub email: String,
    /// `ADMIN` or `USER`.
    pub role: Role,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in hours (default: 24).
    pub expiry_hours: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var            | Default                         |
    /// |--------------------|---------------------------------|
    /// | `JWT_SECRET`       | development secret (warned)     |
    /// | `JWT_EXPIRY_HOURS` | `24`                            |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_EXPIRY_HOURS` is set but is not a valid i64.
    pub fn from_env() -> Self {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!("JWT_SECRET not set, using insecure development secret");
                DEV_JWT_SECRET.to_string()
            }
        };

        let expiry_hours: i64 = std::env::var("JWT_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_HOURS.to_string())
            .parse()
            .expect("JWT_EXPIRY_HOURS must be a valid i64");

        Self {
            secret,
            expiry_hours,
        }
    }
}

/// Generate an HS256 token identifying the given user.
pub fn generate_token(
    user_id: DbId,
    email: &str,
    role: Role,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.expiry_hours * 3600;

    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        role,
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: 24,
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let config = test_config();
        let token = generate_token(42, "ada@example.com", Role::Admin, &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            email: "u@example.com".to_string(),
            role: Role::User,
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
            expiry_hours: 1,
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            expiry_hours: 1,
        };

        let token = generate_token(1, "u@example.com", Role::User, &config_a)
            .expect("token generation should succeed");

        assert!(
            validate_token(&token, &config_b).is_err(),
            "token signed with a different secret must fail"
        );
    }

    #[test]
    fn test_garbage_token_fails() {
        assert!(validate_token("not.a.jwt", &test_config()).is_err());
    }
}

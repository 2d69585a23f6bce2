use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

use super::{AdminAccount, AuthKeys};

/// Generate JWT access token for the administrator
pub fn generate_access_token(keys: &AuthKeys, admin: &AdminAccount) -> Result<String> {
    let now = Utc::now();
    let lifetime = chrono::Duration::try_hours(keys.token_lifetime_hours)
        .context("Token lifetime out of range")?;
    let expires_at = now
        .checked_add_signed(lifetime)
        .context("Token expiry out of range")?;
    let exp = usize::try_from(expires_at.timestamp()).context("Token expiry before epoch")?;
    let iat = usize::try_from(now.timestamp()).context("Clock before epoch")?;

    let claims = TokenClaims {
        sub: admin.id.clone(),
        email: admin.email.clone(),
        exp,
        iat,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(keys.jwt_secret.as_bytes()),
    )
    .context("Failed to encode JWT token")?;

    Ok(token)
}

/// Validate JWT token and extract claims
pub fn validate_token(keys: &AuthKeys, token: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(keys.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Configured secret, or a fresh random one when none is set.
///
/// A generated secret lives only as long as the process: restarting the
/// server logs every console session out.
pub fn resolve_jwt_secret(configured: &str) -> String {
    if configured.trim().is_empty() {
        tracing::warn!("No JWT secret configured, generating a random one");
        generate_jwt_secret()
    } else {
        configured.to_string()
    }
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(secret: &str, hours: i64) -> AuthKeys {
        AuthKeys {
            jwt_secret: secret.to_string(),
            token_lifetime_hours: hours,
            admin: AdminAccount {
                id: "admin-1".into(),
                name: "John Doe".into(),
                email: "admin@itzenith.com".into(),
                password_hash: String::new(),
            },
        }
    }

    #[test]
    fn test_token_round_trip() {
        let keys = keys("unit-test-secret", 1);
        let token = generate_access_token(&keys, &keys.admin).unwrap();
        let claims = validate_token(&keys, &token).unwrap();
        assert_eq!(claims.sub, "admin-1");
        assert_eq!(claims.email, "admin@itzenith.com");
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let issuer = keys("secret-a", 1);
        let token = generate_access_token(&issuer, &issuer.admin).unwrap();
        assert!(validate_token(&keys("secret-b", 1), &token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let keys = keys("unit-test-secret", -2);
        let token = generate_access_token(&keys, &keys.admin).unwrap();
        assert!(validate_token(&keys, &token).is_err());
    }

    #[test]
    fn test_huge_lifetime_is_an_error() {
        let keys = keys("unit-test-secret", i64::MAX);
        assert!(generate_access_token(&keys, &keys.admin).is_err());
    }

    #[test]
    fn test_secret_generated_when_blank() {
        let a = resolve_jwt_secret("  ");
        let b = resolve_jwt_secret("");
        assert_eq!(general_purpose::STANDARD.decode(&a).unwrap().len(), 32);
        assert_ne!(a, b);
        assert_eq!(resolve_jwt_secret("fixed"), "fixed");
    }
}

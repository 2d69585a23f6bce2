use anyhow::Result;
use uuid::Uuid;

use crate::shared::config::Config;
use crate::system::auth::{jwt, password, AdminAccount, AuthKeys};

/// Build the signing keys and the administrator account from configuration.
pub fn build_auth_keys(config: &Config) -> Result<AuthKeys> {
    let admin = ensure_admin_account(config)?;
    Ok(AuthKeys {
        jwt_secret: jwt::resolve_jwt_secret(&config.auth.jwt_secret),
        token_lifetime_hours: config.auth.token_lifetime_hours,
        admin,
    })
}

fn ensure_admin_account(config: &Config) -> Result<AdminAccount> {
    let email = config.admin.email.trim();
    if email.is_empty() {
        anyhow::bail!("[admin] email must not be empty");
    }
    if config.admin.password.is_empty() {
        anyhow::bail!("[admin] password must not be empty");
    }

    let password_hash = password::hash_password(&config.admin.password)?;
    tracing::info!("Administrator account ready: {}", email);

    Ok(AdminAccount {
        id: Uuid::new_v4().to_string(),
        name: config.admin.name.clone(),
        email: email.to_string(),
        password_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;

    #[test]
    fn test_keys_from_default_config() {
        let config = default_config().unwrap();
        let keys = build_auth_keys(&config).unwrap();
        assert!(!keys.jwt_secret.is_empty());
        assert_eq!(keys.admin.email, "admin@itzenith.com");
        assert!(password::verify_password("admin12345", &keys.admin.password_hash).unwrap());
    }

    #[test]
    fn test_blank_admin_email_rejected() {
        let mut config = default_config().unwrap();
        config.admin.email = " ".into();
        assert!(build_auth_keys(&config).is_err());
    }
}

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

/// Administrator account loaded at startup; the password is kept only as a hash.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Everything needed to issue and check tokens
#[derive(Debug, Clone)]
pub struct AuthKeys {
    pub jwt_secret: String,
    pub token_lifetime_hours: i64,
    pub admin: AdminAccount,
}

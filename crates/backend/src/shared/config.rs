use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub admin: AdminConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Empty means "generate one at startup"
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_lifetime_hours: default_token_lifetime(),
        }
    }
}

fn default_token_lifetime() -> i64 {
    48
}

/// Upper bound for `token_lifetime_hours`: one year
pub const MAX_TOKEN_LIFETIME_HOURS: i64 = 24 * 365;

/// The single administrator account of the console
#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Counters the stats endpoint reports but the server does not track
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub team: u64,
    #[serde(default)]
    pub blogs: u64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[auth]
jwt_secret = ""
token_lifetime_hours = 48

[admin]
name = "John Doe"
email = "admin@itzenith.com"
password = "admin12345"

[dashboard]
team = 8
blogs = 5
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// `ADMIN_JWT_SECRET`, `ADMIN_EMAIL` and `ADMIN_PASSWORD` override the file.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> anyhow::Result<()> {
    let hours = config.auth.token_lifetime_hours;
    if !(1..=MAX_TOKEN_LIFETIME_HOURS).contains(&hours) {
        anyhow::bail!(
            "auth.token_lifetime_hours must be between 1 and {}, got {}",
            MAX_TOKEN_LIFETIME_HOURS,
            hours
        );
    }
    Ok(())
}

pub fn default_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

fn apply_env_overrides(config: &mut Config, var: impl Fn(&str) -> Option<String>) {
    let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

    if let Some(secret) = non_empty("ADMIN_JWT_SECRET") {
        tracing::info!("JWT secret taken from ADMIN_JWT_SECRET");
        config.auth.jwt_secret = secret;
    }
    if let Some(email) = non_empty("ADMIN_EMAIL") {
        config.admin.email = email;
    }
    if let Some(password) = non_empty("ADMIN_PASSWORD") {
        config.admin.password = password;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.token_lifetime_hours, 48);
        assert!(config.auth.jwt_secret.is_empty());
        assert_eq!(config.dashboard.team, 8);
    }

    #[test]
    fn test_optional_sections_default() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [admin]
            name = "Ops"
            email = "ops@example.com"
            password = "secret-pass"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.token_lifetime_hours, 48);
        assert_eq!(config.dashboard.blogs, 0);
    }

    #[test]
    fn test_token_lifetime_out_of_range_rejected() {
        let config = |hours: &str| {
            format!(
                r#"
                [server]
                host = "127.0.0.1"
                port = 8080

                [auth]
                token_lifetime_hours = {}

                [admin]
                name = "Ops"
                email = "ops@example.com"
                password = "secret-pass"
                "#,
                hours
            )
        };
        assert!(parse_config(&config("0")).is_err());
        assert!(parse_config(&config("-5")).is_err());
        assert!(parse_config(&config("9223372036854775807")).is_err());
        assert_eq!(
            parse_config(&config("24")).unwrap().auth.token_lifetime_hours,
            24
        );
    }

    #[test]
    fn test_env_overrides_win() {
        let mut config = default_config().unwrap();
        apply_env_overrides(&mut config, |key| match key {
            "ADMIN_JWT_SECRET" => Some("from-env".to_string()),
            "ADMIN_EMAIL" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.auth.jwt_secret, "from-env");
        assert_eq!(config.admin.email, "admin@itzenith.com");
    }
}

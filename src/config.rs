use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub db_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    pub bootstrap_admin: Option<BootstrapAdmin>,
    pub storage: Option<StorageConfig>,
}

/// First administrator, created only while the users table is empty.
#[derive(Clone, Debug)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
}

/// S3-compatible bucket for item images.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub bucket: String,
    pub endpoint: Option<String>,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub public_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        let bootstrap_admin = match (
            optional("BOOTSTRAP_ADMIN_EMAIL"),
            optional("BOOTSTRAP_ADMIN_PASSWORD"),
        ) {
            (Some(email), Some(password)) => Some(BootstrapAdmin { email, password }),
            _ => None,
        };

        let storage = optional("STORAGE_BUCKET").map(|bucket| StorageConfig {
            bucket,
            endpoint: optional("STORAGE_ENDPOINT"),
            region: optional("STORAGE_REGION").unwrap_or_else(|| "auto".to_string()),
            access_key: optional("STORAGE_ACCESS_KEY").unwrap_or_default(),
            secret_key: optional("STORAGE_SECRET_KEY").unwrap_or_default(),
            public_url: optional("STORAGE_PUBLIC_URL"),
        });

        Ok(Config {
            database_url: env::var("DATABASE_URL")?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: parse_or(optional("SERVER_PORT"), 50051),
            db_max_connections: parse_or(optional("DB_MAX_CONNECTIONS"), 10),
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_ttl_hours: parse_or(optional("JWT_TTL_HOURS"), 24),
            bootstrap_admin,
            storage,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or::<u16>(None, 50051), 50051);
        assert_eq!(parse_or::<u16>(Some("8080".into()), 50051), 8080);
        assert_eq!(parse_or::<u16>(Some(" 9090 ".into()), 50051), 9090);
        assert_eq!(parse_or::<u16>(Some("not-a-port".into()), 50051), 50051);
    }

    #[test]
    fn test_server_addr() {
        let config = Config {
            database_url: "postgres://localhost/pharmacy".into(),
            server_host: "127.0.0.1".into(),
            server_port: 50051,
            db_max_connections: 10,
            jwt_secret: "secret".into(),
            jwt_ttl_hours: 24,
            bootstrap_admin: None,
            storage: None,
        };
        assert_eq!(config.server_addr(), "127.0.0.1:50051");
    }
}

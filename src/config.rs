use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Upper bound on pooled store connections. Default: 20.
    pub db_max_connections: u32,
    /// How long a request waits for a free store connection. Default: 5s.
    pub db_acquire_timeout_secs: u64,
    pub host: String,
    pub port: u16,
    pub client_url: String,

    pub jwt_secret: String,
    /// Session cookie lifetime. Default: 7 days.
    pub session_ttl_secs: i64,

    /// Upload endpoint of the external media host used for profile pictures.
    /// When unset, profile updates store the submitted value as-is.
    pub media_upload_url: Option<String>,

    /// "development" disables the Secure cookie flag so local HTTP works.
    pub app_env: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".into())
                .parse()
                .expect("DB_MAX_CONNECTIONS must be a number"),
            db_acquire_timeout_secs: env::var("DB_ACQUIRE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .expect("DB_ACQUIRE_TIMEOUT_SECS must be a number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            client_url: env::var("CLIENT_URL").unwrap_or_else(|_| "http://localhost:5173".into()),

            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            session_ttl_secs: env::var("SESSION_TTL_SECS")
                .unwrap_or_else(|_| "604800".into())
                .parse()
                .expect("SESSION_TTL_SECS must be a number"),

            media_upload_url: env::var("MEDIA_UPLOAD_URL").ok().filter(|s| !s.is_empty()),

            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cookie_secure(&self) -> bool {
        self.app_env != "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test that touches the process environment; everything else
    // builds Config literally.
    #[test]
    fn pool_settings_come_from_env_with_defaults() {
        env::set_var("DATABASE_URL", "postgres://localhost/wellness_test");
        env::set_var("JWT_SECRET", "test-secret");
        env::remove_var("DB_MAX_CONNECTIONS");
        env::remove_var("DB_ACQUIRE_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.db_max_connections, 20);
        assert_eq!(config.db_acquire_timeout_secs, 5);

        env::set_var("DB_MAX_CONNECTIONS", "50");
        env::set_var("DB_ACQUIRE_TIMEOUT_SECS", "10");

        let config = Config::from_env();
        assert_eq!(config.db_max_connections, 50);
        assert_eq!(config.db_acquire_timeout_secs, 10);
    }
}

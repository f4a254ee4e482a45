/// Credentials for the admin account seeded at startup.
#[derive(Clone)]
pub struct AdminSeed {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeed")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Runtime settings, read once at startup.
///
/// Every field has a local-development default; see [`ServerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// sqlx SQLite URL, e.g. `sqlite:data/site.db`.
    pub database_url: String,
    /// Root directory of the filesystem blob store.
    pub blob_dir: String,
    /// Origins allowed by CORS; `CORS_ORIGINS` is comma-separated.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Largest accepted upload request body, in bytes.
    pub max_upload_bytes: usize,
    /// Admin session lifetime.
    pub session_ttl_hours: i64,
    /// Admin seeded on startup when both credentials are set.
    pub admin_seed: Option<AdminSeed>,
}

impl ServerConfig {
    /// Read the process environment.
    ///
    /// | Variable               | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `DATABASE_URL`         | `sqlite:data/site.db`   |
    /// | `BLOB_DIR`             | `data/blobs`            |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`              |
    /// | `SESSION_TTL_HOURS`    | `24`                    |
    /// | `ADMIN_USERNAME`       | unset                   |
    /// | `ADMIN_PASSWORD`       | unset                   |
    ///
    /// # Panics
    ///
    /// On a numeric variable that does not parse, or a non-positive TTL.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let session_ttl_hours: i64 = parsed(&lookup, "SESSION_TTL_HOURS", 24);
        assert!(session_ttl_hours > 0, "SESSION_TTL_HOURS must be positive");

        let admin_seed = lookup("ADMIN_USERNAME")
            .zip(lookup("ADMIN_PASSWORD"))
            .filter(|(user, pass)| !user.is_empty() && !pass.is_empty())
            .map(|(username, password)| AdminSeed { username, password });

        Self {
            host: text("HOST", "0.0.0.0"),
            port: parsed(&lookup, "PORT", 3000),
            database_url: text("DATABASE_URL", "sqlite:data/site.db"),
            blob_dir: text("BLOB_DIR", "data/blobs"),
            cors_origins: text("CORS_ORIGINS", "http://localhost:5173")
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            request_timeout_secs: parsed(&lookup, "REQUEST_TIMEOUT_SECS", 30),
            max_upload_bytes: parsed(&lookup, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024),
            session_ttl_hours,
            admin_seed,
        }
    }

    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl_hours * 3600
    }
}

/// Parse `key` or fall back to `default`. A present but malformed value
/// stops startup.
fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid number, got '{raw}': {e}")),
        None => default,
    }
}

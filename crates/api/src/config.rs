/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development
/// against a MinIO or R2 bucket. In production, override via
/// environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Name of the content bucket.
    pub bucket: String,
    /// Custom S3 endpoint (e.g. an R2 account endpoint or a local
    /// MinIO). `None` uses the AWS default resolution.
    pub s3_endpoint_url: Option<String>,
    /// Public base URL under which bucket objects are served, used to
    /// build image delivery URLs.
    pub public_asset_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `CONTENT_BUCKET`        | `brickside-content`        |
    /// | `S3_ENDPOINT_URL`       | unset                      |
    /// | `PUBLIC_ASSET_BASE_URL` | `http://localhost:9000/brickside-content` |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let bucket =
            std::env::var("CONTENT_BUCKET").unwrap_or_else(|_| "brickside-content".into());

        let s3_endpoint_url = std::env::var("S3_ENDPOINT_URL").ok();

        let public_asset_base_url = std::env::var("PUBLIC_ASSET_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:9000/brickside-content".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            bucket,
            s3_endpoint_url,
            public_asset_base_url,
        }
    }
}

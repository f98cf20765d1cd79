//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::database::DatabaseConfig;

const DEFAULT_DATABASE_NAME: &str = "blog";
const DEFAULT_COLLECTION_NAME: &str = "blogpost";
const DEFAULT_LOCAL_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_PUBLIC_ORIGIN: &str = "https://cephard.github.io";

/// Deployment environment, parsed from `APP_ENVIRONMENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Unknown values fall back to production.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" | "develop" | "local" | "localhost" => Environment::Development,
            "staging" | "stage" | "stg" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// The two origins the browser front-end is served from.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: [String; 2],
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub database: Option<DatabaseConfig>,
    pub cors: CorsConfig,
    /// Interpolate title search text into the pattern without escaping.
    pub raw_title_pattern: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("BLOG_DATABASE_CONNECTION_STRING")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|connection_string| DatabaseConfig {
                connection_string,
                database_name: env::var("BLOG_DATABASE_NAME")
                    .unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string()),
                collection_name: env::var("BLOG_COLLECTION_NAME")
                    .unwrap_or_else(|_| DEFAULT_COLLECTION_NAME.to_string()),
            });

        let local_origin = env::var("CORS_ALLOWED_ORIGIN_LOCAL")
            .unwrap_or_else(|_| DEFAULT_LOCAL_ORIGIN.to_string());
        let public_origin = env::var("CORS_ALLOWED_ORIGIN_PUBLIC")
            .unwrap_or_else(|_| DEFAULT_PUBLIC_ORIGIN.to_string());

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: env::var("APP_ENVIRONMENT")
                .map(|v| Environment::parse(&v))
                .unwrap_or(Environment::Production),
            database,
            cors: CorsConfig {
                allowed_origins: [
                    normalize_origin(&local_origin),
                    normalize_origin(&public_origin),
                ],
            },
            raw_title_pattern: env::var("TITLE_SEARCH_RAW_PATTERN")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

/// Reduce a URL to the `scheme://host[:port]` form browsers send in `Origin`.
///
/// `https://cephard.github.io/blog/` becomes `https://cephard.github.io`.
pub fn normalize_origin(url: &str) -> String {
    let url = url.trim();
    match url.find("://") {
        Some(scheme_end) => {
            let authority_start = scheme_end + 3;
            let authority_end = url[authority_start..]
                .find('/')
                .map(|i| authority_start + i)
                .unwrap_or(url.len());
            url[..authority_end].to_string()
        }
        None => url.trim_end_matches('/').to_string(),
    }
}

//! CORS policy for the browser front-end.

use actix_cors::Cors;

use crate::config::CorsConfig;

/// Exactly the configured origins, any method, any header.
pub fn cors_policy(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
}

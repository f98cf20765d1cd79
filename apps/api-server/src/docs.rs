//! OpenAPI document and Swagger UI, served in development only.
//!
//! Utoipa only exposes operations listed in `#[openapi(paths(...))]`; each
//! handler still needs its own `#[utoipa::path(...)]` attribute.

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use blog_shared::ErrorResponse;
use blog_shared::dto::{BlogPostRequest, BlogPostResponse};

use crate::handlers::{blog_posts, root};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        blog_posts::create_post,
        blog_posts::list_posts,
        blog_posts::find_posts_by_title,
        blog_posts::update_post,
        blog_posts::delete_post,
    ),
    components(schemas(BlogPostRequest, BlogPostResponse, ErrorResponse)),
    tags(
        (name = "blogposts", description = "Blog post collection"),
        (name = "server", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Mount Swagger UI when `enabled`; otherwise register nothing.
pub fn configure_docs(cfg: &mut web::ServiceConfig, enabled: bool) {
    if enabled {
        cfg.service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url(OPENAPI_JSON_PATH, ApiDoc::openapi()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{TestRequest, call_service, init_service};
    use actix_web::{App, http::StatusCode};

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/"));
        assert!(paths.iter().any(|p| p.as_str() == "/blogposts"));
        assert!(paths.iter().any(|p| p.as_str() == "/blogposts/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/blogposts/{title}"));
    }

    #[actix_web::test]
    async fn test_docs_only_when_enabled() {
        let app = init_service(App::new().configure(|cfg| configure_docs(cfg, true))).await;
        let resp = call_service(&app, TestRequest::get().uri(OPENAPI_JSON_PATH).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let app = init_service(App::new().configure(|cfg| configure_docs(cfg, false))).await;
        let resp = call_service(&app, TestRequest::get().uri(OPENAPI_JSON_PATH).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

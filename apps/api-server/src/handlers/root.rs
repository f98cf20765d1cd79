//! Liveness endpoint.

use actix_web::HttpResponse;

/// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "server",
    responses((status = 200, description = "Server is up", body = String, content_type = "text/plain"))
)]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Blog API is running")
}

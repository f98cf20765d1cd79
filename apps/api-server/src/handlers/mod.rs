//! HTTP handlers and route configuration.

pub(crate) mod blog_posts;
pub(crate) mod root;


use actix_web::web;

/// Configure all application routes.
///
/// Methods sharing a path live on one resource so unsupported methods
/// answer 405 instead of 404. The single segment under `/blogposts` is a
/// title prefix for GET and an identifier for PUT and DELETE.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(root::root)))
        .service(
            web::scope("/blogposts")
                .service(
                    web::resource("")
                        .route(web::post().to(blog_posts::create_post))
                        .route(web::get().to(blog_posts::list_posts)),
                )
                .service(
                    web::resource("/{segment}")
                        .route(web::get().to(blog_posts::find_posts_by_title))
                        .route(web::put().to(blog_posts::update_post))
                        .route(web::delete().to(blog_posts::delete_post)),
                ),
        );
}

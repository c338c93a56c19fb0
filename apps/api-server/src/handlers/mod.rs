//! HTTP handlers and route configuration.

mod blog_posts;
mod health;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route("/api/health", web::get().to(health::health_check))
        .service(
            web::scope("/blogPostsRouter")
                .service(
                    web::resource(["", "/"])
                        .route(web::get().to(blog_posts::list))
                        .route(web::post().to(blog_posts::create)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(blog_posts::get))
                        .route(web::put().to(blog_posts::update))
                        .route(web::delete().to(blog_posts::delete)),
                ),
        );
}

//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod testing;
mod users;

use actix_web::web;

/// Configure all application routes.
///
/// `/posts/stats` is registered ahead of `/posts/{id}` so it is not captured
/// as an id.
pub fn configure_routes(cfg: &mut web::ServiceConfig, testing_routes: bool) {
    let mut api = web::scope("/api")
        // Public routes
        .route("/health", web::get().to(health::health_check))
        .route("/login", web::post().to(auth::login))
        // Users
        .route("/users", web::get().to(users::list))
        .route("/users", web::post().to(users::register))
        // Posts
        .route("/posts", web::get().to(posts::list))
        .route("/posts", web::post().to(posts::create))
        .route("/posts/stats", web::get().to(posts::stats))
        .route("/posts/{id}", web::get().to(posts::get))
        .route("/posts/{id}", web::put().to(posts::update))
        .route("/posts/{id}", web::delete().to(posts::delete));

    if testing_routes {
        api = api.route("/testing/reset", web::post().to(testing::reset));
    }

    cfg.service(api);
}

use axum::{routing::get, Extension, Router};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod service;
pub mod store;

use service::UserService;

pub fn app(users: UserService) -> Router {
    Router::new()
        .route(
            "/api/v1/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/api/v1/users/:username",
            get(handlers::users::get_user_by_username),
        )
        .layer(Extension(users))
        .layer(TraceLayer::new_for_http())
}

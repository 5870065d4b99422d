use axum::{extract::Path, http::StatusCode, Extension, Json};
use models::api::users::User;

use crate::error::ApiError;
use crate::service::UserService;

#[axum::debug_handler]
pub async fn list_users(Extension(users): Extension<UserService>) -> Json<Vec<User>> {
    Json(users.list())
}

#[axum::debug_handler]
pub async fn get_user_by_username(
    Extension(users): Extension<UserService>,
    Path(username): Path<String>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(users.get_by_username(&username)?))
}

#[axum::debug_handler]
pub async fn create_user(
    Extension(users): Extension<UserService>,
    Json(payload): Json<User>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = users.create(payload)?;

    Ok((StatusCode::CREATED, Json(user)))
}

//! # User API
//!
//! Opaque credential records. No login or session handling lives here;
//! this surface only creates and fetches records.

use actix_web::{get, post, web, HttpResponse, Responder};

use super::{AppError, AppResult};
use crate::db::{NewUser, Storage};

/// Creates a user.
///
/// Duplicate usernames are *not* rejected — the store contract is
/// permissive here — but an existing match is logged so an operator can
/// spot accidental doubles.
///
/// # Response
/// `201 Created` with the stored record.
#[post("/api/users")]
async fn create_user(
    storage: web::Data<dyn Storage>,
    data: web::Json<NewUser>,
) -> AppResult<impl Responder> {
    let data = data.into_inner();
    if data.username.trim().is_empty() {
        return Err(AppError::Validation("username is required".to_string()));
    }
    if data.password.is_empty() {
        return Err(AppError::Validation("password is required".to_string()));
    }

    if let Some(existing) = storage.get_user_by_username(&data.username).await? {
        tracing::warn!(
            username = %data.username,
            existing_id = %existing.id,
            "creating user with a username that already exists"
        );
    }

    let user = storage.create_user(data).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Fetches one user.
///
/// # Errors
/// - `404 Not Found` if no user has the given id
#[get("/api/users/{id}")]
async fn get_user(
    storage: web::Data<dyn Storage>,
    path: web::Path<String>,
) -> AppResult<impl Responder> {
    let id = path.into_inner();
    let user = storage
        .get_user(&id)
        .await?
        .ok_or_else(|| AppError::not_found("user", &id))?;
    Ok(HttpResponse::Ok().json(user))
}

/// Registers the user routes.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_user);
    cfg.service(get_user);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use serde_json::json;

    use super::*;
    use crate::db::{MemStorage, User};

    fn storage_data() -> web::Data<dyn Storage> {
        let storage: Arc<dyn Storage> = Arc::new(MemStorage::empty());
        web::Data::from(storage)
    }

    #[actix_web::test]
    async fn duplicate_usernames_both_succeed() {
        let app = test::init_service(
            App::new().app_data(storage_data()).configure(routes),
        )
        .await;

        let body = json!({ "username": "adrian", "password": "secret" });
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(&body)
            .to_request();
        let first: User = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(&body)
            .to_request();
        let second: User = test::call_and_read_body_json(&app, req).await;

        assert_ne!(first.id, second.id);
        assert_eq!(first.username, second.username);
    }

    #[actix_web::test]
    async fn empty_username_is_rejected() {
        let app = test::init_service(
            App::new().app_data(storage_data()).configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "username": "  ", "password": "secret" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}

//! # Menu API
//!
//! Read-only endpoints over the menu collection. The menu is maintained
//! through the seed loader, not through this surface, so there is no
//! create/update route here.

use actix_web::{get, web, HttpResponse, Responder};
use super::{AppError, AppResult};
use crate::db::Storage;

/// Lists the full menu.
///
/// # Response
/// `200 OK` with a JSON array of menu items. Order follows the backing
/// store (insertion order on the in-memory backend).
#[get("/api/menu")]
async fn get_menu(storage: web::Data<dyn Storage>) -> AppResult<impl Responder> {
    let items = storage.get_all_menu_items().await?;
    Ok(HttpResponse::Ok().json(items))
}

/// Lists the items highlighted on the home page.
#[get("/api/menu/featured")]
async fn get_featured(storage: web::Data<dyn Storage>) -> AppResult<impl Responder> {
    let items = storage.get_featured_menu_items().await?;
    Ok(HttpResponse::Ok().json(items))
}

/// Lists items in one category.
///
/// The match is exact and case-sensitive ("mains", not "Mains"); an
/// unknown category yields `200 OK` with an empty array, not a 404.
#[get("/api/menu/category/{category}")]
async fn get_by_category(
    storage: web::Data<dyn Storage>,
    path: web::Path<String>,
) -> AppResult<impl Responder> {
    let category = path.into_inner();
    let items = storage.get_menu_items_by_category(&category).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// Fetches one menu item.
///
/// # Errors
/// - `404 Not Found` if no item has the given id
#[get("/api/menu/{id}")]
async fn get_by_id(
    storage: web::Data<dyn Storage>,
    path: web::Path<String>,
) -> AppResult<impl Responder> {
    let id = path.into_inner();
    let item = storage
        .get_menu_item_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("menu item", &id))?;
    Ok(HttpResponse::Ok().json(item))
}

/// Registers the menu routes.
///
/// `/api/menu/featured` and `/api/menu/category/{category}` must come
/// before `/api/menu/{id}`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_menu);
    cfg.service(get_featured);
    cfg.service(get_by_category);
    cfg.service(get_by_id);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};

    use super::*;
    use crate::db::{MemStorage, MenuItem};

    fn storage_data() -> web::Data<dyn Storage> {
        let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());
        web::Data::from(storage)
    }

    #[actix_web::test]
    async fn menu_listing_returns_seeded_items() {
        let app = test::init_service(
            App::new().app_data(storage_data()).configure(routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/menu").to_request();
        let items: Vec<MenuItem> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(items.len(), 3);

        let req = test::TestRequest::get()
            .uri("/api/menu/featured")
            .to_request();
        let featured: Vec<MenuItem> = test::call_and_read_body_json(&app, req).await;
        assert!(featured.iter().all(|i| i.featured));
    }

    #[actix_web::test]
    async fn unknown_category_yields_empty_list_not_404() {
        let app = test::init_service(
            App::new().app_data(storage_data()).configure(routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/menu/category/brunch")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let items: Vec<MenuItem> = test::read_body_json(resp).await;
        assert!(items.is_empty());
    }

    #[actix_web::test]
    async fn unknown_id_yields_404() {
        let app = test::init_service(
            App::new().app_data(storage_data()).configure(routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/menu/no-such-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}

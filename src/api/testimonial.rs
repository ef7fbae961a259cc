//! # Testimonial API
//!
//! Read-only. Testimonials are curated through the seed loader and never
//! created via the public surface.

use actix_web::{get, web, HttpResponse, Responder};

use super::{AppError, AppResult};
use crate::db::Storage;

/// Lists every testimonial.
#[get("/api/testimonials")]
async fn get_testimonials(storage: web::Data<dyn Storage>) -> AppResult<impl Responder> {
    let testimonials = storage.get_all_testimonials().await?;
    Ok(HttpResponse::Ok().json(testimonials))
}

/// Fetches one testimonial.
///
/// # Errors
/// - `404 Not Found` if no testimonial has the given id
#[get("/api/testimonials/{id}")]
async fn get_testimonial(
    storage: web::Data<dyn Storage>,
    path: web::Path<String>,
) -> AppResult<impl Responder> {
    let id = path.into_inner();
    let testimonial = storage
        .get_testimonial_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("testimonial", &id))?;
    Ok(HttpResponse::Ok().json(testimonial))
}

/// Registers the testimonial routes.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_testimonials);
    cfg.service(get_testimonial);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};

    use super::*;
    use crate::db::{MemStorage, Testimonial};

    #[actix_web::test]
    async fn listing_and_lookup_agree() {
        let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(storage))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/testimonials")
            .to_request();
        let all: Vec<Testimonial> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 3);

        let req = test::TestRequest::get()
            .uri(&format!("/api/testimonials/{}", all[0].id))
            .to_request();
        let one: Testimonial = test::call_and_read_body_json(&app, req).await;
        assert_eq!(one, all[0]);
    }
}

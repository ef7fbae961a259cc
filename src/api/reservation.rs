//! # Reservation API
//!
//! Creating and listing table reservations. Reservations are immutable
//! once created; there is no confirm/cancel/update surface.
//!
//! The handler validates the *shape* of the request before it reaches the
//! store; the store itself performs no validation. There is deliberately
//! no overlap or capacity check — any number of reservations may exist
//! for the same date and time, and the restaurant resolves conflicts by
//! phone.

use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::NaiveDate;

use super::{AppError, AppResult};
use crate::db::{NewReservation, Storage};

/// Basic email shape check. Real address verification happens when the
/// restaurant replies to the confirmation mail, not here.
fn validate_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Validates a `YYYY-MM-DD` date string.
fn validate_date(date_str: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("invalid date format, use YYYY-MM-DD".to_string()))
}

fn validate(data: &NewReservation) -> AppResult<()> {
    if data.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if !validate_email(&data.email) {
        return Err(AppError::Validation("invalid email".to_string()));
    }
    if data.phone.trim().is_empty() {
        return Err(AppError::Validation("phone is required".to_string()));
    }
    if data.guests < 1 {
        return Err(AppError::Validation(
            "guests must be at least 1".to_string(),
        ));
    }
    validate_date(&data.date)?;
    // Time stays free-form ("7:00 PM" and friends); only presence is
    // required.
    if data.time.trim().is_empty() {
        return Err(AppError::Validation("time is required".to_string()));
    }
    Ok(())
}

/// Creates a reservation.
///
/// The store assigns `id` and `created_at`; the caller never supplies
/// either.
///
/// # Response
/// `201 Created` with the full stored record.
///
/// # Errors
/// - `400 Bad Request` on a failed shape check
/// - `500 Internal Server Error` on a database failure
#[post("/api/reservations")]
async fn create_reservation(
    storage: web::Data<dyn Storage>,
    data: web::Json<NewReservation>,
) -> AppResult<impl Responder> {
    let data = data.into_inner();
    validate(&data)?;

    let reservation = storage.create_reservation(data).await?;
    tracing::info!(
        id = %reservation.id,
        date = %reservation.date,
        time = %reservation.time,
        guests = reservation.guests,
        "reservation created"
    );
    Ok(HttpResponse::Created().json(reservation))
}

/// Lists every reservation.
#[get("/api/reservations")]
async fn get_reservations(storage: web::Data<dyn Storage>) -> AppResult<impl Responder> {
    let reservations = storage.get_all_reservations().await?;
    Ok(HttpResponse::Ok().json(reservations))
}

/// Fetches one reservation.
///
/// # Errors
/// - `404 Not Found` if no reservation has the given id
#[get("/api/reservations/{id}")]
async fn get_reservation(
    storage: web::Data<dyn Storage>,
    path: web::Path<String>,
) -> AppResult<impl Responder> {
    let id = path.into_inner();
    let reservation = storage
        .get_reservation_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("reservation", &id))?;
    Ok(HttpResponse::Ok().json(reservation))
}

/// Registers the reservation routes.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_reservation);
    cfg.service(get_reservations);
    cfg.service(get_reservation);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use serde_json::json;

    use super::*;
    use crate::db::{MemStorage, Reservation};

    fn storage_data() -> web::Data<dyn Storage> {
        let storage: Arc<dyn Storage> = Arc::new(MemStorage::empty());
        web::Data::from(storage)
    }

    #[actix_web::test]
    async fn creating_a_reservation_round_trips() {
        let app = test::init_service(
            App::new().app_data(storage_data()).configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reservations")
            .set_json(json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "555-0100",
                "date": "2025-12-01",
                "time": "7:00 PM",
                "guests": 4
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
        let created: Reservation = test::read_body_json(resp).await;
        assert!(!created.id.is_empty());
        assert!(created.special_requests.is_none());

        let req = test::TestRequest::get()
            .uri(&format!("/api/reservations/{}", created.id))
            .to_request();
        let fetched: Reservation = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn zero_guests_is_rejected() {
        let app = test::init_service(
            App::new().app_data(storage_data()).configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reservations")
            .set_json(json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "555-0100",
                "date": "2025-12-01",
                "time": "7:00 PM",
                "guests": 0
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn malformed_date_is_rejected() {
        let app = test::init_service(
            App::new().app_data(storage_data()).configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reservations")
            .set_json(json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "555-0100",
                "date": "12/01/2025",
                "time": "7:00 PM",
                "guests": 2
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unknown_reservation_id_yields_404() {
        let app = test::init_service(
            App::new().app_data(storage_data()).configure(routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/reservations/missing")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}

//! # API module
//!
//! JSON endpoints consumed by the static site, one module per entity
//! kind, plus the shared error types. Handlers are thin: translate the
//! request, call the injected [`Storage`](crate::db::Storage), translate
//! the result.
//!
//! - [`menu`] - menu item reads (all / featured / by category / by id)
//! - [`reservation`] - reservation creation and reads
//! - [`testimonial`] - testimonial reads
//! - [`user`] - user creation and reads
//! - [`errors`] - application error hierarchy

pub mod errors;
pub mod menu;
pub mod reservation;
pub mod testimonial;
pub mod user;

pub use errors::{AppError, AppResult, ErrorResponse};

use actix_web::web;

/// Registers every API route.
///
/// Literal menu paths (`/featured`, `/category/{category}`) are
/// registered before `/api/menu/{id}` so the id route does not swallow
/// them.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    menu::routes(cfg);
    reservation::routes(cfg);
    testimonial::routes(cfg);
    user::routes(cfg);
}

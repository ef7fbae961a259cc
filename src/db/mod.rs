//! # Storage layer
//!
//! The entity store contract and its two backends:
//!
//! - [`memory::MemStorage`] — volatile, process-local, pre-seeded with
//!   sample data; for local/offline runs and tests
//! - [`mongodb::MongoStorage`] — durable, backed by MongoDB; the
//!   production configuration
//!
//! Handlers depend only on the [`Storage`] trait, injected at startup as
//! `web::Data<dyn Storage>`, so the backend can be swapped without
//! touching the API surface.

pub mod fixtures;
pub mod memory;
pub mod models;
pub mod mongodb;

pub use memory::MemStorage;
pub use models::{
    MenuItem, NewMenuItem, NewReservation, NewTestimonial, NewUser, Reservation, Testimonial, User,
};
pub use mongodb::MongoStorage;

use crate::api::AppResult;
use async_trait::async_trait;

/// Backend-agnostic contract for reading and writing the four entity
/// kinds.
///
/// Semantics shared by every implementation:
///
/// - Lookups that find nothing return `Ok(None)` (or an empty `Vec`),
///   never an error. Only medium failures produce `Err`, and those are
///   surfaced unchanged — no retries, no local recovery.
/// - Create operations generate the record id (and `created_at` for
///   reservations) themselves; callers never supply either.
/// - There is no update operation for any entity, and no per-entity
///   delete. Bulk clearing exists only in the offline seed loader.
/// - `create_user` does not check for an existing username, and
///   `create_reservation` does not check for date/time overlap; both
///   are deliberately permissive.
#[async_trait]
pub trait Storage: Send + Sync {
    // User methods
    async fn get_user(&self, id: &str) -> AppResult<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn create_user(&self, user: NewUser) -> AppResult<User>;

    // Menu item methods
    /// Insertion order on the in-memory backend; no ordering guarantee on
    /// the durable backend.
    async fn get_all_menu_items(&self) -> AppResult<Vec<MenuItem>>;
    async fn get_menu_item_by_id(&self, id: &str) -> AppResult<Option<MenuItem>>;
    /// Exact, case-sensitive category match; an unknown category yields an
    /// empty list.
    async fn get_menu_items_by_category(&self, category: &str) -> AppResult<Vec<MenuItem>>;
    async fn get_featured_menu_items(&self) -> AppResult<Vec<MenuItem>>;

    // Reservation methods
    async fn create_reservation(&self, reservation: NewReservation) -> AppResult<Reservation>;
    async fn get_all_reservations(&self) -> AppResult<Vec<Reservation>>;
    async fn get_reservation_by_id(&self, id: &str) -> AppResult<Option<Reservation>>;

    // Testimonial methods
    async fn get_all_testimonials(&self) -> AppResult<Vec<Testimonial>>;
    async fn get_testimonial_by_id(&self, id: &str) -> AppResult<Option<Testimonial>>;
}

//! # MongoDB backend
//!
//! Durable implementation of [`Storage`]. One `Client`/`Database` pair is
//! held for the lifetime of the backend (connection pooling is the
//! driver's concern; the hosting process decides when the backend is
//! constructed and dropped). Every read is a single equality-filtered
//! query; every create builds the complete document — generated uuid id,
//! server-assigned `created_at` — before a single `insert_one`, so the
//! returned record needs no second round trip.

use std::env;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Cursor, Database};
use serde::de::DeserializeOwned;

use super::models::{
    MenuItem, NewReservation, NewUser, Reservation, Testimonial, User,
};
use super::Storage;
use crate::api::{AppError, AppResult};

/// Durable [`Storage`] backend over MongoDB.
#[derive(Debug, Clone)]
pub struct MongoStorage {
    database: Database,
}

impl MongoStorage {
    /// Connects using `MONGODB_URI` / `MONGODB_DATABASE` from the
    /// environment (defaults: `mongodb://localhost:27017`,
    /// `poseidons_catch`) and pings the server so a dead database fails
    /// at startup rather than on the first request.
    pub async fn init() -> AppResult<MongoStorage> {
        let uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database_name =
            env::var("MONGODB_DATABASE").unwrap_or_else(|_| "poseidons_catch".to_string());

        let client = Client::with_uri_str(&uri)
            .await
            .map_err(|e| AppError::database("connect", e))?;
        let database = client.database(&database_name);

        database
            .run_command(doc! {"ping": 1})
            .await
            .map_err(|e| AppError::database("ping", e))?;

        tracing::info!(database = %database_name, "MongoDB connection established");

        Ok(MongoStorage { database })
    }

    pub fn users(&self) -> Collection<User> {
        self.database.collection("users")
    }

    pub fn menu_items(&self) -> Collection<MenuItem> {
        self.database.collection("menu_items")
    }

    pub fn reservations(&self) -> Collection<Reservation> {
        self.database.collection("reservations")
    }

    pub fn testimonials(&self) -> Collection<Testimonial> {
        self.database.collection("testimonials")
    }
}

/// Drains a cursor into a vec, tagging failures with the operation name.
async fn collect<T>(mut cursor: Cursor<T>, operation: &str) -> AppResult<Vec<T>>
where
    T: DeserializeOwned + Send + Sync,
{
    let mut rows = Vec::new();
    while cursor
        .advance()
        .await
        .map_err(|e| AppError::database(operation, e))?
    {
        rows.push(
            cursor
                .deserialize_current()
                .map_err(|e| AppError::database(operation, e))?,
        );
    }
    Ok(rows)
}

#[async_trait]
impl Storage for MongoStorage {
    async fn get_user(&self, id: &str) -> AppResult<Option<User>> {
        self.users()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::database("get_user", e))
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.users()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::database("get_user_by_username", e))
    }

    async fn create_user(&self, new: NewUser) -> AppResult<User> {
        let user = User::with_generated_id(new);
        self.users()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::database("create_user", e))?;
        Ok(user)
    }

    async fn get_all_menu_items(&self) -> AppResult<Vec<MenuItem>> {
        let cursor = self
            .menu_items()
            .find(doc! {})
            .await
            .map_err(|e| AppError::database("get_all_menu_items", e))?;
        collect(cursor, "get_all_menu_items").await
    }

    async fn get_menu_item_by_id(&self, id: &str) -> AppResult<Option<MenuItem>> {
        self.menu_items()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::database("get_menu_item_by_id", e))
    }

    async fn get_menu_items_by_category(&self, category: &str) -> AppResult<Vec<MenuItem>> {
        let cursor = self
            .menu_items()
            .find(doc! { "category": category })
            .await
            .map_err(|e| AppError::database("get_menu_items_by_category", e))?;
        collect(cursor, "get_menu_items_by_category").await
    }

    async fn get_featured_menu_items(&self) -> AppResult<Vec<MenuItem>> {
        let cursor = self
            .menu_items()
            .find(doc! { "featured": true })
            .await
            .map_err(|e| AppError::database("get_featured_menu_items", e))?;
        collect(cursor, "get_featured_menu_items").await
    }

    async fn create_reservation(&self, new: NewReservation) -> AppResult<Reservation> {
        let reservation = Reservation::with_generated_id(new);
        self.reservations()
            .insert_one(&reservation)
            .await
            .map_err(|e| AppError::database("create_reservation", e))?;
        Ok(reservation)
    }

    async fn get_all_reservations(&self) -> AppResult<Vec<Reservation>> {
        let cursor = self
            .reservations()
            .find(doc! {})
            .await
            .map_err(|e| AppError::database("get_all_reservations", e))?;
        collect(cursor, "get_all_reservations").await
    }

    async fn get_reservation_by_id(&self, id: &str) -> AppResult<Option<Reservation>> {
        self.reservations()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::database("get_reservation_by_id", e))
    }

    async fn get_all_testimonials(&self) -> AppResult<Vec<Testimonial>> {
        let cursor = self
            .testimonials()
            .find(doc! {})
            .await
            .map_err(|e| AppError::database("get_all_testimonials", e))?;
        collect(cursor, "get_all_testimonials").await
    }

    async fn get_testimonial_by_id(&self, id: &str) -> AppResult<Option<Testimonial>> {
        self.testimonials()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::database("get_testimonial_by_id", e))
    }
}

//! # Entity models
//!
//! The four entity kinds stored by the application, plus the insert
//! payloads used to create them. Stored records carry a generated uuid
//! string as their primary key (serialized as `_id` for MongoDB); insert
//! payloads never carry an id — the store assigns it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque credential record. No authentication logic lives in this layer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub password: String,
}

impl User {
    /// Builds the stored record from an insert payload, assigning a fresh
    /// uuid. Both backends create users through this.
    pub fn with_generated_id(new: NewUser) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            username: new.username,
            password: new.password,
        }
    }
}

/// Payload for creating a [`User`]. Duplicate usernames are not rejected
/// at this layer.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// A dish or drink on the menu.
///
/// `category` is a free-form string ("appetizers", "mains", "desserts",
/// "drinks" in the fixture data); `dietary` is an ordered list of
/// case-sensitive tag strings ("vegan", "vegetarian", "gluten-free").
/// `price` is a display string, not an amount.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub dietary: Vec<String>,
    pub featured: bool,
}

impl MenuItem {
    /// Builds the stored record from an insert payload, assigning a fresh
    /// uuid.
    pub fn with_generated_id(new: NewMenuItem) -> Self {
        MenuItem {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            category: new.category,
            description: new.description,
            price: new.price,
            image: new.image,
            dietary: new.dietary,
            featured: new.featured,
        }
    }
}

/// Payload for creating a [`MenuItem`]. `featured` defaults to false when
/// omitted from the JSON body.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub image: String,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// A table reservation. Immutable once created: there is no update or
/// delete operation for reservations anywhere in the store contract.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reservation {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Reservation date, `YYYY-MM-DD`.
    pub date: String,
    /// Reservation time as entered by the guest, e.g. "7:00 PM".
    pub time: String,
    pub guests: i32,
    #[serde(default)]
    pub special_requests: Option<String>,
    /// Assigned once by the store at creation, never by the caller.
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Builds the stored record from an insert payload, assigning a fresh
    /// uuid and stamping `created_at` with the current time. This is the
    /// only place `created_at` is ever set.
    pub fn with_generated_id(new: NewReservation) -> Self {
        Reservation {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            date: new.date,
            time: new.time,
            guests: new.guests,
            special_requests: new.special_requests,
            created_at: Utc::now(),
        }
    }
}

/// Payload for creating a [`Reservation`]. `special_requests` omitted from
/// the body becomes `None`, never an empty string.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewReservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: i32,
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// A guest review shown on the marketing pages. Seeded, read-only from the
/// public surface.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Star rating, 1 to 5.
    pub rating: i32,
    pub comment: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Testimonial {
    /// Builds the stored record from an insert payload, assigning a fresh
    /// uuid.
    pub fn with_generated_id(new: NewTestimonial) -> Self {
        Testimonial {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            rating: new.rating,
            comment: new.comment,
            avatar: new.avatar,
        }
    }
}

/// Payload for creating a [`Testimonial`]; used only by fixtures and the
/// seed loader.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewTestimonial {
    pub name: String,
    pub rating: i32,
    pub comment: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

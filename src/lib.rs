//! # Poseidon's Catch
//!
//! Backend for the Poseidon's Catch restaurant site: a static marketing
//! front served by actix-files and a thin JSON API over four entity
//! kinds (menu items, reservations, testimonials, users).
//!
//! The interesting part is the storage layer: one [`db::Storage`]
//! contract with two interchangeable backends, a pre-seeded in-memory
//! one for offline runs and a MongoDB one for production. The `seed`
//! binary repopulates the production database with the curated fixture
//! set.

pub mod api;
pub mod db;

//! # In-memory backend
//!
//! Volatile implementation of [`Storage`] for environments without a
//! MongoDB connection. Four independent id-to-record tables live in
//! process memory for the lifetime of the process; the backend seeds
//! itself with a small fixture subset at construction so the site is
//! immediately browsable.
//!
//! Iteration preserves insertion order. Secondary-key lookups (username)
//! are linear scans, which is fine at the tens-to-hundreds of rows this
//! application holds.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::models::{
    MenuItem, NewReservation, NewUser, Reservation, Testimonial, User,
};
use super::{fixtures, Storage};
use crate::api::{AppError, AppResult};

/// Id-to-record map that remembers insertion order.
struct Table<T> {
    rows: HashMap<String, T>,
    order: Vec<String>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Table {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn insert(&mut self, id: String, row: T) {
        // Ids are freshly generated uuids, so this never replaces.
        self.order.push(id.clone());
        self.rows.insert(id, row);
    }

    fn get(&self, id: &str) -> Option<T> {
        self.rows.get(id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.rows.get(id).cloned())
            .collect()
    }
}

/// Process-local [`Storage`] backend.
pub struct MemStorage {
    users: RwLock<Table<User>>,
    menu_items: RwLock<Table<MenuItem>>,
    reservations: RwLock<Table<Reservation>>,
    testimonials: RwLock<Table<Testimonial>>,
}

impl MemStorage {
    /// Creates the backend pre-populated with the sample fixture subset.
    pub fn new() -> Self {
        let storage = Self::empty();
        {
            let mut menu = storage
                .menu_items
                .write()
                .unwrap_or_else(|e| e.into_inner());
            for new in fixtures::sample_menu_items() {
                let item = MenuItem::with_generated_id(new);
                menu.insert(item.id.clone(), item);
            }
            let mut reviews = storage
                .testimonials
                .write()
                .unwrap_or_else(|e| e.into_inner());
            for new in fixtures::sample_testimonials() {
                let testimonial = Testimonial::with_generated_id(new);
                reviews.insert(testimonial.id.clone(), testimonial);
            }
        }
        storage
    }

    /// Creates the backend with no data at all. Used by tests that need a
    /// known-empty store.
    pub fn empty() -> Self {
        MemStorage {
            users: RwLock::new(Table::new()),
            menu_items: RwLock::new(Table::new()),
            reservations: RwLock::new(Table::new()),
            testimonials: RwLock::new(Table::new()),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a poisoned-lock error to an internal storage fault.
fn poisoned() -> AppError {
    AppError::Internal("in-memory storage lock poisoned".to_string())
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().map_err(|_| poisoned())?.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users
            .all()
            .into_iter()
            .find(|user| user.username == username))
    }

    async fn create_user(&self, new: NewUser) -> AppResult<User> {
        let user = User::with_generated_id(new);
        let mut users = self.users.write().map_err(|_| poisoned())?;
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_all_menu_items(&self) -> AppResult<Vec<MenuItem>> {
        Ok(self.menu_items.read().map_err(|_| poisoned())?.all())
    }

    async fn get_menu_item_by_id(&self, id: &str) -> AppResult<Option<MenuItem>> {
        Ok(self.menu_items.read().map_err(|_| poisoned())?.get(id))
    }

    async fn get_menu_items_by_category(&self, category: &str) -> AppResult<Vec<MenuItem>> {
        let items = self.menu_items.read().map_err(|_| poisoned())?;
        Ok(items
            .all()
            .into_iter()
            .filter(|item| item.category == category)
            .collect())
    }

    async fn get_featured_menu_items(&self) -> AppResult<Vec<MenuItem>> {
        let items = self.menu_items.read().map_err(|_| poisoned())?;
        Ok(items.all().into_iter().filter(|item| item.featured).collect())
    }

    async fn create_reservation(&self, new: NewReservation) -> AppResult<Reservation> {
        let reservation = Reservation::with_generated_id(new);
        let mut reservations = self.reservations.write().map_err(|_| poisoned())?;
        reservations.insert(reservation.id.clone(), reservation.clone());
        Ok(reservation)
    }

    async fn get_all_reservations(&self) -> AppResult<Vec<Reservation>> {
        Ok(self.reservations.read().map_err(|_| poisoned())?.all())
    }

    async fn get_reservation_by_id(&self, id: &str) -> AppResult<Option<Reservation>> {
        Ok(self.reservations.read().map_err(|_| poisoned())?.get(id))
    }

    async fn get_all_testimonials(&self) -> AppResult<Vec<Testimonial>> {
        Ok(self.testimonials.read().map_err(|_| poisoned())?.all())
    }

    async fn get_testimonial_by_id(&self, id: &str) -> AppResult<Option<Testimonial>> {
        Ok(self.testimonials.read().map_err(|_| poisoned())?.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashSet;

    fn reservation_input(special_requests: Option<&str>) -> NewReservation {
        NewReservation {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-0100".to_string(),
            date: "2025-12-01".to_string(),
            time: "7:00 PM".to_string(),
            guests: 4,
            special_requests: special_requests.map(|s| s.to_string()),
        }
    }

    #[tokio::test]
    async fn created_users_get_unique_nonempty_ids() {
        let storage = MemStorage::empty();
        let mut seen = HashSet::new();
        for n in 0..50 {
            let user = storage
                .create_user(NewUser {
                    username: format!("guest{n}"),
                    password: "secret".to_string(),
                })
                .await
                .unwrap();
            assert!(!user.id.is_empty());
            assert!(seen.insert(user.id));
        }
    }

    #[tokio::test]
    async fn duplicate_usernames_are_not_rejected() {
        let storage = MemStorage::empty();
        let input = NewUser {
            username: "adrian".to_string(),
            password: "secret".to_string(),
        };
        let first = storage.create_user(input.clone()).await.unwrap();
        let second = storage.create_user(input).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn username_lookup_on_empty_store_is_absent() {
        let storage = MemStorage::empty();
        let found = storage.get_user_by_username("nonexistent").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn lookups_by_unknown_id_are_absent_for_every_kind() {
        let storage = MemStorage::new();
        assert!(storage.get_user("missing").await.unwrap().is_none());
        assert!(storage.get_menu_item_by_id("missing").await.unwrap().is_none());
        assert!(storage.get_reservation_by_id("missing").await.unwrap().is_none());
        assert!(storage.get_testimonial_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn seeded_store_is_browsable() {
        let storage = MemStorage::new();
        let items = storage.get_all_menu_items().await.unwrap();
        assert_eq!(items.len(), 3);
        let reviews = storage.get_all_testimonials().await.unwrap();
        assert_eq!(reviews.len(), 3);

        let by_id = storage
            .get_menu_item_by_id(&items[0].id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_id, items[0]);
    }

    #[tokio::test]
    async fn featured_is_exactly_the_featured_subset_of_all() {
        let storage = MemStorage::new();
        let all = storage.get_all_menu_items().await.unwrap();
        let featured = storage.get_featured_menu_items().await.unwrap();
        let expected: Vec<_> = all.iter().filter(|i| i.featured).cloned().collect();
        assert_eq!(featured, expected);
    }

    #[tokio::test]
    async fn category_filter_is_exact_match() {
        let storage = MemStorage::new();
        let all = storage.get_all_menu_items().await.unwrap();
        for category in ["appetizers", "mains", "desserts", "drinks"] {
            let filtered = storage.get_menu_items_by_category(category).await.unwrap();
            let expected: Vec<_> = all
                .iter()
                .filter(|i| i.category == category)
                .cloned()
                .collect();
            assert_eq!(filtered, expected);
        }
        // Case-sensitive, and unknown categories yield an empty list.
        assert!(storage
            .get_menu_items_by_category("Mains")
            .await
            .unwrap()
            .is_empty());
        assert!(storage
            .get_menu_items_by_category("brunch")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn menu_items_come_back_in_insertion_order() {
        let storage = MemStorage::new();
        let before = storage.get_all_menu_items().await.unwrap();
        let again = storage.get_all_menu_items().await.unwrap();
        assert_eq!(before, again);
    }

    #[tokio::test]
    async fn reservation_gets_server_assigned_id_and_timestamp() {
        let storage = MemStorage::empty();
        let before = Utc::now();
        let created = storage
            .create_reservation(reservation_input(None))
            .await
            .unwrap();
        assert!(!created.id.is_empty());
        assert!(created.created_at >= before);
        assert!(created.special_requests.is_none());

        let fetched = storage
            .get_reservation_by_id(&created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn double_booking_the_same_slot_succeeds() {
        let storage = MemStorage::empty();
        let first = storage
            .create_reservation(reservation_input(Some("window table")))
            .await
            .unwrap();
        let second = storage
            .create_reservation(reservation_input(Some("window table")))
            .await
            .unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(storage.get_all_reservations().await.unwrap().len(), 2);
    }

    #[test]
    fn backend_works_from_a_plain_blocking_context() {
        // The async contract exists for interchangeability with the
        // MongoDB backend; no runtime reactor is actually needed.
        let storage = MemStorage::new();
        let items = tokio_test::block_on(storage.get_all_menu_items()).unwrap();
        assert_eq!(items.len(), 3);
    }
}

//! # Seed loader
//!
//! One-shot job that replaces the menu and testimonial collections with
//! the curated fixture set. Run it out of band, never from the request
//! path:
//!
//! ```bash
//! MONGODB_URI=mongodb://localhost:27017 cargo run --bin seed
//! ```
//!
//! Per collection the protocol is: delete everything, insert the full
//! fixture list, report the count. The two steps are not wrapped in a
//! transaction; a failure between them leaves the collection empty, and
//! the fix is to rerun the loader. Running it twice converges on the
//! same row counts. Any database failure is fatal and exits non-zero.

use poseidons_catch::api::AppResult;
use poseidons_catch::db::{fixtures, MenuItem, MongoStorage, Storage, Testimonial};

use mongodb::bson::doc;

async fn seed(storage: &MongoStorage) -> AppResult<()> {
    tracing::info!("seeding Poseidon's Catch database...");

    let menu_items: Vec<_> = fixtures::menu_items()
        .into_iter()
        .map(MenuItem::with_generated_id)
        .collect();
    tracing::info!("inserting {} menu items...", menu_items.len());
    storage.menu_items().delete_many(doc! {}).await?;
    storage.menu_items().insert_many(&menu_items).await?;

    let testimonials: Vec<_> = fixtures::testimonials()
        .into_iter()
        .map(Testimonial::with_generated_id)
        .collect();
    tracing::info!("inserting {} testimonials...", testimonials.len());
    storage.testimonials().delete_many(doc! {}).await?;
    storage.testimonials().insert_many(&testimonials).await?;

    // Read the counts back through the store contract rather than
    // trusting the insert results.
    let menu_count = storage.get_all_menu_items().await?.len();
    let testimonial_count = storage.get_all_testimonials().await?.len();
    tracing::info!(
        "seeding complete: {} menu items, {} testimonials",
        menu_count,
        testimonial_count
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("seed=info".parse().unwrap())
                .add_directive("poseidons_catch=info".parse().unwrap()),
        )
        .init();

    let storage = match MongoStorage::init().await {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!("error connecting to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = seed(&storage).await {
        tracing::error!("error seeding database: {}", e);
        std::process::exit(1);
    }
}

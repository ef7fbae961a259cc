//! # Poseidon's Catch server
//!
//! Web server for the restaurant site, built with Actix Web over a
//! swappable storage backend.
//!
//! ## Configuration
//!
//! Environment variables (a `.env` file is honored):
//!
//! ```env
//! # Storage backend: "mongodb" (default) or "memory"
//! STORAGE_BACKEND=mongodb
//!
//! # MongoDB, used when STORAGE_BACKEND=mongodb
//! MONGODB_URI=mongodb://localhost:27017
//! MONGODB_DATABASE=poseidons_catch
//!
//! # Server
//! BIND_ADDRESS=0.0.0.0:8080
//!
//! # Logging
//! RUST_LOG=debug,mongodb=info
//! ```
//!
//! ## Running
//!
//! ```bash
//! # Offline, no database needed (pre-seeded sample data):
//! STORAGE_BACKEND=memory cargo run
//!
//! # Production configuration:
//! cargo run                 # expects MongoDB; seed it first with:
//! cargo run --bin seed
//! ```

use std::env;
use std::sync::Arc;

use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};

use poseidons_catch::api;
use poseidons_catch::db::{MemStorage, MongoStorage, Storage};

/// Builds the storage backend selected by `STORAGE_BACKEND`.
///
/// The store is constructed exactly once here and injected into the
/// handlers; nothing else in the process holds storage state.
async fn build_storage() -> std::io::Result<Arc<dyn Storage>> {
    let backend = env::var("STORAGE_BACKEND").unwrap_or_else(|_| "mongodb".to_string());
    match backend.as_str() {
        "memory" => {
            tracing::info!("using in-memory storage backend (volatile, pre-seeded)");
            Ok(Arc::new(MemStorage::new()))
        }
        "mongodb" => {
            let storage = MongoStorage::init().await.map_err(|e| {
                tracing::error!("error connecting to MongoDB: {}", e);
                std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("MongoDB error: {}", e),
                )
            })?;
            tracing::info!("using MongoDB storage backend");
            Ok(Arc::new(storage))
        }
        other => Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!(
                "unknown STORAGE_BACKEND '{}', expected 'mongodb' or 'memory'",
                other
            ),
        )),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("poseidons_catch=debug".parse().unwrap())
                .add_directive("mongodb=info".parse().unwrap()),
        )
        .init();

    tracing::info!("starting Poseidon's Catch server...");

    let storage = build_storage().await?;
    let storage_data = web::Data::from(storage);

    let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    tracing::info!("server listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(storage_data.clone())
            .wrap(Logger::default())
            .configure(api::init_routes)
            .service(Files::new("/static", "./static"))
            .route(
                "/",
                web::get().to(|| async {
                    actix_web::HttpResponse::PermanentRedirect()
                        .append_header(("Location", "/static/index.html"))
                        .finish()
                }),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}

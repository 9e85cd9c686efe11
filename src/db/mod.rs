pub mod ids;
pub mod orders;

use sea_orm::{Database, DatabaseConnection};
use std::env;

/// Create a SeaORM connection pool from the `DATABASE_URL` env var. The
/// server cannot do anything useful without a database, so a failed connect
/// is logged and aborts startup.
pub async fn create_pool() -> DatabaseConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    match Database::connect(&database_url).await {
        Ok(db) => {
            tracing::info!("Connected to Postgres");
            db
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database");
            panic!("Failed to connect to database: {e}");
        }
    }
}

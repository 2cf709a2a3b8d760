//! Database configuration module.
//!
//! Handles store connection and table creation using `SeaORM`. The default
//! store is an in-memory `SQLite` database, so state lives for exactly one
//! process; point `DATABASE_URL` at a file to keep it around. Tables are
//! generated straight from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the
//! Rust structs without hand-written SQL.

use crate::entities::{Activity, Customer, Lead, Product, Quote, QuoteItem};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or falls back to an
/// in-memory store.
#[must_use]
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string())
}

/// Establishes the store connection.
///
/// The returned handle is the store: it is created once at startup and
/// passed by reference to every operation in this crate.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(database_url()).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let customer_table = schema.create_table_from_entity(Customer);
    let product_table = schema.create_table_from_entity(Product);
    let lead_table = schema.create_table_from_entity(Lead);
    let quote_table = schema.create_table_from_entity(Quote);
    let quote_item_table = schema.create_table_from_entity(QuoteItem);
    let activity_table = schema.create_table_from_entity(Activity);

    db.execute(builder.build(&customer_table)).await?;
    db.execute(builder.build(&product_table)).await?;
    db.execute(builder.build(&lead_table)).await?;
    db.execute(builder.build(&quote_table)).await?;
    db.execute(builder.build(&quote_item_table)).await?;
    db.execute(builder.build(&activity_table)).await?;

    Ok(())
}

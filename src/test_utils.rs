//! Shared test utilities.
//!
//! Common helper functions for setting up in-memory test stores and
//! creating records with sensible defaults.

use crate::{
    core::{activity, customer, lead, product},
    entities::{self, ActivityKind, CustomerStatus, LeadStage},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` store with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a [`customer::NewCustomer`] with sensible defaults, without
/// touching a store. Used by validation tests.
#[must_use]
pub fn test_new_customer(name: &str, email: &str) -> customer::NewCustomer {
    customer::NewCustomer {
        name: name.to_string(),
        email: email.to_string(),
        phone: "+1-555-0000".to_string(),
        company: "Acme Corp".to_string(),
        address: "1 Main St".to_string(),
        status: CustomerStatus::Active,
        last_contact: chrono::Utc::now(),
        total_value: 0.0,
    }
}

/// Creates a test customer with defaults; the email is derived from the
/// name.
pub async fn create_test_customer(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::customer::Model> {
    let email = format!(
        "{}@example.com",
        name.to_lowercase().replace(' ', ".")
    );
    customer::create_customer(db, test_new_customer(name, &email)).await
}

/// Creates a test customer with custom identity fields.
pub async fn create_custom_customer(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    company: &str,
    status: CustomerStatus,
) -> Result<entities::customer::Model> {
    let mut new = test_new_customer(name, email);
    new.company = company.to_string();
    new.status = status;
    customer::create_customer(db, new).await
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * price: 10.0
/// * category: "Software"
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::product::Model> {
    create_custom_product(db, name, 10.0, "Software").await
}

/// Creates a test product with custom price and category.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
    category: &str,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        name.to_string(),
        "Catalog item".to_string(),
        price,
        category.to_string(),
        true,
        None,
    )
    .await
}

/// Builds a [`lead::NewLead`] with sensible defaults, without touching a
/// store.
///
/// # Defaults
/// * value: 10000.0
/// * stage: prospect
/// * probability: 50
#[must_use]
pub fn test_new_lead(customer_id: i64, title: &str) -> lead::NewLead {
    lead::NewLead {
        customer_id,
        title: title.to_string(),
        description: "Test opportunity".to_string(),
        value: 10000.0,
        stage: LeadStage::Prospect,
        probability: 50,
        expected_close_date: chrono::Utc::now() + chrono::Duration::days(60),
        assigned_to: "Sales Rep 1".to_string(),
    }
}

/// Creates a test lead with sensible defaults.
pub async fn create_test_lead(
    db: &DatabaseConnection,
    customer_id: i64,
    title: &str,
) -> Result<entities::lead::Model> {
    lead::create_lead(db, test_new_lead(customer_id, title)).await
}

/// Builds an [`activity::NewActivity`] with sensible defaults, without
/// touching a store.
///
/// # Defaults
/// * kind: call
/// * duration: 30 minutes
#[must_use]
pub fn test_new_activity(customer_id: i64, description: &str) -> activity::NewActivity {
    activity::NewActivity {
        kind: ActivityKind::Call,
        customer_id,
        lead_id: None,
        description: description.to_string(),
        date: chrono::Utc::now(),
        duration_minutes: Some(30),
        outcome: "Positive".to_string(),
        next_action: None,
    }
}

/// Creates a test activity with sensible defaults.
pub async fn create_test_activity(
    db: &DatabaseConnection,
    customer_id: i64,
    description: &str,
) -> Result<entities::activity::Model> {
    activity::create_activity(db, test_new_activity(customer_id, description)).await
}

/// Sets up a complete test environment with one customer.
/// Returns (db, customer) for common test scenarios.
pub async fn setup_with_customer() -> Result<(DatabaseConnection, entities::customer::Model)> {
    let db = setup_test_db().await?;
    let customer = create_test_customer(&db, "Test Customer").await?;
    Ok((db, customer))
}

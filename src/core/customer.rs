//! Customer business logic - Handles all customer-related operations.
//!
//! Provides functions for creating, retrieving, updating, searching, and
//! deleting customers. Customers are the only records in the system that
//! support hard deletion; records that reference a deleted customer keep
//! their id and name snapshot.

use crate::{
    entities::{Customer, CustomerStatus, customer},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, prelude::*};

/// Fields required to create a customer. The store assigns `id` and
/// `created_at` itself.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    /// Contact name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Company the contact works for
    pub company: String,
    /// Postal address
    pub address: String,
    /// Relationship state of the account
    pub status: CustomerStatus,
    /// When the customer was last contacted
    pub last_contact: DateTimeUtc,
    /// Lifetime value of the account in dollars
    pub total_value: f64,
}

/// Partial update for a customer. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    /// New contact name
    pub name: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New phone number
    pub phone: Option<String>,
    /// New company
    pub company: Option<String>,
    /// New postal address
    pub address: Option<String>,
    /// New relationship state
    pub status: Option<CustomerStatus>,
    /// New last-contact timestamp
    pub last_contact: Option<DateTimeUtc>,
    /// New lifetime value
    pub total_value: Option<f64>,
}

impl CustomerUpdate {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.company.is_none()
            && self.address.is_none()
            && self.status.is_none()
            && self.last_contact.is_none()
            && self.total_value.is_none()
    }
}

/// Retrieves all customers in insertion order.
pub async fn list_customers(db: &DatabaseConnection) -> Result<Vec<customer::Model>> {
    Customer::find()
        .order_by_asc(customer::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a customer by its unique ID, returning None if not found.
pub async fn get_customer(
    db: &DatabaseConnection,
    customer_id: i64,
) -> Result<Option<customer::Model>> {
    Customer::find_by_id(customer_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new customer, performing input validation.
///
/// The name and email must be non-empty and the lifetime value must be a
/// non-negative finite amount. `created_at` is stamped with the current time.
pub async fn create_customer(
    db: &DatabaseConnection,
    new: NewCustomer,
) -> Result<customer::Model> {
    if new.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Customer name cannot be empty".to_string(),
        });
    }

    if new.email.trim().is_empty() {
        return Err(Error::Config {
            message: "Customer email cannot be empty".to_string(),
        });
    }

    if new.total_value < 0.0 || !new.total_value.is_finite() {
        return Err(Error::InvalidAmount {
            amount: new.total_value,
        });
    }

    let customer = customer::ActiveModel {
        name: Set(new.name.trim().to_string()),
        email: Set(new.email.trim().to_string()),
        phone: Set(new.phone),
        company: Set(new.company),
        address: Set(new.address),
        status: Set(new.status),
        created_at: Set(chrono::Utc::now()),
        last_contact: Set(new.last_contact),
        total_value: Set(new.total_value),
        ..Default::default()
    };

    customer.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to an existing customer.
///
/// Only the fields present in `update` are written; everything else keeps
/// its current value. Addressing an unknown id yields
/// [`Error::CustomerNotFound`] rather than a panic.
pub async fn update_customer(
    db: &DatabaseConnection,
    customer_id: i64,
    update: CustomerUpdate,
) -> Result<customer::Model> {
    if let Some(value) = update.total_value {
        if value < 0.0 || !value.is_finite() {
            return Err(Error::InvalidAmount { amount: value });
        }
    }

    let existing = Customer::find_by_id(customer_id)
        .one(db)
        .await?
        .ok_or(Error::CustomerNotFound { id: customer_id })?;

    if update.is_empty() {
        return Ok(existing);
    }

    let mut customer: customer::ActiveModel = existing.into();

    if let Some(name) = update.name {
        customer.name = Set(name);
    }
    if let Some(email) = update.email {
        customer.email = Set(email);
    }
    if let Some(phone) = update.phone {
        customer.phone = Set(phone);
    }
    if let Some(company) = update.company {
        customer.company = Set(company);
    }
    if let Some(address) = update.address {
        customer.address = Set(address);
    }
    if let Some(status) = update.status {
        customer.status = Set(status);
    }
    if let Some(last_contact) = update.last_contact {
        customer.last_contact = Set(last_contact);
    }
    if let Some(total_value) = update.total_value {
        customer.total_value = Set(total_value);
    }

    customer.update(db).await.map_err(Into::into)
}

/// Hard-deletes a customer. Returns whether a record was removed.
///
/// Leads, quotes, and activities referencing the customer are left in
/// place with their id and name snapshot.
pub async fn delete_customer(db: &DatabaseConnection, customer_id: i64) -> Result<bool> {
    let result = Customer::delete_by_id(customer_id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Searches customers by case-insensitive substring over name, company, or
/// email, optionally narrowed to a status. An empty query matches everything.
pub async fn search_customers(
    db: &DatabaseConnection,
    query: &str,
    status: Option<CustomerStatus>,
) -> Result<Vec<customer::Model>> {
    let mut find = Customer::find();

    if !query.is_empty() {
        find = find.filter(
            Condition::any()
                .add(customer::Column::Name.contains(query))
                .add(customer::Column::Company.contains(query))
                .add(customer::Column::Email.contains(query)),
        );
    }

    if let Some(status) = status {
        find = find.filter(customer::Column::Status.eq(status));
    }

    find.order_by_asc(customer::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_customer_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        // Empty name
        let result = create_customer(&db, test_new_customer("", "a@b.com")).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        // Whitespace-only name
        let result = create_customer(&db, test_new_customer("   ", "a@b.com")).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        // Empty email
        let result = create_customer(&db, test_new_customer("Ada", "")).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        // Negative lifetime value
        let mut new = test_new_customer("Ada", "ada@acme.com");
        new.total_value = -1.0;
        let result = create_customer(&db, new).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -1.0 }
        ));

        // Non-finite lifetime value
        let mut new = test_new_customer("Ada", "ada@acme.com");
        new.total_value = f64::NAN;
        let result = create_customer(&db, new).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidAmount { amount: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_customer_assigns_unique_ids() -> Result<()> {
        let db = setup_test_db().await?;

        let first = create_test_customer(&db, "Ada Lovelace").await?;
        let second = create_test_customer(&db, "Grace Hopper").await?;

        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "Ada Lovelace");
        assert_eq!(first.status, CustomerStatus::Active);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_customers_insertion_order() -> Result<()> {
        let db = setup_test_db().await?;

        let first = create_test_customer(&db, "Zoe").await?;
        let second = create_test_customer(&db, "Adam").await?;

        // Insertion order, not alphabetical
        let customers = list_customers(&db).await?;
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0], first);
        assert_eq!(customers[1], second);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_customer_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_test_customer(&db, "Ada Lovelace").await?;

        let found = get_customer(&db, created.id).await?;
        assert_eq!(found.unwrap(), created);

        let not_found = get_customer(&db, 999).await?;
        assert!(not_found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_customer_partial_fields() -> Result<()> {
        let db = setup_test_db().await?;

        let customer = create_test_customer(&db, "Ada Lovelace").await?;

        let updated = update_customer(
            &db,
            customer.id,
            CustomerUpdate {
                status: Some(CustomerStatus::Inactive),
                ..Default::default()
            },
        )
        .await?;

        // Status changed, everything else untouched
        assert_eq!(updated.status, CustomerStatus::Inactive);
        assert_eq!(updated.name, customer.name);
        assert_eq!(updated.email, customer.email);
        assert_eq!(updated.phone, customer.phone);
        assert_eq!(updated.company, customer.company);
        assert_eq!(updated.total_value, customer.total_value);
        assert_eq!(updated.created_at, customer.created_at);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_customer_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_customer(
            &db,
            999,
            CustomerUpdate {
                status: Some(CustomerStatus::Inactive),
                ..Default::default()
            },
        )
        .await;

        assert!(matches!(
            result.unwrap_err(),
            Error::CustomerNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_customer_empty_update_is_noop() -> Result<()> {
        let db = setup_test_db().await?;

        let customer = create_test_customer(&db, "Ada Lovelace").await?;
        let updated = update_customer(&db, customer.id, CustomerUpdate::default()).await?;
        assert_eq!(updated, customer);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_customer_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let customer = create_test_customer(&db, "Ada Lovelace").await?;

        assert!(delete_customer(&db, customer.id).await?);
        assert!(list_customers(&db).await?.is_empty());

        // Second delete of the same id reports nothing removed
        assert!(!delete_customer(&db, customer.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_search_customers_case_insensitive() -> Result<()> {
        let db = setup_test_db().await?;

        let smith = create_custom_customer(
            &db,
            "John Smith",
            "john.smith@techcorp.com",
            "TechCorp Inc.",
            CustomerStatus::Active,
        )
        .await?;
        create_custom_customer(
            &db,
            "Sarah Johnson",
            "sarah.j@innovate.com",
            "Innovate Solutions",
            CustomerStatus::Prospect,
        )
        .await?;

        let hits = search_customers(&db, "john", None).await?;
        // Matches "John Smith" by name and "Sarah Johnson" by name too
        assert_eq!(hits.len(), 2);

        let hits = search_customers(&db, "techcorp", None).await?;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0], smith);

        let hits = search_customers(&db, "nobody", None).await?;
        assert!(hits.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_search_customers_status_filter() -> Result<()> {
        let db = setup_test_db().await?;

        create_custom_customer(
            &db,
            "John Smith",
            "john.smith@techcorp.com",
            "TechCorp Inc.",
            CustomerStatus::Active,
        )
        .await?;
        let prospect = create_custom_customer(
            &db,
            "Sarah Johnson",
            "sarah.j@innovate.com",
            "Innovate Solutions",
            CustomerStatus::Prospect,
        )
        .await?;

        let hits = search_customers(&db, "", Some(CustomerStatus::Prospect)).await?;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0], prospect);

        Ok(())
    }
}

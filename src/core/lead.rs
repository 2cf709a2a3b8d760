//! Lead business logic - Handles pipeline operations.
//!
//! Leads carry a customer name snapshot taken at creation and an
//! `updated_at` timestamp that is refreshed on every update, whatever
//! fields the update touches.

use crate::{
    entities::{Lead, LeadStage, lead},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, prelude::*};
use tracing::warn;

/// Fields required to create a lead. The store assigns `id`, `created_at`,
/// and `updated_at`; `customer_name` is resolved from the customer id.
#[derive(Debug, Clone)]
pub struct NewLead {
    /// Customer this lead belongs to
    pub customer_id: i64,
    /// Short title of the opportunity
    pub title: String,
    /// Longer description of what the customer wants
    pub description: String,
    /// Expected deal value in dollars
    pub value: f64,
    /// Pipeline position
    pub stage: LeadStage,
    /// Estimated win probability, 0-100
    pub probability: i32,
    /// When the deal is expected to close
    pub expected_close_date: DateTimeUtc,
    /// Sales rep responsible for the lead
    pub assigned_to: String,
}

/// Partial update for a lead. `None` fields are left untouched;
/// `updated_at` is refreshed regardless.
#[derive(Debug, Clone, Default)]
pub struct LeadUpdate {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New expected deal value
    pub value: Option<f64>,
    /// New pipeline position
    pub stage: Option<LeadStage>,
    /// New win probability
    pub probability: Option<i32>,
    /// New expected close date
    pub expected_close_date: Option<DateTimeUtc>,
    /// New responsible rep
    pub assigned_to: Option<String>,
}

fn validate_value(value: f64) -> Result<()> {
    if value < 0.0 || !value.is_finite() {
        return Err(Error::InvalidAmount { amount: value });
    }
    Ok(())
}

fn validate_probability(probability: i32) -> Result<()> {
    if !(0..=100).contains(&probability) {
        return Err(Error::InvalidProbability { probability });
    }
    Ok(())
}

/// Retrieves all leads in insertion order.
pub async fn list_leads(db: &DatabaseConnection) -> Result<Vec<lead::Model>> {
    Lead::find()
        .order_by_asc(lead::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a lead by its unique ID, returning None if not found.
pub async fn get_lead(db: &DatabaseConnection, lead_id: i64) -> Result<Option<lead::Model>> {
    Lead::find_by_id(lead_id).one(db).await.map_err(Into::into)
}

/// Creates a new lead, performing input validation.
///
/// The customer name snapshot is resolved from the store at creation time;
/// an unknown customer id degrades to an empty snapshot rather than
/// failing the insert.
pub async fn create_lead(db: &DatabaseConnection, new: NewLead) -> Result<lead::Model> {
    if new.title.trim().is_empty() {
        return Err(Error::Config {
            message: "Lead title cannot be empty".to_string(),
        });
    }
    validate_value(new.value)?;
    validate_probability(new.probability)?;

    let customer_name = match crate::core::customer::get_customer(db, new.customer_id).await? {
        Some(customer) => customer.name,
        None => {
            warn!(
                customer_id = new.customer_id,
                "unknown customer on lead, storing empty name snapshot"
            );
            String::new()
        }
    };

    let now = chrono::Utc::now();
    let lead = lead::ActiveModel {
        customer_id: Set(new.customer_id),
        customer_name: Set(customer_name),
        title: Set(new.title.trim().to_string()),
        description: Set(new.description),
        value: Set(new.value),
        stage: Set(new.stage),
        probability: Set(new.probability),
        expected_close_date: Set(new.expected_close_date),
        created_at: Set(now),
        updated_at: Set(now),
        assigned_to: Set(new.assigned_to),
        ..Default::default()
    };

    lead.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to an existing lead, always refreshing
/// `updated_at`.
///
/// Addressing an unknown id yields [`Error::LeadNotFound`].
pub async fn update_lead(
    db: &DatabaseConnection,
    lead_id: i64,
    update: LeadUpdate,
) -> Result<lead::Model> {
    if let Some(value) = update.value {
        validate_value(value)?;
    }
    if let Some(probability) = update.probability {
        validate_probability(probability)?;
    }

    let mut lead: lead::ActiveModel = Lead::find_by_id(lead_id)
        .one(db)
        .await?
        .ok_or(Error::LeadNotFound { id: lead_id })?
        .into();

    if let Some(title) = update.title {
        lead.title = Set(title);
    }
    if let Some(description) = update.description {
        lead.description = Set(description);
    }
    if let Some(value) = update.value {
        lead.value = Set(value);
    }
    if let Some(stage) = update.stage {
        lead.stage = Set(stage);
    }
    if let Some(probability) = update.probability {
        lead.probability = Set(probability);
    }
    if let Some(expected_close_date) = update.expected_close_date {
        lead.expected_close_date = Set(expected_close_date);
    }
    if let Some(assigned_to) = update.assigned_to {
        lead.assigned_to = Set(assigned_to);
    }
    lead.updated_at = Set(chrono::Utc::now());

    lead.update(db).await.map_err(Into::into)
}

/// Searches leads by case-insensitive substring over title or customer
/// name snapshot, optionally narrowed to a stage. An empty query matches
/// everything.
pub async fn search_leads(
    db: &DatabaseConnection,
    query: &str,
    stage: Option<LeadStage>,
) -> Result<Vec<lead::Model>> {
    let mut find = Lead::find();

    if !query.is_empty() {
        find = find.filter(
            Condition::any()
                .add(lead::Column::Title.contains(query))
                .add(lead::Column::CustomerName.contains(query)),
        );
    }

    if let Some(stage) = stage {
        find = find.filter(lead::Column::Stage.eq(stage));
    }

    find.order_by_asc(lead::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

//! Sales activity business logic - The touchpoint log.
//!
//! Activities are append-only: they are created and read, never edited or
//! removed. Feed-style reads come back newest first; the plain list keeps
//! insertion order like every other collection.

use crate::{
    entities::{Activity, ActivityKind, activity},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, QuerySelect, Set, prelude::*};
use tracing::warn;

/// Fields required to log an activity. The store assigns `id`;
/// `customer_name` is resolved from the customer id.
#[derive(Debug, Clone)]
pub struct NewActivity {
    /// What kind of touchpoint this was
    pub kind: ActivityKind,
    /// Customer the activity was with
    pub customer_id: i64,
    /// Lead this activity advanced, if any
    pub lead_id: Option<i64>,
    /// What happened
    pub description: String,
    /// When the activity took place
    pub date: DateTimeUtc,
    /// How long it took, in minutes
    pub duration_minutes: Option<i32>,
    /// Result of the touchpoint
    pub outcome: String,
    /// Agreed next step, if any
    pub next_action: Option<String>,
}

/// Retrieves all activities in insertion order.
pub async fn list_activities(db: &DatabaseConnection) -> Result<Vec<activity::Model>> {
    Activity::find()
        .order_by_asc(activity::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves an activity by its unique ID, returning None if not found.
pub async fn get_activity(
    db: &DatabaseConnection,
    activity_id: i64,
) -> Result<Option<activity::Model>> {
    Activity::find_by_id(activity_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Logs a new activity, performing input validation.
///
/// The customer name snapshot is resolved at creation time; an unknown
/// customer id degrades to an empty snapshot rather than failing the
/// insert.
pub async fn create_activity(
    db: &DatabaseConnection,
    new: NewActivity,
) -> Result<activity::Model> {
    if new.description.trim().is_empty() {
        return Err(Error::Config {
            message: "Activity description cannot be empty".to_string(),
        });
    }

    let customer_name = match crate::core::customer::get_customer(db, new.customer_id).await? {
        Some(customer) => customer.name,
        None => {
            warn!(
                customer_id = new.customer_id,
                "unknown customer on activity, storing empty name snapshot"
            );
            String::new()
        }
    };

    let activity = activity::ActiveModel {
        kind: Set(new.kind),
        customer_id: Set(new.customer_id),
        customer_name: Set(customer_name),
        lead_id: Set(new.lead_id),
        description: Set(new.description),
        date: Set(new.date),
        duration_minutes: Set(new.duration_minutes),
        outcome: Set(new.outcome),
        next_action: Set(new.next_action),
        ..Default::default()
    };

    activity.insert(db).await.map_err(Into::into)
}

/// Retrieves the most recent activities by date, newest first.
/// Dashboard feeds read their last handful of touchpoints from this.
pub async fn recent_activities(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<activity::Model>> {
    Activity::find()
        .order_by_desc(activity::Column::Date)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Searches activities by case-insensitive substring over description or
/// customer name snapshot, optionally narrowed to a kind. An empty query
/// matches everything.
pub async fn search_activities(
    db: &DatabaseConnection,
    query: &str,
    kind: Option<ActivityKind>,
) -> Result<Vec<activity::Model>> {
    let mut find = Activity::find();

    if !query.is_empty() {
        find = find.filter(
            Condition::any()
                .add(activity::Column::Description.contains(query))
                .add(activity::Column::CustomerName.contains(query)),
        );
    }

    if let Some(kind) = kind {
        find = find.filter(activity::Column::Kind.eq(kind));
    }

    find.order_by_asc(activity::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

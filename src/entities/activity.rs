//! Sales activity entity - A touchpoint with a customer.
//!
//! Activities record calls, emails, meetings, demos, and follow-ups,
//! optionally linked to the lead they advanced.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sales activity database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    /// Unique identifier for the activity, assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// What kind of touchpoint this was
    pub kind: ActivityKind,
    /// Customer the activity was with
    pub customer_id: i64,
    /// Customer name snapshot taken at creation
    pub customer_name: String,
    /// Lead this activity advanced, if any
    pub lead_id: Option<i64>,
    /// What happened
    pub description: String,
    /// When the activity took place
    pub date: DateTimeUtc,
    /// How long it took, in minutes, where that makes sense
    pub duration_minutes: Option<i32>,
    /// Result of the touchpoint
    pub outcome: String,
    /// Agreed next step, if any
    pub next_action: Option<String>,
}

/// Kind of sales touchpoint
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ActivityKind {
    /// Phone call
    #[sea_orm(string_value = "call")]
    #[serde(rename = "call")]
    Call,
    /// Email exchange
    #[sea_orm(string_value = "email")]
    #[serde(rename = "email")]
    Email,
    /// In-person or video meeting
    #[sea_orm(string_value = "meeting")]
    #[serde(rename = "meeting")]
    Meeting,
    /// Product demonstration
    #[sea_orm(string_value = "demo")]
    #[serde(rename = "demo")]
    Demo,
    /// Scheduled follow-up
    #[sea_orm(string_value = "follow-up")]
    #[serde(rename = "follow-up")]
    FollowUp,
}

/// Defines relationships between SalesActivity and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each activity belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    /// An activity may belong to one lead
    #[sea_orm(
        belongs_to = "super::lead::Entity",
        from = "Column::LeadId",
        to = "super::lead::Column::Id"
    )]
    Lead,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::lead::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lead.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

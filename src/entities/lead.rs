//! Lead entity - A prospective sale moving through the pipeline.
//!
//! `customer_name` is a denormalized snapshot taken when the lead is
//! created; it does not track later customer renames. `updated_at` is
//! refreshed on every update.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lead database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leads")]
pub struct Model {
    /// Unique identifier for the lead, assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Customer this lead belongs to
    pub customer_id: i64,
    /// Customer name snapshot taken at creation
    pub customer_name: String,
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
    /// When the lead was created
    pub created_at: DateTimeUtc,
    /// When the lead was last modified
    pub updated_at: DateTimeUtc,
    /// Sales rep responsible for the lead
    pub assigned_to: String,
}

/// Pipeline position of a lead, ordered by convention from first contact
/// to a closed outcome.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum LeadStage {
    /// Identified but not yet qualified
    #[sea_orm(string_value = "prospect")]
    #[serde(rename = "prospect")]
    Prospect,
    /// Qualified as a real opportunity
    #[sea_orm(string_value = "qualified")]
    #[serde(rename = "qualified")]
    Qualified,
    /// Proposal delivered
    #[sea_orm(string_value = "proposal")]
    #[serde(rename = "proposal")]
    Proposal,
    /// Terms under negotiation
    #[sea_orm(string_value = "negotiation")]
    #[serde(rename = "negotiation")]
    Negotiation,
    /// Won
    #[sea_orm(string_value = "closed-won")]
    #[serde(rename = "closed-won")]
    ClosedWon,
    /// Lost
    #[sea_orm(string_value = "closed-lost")]
    #[serde(rename = "closed-lost")]
    ClosedLost,
}

/// Defines relationships between Lead and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each lead belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    /// One lead has many sales activities
    #[sea_orm(has_many = "super::activity::Entity")]
    Activities,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

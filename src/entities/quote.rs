//! Quote entity - A priced, time-bound proposal against a customer.
//!
//! The monetary columns are computed once when the quote is created
//! (subtotal from its lines, tax at the fixed rate, total as their sum)
//! and never re-derived afterward. Lines live in `quote_items`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Quote database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quotes")]
pub struct Model {
    /// Unique identifier for the quote, assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Customer the quote was prepared for
    pub customer_id: i64,
    /// Customer name snapshot taken at creation
    pub customer_name: String,
    /// Sum of line totals in dollars
    pub subtotal: f64,
    /// Tax amount in dollars
    pub tax: f64,
    /// Subtotal plus tax in dollars
    pub total: f64,
    /// Where the quote is in its lifecycle
    pub status: QuoteStatus,
    /// When the quote was created
    pub created_at: DateTimeUtc,
    /// When the quoted prices stop being honored
    pub valid_until: DateTimeUtc,
}

/// Lifecycle state of a quote
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    /// Created but not yet delivered to the customer
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Delivered, awaiting a decision
    #[sea_orm(string_value = "sent")]
    Sent,
    /// Accepted by the customer
    #[sea_orm(string_value = "accepted")]
    Accepted,
    /// Rejected by the customer
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// Defines relationships between Quote and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each quote belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    /// One quote has many lines
    #[sea_orm(has_many = "super::quote_item::Entity")]
    Items,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::quote_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

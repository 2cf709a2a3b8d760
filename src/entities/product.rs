//! Product entity - An item from the sales catalog.
//!
//! Products feed quote lines: when a quote is created, the product's name
//! and price are copied onto the line as a snapshot, so later catalog edits
//! never reprice an existing quote.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product, assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product (e.g., "Sales Analytics Dashboard")
    pub name: String,
    /// Short description shown in the catalog
    pub description: String,
    /// Unit price in dollars
    pub price: f64,
    /// Free-text category used for catalog filtering (e.g., "Software")
    pub category: String,
    /// Whether the product is currently available
    pub in_stock: bool,
    /// Optional image location for catalog display
    pub image_url: Option<String>,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One product appears on many quote lines
    #[sea_orm(has_many = "super::quote_item::Entity")]
    QuoteItems,
}

impl Related<super::quote_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuoteItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Quote item entity - One line of a quote.
//!
//! `product_name` and `unit_price` are snapshots of the product at the
//! moment the quote was priced. Lines are fixed at quote creation and
//! ordered by id within their quote.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Quote line database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quote_items")]
pub struct Model {
    /// Unique identifier for the line, assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Quote this line belongs to
    pub quote_id: i64,
    /// Product the line was priced from
    pub product_id: i64,
    /// Product name snapshot taken at pricing time
    pub product_name: String,
    /// Number of units, at least 1
    pub quantity: i64,
    /// Unit price snapshot in dollars taken at pricing time
    pub unit_price: f64,
    /// `quantity` times `unit_price` in dollars
    pub line_total: f64,
}

/// Defines relationships between QuoteItem and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line belongs to one quote
    #[sea_orm(
        belongs_to = "super::quote::Entity",
        from = "Column::QuoteId",
        to = "super::quote::Column::Id"
    )]
    Quote,
    /// Each line was priced from one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::quote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quote.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

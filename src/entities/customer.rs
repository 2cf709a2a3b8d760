//! Customer entity - Represents an account the sales team works with.
//!
//! Customers are the anchor record of the system: leads, quotes, and
//! activities all reference a customer id and carry a name snapshot taken
//! when they are created. Customers are the only records that can be
//! hard-deleted; dependents keep their dangling reference.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    /// Unique identifier for the customer, assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Contact name (e.g., "John Smith")
    pub name: String,
    /// Contact email address; not required to be unique
    pub email: String,
    /// Contact phone number, free-form
    pub phone: String,
    /// Company the contact works for
    pub company: String,
    /// Postal address, free-form
    pub address: String,
    /// Relationship state of the account
    pub status: CustomerStatus,
    /// When the customer record was created
    pub created_at: DateTimeUtc,
    /// When the customer was last contacted
    pub last_contact: DateTimeUtc,
    /// Lifetime value of the account in dollars
    pub total_value: f64,
}

/// Relationship state of a customer account
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    /// Paying or engaged account
    #[sea_orm(string_value = "active")]
    Active,
    /// Dormant account
    #[sea_orm(string_value = "inactive")]
    Inactive,
    /// Not yet converted
    #[sea_orm(string_value = "prospect")]
    Prospect,
}

/// Defines relationships between Customer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One customer has many leads
    #[sea_orm(has_many = "super::lead::Entity")]
    Leads,
    /// One customer has many quotes
    #[sea_orm(has_many = "super::quote::Entity")]
    Quotes,
    /// One customer has many sales activities
    #[sea_orm(has_many = "super::activity::Entity")]
    Activities,
}

impl Related<super::lead::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leads.def()
    }
}

impl Related<super::quote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quotes.def()
    }
}

impl Related<super::activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

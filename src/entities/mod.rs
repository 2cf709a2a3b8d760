//! Entity module - Contains all SeaORM entity definitions for the store.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod activity;
pub mod customer;
pub mod lead;
pub mod product;
pub mod quote;
pub mod quote_item;

// Re-export specific types to avoid conflicts
pub use activity::{
    ActivityKind, Column as ActivityColumn, Entity as Activity, Model as ActivityModel,
};
pub use customer::{
    Column as CustomerColumn, CustomerStatus, Entity as Customer, Model as CustomerModel,
};
pub use lead::{Column as LeadColumn, Entity as Lead, LeadStage, Model as LeadModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use quote::{Column as QuoteColumn, Entity as Quote, Model as QuoteModel, QuoteStatus};
pub use quote_item::{Column as QuoteItemColumn, Entity as QuoteItem, Model as QuoteItemModel};

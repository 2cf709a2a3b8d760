//! Demo dataset loading from config.toml.
//!
//! The seed file declares customers, a product catalog, leads, quotes, and
//! activities for an empty store. Cross-references use natural keys —
//! customers by email, products by name, leads by title — and are resolved
//! to ids at seeding time, the same way the runtime paths snapshot names.
//! Quote amounts are not declared in the file; they are computed by the
//! quote pricing logic from the seeded catalog.

use crate::{
    core::quote::{PricedLine, quote_totals},
    entities::{
        ActivityKind, Customer, CustomerStatus, LeadStage, QuoteStatus, activity, customer, lead,
        product, quote, quote_item,
    },
    errors::{Error, Result},
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{PaginatorTrait, Set, prelude::*};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Structure of the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct SeedData {
    /// Customers to seed
    #[serde(default)]
    pub customers: Vec<CustomerSeed>,
    /// Catalog products to seed
    #[serde(default)]
    pub products: Vec<ProductSeed>,
    /// Pipeline leads to seed
    #[serde(default)]
    pub leads: Vec<LeadSeed>,
    /// Quotes to seed; amounts are computed, not declared
    #[serde(default)]
    pub quotes: Vec<QuoteSeed>,
    /// Activity log entries to seed
    #[serde(default)]
    pub activities: Vec<ActivitySeed>,
}

/// One seeded customer
#[derive(Debug, Deserialize, Clone)]
pub struct CustomerSeed {
    /// Contact name
    pub name: String,
    /// Contact email, also the natural key other seeds reference
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Company name
    pub company: String,
    /// Postal address
    pub address: String,
    /// Relationship state
    pub status: CustomerStatus,
    /// Record creation date
    pub created: NaiveDate,
    /// Last contact date
    pub last_contact: NaiveDate,
    /// Lifetime account value
    pub total_value: f64,
}

/// One seeded catalog product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductSeed {
    /// Product name, also the natural key quote items reference
    pub name: String,
    /// Catalog description
    pub description: String,
    /// Unit price in dollars
    pub price: f64,
    /// Catalog category
    pub category: String,
    /// Availability flag
    pub in_stock: bool,
    /// Optional image location
    pub image_url: Option<String>,
}

/// One seeded lead
#[derive(Debug, Deserialize, Clone)]
pub struct LeadSeed {
    /// Email of the customer this lead belongs to
    pub customer_email: String,
    /// Opportunity title, also the natural key activities reference
    pub title: String,
    /// Opportunity description
    pub description: String,
    /// Expected deal value
    pub value: f64,
    /// Pipeline position
    pub stage: LeadStage,
    /// Win probability, 0-100
    pub probability: i32,
    /// Expected close date
    pub expected_close: NaiveDate,
    /// Record creation date
    pub created: NaiveDate,
    /// Last update date
    pub updated: NaiveDate,
    /// Responsible sales rep
    pub assigned_to: String,
}

/// One seeded quote
#[derive(Debug, Deserialize, Clone)]
pub struct QuoteSeed {
    /// Email of the customer the quote was prepared for
    pub customer_email: String,
    /// Lifecycle status
    pub status: QuoteStatus,
    /// Creation date
    pub created: NaiveDate,
    /// Expiry date
    pub valid_until: NaiveDate,
    /// Lines, priced from the seeded catalog
    pub items: Vec<QuoteItemSeed>,
}

/// One seeded quote line
#[derive(Debug, Deserialize, Clone)]
pub struct QuoteItemSeed {
    /// Name of the seeded product to price from
    pub product: String,
    /// Number of units
    pub quantity: i64,
}

/// One seeded activity
#[derive(Debug, Deserialize, Clone)]
pub struct ActivitySeed {
    /// Kind of touchpoint
    pub kind: ActivityKind,
    /// Email of the customer the activity was with
    pub customer_email: String,
    /// Title of the lead it advanced, if any
    pub lead_title: Option<String>,
    /// What happened
    pub description: String,
    /// When it took place
    pub date: NaiveDate,
    /// Duration in minutes, where that makes sense
    pub duration_minutes: Option<i32>,
    /// Result of the touchpoint
    pub outcome: String,
    /// Agreed next step, if any
    pub next_action: Option<String>,
}

/// Loads seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML does not match
/// the seed structure.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedData> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read seed file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed file: {e}"),
    })
}

/// Loads seed configuration from the default location (./config.toml).
pub fn load_default_config() -> Result<SeedData> {
    load_config("config.toml")
}

fn midnight_utc(date: NaiveDate) -> DateTimeUtc {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Seeds the demo dataset into an empty store.
///
/// A store that already holds customers is left untouched, so restarting
/// against a persistent `DATABASE_URL` does not duplicate the dataset.
/// Seed cross-references that do not resolve are configuration errors.
pub async fn seed_demo_data(db: &DatabaseConnection, data: &SeedData) -> Result<()> {
    if Customer::find().count(db).await? > 0 {
        info!("store already holds customers, skipping demo data");
        return Ok(());
    }

    let mut customers_by_email: HashMap<String, customer::Model> = HashMap::new();
    for seed in &data.customers {
        let model = customer::ActiveModel {
            name: Set(seed.name.clone()),
            email: Set(seed.email.clone()),
            phone: Set(seed.phone.clone()),
            company: Set(seed.company.clone()),
            address: Set(seed.address.clone()),
            status: Set(seed.status),
            created_at: Set(midnight_utc(seed.created)),
            last_contact: Set(midnight_utc(seed.last_contact)),
            total_value: Set(seed.total_value),
            ..Default::default()
        }
        .insert(db)
        .await?;
        customers_by_email.insert(seed.email.clone(), model);
    }

    let mut products_by_name: HashMap<String, product::Model> = HashMap::new();
    for seed in &data.products {
        let model = product::ActiveModel {
            name: Set(seed.name.clone()),
            description: Set(seed.description.clone()),
            price: Set(seed.price),
            category: Set(seed.category.clone()),
            in_stock: Set(seed.in_stock),
            image_url: Set(seed.image_url.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        products_by_name.insert(seed.name.clone(), model);
    }

    let mut leads_by_title: HashMap<String, lead::Model> = HashMap::new();
    for seed in &data.leads {
        let owner = customers_by_email
            .get(&seed.customer_email)
            .ok_or_else(|| Error::Config {
                message: format!(
                    "seed lead '{}' references unknown customer '{}'",
                    seed.title, seed.customer_email
                ),
            })?;

        let model = lead::ActiveModel {
            customer_id: Set(owner.id),
            customer_name: Set(owner.name.clone()),
            title: Set(seed.title.clone()),
            description: Set(seed.description.clone()),
            value: Set(seed.value),
            stage: Set(seed.stage),
            probability: Set(seed.probability),
            expected_close_date: Set(midnight_utc(seed.expected_close)),
            created_at: Set(midnight_utc(seed.created)),
            updated_at: Set(midnight_utc(seed.updated)),
            assigned_to: Set(seed.assigned_to.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        leads_by_title.insert(seed.title.clone(), model);
    }

    for seed in &data.quotes {
        let owner = customers_by_email
            .get(&seed.customer_email)
            .ok_or_else(|| Error::Config {
                message: format!(
                    "seed quote references unknown customer '{}'",
                    seed.customer_email
                ),
            })?;

        let mut lines = Vec::with_capacity(seed.items.len());
        for item in &seed.items {
            let product = products_by_name
                .get(&item.product)
                .ok_or_else(|| Error::Config {
                    message: format!("seed quote references unknown product '{}'", item.product),
                })?;
            lines.push(PricedLine::new(
                product.id,
                product.name.clone(),
                item.quantity,
                product.price,
            ));
        }

        let (subtotal, tax, total) = quote_totals(&lines);
        let stored = quote::ActiveModel {
            customer_id: Set(owner.id),
            customer_name: Set(owner.name.clone()),
            subtotal: Set(subtotal),
            tax: Set(tax),
            total: Set(total),
            status: Set(seed.status),
            created_at: Set(midnight_utc(seed.created)),
            valid_until: Set(midnight_utc(seed.valid_until)),
            ..Default::default()
        }
        .insert(db)
        .await?;

        for line in lines {
            quote_item::ActiveModel {
                quote_id: Set(stored.id),
                product_id: Set(line.product_id),
                product_name: Set(line.product_name),
                quantity: Set(line.quantity),
                unit_price: Set(line.unit_price),
                line_total: Set(line.line_total),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    for seed in &data.activities {
        let owner = customers_by_email
            .get(&seed.customer_email)
            .ok_or_else(|| Error::Config {
                message: format!(
                    "seed activity references unknown customer '{}'",
                    seed.customer_email
                ),
            })?;

        let lead_id = match &seed.lead_title {
            Some(title) => Some(
                leads_by_title
                    .get(title)
                    .ok_or_else(|| Error::Config {
                        message: format!("seed activity references unknown lead '{title}'"),
                    })?
                    .id,
            ),
            None => None,
        };

        activity::ActiveModel {
            kind: Set(seed.kind),
            customer_id: Set(owner.id),
            customer_name: Set(owner.name.clone()),
            lead_id: Set(lead_id),
            description: Set(seed.description.clone()),
            date: Set(midnight_utc(seed.date)),
            duration_minutes: Set(seed.duration_minutes),
            outcome: Set(seed.outcome.clone()),
            next_action: Set(seed.next_action.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    info!(
        customers = data.customers.len(),
        products = data.products.len(),
        leads = data.leads.len(),
        quotes = data.quotes.len(),
        activities = data.activities.len(),
        "seeded demo data"
    );

    Ok(())
}

//! Quote business logic - Pricing and lifecycle of quotes.
//!
//! A quote is priced once, at creation: each selected product contributes a
//! line with a name and unit-price snapshot, the subtotal is the sum of
//! line totals, tax is applied at the fixed rate, and the total is their
//! sum. Nothing re-derives these amounts later; catalog edits never touch
//! an existing quote.

use crate::{
    entities::{Quote, QuoteItem, QuoteStatus, quote, quote_item},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::warn;

/// Fixed tax rate applied to every quote subtotal.
pub const TAX_RATE: f64 = 0.10;

/// How long a freshly created quote stays valid, in days.
pub const QUOTE_VALID_DAYS: i64 = 30;

/// One product selection going into a quote.
#[derive(Debug, Clone, Copy)]
pub struct LineSelection {
    /// Catalog product to price the line from
    pub product_id: i64,
    /// Number of units, at least 1
    pub quantity: i64,
}

/// A priced quote line before it is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    /// Product the line was priced from
    pub product_id: i64,
    /// Product name snapshot
    pub product_name: String,
    /// Number of units
    pub quantity: i64,
    /// Unit price snapshot in dollars
    pub unit_price: f64,
    /// `quantity` times `unit_price`
    pub line_total: f64,
}

impl PricedLine {
    /// Prices a line from a product snapshot.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(product_id: i64, product_name: String, quantity: i64, unit_price: f64) -> Self {
        Self {
            product_id,
            product_name,
            quantity,
            unit_price,
            line_total: quantity as f64 * unit_price,
        }
    }
}

/// Sums priced lines into (subtotal, tax, total).
///
/// An empty slice yields all zeros; a degenerate quote is not rejected
/// here.
#[must_use]
pub fn quote_totals(lines: &[PricedLine]) -> (f64, f64, f64) {
    let subtotal: f64 = lines.iter().map(|line| line.line_total).sum();
    let tax = subtotal * TAX_RATE;
    (subtotal, tax, subtotal + tax)
}

/// Resolves selections against the catalog into priced lines, in order.
///
/// Product name and unit price are snapshotted at call time. A selection
/// whose product id does not resolve is priced at zero with an empty name
/// instead of failing the quote; a quantity below 1 is rejected.
pub async fn price_selections(
    db: &DatabaseConnection,
    selections: &[LineSelection],
) -> Result<Vec<PricedLine>> {
    let mut lines = Vec::with_capacity(selections.len());

    for selection in selections {
        if selection.quantity < 1 {
            return Err(Error::InvalidQuantity {
                quantity: selection.quantity,
            });
        }

        let line = match crate::core::product::get_product(db, selection.product_id).await? {
            Some(product) => PricedLine::new(
                product.id,
                product.name,
                selection.quantity,
                product.price,
            ),
            None => {
                warn!(
                    product_id = selection.product_id,
                    "unknown product in quote selection, pricing line at zero"
                );
                PricedLine::new(selection.product_id, String::new(), selection.quantity, 0.0)
            }
        };
        lines.push(line);
    }

    Ok(lines)
}

/// A quote together with its ordered lines.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteDetail {
    /// The quote header
    pub quote: quote::Model,
    /// Its lines, in selection order
    pub items: Vec<quote_item::Model>,
}

/// Prices and stores a new quote for a customer.
///
/// The quote starts in `draft` status and stays valid for
/// [`QUOTE_VALID_DAYS`] days. An unknown customer id degrades to an empty
/// name snapshot rather than failing. An empty selection list produces a
/// zero-amount quote. Header and lines are written in one database
/// transaction.
pub async fn create_quote(
    db: &DatabaseConnection,
    customer_id: i64,
    selections: &[LineSelection],
) -> Result<QuoteDetail> {
    let lines = price_selections(db, selections).await?;

    let customer_name = match crate::core::customer::get_customer(db, customer_id).await? {
        Some(customer) => customer.name,
        None => {
            warn!(
                customer_id,
                "unknown customer on quote, storing empty name snapshot"
            );
            String::new()
        }
    };

    let (subtotal, tax, total) = quote_totals(&lines);
    let now = chrono::Utc::now();

    let txn = db.begin().await?;

    let stored = quote::ActiveModel {
        customer_id: Set(customer_id),
        customer_name: Set(customer_name),
        subtotal: Set(subtotal),
        tax: Set(tax),
        total: Set(total),
        status: Set(QuoteStatus::Draft),
        created_at: Set(now),
        valid_until: Set(now + chrono::Duration::days(QUOTE_VALID_DAYS)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        let item = quote_item::ActiveModel {
            quote_id: Set(stored.id),
            product_id: Set(line.product_id),
            product_name: Set(line.product_name),
            quantity: Set(line.quantity),
            unit_price: Set(line.unit_price),
            line_total: Set(line.line_total),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        items.push(item);
    }

    txn.commit().await?;

    Ok(QuoteDetail {
        quote: stored,
        items,
    })
}

/// Retrieves all quotes in insertion order.
pub async fn list_quotes(db: &DatabaseConnection) -> Result<Vec<quote::Model>> {
    Quote::find()
        .order_by_asc(quote::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a quote header by its unique ID, returning None if not found.
pub async fn get_quote(db: &DatabaseConnection, quote_id: i64) -> Result<Option<quote::Model>> {
    Quote::find_by_id(quote_id).one(db).await.map_err(Into::into)
}

/// Retrieves a quote together with its lines.
///
/// Addressing an unknown id yields [`Error::QuoteNotFound`].
pub async fn get_quote_detail(db: &DatabaseConnection, quote_id: i64) -> Result<QuoteDetail> {
    let quote = Quote::find_by_id(quote_id)
        .one(db)
        .await?
        .ok_or(Error::QuoteNotFound { id: quote_id })?;

    let items = QuoteItem::find()
        .filter(quote_item::Column::QuoteId.eq(quote_id))
        .order_by_asc(quote_item::Column::Id)
        .all(db)
        .await?;

    Ok(QuoteDetail { quote, items })
}

/// Moves a quote to a new lifecycle status.
///
/// Any status may be written over any other; there is no transition rule.
/// Addressing an unknown id yields [`Error::QuoteNotFound`].
pub async fn update_quote_status(
    db: &DatabaseConnection,
    quote_id: i64,
    status: QuoteStatus,
) -> Result<quote::Model> {
    let mut quote: quote::ActiveModel = Quote::find_by_id(quote_id)
        .one(db)
        .await?
        .ok_or(Error::QuoteNotFound { id: quote_id })?
        .into();

    quote.status = Set(status);
    quote.update(db).await.map_err(Into::into)
}

/// Searches quotes by case-insensitive substring over the customer name
/// snapshot, optionally narrowed to a status. An empty query matches
/// everything.
pub async fn search_quotes(
    db: &DatabaseConnection,
    query: &str,
    status: Option<QuoteStatus>,
) -> Result<Vec<quote::Model>> {
    let mut find = Quote::find();

    if !query.is_empty() {
        find = find.filter(Condition::any().add(quote::Column::CustomerName.contains(query)));
    }

    if let Some(status) = status {
        find = find.filter(quote::Column::Status.eq(status));
    }

    find.order_by_asc(quote::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_quote_totals_fixture() {
        // 50 seats of CRM at 299 plus 100 service hours at 150
        let lines = vec![
            PricedLine::new(1, "Enterprise CRM Software".to_string(), 50, 299.0),
            PricedLine::new(4, "Professional Services Package".to_string(), 100, 150.0),
        ];

        assert_eq!(lines[0].line_total, 14950.0);
        assert_eq!(lines[1].line_total, 15000.0);

        let (subtotal, tax, total) = quote_totals(&lines);
        assert_eq!(subtotal, 29950.0);
        assert_eq!(tax, 2995.0);
        assert_eq!(total, 32945.0);
    }

    #[test]
    fn test_quote_totals_empty() {
        let (subtotal, tax, total) = quote_totals(&[]);
        assert_eq!(subtotal, 0.0);
        assert_eq!(tax, 0.0);
        assert_eq!(total, 0.0);
    }

    #[tokio::test]
    async fn test_price_selections_snapshots_catalog() -> Result<()> {
        let db = setup_test_db().await?;

        let crm = create_custom_product(&db, "Enterprise CRM", 299.0, "Software").await?;

        let lines = price_selections(
            &db,
            &[LineSelection {
                product_id: crm.id,
                quantity: 50,
            }],
        )
        .await?;

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_name, "Enterprise CRM");
        assert_eq!(lines[0].unit_price, 299.0);
        assert_eq!(lines[0].line_total, 14950.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_price_selections_unknown_product_prices_zero() -> Result<()> {
        let db = setup_test_db().await?;

        let lines = price_selections(
            &db,
            &[LineSelection {
                product_id: 999,
                quantity: 3,
            }],
        )
        .await?;

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_name, "");
        assert_eq!(lines[0].unit_price, 0.0);
        assert_eq!(lines[0].line_total, 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_price_selections_rejects_zero_quantity() -> Result<()> {
        let db = setup_test_db().await?;

        let result = price_selections(
            &db,
            &[LineSelection {
                product_id: 1,
                quantity: 0,
            }],
        )
        .await;

        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidQuantity { quantity: 0 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_quote_integration() -> Result<()> {
        let (db, customer) = setup_with_customer().await?;

        let crm = create_custom_product(&db, "Enterprise CRM", 299.0, "Software").await?;
        let services = create_custom_product(&db, "Services", 150.0, "Services").await?;

        let detail = create_quote(
            &db,
            customer.id,
            &[
                LineSelection {
                    product_id: crm.id,
                    quantity: 50,
                },
                LineSelection {
                    product_id: services.id,
                    quantity: 100,
                },
            ],
        )
        .await?;

        assert_eq!(detail.quote.customer_name, customer.name);
        assert_eq!(detail.quote.status, QuoteStatus::Draft);
        assert_eq!(detail.quote.subtotal, 29950.0);
        assert_eq!(detail.quote.tax, 2995.0);
        assert_eq!(detail.quote.total, 32945.0);
        assert_eq!(
            detail.quote.valid_until,
            detail.quote.created_at + chrono::Duration::days(QUOTE_VALID_DAYS)
        );

        // Lines stored in selection order with snapshots
        assert_eq!(detail.items.len(), 2);
        assert_eq!(detail.items[0].product_name, "Enterprise CRM");
        assert_eq!(detail.items[0].quantity, 50);
        assert_eq!(detail.items[1].product_name, "Services");
        assert_eq!(detail.items[1].line_total, 15000.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_quote_empty_selection() -> Result<()> {
        let (db, customer) = setup_with_customer().await?;

        let detail = create_quote(&db, customer.id, &[]).await?;

        assert_eq!(detail.quote.status, QuoteStatus::Draft);
        assert_eq!(detail.quote.subtotal, 0.0);
        assert_eq!(detail.quote.tax, 0.0);
        assert_eq!(detail.quote.total, 0.0);
        assert!(detail.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_quote_catalog_edits_do_not_reprice() -> Result<()> {
        let (db, customer) = setup_with_customer().await?;

        let crm = create_custom_product(&db, "Enterprise CRM", 299.0, "Software").await?;
        let detail = create_quote(
            &db,
            customer.id,
            &[LineSelection {
                product_id: crm.id,
                quantity: 10,
            }],
        )
        .await?;

        // A new catalog entry at a different price has no effect on the
        // amounts already stored
        create_custom_product(&db, "Enterprise CRM v2", 999.0, "Software").await?;

        let reread = get_quote_detail(&db, detail.quote.id).await?;
        assert_eq!(reread.quote.subtotal, 2990.0);
        assert_eq!(reread.items[0].unit_price, 299.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_quote_detail_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = get_quote_detail(&db, 999).await;
        assert!(matches!(result.unwrap_err(), Error::QuoteNotFound { id: 999 }));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_quote_status() -> Result<()> {
        let (db, customer) = setup_with_customer().await?;

        let detail = create_quote(&db, customer.id, &[]).await?;
        assert_eq!(detail.quote.status, QuoteStatus::Draft);

        let sent = update_quote_status(&db, detail.quote.id, QuoteStatus::Sent).await?;
        assert_eq!(sent.status, QuoteStatus::Sent);
        assert_eq!(sent.total, detail.quote.total);

        let result = update_quote_status(&db, 999, QuoteStatus::Accepted).await;
        assert!(matches!(result.unwrap_err(), Error::QuoteNotFound { id: 999 }));

        Ok(())
    }

    #[tokio::test]
    async fn test_search_quotes() -> Result<()> {
        let db = setup_test_db().await?;

        let smith = create_test_customer(&db, "John Smith").await?;
        let chen = create_test_customer(&db, "Michael Chen").await?;

        let smith_quote = create_quote(&db, smith.id, &[]).await?;
        let chen_quote = create_quote(&db, chen.id, &[]).await?;
        update_quote_status(&db, chen_quote.quote.id, QuoteStatus::Sent).await?;

        let hits = search_quotes(&db, "smith", None).await?;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, smith_quote.quote.id);

        let hits = search_quotes(&db, "", Some(QuoteStatus::Sent)).await?;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, chen_quote.quote.id);

        Ok(())
    }
}

//! Product business logic - Handles the sales catalog.
//!
//! Products are created and read but never deleted; quote lines keep a
//! name and price snapshot, so the catalog can drift without repricing
//! anything already quoted.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, QuerySelect, Set, prelude::*};

/// Retrieves all products in insertion order.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a product by its unique ID, returning None if not found.
pub async fn get_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product, performing input validation.
///
/// The name must be non-empty and the price a non-negative finite amount.
pub async fn create_product(
    db: &DatabaseConnection,
    name: String,
    description: String,
    price: f64,
    category: String,
    in_stock: bool,
    image_url: Option<String>,
) -> Result<product::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }

    if price < 0.0 || !price.is_finite() {
        return Err(Error::InvalidAmount { amount: price });
    }

    let product = product::ActiveModel {
        name: Set(name.trim().to_string()),
        description: Set(description),
        price: Set(price),
        category: Set(category),
        in_stock: Set(in_stock),
        image_url: Set(image_url),
        ..Default::default()
    };

    product.insert(db).await.map_err(Into::into)
}

/// Searches products by case-insensitive substring over name or
/// description, optionally narrowed to a category. An empty query matches
/// everything.
pub async fn search_products(
    db: &DatabaseConnection,
    query: &str,
    category: Option<&str>,
) -> Result<Vec<product::Model>> {
    let mut find = Product::find();

    if !query.is_empty() {
        find = find.filter(
            Condition::any()
                .add(product::Column::Name.contains(query))
                .add(product::Column::Description.contains(query)),
        );
    }

    if let Some(category) = category {
        find = find.filter(product::Column::Category.eq(category));
    }

    find.order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists the distinct categories present in the catalog, alphabetically.
/// Catalog views build their category filter from this.
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<String>> {
    Product::find()
        .select_only()
        .column(product::Column::Category)
        .distinct()
        .order_by_asc(product::Column::Category)
        .into_tuple::<String>()
        .all(db)
        .await
        .map_err(Into::into)
}

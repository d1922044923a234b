//! Route table for the catalog API
//!
//! Maps every resource path onto its handler. Kept separate from `main` so
//! the integration tests can mount the exact same router.

use axum::{routing::get, Router};
use sqlx::PgPool;

use crate::api::handlers::{attributes, categories, departments, health, products, tax};

/// Builds the application router over a connection pool
pub fn router(pool: PgPool) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Department routes
        .route("/departments", get(departments::list_departments))
        .route("/departments/:department_id", get(departments::get_department))
        // Category routes
        .route("/categories", get(categories::list_categories))
        .route("/categories/:category_id", get(categories::get_category))
        .route(
            "/categories/inProduct/:product_id",
            get(categories::get_categories_in_product),
        )
        .route(
            "/categories/inDepartment/:department_id",
            get(categories::get_categories_in_department),
        )
        // Attribute routes
        .route("/attributes", get(attributes::list_attributes))
        .route("/attributes/:attribute_id", get(attributes::get_attribute))
        .route(
            "/attributes/values/:attribute_id",
            get(attributes::get_attribute_values),
        )
        .route(
            "/attributes/inProduct/:product_id",
            get(attributes::get_attributes_in_product),
        )
        // Product routes
        .route("/products", get(products::list_products))
        .route("/products/search", get(products::search_products))
        .route("/products/:product_id", get(products::get_product))
        .route(
            "/products/inCategory/:category_id",
            get(products::get_products_in_category),
        )
        .route(
            "/products/inDepartment/:department_id",
            get(products::get_products_in_department),
        )
        .route(
            "/products/:product_id/locations",
            get(products::get_product_locations),
        )
        .route(
            "/products/:product_id/reviews",
            get(products::get_product_reviews).post(products::post_product_review),
        )
        // Tax routes
        .route("/tax", get(tax::list_taxes))
        .route("/tax/:tax_id", get(tax::get_tax))
        // Shared state
        .with_state(pool)
}

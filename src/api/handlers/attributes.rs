use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::PgPool;

use crate::api::errors::ApiError;
use crate::domain::catalog::{Attribute, AttributeValue, ProductAttributeValue};
use crate::domain::repositories::AttributeRepository;
use crate::infrastructure::repositories::PostgresAttributeRepository;

/// List all attributes
///
/// GET /attributes
pub async fn list_attributes(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Attribute>>, ApiError> {
    let repo = PostgresAttributeRepository::new(pool);
    let attributes = repo.find_all().await?;

    Ok(Json(attributes))
}

/// Get an attribute by ID
///
/// GET /attributes/:attribute_id
pub async fn get_attribute(
    State(pool): State<PgPool>,
    Path(attribute_id): Path<i32>,
) -> Result<Json<Attribute>, ApiError> {
    let repo = PostgresAttributeRepository::new(pool);
    let attribute = repo
        .find_by_id(attribute_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Attribute not found: {}", attribute_id)))?;

    Ok(Json(attribute))
}

/// List the values of an attribute
///
/// GET /attributes/values/:attribute_id
pub async fn get_attribute_values(
    State(pool): State<PgPool>,
    Path(attribute_id): Path<i32>,
) -> Result<Json<Vec<AttributeValue>>, ApiError> {
    let repo = PostgresAttributeRepository::new(pool);
    let values = repo.find_values(attribute_id).await?;

    Ok(Json(values))
}

/// List the attribute name/value pairs attached to a product
///
/// GET /attributes/inProduct/:product_id
pub async fn get_attributes_in_product(
    State(pool): State<PgPool>,
    Path(product_id): Path<i32>,
) -> Result<Json<Vec<ProductAttributeValue>>, ApiError> {
    let repo = PostgresAttributeRepository::new(pool);
    let attributes = repo.find_by_product(product_id).await?;

    Ok(Json(attributes))
}

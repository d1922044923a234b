use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::PgPool;

use crate::api::errors::ApiError;
use crate::domain::catalog::Tax;
use crate::domain::repositories::TaxRepository;
use crate::infrastructure::repositories::PostgresTaxRepository;

/// List all tax rates
///
/// GET /tax
pub async fn list_taxes(State(pool): State<PgPool>) -> Result<Json<Vec<Tax>>, ApiError> {
    let repo = PostgresTaxRepository::new(pool);
    let taxes = repo.find_all().await?;

    Ok(Json(taxes))
}

/// Get a tax rate by ID
///
/// GET /tax/:tax_id
pub async fn get_tax(
    State(pool): State<PgPool>,
    Path(tax_id): Path<i32>,
) -> Result<Json<Tax>, ApiError> {
    let repo = PostgresTaxRepository::new(pool);
    let tax = repo
        .find_by_id(tax_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Tax rate not found: {}", tax_id)))?;

    Ok(Json(tax))
}

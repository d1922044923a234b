use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::PgPool;

use crate::api::errors::ApiError;
use crate::domain::catalog::Category;
use crate::domain::repositories::CategoryRepository;
use crate::infrastructure::repositories::PostgresCategoryRepository;

/// List all categories
///
/// GET /categories
pub async fn list_categories(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let repo = PostgresCategoryRepository::new(pool);
    let categories = repo.find_all().await?;

    Ok(Json(categories))
}

/// Get a category by ID
///
/// GET /categories/:category_id
pub async fn get_category(
    State(pool): State<PgPool>,
    Path(category_id): Path<i32>,
) -> Result<Json<Category>, ApiError> {
    let repo = PostgresCategoryRepository::new(pool);
    let category = repo
        .find_by_id(category_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Category not found: {}", category_id)))?;

    Ok(Json(category))
}

/// List the categories a product is filed under
///
/// GET /categories/inProduct/:product_id
pub async fn get_categories_in_product(
    State(pool): State<PgPool>,
    Path(product_id): Path<i32>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let repo = PostgresCategoryRepository::new(pool);
    let categories = repo.find_by_product(product_id).await?;

    Ok(Json(categories))
}

/// List the categories of a department
///
/// GET /categories/inDepartment/:department_id
pub async fn get_categories_in_department(
    State(pool): State<PgPool>,
    Path(department_id): Path<i32>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let repo = PostgresCategoryRepository::new(pool);
    let categories = repo.find_by_department(department_id).await?;

    Ok(Json(categories))
}

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::PgPool;

use crate::api::errors::ApiError;
use crate::domain::catalog::Department;
use crate::domain::repositories::DepartmentRepository;
use crate::infrastructure::repositories::PostgresDepartmentRepository;

/// List all departments
///
/// GET /departments
pub async fn list_departments(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Department>>, ApiError> {
    let repo = PostgresDepartmentRepository::new(pool);
    let departments = repo.find_all().await?;

    Ok(Json(departments))
}

/// Get a department by ID
///
/// GET /departments/:department_id
pub async fn get_department(
    State(pool): State<PgPool>,
    Path(department_id): Path<i32>,
) -> Result<Json<Department>, ApiError> {
    let repo = PostgresDepartmentRepository::new(pool);
    let department = repo
        .find_by_id(department_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Department not found: {}", department_id)))?;

    Ok(Json(department))
}

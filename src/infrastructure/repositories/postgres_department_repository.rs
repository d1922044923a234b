use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::catalog::Department;
use crate::domain::repositories::DepartmentRepository;

/// PostgreSQL implementation of DepartmentRepository
pub struct PostgresDepartmentRepository {
    pool: PgPool,
}

impl PostgresDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PostgresDepartmentRepository {
    async fn find_all(&self) -> Result<Vec<Department>, String> {
        sqlx::query_as::<_, Department>(
            r#"
            SELECT department_id, name, description
            FROM department
            ORDER BY department_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list departments: {}", e))
    }

    async fn find_by_id(&self, department_id: i32) -> Result<Option<Department>, String> {
        sqlx::query_as::<_, Department>(
            r#"
            SELECT department_id, name, description
            FROM department
            WHERE department_id = $1
            "#,
        )
        .bind(department_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find department by id: {}", e))
    }
}

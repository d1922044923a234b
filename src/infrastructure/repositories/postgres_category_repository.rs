use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::catalog::Category;
use crate::domain::repositories::CategoryRepository;

/// PostgreSQL implementation of CategoryRepository
///
/// Product membership is resolved through the `product_category` link table.
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, String> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, department_id, name, description
            FROM category
            ORDER BY category_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list categories: {}", e))
    }

    async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>, String> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, department_id, name, description
            FROM category
            WHERE category_id = $1
            "#,
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find category by id: {}", e))
    }

    async fn find_by_product(&self, product_id: i32) -> Result<Vec<Category>, String> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT c.category_id, c.department_id, c.name, c.description
            FROM category c
            JOIN product_category pc ON pc.category_id = c.category_id
            WHERE pc.product_id = $1
            ORDER BY c.category_id
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find categories by product: {}", e))
    }

    async fn find_by_department(&self, department_id: i32) -> Result<Vec<Category>, String> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, department_id, name, description
            FROM category
            WHERE department_id = $1
            ORDER BY category_id
            "#,
        )
        .bind(department_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find categories by department: {}", e))
    }
}

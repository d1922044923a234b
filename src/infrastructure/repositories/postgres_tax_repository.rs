use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::catalog::Tax;
use crate::domain::repositories::TaxRepository;

/// PostgreSQL implementation of TaxRepository
pub struct PostgresTaxRepository {
    pool: PgPool,
}

impl PostgresTaxRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaxRepository for PostgresTaxRepository {
    async fn find_all(&self) -> Result<Vec<Tax>, String> {
        sqlx::query_as::<_, Tax>(
            r#"
            SELECT tax_id, tax_type, tax_percentage
            FROM tax
            ORDER BY tax_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list tax rates: {}", e))
    }

    async fn find_by_id(&self, tax_id: i32) -> Result<Option<Tax>, String> {
        sqlx::query_as::<_, Tax>(
            r#"
            SELECT tax_id, tax_type, tax_percentage
            FROM tax
            WHERE tax_id = $1
            "#,
        )
        .bind(tax_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find tax rate by id: {}", e))
    }
}

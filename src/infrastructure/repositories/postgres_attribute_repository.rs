use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::catalog::{Attribute, AttributeValue, ProductAttributeValue};
use crate::domain::repositories::AttributeRepository;

/// PostgreSQL implementation of AttributeRepository
pub struct PostgresAttributeRepository {
    pool: PgPool,
}

impl PostgresAttributeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttributeRepository for PostgresAttributeRepository {
    async fn find_all(&self) -> Result<Vec<Attribute>, String> {
        sqlx::query_as::<_, Attribute>(
            r#"
            SELECT attribute_id, name
            FROM attribute
            ORDER BY attribute_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list attributes: {}", e))
    }

    async fn find_by_id(&self, attribute_id: i32) -> Result<Option<Attribute>, String> {
        sqlx::query_as::<_, Attribute>(
            r#"
            SELECT attribute_id, name
            FROM attribute
            WHERE attribute_id = $1
            "#,
        )
        .bind(attribute_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find attribute by id: {}", e))
    }

    async fn find_values(&self, attribute_id: i32) -> Result<Vec<AttributeValue>, String> {
        sqlx::query_as::<_, AttributeValue>(
            r#"
            SELECT attribute_value_id, value
            FROM attribute_value
            WHERE attribute_id = $1
            ORDER BY attribute_value_id
            "#,
        )
        .bind(attribute_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find attribute values: {}", e))
    }

    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<ProductAttributeValue>, String> {
        sqlx::query_as::<_, ProductAttributeValue>(
            r#"
            SELECT a.name AS attribute_name,
                   av.attribute_value_id,
                   av.value AS attribute_value
            FROM product_attribute pa
            JOIN attribute_value av ON av.attribute_value_id = pa.attribute_value_id
            JOIN attribute a ON a.attribute_id = av.attribute_id
            WHERE pa.product_id = $1
            ORDER BY av.attribute_value_id
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find attributes by product: {}", e))
    }
}

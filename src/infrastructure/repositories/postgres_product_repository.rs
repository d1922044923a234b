use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::catalog::{Product, ProductLocation};
use crate::domain::pagination::Pagination;
use crate::domain::repositories::ProductRepository;

const PRODUCT_COLUMNS: &str = "product_id, name, description, price, \
     discounted_price, image, image_2, thumbnail, display";

/// PostgreSQL implementation of ProductRepository
///
/// Paginated listings run a COUNT query and a LIMIT/OFFSET page query over
/// the same predicate.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self, pagination: &Pagination) -> Result<(Vec<Product>, i64), String> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM product")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| format!("Failed to count products: {}", e))?;

        let rows = sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM product
            ORDER BY product_id
            LIMIT $1 OFFSET $2
            "#,
        ))
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list products: {}", e))?;

        Ok((rows, total))
    }

    async fn search(
        &self,
        query: &str,
        all_words: bool,
        pagination: &Pagination,
    ) -> Result<(Vec<Product>, i64), String> {
        let predicate = if all_words {
            "name = $1"
        } else {
            "name ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%'"
        };

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM product WHERE {predicate}"
        ))
        .bind(query)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| format!("Failed to count search results: {}", e))?;

        let rows = sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM product
            WHERE {predicate}
            ORDER BY product_id
            LIMIT $2 OFFSET $3
            "#,
        ))
        .bind(query)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to search products: {}", e))?;

        Ok((rows, total))
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, String> {
        sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM product
            WHERE product_id = $1
            "#,
        ))
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find product by id: {}", e))
    }

    async fn find_by_category(
        &self,
        category_id: i32,
        pagination: &Pagination,
    ) -> Result<(Vec<Product>, i64), String> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM product p
            JOIN product_category pc ON pc.product_id = p.product_id
            WHERE pc.category_id = $1
            "#,
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| format!("Failed to count products in category: {}", e))?;

        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT p.product_id, p.name, p.description, p.price,
                   p.discounted_price, p.image, p.image_2, p.thumbnail, p.display
            FROM product p
            JOIN product_category pc ON pc.product_id = p.product_id
            WHERE pc.category_id = $1
            ORDER BY p.product_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(category_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find products in category: {}", e))?;

        Ok((rows, total))
    }

    async fn find_by_department(
        &self,
        department_id: i32,
        pagination: &Pagination,
    ) -> Result<(Vec<Product>, i64), String> {
        // A product filed under two categories of the same department must
        // only appear once, so both queries deduplicate on product_id.
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(DISTINCT p.product_id)
            FROM product p
            JOIN product_category pc ON pc.product_id = p.product_id
            JOIN category c ON c.category_id = pc.category_id
            WHERE c.department_id = $1
            "#,
        )
        .bind(department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| format!("Failed to count products in department: {}", e))?;

        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT DISTINCT p.product_id, p.name, p.description, p.price,
                   p.discounted_price, p.image, p.image_2, p.thumbnail, p.display
            FROM product p
            JOIN product_category pc ON pc.product_id = p.product_id
            JOIN category c ON c.category_id = pc.category_id
            WHERE c.department_id = $1
            ORDER BY p.product_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(department_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find products in department: {}", e))?;

        Ok((rows, total))
    }

    async fn find_locations(&self, product_id: i32) -> Result<Vec<ProductLocation>, String> {
        sqlx::query_as::<_, ProductLocation>(
            r#"
            SELECT c.category_id,
                   c.name AS category_name,
                   d.department_id,
                   d.name AS department_name
            FROM product_category pc
            JOIN category c ON c.category_id = pc.category_id
            JOIN department d ON d.department_id = c.department_id
            WHERE pc.product_id = $1
            ORDER BY c.category_id
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find product locations: {}", e))
    }
}

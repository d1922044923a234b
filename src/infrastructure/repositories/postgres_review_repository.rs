use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::catalog::{NewReview, Review};
use crate::domain::repositories::ReviewRepository;

/// PostgreSQL implementation of ReviewRepository
pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn find_by_product(&self, product_id: i32) -> Result<Vec<Review>, String> {
        sqlx::query_as::<_, Review>(
            r#"
            SELECT review_id, customer_id, product_id, review, rating, created_on
            FROM review
            WHERE product_id = $1
            ORDER BY created_on DESC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find reviews by product: {}", e))
    }

    async fn create(&self, review: NewReview) -> Result<Review, String> {
        sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO review (customer_id, product_id, review, rating, created_on)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING review_id, customer_id, product_id, review, rating, created_on
            "#,
        )
        .bind(review.customer_id)
        .bind(review.product_id)
        .bind(&review.review)
        .bind(review.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| format!("Failed to save review: {}", e))
    }
}

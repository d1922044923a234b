use async_trait::async_trait;

use crate::domain::catalog::{NewReview, Review};

/// Repository trait for product reviews
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// List the reviews of a product, newest first
    async fn find_by_product(&self, product_id: i32) -> Result<Vec<Review>, String>;

    /// Store a new review and return the persisted row
    async fn create(&self, review: NewReview) -> Result<Review, String>;
}

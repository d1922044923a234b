use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored customer review of a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Review {
    pub review_id: i32,
    pub customer_id: i32,
    pub product_id: i32,
    pub review: String,
    pub rating: i16,
    pub created_on: DateTime<Utc>,
}

/// Payload for storing a new review
///
/// Customer accounts are managed elsewhere, so the author association is
/// carried as a plain id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub customer_id: i32,
    pub product_id: i32,
    pub review: String,
    pub rating: i16,
}

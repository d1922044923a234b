use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::errors::ApiError;
use crate::domain::catalog::{NewReview, Product, ProductLocation, Review};
use crate::domain::pagination::{
    parse_description_length, Pagination, PaginationError, PaginationMeta,
};
use crate::domain::repositories::{ProductRepository, ReviewRepository};
use crate::infrastructure::repositories::{PostgresProductRepository, PostgresReviewRepository};

/// Query parameters shared by the paginated product listings
///
/// Values arrive as raw strings so that non-integer input surfaces as the
/// documented 400 body instead of a rejected extractor.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub description_length: Option<String>,
}

/// Query parameters for product search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query_string: Option<String>,
    pub all_words: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub description_length: Option<String>,
}

/// Envelope for paginated listing responses
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub status: bool,
    #[serde(rename = "paginationMeta")]
    pub pagination_meta: PaginationMeta,
    pub rows: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(pagination_meta: PaginationMeta, rows: Vec<T>) -> Self {
        Self {
            status: true,
            pagination_meta,
            rows,
        }
    }
}

/// List one page of the catalog
///
/// GET /products
pub async fn list_products(
    State(pool): State<PgPool>,
    Query(params): Query<ListingQuery>,
) -> Result<Json<PaginatedResponse<Product>>, ApiError> {
    let pagination = Pagination::from_query(params.page.as_deref(), params.limit.as_deref())?;
    let description_length = parse_description_length(params.description_length.as_deref())?;

    let repo = PostgresProductRepository::new(pool);
    let (rows, total) = repo.find_all(&pagination).await?;

    let rows = rows
        .into_iter()
        .map(|p| p.with_truncated_description(description_length))
        .collect();

    Ok(Json(PaginatedResponse::new(pagination.meta(total), rows)))
}

/// Search products by name or description
///
/// GET /products/search
pub async fn search_products(
    State(pool): State<PgPool>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<PaginatedResponse<Product>>, ApiError> {
    let query_string = params
        .query_string
        .as_deref()
        .ok_or(PaginationError::Missing("query_string"))?;
    let all_words = params.all_words.as_deref() == Some("on");

    let pagination = Pagination::from_query(params.page.as_deref(), params.limit.as_deref())?;
    let description_length = parse_description_length(params.description_length.as_deref())?;

    let repo = PostgresProductRepository::new(pool);
    let (rows, total) = repo.search(query_string, all_words, &pagination).await?;

    let rows = rows
        .into_iter()
        .map(|p| p.with_truncated_description(description_length))
        .collect();

    Ok(Json(PaginatedResponse::new(pagination.meta(total), rows)))
}

/// Get a product by ID
///
/// GET /products/:product_id
pub async fn get_product(
    State(pool): State<PgPool>,
    Path(product_id): Path<i32>,
) -> Result<Json<Product>, ApiError> {
    let repo = PostgresProductRepository::new(pool);
    let product = repo
        .find_by_id(product_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Product not found: {}", product_id)))?;

    Ok(Json(product))
}

/// List one page of the products filed under a category
///
/// GET /products/inCategory/:category_id
pub async fn get_products_in_category(
    State(pool): State<PgPool>,
    Path(category_id): Path<i32>,
    Query(params): Query<ListingQuery>,
) -> Result<Json<PaginatedResponse<Product>>, ApiError> {
    let pagination = Pagination::from_query(params.page.as_deref(), params.limit.as_deref())?;
    let description_length = parse_description_length(params.description_length.as_deref())?;

    let repo = PostgresProductRepository::new(pool);
    let (rows, total) = repo.find_by_category(category_id, &pagination).await?;

    let rows = rows
        .into_iter()
        .map(|p| p.with_truncated_description(description_length))
        .collect();

    Ok(Json(PaginatedResponse::new(pagination.meta(total), rows)))
}

/// List one page of the products filed under a department
///
/// GET /products/inDepartment/:department_id
pub async fn get_products_in_department(
    State(pool): State<PgPool>,
    Path(department_id): Path<i32>,
    Query(params): Query<ListingQuery>,
) -> Result<Json<PaginatedResponse<Product>>, ApiError> {
    let pagination = Pagination::from_query(params.page.as_deref(), params.limit.as_deref())?;
    let description_length = parse_description_length(params.description_length.as_deref())?;

    let repo = PostgresProductRepository::new(pool);
    let (rows, total) = repo.find_by_department(department_id, &pagination).await?;

    let rows = rows
        .into_iter()
        .map(|p| p.with_truncated_description(description_length))
        .collect();

    Ok(Json(PaginatedResponse::new(pagination.meta(total), rows)))
}

/// List the category/department pairs a product is filed under
///
/// GET /products/:product_id/locations
pub async fn get_product_locations(
    State(pool): State<PgPool>,
    Path(product_id): Path<i32>,
) -> Result<Json<Vec<ProductLocation>>, ApiError> {
    let repo = PostgresProductRepository::new(pool);
    let locations = repo.find_locations(product_id).await?;

    Ok(Json(locations))
}

/// Request body for posting a review
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub customer_id: i32,
    pub review: String,
    pub rating: i16,
}

/// List the reviews of a product
///
/// GET /products/:product_id/reviews
pub async fn get_product_reviews(
    State(pool): State<PgPool>,
    Path(product_id): Path<i32>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let repo = PostgresReviewRepository::new(pool);
    let reviews = repo.find_by_product(product_id).await?;

    Ok(Json(reviews))
}

/// Post a review for a product
///
/// POST /products/:product_id/reviews
pub async fn post_product_review(
    State(pool): State<PgPool>,
    Path(product_id): Path<i32>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    if req.review.trim().is_empty() {
        return Err(ApiError::validation("The review text must not be empty"));
    }
    if !(1..=5).contains(&req.rating) {
        return Err(ApiError::validation("The rating must be between 1 and 5"));
    }

    // The product must exist before a review can reference it
    let product_repo = PostgresProductRepository::new(pool.clone());
    product_repo
        .find_by_id(product_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Product not found: {}", product_id)))?;

    let review_repo = PostgresReviewRepository::new(pool);
    let review = review_repo
        .create(NewReview {
            customer_id: req.customer_id,
            product_id,
            review: req.review,
            rating: req.rating,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}

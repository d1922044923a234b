use async_trait::async_trait;

use crate::domain::catalog::{Product, ProductLocation};
use crate::domain::pagination::Pagination;

/// Repository trait for products
///
/// Paginated listings return the page of rows together with the total
/// record count so handlers can compute the response metadata.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List one page of the whole catalog
    async fn find_all(&self, pagination: &Pagination) -> Result<(Vec<Product>, i64), String>;

    /// Search products by name or description
    ///
    /// With `all_words` set the query must equal the product name exactly;
    /// otherwise it is matched as a case-insensitive substring of the name
    /// or the description.
    async fn search(
        &self,
        query: &str,
        all_words: bool,
        pagination: &Pagination,
    ) -> Result<(Vec<Product>, i64), String>;

    /// Find a product by its ID
    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, String>;

    /// List one page of the products filed under a category
    async fn find_by_category(
        &self,
        category_id: i32,
        pagination: &Pagination,
    ) -> Result<(Vec<Product>, i64), String>;

    /// List one page of the distinct products filed under a department
    async fn find_by_department(
        &self,
        department_id: i32,
        pagination: &Pagination,
    ) -> Result<(Vec<Product>, i64), String>;

    /// List the category/department pairs a product is filed under
    async fn find_locations(&self, product_id: i32) -> Result<Vec<ProductLocation>, String>;
}

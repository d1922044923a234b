use async_trait::async_trait;

use crate::domain::catalog::Category;

/// Repository trait for categories
///
/// Defines the contract for retrieving categories, including the
/// join-backed lookups by product and department.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List every category
    async fn find_all(&self) -> Result<Vec<Category>, String>;

    /// Find a category by its ID
    async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>, String>;

    /// List the categories a product is filed under
    async fn find_by_product(&self, product_id: i32) -> Result<Vec<Category>, String>;

    /// List the categories belonging to a department
    async fn find_by_department(&self, department_id: i32) -> Result<Vec<Category>, String>;
}

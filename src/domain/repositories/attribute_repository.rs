use async_trait::async_trait;

use crate::domain::catalog::{Attribute, AttributeValue, ProductAttributeValue};

/// Repository trait for attributes and their values
#[async_trait]
pub trait AttributeRepository: Send + Sync {
    /// List every attribute
    async fn find_all(&self) -> Result<Vec<Attribute>, String>;

    /// Find an attribute by its ID
    async fn find_by_id(&self, attribute_id: i32) -> Result<Option<Attribute>, String>;

    /// List the values of an attribute
    async fn find_values(&self, attribute_id: i32) -> Result<Vec<AttributeValue>, String>;

    /// List the attribute name/value pairs attached to a product
    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<ProductAttributeValue>, String>;
}

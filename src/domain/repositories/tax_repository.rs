use async_trait::async_trait;

use crate::domain::catalog::Tax;

/// Repository trait for tax rates
#[async_trait]
pub trait TaxRepository: Send + Sync {
    /// List every tax rate
    async fn find_all(&self) -> Result<Vec<Tax>, String>;

    /// Find a tax rate by its ID
    async fn find_by_id(&self, tax_id: i32) -> Result<Option<Tax>, String>;
}

use async_trait::async_trait;

use crate::domain::catalog::Department;

/// Repository trait for departments
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// List every department
    async fn find_all(&self) -> Result<Vec<Department>, String>;

    /// Find a department by its ID
    async fn find_by_id(&self, department_id: i32) -> Result<Option<Department>, String>;
}

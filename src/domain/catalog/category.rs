use serde::Serialize;

/// A category within a department, linked to products through
/// `product_category`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Category {
    pub category_id: i32,
    pub department_id: i32,
    pub name: String,
    pub description: Option<String>,
}

use serde::Serialize;

/// A top-level department of the catalog (e.g. Regional, Nature)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Department {
    pub department_id: i32,
    pub name: String,
    pub description: Option<String>,
}

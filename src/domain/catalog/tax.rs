use rust_decimal::Decimal;
use serde::Serialize;

/// A tax rate applied at checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Tax {
    pub tax_id: i32,
    pub tax_type: String,
    pub tax_percentage: Decimal,
}

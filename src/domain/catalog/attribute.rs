use serde::Serialize;

/// A product attribute family (e.g. Size, Color)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Attribute {
    pub attribute_id: i32,
    pub name: String,
}

/// A concrete value of an attribute (e.g. Size / XL)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct AttributeValue {
    pub attribute_value_id: i32,
    pub value: String,
}

/// An attribute name/value pair attached to a product through
/// `product_attribute`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ProductAttributeValue {
    pub attribute_name: String,
    pub attribute_value_id: i32,
    pub attribute_value: String,
}

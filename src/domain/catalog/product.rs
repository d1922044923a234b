use rust_decimal::Decimal;
use serde::Serialize;

/// A sellable product
///
/// `display` mirrors the storefront flag from the schema: 0 = hidden,
/// 1 = on the front page, 2 = in the department pages, 3 = both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub discounted_price: Decimal,
    pub image: Option<String>,
    pub image_2: Option<String>,
    pub thumbnail: Option<String>,
    pub display: i16,
}

impl Product {
    /// Truncates the description for listing responses
    ///
    /// Descriptions longer than `max_chars` characters are cut at a character
    /// boundary and suffixed with `...`; shorter ones pass through untouched.
    pub fn with_truncated_description(mut self, max_chars: usize) -> Self {
        if self.description.chars().count() > max_chars {
            let mut truncated: String = self.description.chars().take(max_chars).collect();
            truncated.push_str("...");
            self.description = truncated;
        }
        self
    }
}

/// A category/department pair a product is filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ProductLocation {
    pub category_id: i32,
    pub category_name: String,
    pub department_id: i32,
    pub department_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(description: &str) -> Product {
        Product {
            product_id: 1,
            name: "Arc d'Triomphe".to_string(),
            description: description.to_string(),
            price: Decimal::new(1499, 2),
            discounted_price: Decimal::ZERO,
            image: None,
            image_2: None,
            thumbnail: None,
            display: 0,
        }
    }

    #[test]
    fn short_description_is_untouched() {
        let truncated = product("short").with_truncated_description(20);
        assert_eq!(truncated.description, "short");
    }

    #[test]
    fn description_at_the_limit_is_untouched() {
        let truncated = product("exact").with_truncated_description(5);
        assert_eq!(truncated.description, "exact");
    }

    #[test]
    fn long_description_is_cut_with_ellipsis() {
        let truncated = product("This beautiful and iconic T-shirt")
            .with_truncated_description(14);
        assert_eq!(truncated.description, "This beautiful...");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let truncated = product("héllö wörld").with_truncated_description(5);
        assert_eq!(truncated.description, "héllö...");
    }

    #[test]
    fn zero_length_removes_the_description() {
        let truncated = product("anything").with_truncated_description(0);
        assert_eq!(truncated.description, "...");
    }
}

use serde::Serialize;
use thiserror::Error;

/// Errors produced while validating listing query parameters
///
/// Every variant maps onto a 400 response; the message is what the client
/// sees in the `err` field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("The {0} parameter must be an integer")]
    NotAnInteger(&'static str),

    #[error("The {0} parameter must be greater than zero")]
    NotPositive(&'static str),

    #[error("The {0} parameter must not be negative")]
    Negative(&'static str),

    #[error("The {0} parameter is required")]
    Missing(&'static str),
}

/// Validated page/limit pair for listing endpoints
///
/// Query parameters reach the handlers as raw strings; this value object
/// owns the integer validation, the defaults, and the offset arithmetic.
///
/// # Invariants
/// - `page >= 1`
/// - `limit >= 1`
///
/// # Example
/// ```
/// use catalog_api::domain::pagination::Pagination;
///
/// let pagination = Pagination::from_query(Some("3"), None).expect("valid");
/// assert_eq!(pagination.page(), 3);
/// assert_eq!(pagination.limit(), 20);
/// assert_eq!(pagination.offset(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    limit: i64,
}

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;
pub const DEFAULT_DESCRIPTION_LENGTH: usize = 200;

impl Pagination {
    /// Builds a Pagination from raw `page` and `limit` query values
    ///
    /// Missing parameters fall back to the defaults; present parameters must
    /// parse as positive integers.
    pub fn from_query(
        page: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self, PaginationError> {
        let page = parse_positive("page", page, DEFAULT_PAGE)?;
        let limit = parse_positive("limit", limit, DEFAULT_LIMIT)?;

        Ok(Self { page, limit })
    }

    /// Returns the 1-based page number
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Returns the page size
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Returns the row offset for the SQL query
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Computes the response metadata for a listing with `total_records` rows
    pub fn meta(&self, total_records: i64) -> PaginationMeta {
        let total_pages = if total_records == 0 {
            0
        } else {
            (total_records + self.limit - 1) / self.limit
        };

        PaginationMeta {
            current_page: self.page,
            current_page_size: self.limit,
            total_pages,
            total_records,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Pagination metadata returned alongside listing rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: i64,
    pub current_page_size: i64,
    pub total_pages: i64,
    pub total_records: i64,
}

/// Parses the `description_length` query value
///
/// Missing falls back to the default; present values must parse as a
/// non-negative integer. Zero is allowed and truncates descriptions away
/// entirely.
pub fn parse_description_length(value: Option<&str>) -> Result<usize, PaginationError> {
    match value {
        None => Ok(DEFAULT_DESCRIPTION_LENGTH),
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| match raw.parse::<i64>() {
                Ok(_) => PaginationError::Negative("description_length"),
                Err(_) => PaginationError::NotAnInteger("description_length"),
            }),
    }
}

fn parse_positive(
    name: &'static str,
    value: Option<&str>,
    default: i64,
) -> Result<i64, PaginationError> {
    match value {
        None => Ok(default),
        Some(raw) => {
            let parsed = raw
                .parse::<i64>()
                .map_err(|_| PaginationError::NotAnInteger(name))?;
            if parsed < 1 {
                return Err(PaginationError::NotPositive(name));
            }
            Ok(parsed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_params_missing() {
        let pagination = Pagination::from_query(None, None).unwrap();
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.limit(), 20);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn explicit_page_and_limit() {
        let pagination = Pagination::from_query(Some("4"), Some("10")).unwrap();
        assert_eq!(pagination.page(), 4);
        assert_eq!(pagination.limit(), 10);
        assert_eq!(pagination.offset(), 30);
    }

    #[test]
    fn non_numeric_page_is_rejected() {
        let result = Pagination::from_query(Some("abc"), None);
        assert_eq!(result, Err(PaginationError::NotAnInteger("page")));
    }

    #[test]
    fn non_numeric_limit_is_rejected() {
        let result = Pagination::from_query(None, Some("ten"));
        assert_eq!(result, Err(PaginationError::NotAnInteger("limit")));
    }

    #[test]
    fn zero_page_is_rejected() {
        let result = Pagination::from_query(Some("0"), None);
        assert_eq!(result, Err(PaginationError::NotPositive("page")));
    }

    #[test]
    fn negative_limit_is_rejected() {
        let result = Pagination::from_query(None, Some("-5"));
        assert_eq!(result, Err(PaginationError::NotPositive("limit")));
    }

    #[test]
    fn meta_rounds_total_pages_up() {
        let pagination = Pagination::from_query(Some("2"), Some("10")).unwrap();
        let meta = pagination.meta(25);

        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.current_page_size, 10);
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.total_records, 25);
    }

    #[test]
    fn meta_exact_multiple_of_limit() {
        let pagination = Pagination::from_query(None, Some("10")).unwrap();
        assert_eq!(pagination.meta(30).total_pages, 3);
    }

    #[test]
    fn meta_with_no_records() {
        let pagination = Pagination::default();
        let meta = pagination.meta(0);
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.total_records, 0);
    }

    #[test]
    fn meta_serializes_camel_case() {
        let meta = Pagination::default().meta(5);
        let json = serde_json::to_value(meta).unwrap();

        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["currentPageSize"], 20);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["totalRecords"], 5);
    }

    #[test]
    fn description_length_defaults() {
        assert_eq!(parse_description_length(None).unwrap(), 200);
    }

    #[test]
    fn description_length_zero_allowed() {
        assert_eq!(parse_description_length(Some("0")).unwrap(), 0);
    }

    #[test]
    fn description_length_negative_rejected() {
        assert_eq!(
            parse_description_length(Some("-1")),
            Err(PaginationError::Negative("description_length"))
        );
    }

    #[test]
    fn description_length_non_numeric_rejected() {
        assert_eq!(
            parse_description_length(Some("long")),
            Err(PaginationError::NotAnInteger("description_length"))
        );
    }

    #[test]
    fn error_messages_name_the_parameter() {
        assert_eq!(
            PaginationError::NotAnInteger("page").to_string(),
            "The page parameter must be an integer"
        );
        assert_eq!(
            PaginationError::NotPositive("limit").to_string(),
            "The limit parameter must be greater than zero"
        );
    }
}

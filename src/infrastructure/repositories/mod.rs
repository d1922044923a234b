// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_attribute_repository;
pub mod postgres_category_repository;
pub mod postgres_department_repository;
pub mod postgres_product_repository;
pub mod postgres_review_repository;
pub mod postgres_tax_repository;

pub use postgres_attribute_repository::PostgresAttributeRepository;
pub use postgres_category_repository::PostgresCategoryRepository;
pub use postgres_department_repository::PostgresDepartmentRepository;
pub use postgres_product_repository::PostgresProductRepository;
pub use postgres_review_repository::PostgresReviewRepository;
pub use postgres_tax_repository::PostgresTaxRepository;

//! Catalog API Library
//!
//! REST API over an e-commerce catalog: products, categories, departments,
//! attributes, reviews, and tax rates, backed by PostgreSQL.

pub mod api;
pub mod domain;
pub mod infrastructure;

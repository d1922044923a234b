// Infrastructure layer module
// Contains the PostgreSQL adapters behind the domain repository interfaces

pub mod repositories;

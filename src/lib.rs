//! # Car Reservation Back Office
//!
//! Customers book vehicles, drivers are assigned to vehicles, payments and
//! payment methods are recorded, and customers rate completed bookings.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Entities, input DTOs, status lifecycles, repository traits
//! - **application**: One service per entity enforcing cross-entity rules
//! - **infrastructure**: In-memory and SeaORM/SQLite stores, password hashing
//! - **interfaces**: REST API with Swagger documentation
//! - **config**: TOML configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use application::{ServiceSettings, Services};

// Re-export database types for easy access
pub use infrastructure::{
    init_database, run_migrations, DatabaseConfig, InMemoryRepositoryProvider,
    SeaOrmRepositoryProvider,
};

// Re-export API router
pub use interfaces::http::create_api_router;

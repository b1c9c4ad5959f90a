//! Customer aggregate
//!
//! Contains the Customer entity, input DTOs, and repository interface.

pub mod model;
pub mod repository;

mod dto;

pub use dto::{CreateCustomerDto, UpdateCustomerDto};
pub use model::Customer;
pub use repository::CustomerRepository;

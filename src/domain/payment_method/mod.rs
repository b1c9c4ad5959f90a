//! Payment method aggregate

pub mod model;
pub mod repository;

mod dto;

pub use dto::{CreatePaymentMethodDto, UpdatePaymentMethodDto};
pub use model::PaymentMethod;
pub use repository::PaymentMethodRepository;

//! Payment aggregate
//!
//! Payments are bookkeeping records against a reservation; no settlement
//! happens here.

pub mod model;
pub mod repository;

mod dto;

pub use dto::{CreatePaymentDto, UpdatePaymentDto};
pub use model::{Payment, PaymentStatus};
pub use repository::PaymentRepository;

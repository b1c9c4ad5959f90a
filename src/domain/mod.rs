//! Domain layer
//!
//! One module per aggregate (entity, input DTOs, repository interface) plus
//! the `RepositoryProvider` that ties the stores together.

pub mod customer;
pub mod driver;
pub mod feedback;
pub mod payment;
pub mod payment_method;
pub mod repositories;
pub mod reservation;
pub mod vehicle;

// Re-export commonly used types
pub use customer::{CreateCustomerDto, Customer, CustomerRepository, UpdateCustomerDto};
pub use driver::{CreateDriverDto, Driver, DriverRepository, UpdateDriverDto};
pub use feedback::{CreateFeedbackDto, Feedback, FeedbackRepository, UpdateFeedbackDto};
pub use payment::{CreatePaymentDto, Payment, PaymentRepository, PaymentStatus, UpdatePaymentDto};
pub use payment_method::{
    CreatePaymentMethodDto, PaymentMethod, PaymentMethodRepository, UpdatePaymentMethodDto,
};
pub use repositories::RepositoryProvider;
pub use reservation::{
    CreateReservationDto, PickupWindow, Reservation, ReservationRepository, ReservationStatus,
    UpdateReservationDto,
};
pub use vehicle::{Vehicle, VehicleDto, VehicleRepository, VehicleStatus};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::{DomainError, DomainResult, FieldViolation};

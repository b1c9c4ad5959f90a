//! Application services

mod customer;
mod driver;
mod feedback;
mod payment;
mod payment_method;
mod reservation;
mod vehicle;

pub use customer::CustomerService;
pub use driver::DriverService;
pub use feedback::FeedbackService;
pub use payment::PaymentService;
pub use payment_method::PaymentMethodService;
pub use reservation::ReservationService;
pub use vehicle::VehicleService;

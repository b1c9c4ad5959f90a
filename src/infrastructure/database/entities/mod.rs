//! Database entities module

pub mod customer;
pub mod driver;
pub mod feedback;
pub mod payment;
pub mod payment_method;
pub mod reservation;
pub mod vehicle;

pub use customer::Entity as Customer;
pub use driver::Entity as Driver;
pub use feedback::Entity as Feedback;
pub use payment::Entity as Payment;
pub use payment_method::Entity as PaymentMethod;
pub use reservation::Entity as Reservation;
pub use vehicle::Entity as Vehicle;

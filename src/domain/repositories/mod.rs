//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::customer::CustomerRepository;
use super::driver::DriverRepository;
use super::feedback::FeedbackRepository;
use super::payment::PaymentRepository;
use super::payment_method::PaymentMethodRepository;
use super::reservation::ReservationRepository;
use super::vehicle::VehicleRepository;

pub use crate::shared::errors::DomainResult;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// The provider is the only shared mutable resource; services hold it behind
/// an `Arc` and never cache entity state across calls.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let customer = repos.customers().find_by_id(1).await?;
///     let methods = repos.payment_methods().find_by_customer(1).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn customers(&self) -> &dyn CustomerRepository;
    fn drivers(&self) -> &dyn DriverRepository;
    fn vehicles(&self) -> &dyn VehicleRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
    fn payments(&self) -> &dyn PaymentRepository;
    fn payment_methods(&self) -> &dyn PaymentMethodRepository;
    fn feedback(&self) -> &dyn FeedbackRepository;
}

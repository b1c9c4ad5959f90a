//! Reservation aggregate
//!
//! Contains the Reservation entity, its status machine, input DTOs and
//! repository interface.

pub mod model;
pub mod repository;

mod dto;

pub use dto::{CreateReservationDto, UpdateReservationDto};
pub use model::{
    ensure_stored_transition, ensure_vehicle_free, window_end, PickupWindow, Reservation,
    ReservationStatus,
};
pub use repository::ReservationRepository;

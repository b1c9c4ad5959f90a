//! Vehicle aggregate

pub mod model;
pub mod repository;

mod dto;

pub use dto::VehicleDto;
pub use model::{Vehicle, VehicleStatus};
pub use repository::VehicleRepository;

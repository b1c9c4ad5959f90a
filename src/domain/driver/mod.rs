//! Driver aggregate

pub mod model;
pub mod repository;

mod dto;

pub use dto::{CreateDriverDto, UpdateDriverDto};
pub use model::Driver;
pub use repository::DriverRepository;

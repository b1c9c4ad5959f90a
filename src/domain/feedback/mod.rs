//! Feedback aggregate

pub mod model;
pub mod repository;

mod dto;

pub use dto::{CreateFeedbackDto, UpdateFeedbackDto};
pub use model::Feedback;
pub use repository::FeedbackRepository;

//! Feedback domain entity

/// A customer's rating of one reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub id: i64,
    pub customer_id: i64,
    pub reservation_id: i64,
    /// 1..=5
    pub rating: i32,
    pub comments: Option<String>,
}

//! Payment domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DomainError, DomainResult};

/// Payment status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Refunded => "REFUNDED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "COMPLETED" => Some(Self::Completed),
            "FAILED" => Some(Self::Failed),
            "REFUNDED" => Some(Self::Refunded),
            _ => None,
        }
    }

    /// `PENDING -> COMPLETED | FAILED`, `COMPLETED -> REFUNDED`.
    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        use PaymentStatus::*;
        *self == next
            || matches!(
                (self, next),
                (Pending, Completed) | (Pending, Failed) | (Completed, Refunded)
            )
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: i64,
    pub reservation_id: i64,
    pub payment_time: DateTime<Utc>,
    pub amount: Decimal,
    /// Free-form method label, e.g. CARD or CASH
    pub payment_method: String,
    pub status: PaymentStatus,
}

impl Payment {
    pub fn transition_to(&mut self, next: PaymentStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                entity: "Payment",
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment() -> Payment {
        Payment {
            id: 1,
            reservation_id: 1,
            payment_time: Utc::now(),
            amount: Decimal::new(4999, 2),
            payment_method: "CARD".into(),
            status: PaymentStatus::Pending,
        }
    }

    #[test]
    fn pending_payment_can_complete_then_refund() {
        let mut p = payment();
        p.transition_to(PaymentStatus::Completed).unwrap();
        p.transition_to(PaymentStatus::Refunded).unwrap();
        assert_eq!(p.status, PaymentStatus::Refunded);
    }

    #[test]
    fn status_parse_accepts_stored_names_only() {
        assert_eq!(PaymentStatus::parse("REFUNDED"), Some(PaymentStatus::Refunded));
        assert_eq!(PaymentStatus::parse("PENDING"), Some(PaymentStatus::Pending));
        assert_eq!(PaymentStatus::parse("SETTLED"), None);
    }

    #[test]
    fn failed_payment_is_final() {
        let mut p = payment();
        p.transition_to(PaymentStatus::Failed).unwrap();
        assert!(matches!(
            p.transition_to(PaymentStatus::Completed),
            Err(DomainError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn pending_cannot_be_refunded() {
        assert!(!PaymentStatus::Pending.can_transition_to(PaymentStatus::Refunded));
    }
}

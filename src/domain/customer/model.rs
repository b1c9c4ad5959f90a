//! Customer domain entity

/// A customer account that books vehicles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub username: String,
    /// bcrypt hash; plaintext never reaches the store
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub status: Option<String>,
    /// Preferred payment labels as captured at sign-up
    pub payment_method1: Option<String>,
    pub payment_method2: Option<String>,
    pub detail_payment_method1: Option<String>,
    pub detail_payment_method2: Option<String>,
}

impl Customer {
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            id: 1,
            username: "abah".into(),
            password_hash: "hash".into(),
            first_name: Some("Abah".into()),
            last_name: Some("Soleh".into()),
            email: "abah@farafamily.com".into(),
            phone_number: None,
            status: Some("A".into()),
            payment_method1: None,
            payment_method2: None,
            detail_payment_method1: None,
            detail_payment_method2: None,
        }
    }

    #[test]
    fn full_name_joins_parts() {
        assert_eq!(customer().full_name().as_deref(), Some("Abah Soleh"));
    }

    #[test]
    fn full_name_with_missing_parts() {
        let mut c = customer();
        c.last_name = None;
        assert_eq!(c.full_name().as_deref(), Some("Abah"));
        c.first_name = None;
        assert_eq!(c.full_name(), None);
    }
}

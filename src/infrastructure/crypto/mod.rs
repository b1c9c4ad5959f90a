//! Credential protection

pub mod password;

pub use password::{is_hashed, PasswordHasher};

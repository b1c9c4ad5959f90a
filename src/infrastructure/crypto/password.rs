//! Password hashing utilities

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

const BCRYPT_PREFIXES: [&str; 4] = ["$2a$", "$2b$", "$2x$", "$2y$"];
const BCRYPT_HASH_LEN: usize = 60;

/// Whether `value` already has the shape of a bcrypt hash.
///
/// A hashed credential is terminal: it is never fed back into the hasher.
pub fn is_hashed(value: &str) -> bool {
    if value.len() != BCRYPT_HASH_LEN || !BCRYPT_PREFIXES.iter().any(|p| value.starts_with(p)) {
        return false;
    }
    let bytes = value.as_bytes();
    bytes[4].is_ascii_digit() && bytes[5].is_ascii_digit() && bytes[6] == b'$'
}

/// One-way, salted hashing for customer and driver passwords.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password using bcrypt
    pub fn hash(&self, password: &str) -> Result<String, BcryptError> {
        hash(password, self.cost)
    }

    /// Hash `value` unless it is already a bcrypt hash.
    pub fn protect(&self, value: &str) -> Result<String, BcryptError> {
        if is_hashed(value) {
            return Ok(value.to_string());
        }
        self.hash(value)
    }

    /// Verify a password against a hash
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, BcryptError> {
        verify(password, hash)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let password = "secure_password_123";
        let hashed = hasher().hash(password).unwrap();

        assert!(hasher().verify(password, &hashed).unwrap());
        assert!(!hasher().verify("wrong_password", &hashed).unwrap());
    }

    #[test]
    fn hashes_are_recognised() {
        let hashed = hasher().hash("secret1").unwrap();
        assert!(is_hashed(&hashed));
        assert!(!is_hashed("secret1"));
        assert!(!is_hashed("$2b$04$tooshort"));
    }

    #[test]
    fn protect_is_idempotent() {
        let once = hasher().protect("secret1").unwrap();
        let twice = hasher().protect(&once).unwrap();
        assert_eq!(once, twice);
        assert!(hasher().verify("secret1", &twice).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hasher().hash("secret1").unwrap();
        let b = hasher().hash("secret1").unwrap();
        assert_ne!(a, b);
    }
}

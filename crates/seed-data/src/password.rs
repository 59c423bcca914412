//! Password hashing for seeded users.

use crate::db::SeedError;

/// bcrypt work factor for seeded passwords.
pub const HASH_COST: u32 = 10;

/// Hashes a plaintext password into a `$2b$` bcrypt string with a fresh salt.
///
/// This is CPU bound; async callers should run it on the blocking pool.
pub fn hash_password(password: &str) -> Result<String, SeedError> {
    bcrypt::hash(password, HASH_COST)
        .map_err(|e| SeedError::Hash(format!("Failed to hash password: {e}")))
}

/// Checks a plaintext password against a stored bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, SeedError> {
    bcrypt::verify(password, hash)
        .map_err(|e| SeedError::Hash(format!("Invalid password hash: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("123456").unwrap();

        assert_ne!(hash, "123456");
        assert!(hash.starts_with("$2b$10$"), "unexpected hash format: {hash}");
        assert!(verify_password("123456", &hash).unwrap());
        assert!(!verify_password("654321", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let a = hash_password("123456").unwrap();
        let b = hash_password("123456").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verifies_2a_hash() {
        let hash = bcrypt::hash_with_result("123456", 10)
            .unwrap()
            .format_for_version(bcrypt::Version::TwoA);
        assert!(verify_password("123456", &hash).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_rejected() {
        assert!(matches!(
            verify_password("123456", "not-a-hash"),
            Err(SeedError::Hash(_))
        ));
    }
}

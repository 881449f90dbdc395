use crate::error::HrServiceError;

/// bcrypt work factor. 10 keeps hashing around ~100ms on current hardware.
const BCRYPT_COST: u32 = 10;

pub fn hash_password(plain: &str) -> Result<String, HrServiceError> {
    bcrypt::hash(plain, BCRYPT_COST).map_err(|e| HrServiceError::Internal(e.into()))
}

/// A malformed stored digest verifies as false rather than erroring; the
/// caller treats it like a wrong password.
pub fn verify_password(plain: &str, digest: &str) -> bool {
    bcrypt::verify(plain, digest).unwrap_or(false)
}

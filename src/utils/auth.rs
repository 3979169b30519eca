use crate::core::error::StoreError;

/// Compare two tokens in constant time with respect to their contents.
pub fn tokens_match(provided: &str, expected: &str) -> bool {
    let (provided, expected) = (provided.as_bytes(), expected.as_bytes());
    if provided.len() != expected.len() {
        return false;
    }

    provided
        .iter()
        .zip(expected)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

/// Proof that the caller presented the admin token.
///
/// Only [`AdminAuthority::authorize`] can create one, so store operations
/// that take `&AdminGrant` cannot be reached without passing the check.
#[derive(Debug)]
pub struct AdminGrant {
    _private: (),
}

/// Decides which secret code grants administrative operations.
#[derive(Debug, Clone)]
pub struct AdminAuthority {
    token: String,
}

impl AdminAuthority {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn authorize(&self, secret_code: &str) -> Result<AdminGrant, StoreError> {
        if tokens_match(secret_code, &self.token) {
            Ok(AdminGrant { _private: () })
        } else {
            Err(StoreError::Unauthorized)
        }
    }

    /// Grant for tests that exercise admin store operations directly.
    #[cfg(test)]
    pub(crate) fn test_grant() -> AdminGrant {
        AdminGrant { _private: () }
    }
}

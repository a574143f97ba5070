//! Credential hashing and session authentication.
//!
//! Passwords are stored as a `salt:hash` composite: 16 random bytes of salt,
//! hex-encoded, and a 64-byte scrypt digest of the password with that salt,
//! also hex-encoded. Verification recomputes the digest and compares in
//! constant time. Every login failure mode collapses into the same generic
//! invalid-credentials error so responses never reveal whether the username
//! exists or the stored composite is malformed.

use rand::Rng;
use sea_orm::DatabaseConnection;
use subtle::ConstantTimeEq;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
};

/// Salt length in raw bytes (32 hex chars once encoded).
const SALT_LEN: usize = 16;

/// Derived key length in bytes (128 hex chars once encoded).
const HASH_LEN: usize = 64;

// scrypt cost parameters: N = 2^14, r = 8, p = 1.
const SCRYPT_LOG_N: u8 = 14;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// Derives the `salt:hash` composite for a new password.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt_bytes: [u8; SALT_LEN] = rand::rng().random();
    let salt = hex::encode(salt_bytes);

    let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, HASH_LEN)
        .map_err(|e| Error::InternalError(format!("Invalid scrypt parameters: {}", e)))?;

    let mut derived = [0u8; HASH_LEN];
    scrypt::scrypt(password.as_bytes(), salt.as_bytes(), &params, &mut derived)
        .map_err(|e| Error::InternalError(format!("Failed to derive password hash: {}", e)))?;

    Ok(format!("{}:{}", salt, hex::encode(derived)))
}

/// Checks a submitted password against a stored `salt:hash` composite.
///
/// Returns false for malformed composites (missing colon, non-hex digest)
/// rather than erroring; a corrupted database row must look exactly like a
/// wrong password to the caller. The digest comparison is constant-time.
pub fn verify_password(stored: &str, password: &str) -> bool {
    let Some((salt, hash)) = stored.split_once(':') else {
        return false;
    };
    let Ok(expected) = hex::decode(hash) else {
        return false;
    };
    let Ok(params) = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, expected.len()) else {
        return false;
    };

    let mut derived = vec![0u8; expected.len()];
    if scrypt::scrypt(password.as_bytes(), salt.as_bytes(), &params, &mut derived).is_err() {
        return false;
    }

    derived.ct_eq(&expected).into()
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account.
    ///
    /// # Returns
    /// - `Ok(Model)` - Created user
    /// - `Err(Error::AuthError)` - Username already taken (case-sensitive
    ///   exact match)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn signup(&self, username: &str, password: &str) -> Result<entity::user::Model, Error> {
        let user_repository = UserRepository::new(self.db);

        if user_repository.get_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken(username.to_string()).into());
        }

        let stored = hash_password(password)?;
        let user = user_repository.create(username, &stored).await?;

        tracing::info!(user_id = %user.id, "New user registered");

        Ok(user)
    }

    /// Verifies credentials for login.
    ///
    /// Missing fields fail fast; unknown usernames, malformed stored
    /// composites, and digest mismatches all yield the same generic
    /// invalid-credentials error.
    pub async fn login(&self, username: &str, password: &str) -> Result<entity::user::Model, Error> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        let user = UserRepository::new(self.db)
            .get_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&user.password, password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Resolves the user behind a session ID, if it still exists.
    pub async fn current_user(&self, user_id: i32) -> Result<Option<entity::user::Model>, Error> {
        Ok(UserRepository::new(self.db).get_by_id(user_id).await?)
    }
}

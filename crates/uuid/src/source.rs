//! Random and digest capabilities used by the generating constructors.

use crate::{UuidError, UuidResult};
use md5::{Digest, Md5};
use once_cell::sync::Lazy;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// A source of cryptographically secure random bytes.
///
/// Implementations must be safe to call from several threads at once.
pub trait RandomSource: Send + Sync {
    /// Fills `dest` entirely with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> UuidResult<()>;
}

/// A 128-bit digest function used for name-based identifiers.
pub trait NameDigest: Send + Sync {
    /// Returns the digest of `name`.
    fn digest(&self, name: &[u8]) -> UuidResult<[u8; 16]>;
}

/// Default secure random source.
///
/// Wraps a ChaCha-based [`StdRng`] seeded once from the operating system. Access is serialized
/// through a mutex so a single instance can be shared across threads.
pub struct SecureRandom {
    rng: Mutex<StdRng>,
}

impl SecureRandom {
    /// Creates a generator seeded from the operating system's entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::RandomSource`] if the operating system cannot provide a seed.
    pub fn new() -> UuidResult<Self> {
        let rng = StdRng::from_rng(OsRng).map_err(|e| UuidError::RandomSource(e.to_string()))?;
        tracing::debug!("seeded secure random source from the operating system");
        Ok(Self {
            rng: Mutex::new(rng),
        })
    }
}

impl RandomSource for SecureRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> UuidResult<()> {
        // A panic while holding the lock cannot leave the generator half-updated.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.try_fill_bytes(dest)
            .map_err(|e| UuidError::RandomSource(e.to_string()))
    }
}

impl fmt::Debug for SecureRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureRandom").finish_non_exhaustive()
    }
}

static SHARED_RANDOM: Lazy<UuidResult<SecureRandom>> = Lazy::new(SecureRandom::new);

/// Returns the process-wide random source, creating it on first use.
///
/// Initialization runs exactly once even when several threads race on the first call; every
/// caller observes the same instance afterwards.
///
/// # Errors
///
/// Returns the seeding error if the source could not be created. The failure is cached, so
/// later calls return the same error.
pub fn shared_random() -> UuidResult<&'static SecureRandom> {
    SHARED_RANDOM.as_ref().map_err(Clone::clone)
}

/// MD5 digest backed by the `md-5` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Md5Digest;

impl NameDigest for Md5Digest {
    fn digest(&self, name: &[u8]) -> UuidResult<[u8; 16]> {
        let digest = Md5::digest(name);
        let mut out = [0u8; 16];
        out.copy_from_slice(&digest);
        Ok(out)
    }
}

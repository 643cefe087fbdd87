// src/random/mod.rs
use rand::rngs::OsRng;
use rand_core::RngCore;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RandomError {
    #[error("OS entropy source failed: {0}")]
    Source(#[from] rand_core::Error),

    #[error("cannot draw from an empty range")]
    EmptyRange,
}

pub type Result<T> = std::result::Result<T, RandomError>;

/// Uniform index generation on top of the OS entropy source.
pub struct SecureRandom {
    rng: OsRng,
}

impl SecureRandom {
    pub fn new() -> Self {
        SecureRandom { rng: OsRng }
    }

    /// Draw a uniformly distributed index in `[0, n)`.
    ///
    /// Draws landing past the largest multiple of `n` are rejected and
    /// retried, so the result stays unbiased when `n` is not a power
    /// of two.
    pub fn uniform_index(&mut self, n: usize) -> Result<usize> {
        if n == 0 {
            return Err(RandomError::EmptyRange);
        }
        let n = n as u64;
        let zone = (u64::MAX / n) * n;
        loop {
            let draw = self.next_u64()?;
            if draw < zone {
                return Ok((draw % n) as usize);
            }
        }
    }

    fn next_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.rng.try_fill_bytes(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }
}

impl Default for SecureRandom {
    fn default() -> Self {
        Self::new()
    }
}

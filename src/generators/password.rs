// src/generators/password.rs
use thiserror::Error;

use crate::models::GenerationOptions;
use crate::random::{RandomError, SecureRandom};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()-_=+,.?/:;{}[]~";

/// Shortest password the generator will produce.
pub const MIN_LENGTH: usize = 4;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid options: {0}")]
    Configuration(String),

    #[error("random source failure: {0}")]
    Random(#[from] RandomError),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

// Character classes participating in generation, in the order the
// coverage pass visits them. Lowercase and digits are always on.
fn enabled_classes(options: &GenerationOptions) -> Vec<&'static [u8]> {
    let mut classes: Vec<&'static [u8]> = vec![LOWERCASE, DIGITS];
    if options.include_uppercase {
        classes.push(UPPERCASE);
    }
    if options.include_special {
        classes.push(SPECIAL);
    }
    classes
}

/// Generate one random password according to `options`.
///
/// The result contains at least one character from every enabled
/// class. Entropy comes from the OS secure random source; any failure
/// there aborts generation, no partial password is returned.
pub fn generate(options: &GenerationOptions) -> Result<String> {
    let classes = enabled_classes(options);

    if options.length < MIN_LENGTH {
        return Err(GeneratorError::Configuration(format!(
            "length {} is below the minimum of {}",
            options.length, MIN_LENGTH
        )));
    }
    // The coverage pass writes one character per class, so the buffer
    // must have room for all of them.
    if options.length < classes.len() {
        return Err(GeneratorError::Configuration(format!(
            "length {} cannot cover {} character classes",
            options.length,
            classes.len()
        )));
    }

    let universe: Vec<u8> = classes.concat();
    let mut rng = SecureRandom::new();

    log::debug!(
        "generating {} chars from {} classes ({} candidates)",
        options.length,
        classes.len(),
        universe.len()
    );

    let mut buf = Vec::with_capacity(options.length);

    // One character from each enabled class
    for class in &classes {
        buf.push(class[rng.uniform_index(class.len())?]);
    }

    // Fill the remaining positions from the combined set
    while buf.len() < options.length {
        buf.push(universe[rng.uniform_index(universe.len())?]);
    }

    // Fisher–Yates pass to destroy the fixed class-order prefix left
    // by the coverage draws. j must come from [i, len) for the
    // permutation to stay uniform.
    for i in 0..buf.len() {
        let j = i + rng.uniform_index(buf.len() - i)?;
        buf.swap(i, j);
    }

    Ok(buf.into_iter().map(char::from).collect())
}

//! Random password generation.

use rand::Rng;
use zeroize::Zeroizing;

use crate::errors::{PassVaultError, Result};

/// Length used when the caller does not ask for a specific one.
pub const DEFAULT_PASSWORD_LEN: usize = 12;

/// Upper bound on generated length; anything longer is a typo.
const MAX_PASSWORD_LEN: usize = 1024;

/// ASCII letters, digits and punctuation (94 printable characters).
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Generate a random password of `length` characters.
///
/// Each character is drawn independently and uniformly from `ALPHABET`
/// using the thread-local CSPRNG.
pub fn generate_password(length: usize) -> Result<Zeroizing<String>> {
    if length == 0 {
        return Err(PassVaultError::InvalidInput(
            "password length must be at least 1".into(),
        ));
    }
    if length > MAX_PASSWORD_LEN {
        return Err(PassVaultError::InvalidInput(format!(
            "password length cannot exceed {MAX_PASSWORD_LEN}"
        )));
    }

    let mut rng = rand::rng();
    let mut password = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        let idx = rng.random_range(0..ALPHABET.len());
        password.push(char::from(ALPHABET[idx]));
    }

    Ok(password)
}

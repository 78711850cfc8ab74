use crate::error::{DeriveError, Result};
use hmac::Hmac;
use sha2::Sha512;
use zeroize::Zeroizing;

pub const ITERATIONS: u32 = 100_000;

pub const SALT_PREFIX: &str = "Pas0Gen1";

pub fn combined_salt(salt: &str) -> Zeroizing<Vec<u8>> {
    let mut combined = Zeroizing::new(Vec::with_capacity(SALT_PREFIX.len() + salt.len()));
    combined.extend_from_slice(SALT_PREFIX.as_bytes());
    combined.extend_from_slice(salt.as_bytes());
    combined
}

pub fn stretch(
    password: &[u8],
    combined_salt: &[u8],
    output_len: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let mut output = Zeroizing::new(vec![0u8; output_len]);

    pbkdf2::pbkdf2::<Hmac<Sha512>>(password, combined_salt, ITERATIONS, &mut output)
        .map_err(|e| DeriveError::CryptoProvider(format!("PBKDF2-HMAC-SHA512: {}", e)))?;

    tracing::trace!(output_len, iterations = ITERATIONS, "stretched key");

    Ok(output)
}

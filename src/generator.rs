use crate::cursor::ByteCursor;
use crate::error::{Field, Result};
use crate::kdf;
use crate::mapper;
use crate::policy::Policy;
use crate::shuffle;
use crate::validate;
use zeroize::Zeroizing;

/// Derived bytes requested per call: coverage draws, fill draws and
/// shuffle draws, sized so the shuffle can never run short.
pub fn required_byte_count(length: usize, coverage_entries: usize) -> usize {
    length + coverage_entries + shuffle::draws_needed(length)
}

pub fn convert(
    password: &str,
    salt: &str,
    length: usize,
    policy_name: &str,
) -> Result<Zeroizing<String>> {
    let policy = validate::validate(password, salt, length, policy_name)?;
    derive(password, salt, length, policy)
}

pub fn convert_with_policy(
    password: &str,
    salt: &str,
    length: usize,
    policy: &Policy,
) -> Result<Zeroizing<String>> {
    validate::check_bounds(password, salt, length)?;
    validate::check_charset(password, Field::Password)?;
    validate::check_charset(salt, Field::Salt)?;
    derive(password, salt, length, policy)
}

fn derive(
    password: &str,
    salt: &str,
    length: usize,
    policy: &Policy,
) -> Result<Zeroizing<String>> {
    let byte_count = required_byte_count(length, policy.coverage.len());
    tracing::debug!(policy = policy.name, length, byte_count, "deriving password");

    let combined_salt = kdf::combined_salt(salt);
    let bytes = kdf::stretch(password.as_bytes(), &combined_salt, byte_count)?;

    let mut cursor = ByteCursor::new(&bytes);
    let mut chars = mapper::map_characters(policy, length, &mut cursor)?;
    shuffle::shuffle(chars.as_mut_slice(), &mut cursor)?;

    tracing::trace!(
        consumed = cursor.position(),
        unused = cursor.remaining(),
        "byte stream consumed"
    );

    Ok(Zeroizing::new(chars.iter().map(|&b| char::from(b)).collect()))
}

pub fn entropy_bits(length: usize, alphabet_size: usize) -> f64 {
    length as f64 * (alphabet_size as f64).log2()
}

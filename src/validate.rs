use crate::charset;
use crate::error::{DeriveError, Field, Result};
use crate::policy::Policy;
use std::ffi::OsStr;

pub const MIN_OUTPUT_LENGTH: usize = 8;
pub const MAX_OUTPUT_LENGTH: usize = 64;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 64;

pub const MIN_SALT_LENGTH: usize = 8;
pub const MAX_SALT_LENGTH: usize = 32;

// First violation wins: length, password length, salt length, policy, charset.
pub fn validate(
    password: &str,
    salt: &str,
    length: usize,
    policy_name: &str,
) -> Result<&'static Policy> {
    check_bounds(password, salt, length)?;
    let policy = Policy::lookup(policy_name)?;
    check_charset(password, Field::Password)?;
    check_charset(salt, Field::Salt)?;
    Ok(policy)
}

pub(crate) fn check_bounds(password: &str, salt: &str, length: usize) -> Result<()> {
    check_range(length, MIN_OUTPUT_LENGTH, MAX_OUTPUT_LENGTH, Field::Length)?;
    check_range(
        password.chars().count(),
        MIN_PASSWORD_LENGTH,
        MAX_PASSWORD_LENGTH,
        Field::Password,
    )?;
    check_range(
        salt.chars().count(),
        MIN_SALT_LENGTH,
        MAX_SALT_LENGTH,
        Field::Salt,
    )
}

fn check_range(value: usize, min: usize, max: usize, field: Field) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(DeriveError::Range { field, min, max })
    }
}

pub(crate) fn check_charset(input: &str, field: Field) -> Result<()> {
    match input.chars().position(|c| !charset::is_permitted(c)) {
        Some(position) => Err(DeriveError::Charset { field, position }),
        None => Ok(()),
    }
}

pub fn text_input(raw: &OsStr, field: Field) -> Result<&str> {
    raw.to_str().ok_or(DeriveError::InputType { field })
}

pub fn parse_length(raw: &str) -> Result<usize> {
    let length: usize = raw.trim().parse().map_err(|_| DeriveError::Range {
        field: Field::Length,
        min: MIN_OUTPUT_LENGTH,
        max: MAX_OUTPUT_LENGTH,
    })?;
    check_range(length, MIN_OUTPUT_LENGTH, MAX_OUTPUT_LENGTH, Field::Length)?;
    Ok(length)
}

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Password,
    Salt,
    Length,
}

impl Field {
    fn unit_suffix(&self) -> &'static str {
        match self {
            Field::Length => "",
            Field::Password | Field::Salt => " characters long",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Password => f.write_str("password"),
            Field::Salt => f.write_str("salt"),
            Field::Length => f.write_str("length"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
    #[error("{field} must be valid text")]
    InputType { field: Field },

    /// Also raised for a length that is not an integer at all.
    #[error("{field} must be between {min} and {max}{}", .field.unit_suffix())]
    Range { field: Field, min: usize, max: usize },

    #[error("{field} contains a character outside the allowed alphabet at position {position}")]
    Charset { field: Field, position: usize },

    #[error("unknown policy: {name}")]
    Policy { name: String },

    #[error("key stretching failed: {0}")]
    CryptoProvider(String),

    #[error("derived byte stream exhausted ({needed} bytes needed, {available} available)")]
    ByteStreamExhausted { needed: usize, available: usize },
}

impl DeriveError {
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DeriveError::InputType { .. }
                | DeriveError::Range { .. }
                | DeriveError::Charset { .. }
                | DeriveError::Policy { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DeriveError>;

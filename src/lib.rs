pub mod charset;
pub mod cursor;
pub mod error;
pub mod generator;
pub mod kdf;
pub mod mapper;
pub mod policy;
pub mod shuffle;
pub mod validate;

pub use charset::CharClass;
pub use error::{DeriveError, Field};
pub use generator::{convert, convert_with_policy, entropy_bits, required_byte_count};
pub use policy::{Policy, DEFAULT_POLICY};
pub use validate::{parse_length, text_input, validate};

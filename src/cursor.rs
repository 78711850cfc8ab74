use crate::error::{DeriveError, Result};

// Forward only; each byte is handed out at most once.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn next_byte(&mut self) -> Result<u8> {
        let byte = *self
            .bytes
            .get(self.pos)
            .ok_or(DeriveError::ByteStreamExhausted {
                needed: self.pos + 1,
                available: self.bytes.len(),
            })?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

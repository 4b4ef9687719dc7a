//! Sequential, offset-tracking reader over a borrowed byte buffer.
//!
//! Every read is bounds checked. A read that would run past the end of the
//! buffer fails with [`CursorError::Truncated`] and leaves the offset
//! untouched, so a failed decode never observes a partially advanced cursor.
//! All integers are little-endian.

pub mod errors;

use errors::CursorError;

#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the next `n` bytes and advances the offset.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], CursorError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CursorError::Truncated {
                offset: self.offset,
                requested: n,
                remaining,
            });
        }
        let start = self.offset;
        self.offset += n;
        Ok(&self.bytes[start..self.offset])
    }

    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N], CursorError> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }

    pub fn take_u8(&mut self) -> Result<u8, CursorError> {
        Ok(self.take_array::<1>()?[0])
    }

    pub fn take_u16_le(&mut self) -> Result<u16, CursorError> {
        Ok(u16::from_le_bytes(self.take_array()?))
    }

    pub fn take_u32_le(&mut self) -> Result<u32, CursorError> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    pub fn take_u64_le(&mut self) -> Result<u64, CursorError> {
        Ok(u64::from_le_bytes(self.take_array()?))
    }

    /// Reads a fixed-width text field of `n` bytes and strips the trailing
    /// null and whitespace padding. The full width is always consumed.
    pub fn take_text(&mut self, n: usize) -> Result<String, CursorError> {
        let offset = self.offset;
        let raw = self.take(n)?;
        match core::str::from_utf8(raw) {
            Ok(text) => Ok(trim_padding(text).to_string()),
            Err(source) => {
                // Keep the cursor where it was so the failed field can be reported.
                self.offset = offset;
                Err(CursorError::MalformedText {
                    offset,
                    len: n,
                    source,
                })
            }
        }
    }

    /// Consumes and returns whatever is left in the buffer.
    pub fn take_rest(&mut self) -> &'a [u8] {
        let rest = &self.bytes[self.offset..];
        self.offset = self.bytes.len();
        rest
    }
}

/// Strips trailing `\0` and whitespace padding from a fixed-width text field.
pub fn trim_padding(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == '\0' || c.is_whitespace())
}

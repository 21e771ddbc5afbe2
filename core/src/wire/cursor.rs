// Bounded reader over a received buffer
//
// Every read checks the remaining length first, so a hostile length prefix
// or a truncated buffer surfaces as an error instead of a read past the end.

use crate::SrupError;

/// Forward-only reader over an untrusted byte buffer.
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Consume exactly `n` bytes.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], SrupError> {
        if self.remaining() < n {
            return Err(SrupError::Truncated {
                needed: n - self.remaining(),
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, SrupError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, SrupError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, SrupError> {
        let bytes = self.take(4)?;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(bytes);
        Ok(u32::from_be_bytes(raw))
    }

    pub fn read_u64(&mut self) -> Result<u64, SrupError> {
        let bytes = self.take(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        Ok(u64::from_be_bytes(raw))
    }

    /// Read a length-prefixed field.  The prefix is validated against the
    /// remaining buffer before the field bytes are touched.
    pub fn read_field(&mut self) -> Result<&'a [u8], SrupError> {
        let len = self.read_u16()? as usize;
        self.take(len)
    }

    /// Assert the whole buffer was consumed.  A message followed by stray
    /// bytes is structurally invalid, not "a message plus noise".
    pub fn finish(self) -> Result<(), SrupError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(SrupError::TrailingBytes(n)),
        }
    }
}

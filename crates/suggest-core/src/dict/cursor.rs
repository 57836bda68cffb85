use super::DictError;

/// Read position over a dictionary buffer.
///
/// Every read is checked against the buffer length and reports
/// [`DictError::Truncated`] instead of reading past the end.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn peek(&self) -> Result<u8, DictError> {
        self.data.get(self.pos).copied().ok_or_else(|| self.truncated())
    }

    pub fn read_u8(&mut self) -> Result<u8, DictError> {
        let b = self.peek()?;
        self.pos += 1;
        Ok(b)
    }

    pub fn read_u16_be(&mut self) -> Result<u16, DictError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Read three bytes as a big-endian value under `mask`.
    pub fn read_u24_be(&mut self, mask: usize) -> Result<usize, DictError> {
        let bytes = self.take(3)?;
        let value = (bytes[0] as usize) << 16 | (bytes[1] as usize) << 8 | bytes[2] as usize;
        Ok(value & mask)
    }

    pub fn skip(&mut self, n: usize) -> Result<(), DictError> {
        self.take(n).map(|_| ())
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DictError> {
        let data: &'a [u8] = self.data;
        let end = self.pos.checked_add(n).ok_or_else(|| self.truncated())?;
        let bytes = data.get(self.pos..end).ok_or_else(|| self.truncated())?;
        self.pos = end;
        Ok(bytes)
    }

    fn truncated(&self) -> DictError {
        DictError::Truncated {
            offset: self.pos,
            len: self.data.len(),
        }
    }
}

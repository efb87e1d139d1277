//! In-memory ROM image

/// A fully loaded ROM image
///
/// The bytes are owned and never mutated after construction; every
/// analysis pass borrows them read-only through [`RomImage::bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomImage {
    data: Vec<u8>,
}

impl RomImage {
    /// Wrap an owned byte buffer
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Raw image bytes
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Image length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Little-endian u16 at `offset`, if both bytes are in bounds
    pub fn read_u16_le(&self, offset: usize) -> Option<u16> {
        let end = offset.checked_add(2)?;
        self.data
            .get(offset..end)
            .map(|b| u16::from_le_bytes([b[0], b[1]]))
    }
}

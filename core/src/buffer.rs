//! buffer.rs
//! Owned byte region with a logical length that can be shorter than its capacity.
//!
//! Codecs write into `raw_mut()` (full capacity) and callers `trim` to the
//! number of bytes actually produced. Trimming never reallocates.
use std::ops::Add;

use rand::RngCore;

use crate::compression::CodecError;

#[derive(Debug, Clone, Default)]
pub struct Buffer {
    data: Vec<u8>,
    len: usize,
}

impl Buffer {
    /// Zero-filled buffer whose logical length equals its capacity.
    pub fn new(capacity: usize) -> Self {
        Self { data: vec![0u8; capacity], len: capacity }
    }

    pub fn from_vec(data: Vec<u8>) -> Self {
        let len = data.len();
        Self { data, len }
    }

    /// `size` bytes drawn from `rng`.
    pub fn random<R: RngCore + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut buf = Self::new(size);
        rng.fill_bytes(&mut buf.data);
        buf
    }

    /// `len` zero bytes followed by `guard`. The logical length covers both.
    pub fn with_guard(len: usize, guard: &[u8]) -> Self {
        let mut buf = Self::new(len + guard.len());
        buf.data[len..].copy_from_slice(guard);
        buf
    }

    /// True when the bytes at `offset` still equal `guard`.
    pub fn guard_intact(&self, offset: usize, guard: &[u8]) -> bool {
        self.data
            .get(offset..offset + guard.len())
            .map_or(false, |tail| tail == guard)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Set the logical length. Fails if `len` exceeds the capacity.
    pub fn trim(&mut self, len: usize) -> Result<(), CodecError> {
        if len > self.data.len() {
            return Err(CodecError::AllocationTooSmall { codec: "buffer", need: len, have: self.data.len() });
        }
        self.len = len;
        Ok(())
    }

    /// Logical region.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.len]
    }

    /// Whole allocation, including bytes past the logical length.
    pub fn raw(&self) -> &[u8] {
        &self.data
    }

    pub fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte-wise equality over the shorter of the two logical lengths.
    pub fn prefix_eq(&self, other: &Buffer) -> bool {
        let n = self.len.min(other.len);
        self.data[..n] == other.data[..n]
    }

    /// New buffer holding `self` followed by `other`.
    pub fn concat(&self, other: &Buffer) -> Buffer {
        let mut data = Vec::with_capacity(self.len + other.len);
        data.extend_from_slice(self.as_slice());
        data.extend_from_slice(other.as_slice());
        Buffer::from_vec(data)
    }
}

impl Add<&Buffer> for &Buffer {
    type Output = Buffer;

    fn add(self, rhs: &Buffer) -> Buffer {
        self.concat(rhs)
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

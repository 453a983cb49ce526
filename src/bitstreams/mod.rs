use serde::{Serialize, Deserialize};

/// A growable sequence of bits with byte-buffer packing.
///
/// Bits are stored least-significant-bit-first within each byte: bit *i* of
/// the sequence lives at bit `i % 8` of byte `i / 8`. Whenever the length is
/// not a multiple of 8, the unused high bits of the last byte are kept at
/// zero, so `as_bytes` is always the zero-padded packed form of the sequence.
#[derive(Clone, Default, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub struct BitSequence {
    buf: Vec<u8>,
    len: usize,
}

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unpacks the first `byte_count` bytes of a buffer into a bit sequence
    /// of length `byte_count * 8`, padding bits included.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The packed buffer
    /// * `byte_count` - How many bytes of `bytes` to unpack
    pub fn from_bytes(bytes: &[u8], byte_count: usize) -> Self {
        assert!(byte_count <= bytes.len(), "Cannot unpack {} bytes out of a buffer of {}", byte_count, bytes.len());

        BitSequence {
            buf: bytes[..byte_count].to_vec(),
            len: byte_count << 3,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn push(&mut self, bit: bool) {
        if self.len & 7 == 0 {
            self.buf.push(0);
        }
        if bit {
            self.buf[self.len >> 3] |= 1 << (self.len & 7);
        }
        self.len += 1;
    }

    /// Returns the bit at `index` (if in bounds).
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }

        Some((self.buf[index >> 3] >> (index & 7)) & 1 == 1)
    }

    /// Appends every bit of `other`, in order.
    pub fn extend_from(&mut self, other: &BitSequence) {
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Shortens the sequence to `new_len` bits, clearing the bits that fall
    /// back into the padding region of the last byte.
    ///
    /// Does nothing if `new_len` is not smaller than the current length.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        self.buf.truncate((new_len + 7) >> 3);
        if new_len & 7 != 0 {
            let last = self.buf.len() - 1;
            self.buf[last] &= (1 << (new_len & 7)) - 1;
        }
        self.len = new_len;
    }

    /// The packed form of the sequence: one byte per 8 bits,
    /// least-significant-bit-first, the last byte zero-padded on the high end
    /// when the length is not a multiple of 8.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    #[inline(always)]
    pub fn iter(&self) -> BitSequenceIterator<'_> {
        BitSequenceIterator { seq: self, index: 0 }
    }
}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = bool;

    type IntoIter = BitSequenceIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct BitSequenceIterator<'a> {
    seq: &'a BitSequence,
    index: usize,
}

impl<'a> Iterator for BitSequenceIterator<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let res = self.seq.get(self.index)?;
        self.index += 1;

        Some(res)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for BitSequenceIterator<'a> {}

#[cfg(test)]
mod tests;

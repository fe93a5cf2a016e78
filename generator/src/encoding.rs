use bytes::{BufMut, BytesMut};

/// Wire format for each index in the binary object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Minimal big-endian bytes with no framing. Zero encodes to nothing,
    /// so zero-valued slots vanish from the output.
    #[default]
    Minimal,
    /// One length byte (0..=8) followed by the minimal big-endian bytes.
    /// Zero encodes as a single `0x00`.
    LengthPrefixed,
}

/// Bytes needed to hold `value` without leading zero bytes.
pub fn encoded_len(value: u64) -> usize {
    let bits = u64::BITS - value.leading_zeros();
    bits.div_ceil(8) as usize
}

/// Bytes `write_index` appends for `value`.
pub fn written_len(encoding: Encoding, value: u64) -> usize {
    match encoding {
        Encoding::Minimal => encoded_len(value),
        Encoding::LengthPrefixed => 1 + encoded_len(value),
    }
}

/// Minimal big-endian encoding of `value`; empty for 0.
pub fn encode_integer(value: u64) -> Vec<u8> {
    minimal_be(value, &value.to_be_bytes()).to_vec()
}

// Leading zero bytes are skipped; all 8 of them for 0.
fn minimal_be(value: u64, be: &[u8; 8]) -> &[u8] {
    &be[(value.leading_zeros() / 8) as usize..]
}

/// Append one index to the buffer in the given encoding.
pub fn write_index(encoding: Encoding, buf: &mut BytesMut, value: u64) {
    let be = value.to_be_bytes();
    let bytes = minimal_be(value, &be);
    match encoding {
        Encoding::Minimal => {
            // 3 => 03, 0 => (nothing)
            buf.put_slice(bytes);
        }
        Encoding::LengthPrefixed => {
            // 3 => 01 03, 0 => 00
            buf.put_u8(bytes.len() as u8);
            buf.put_slice(bytes);
        }
    }
}

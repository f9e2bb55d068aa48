//! Compression pipeline.
//!
//! Two passes over the input: the first builds the frequency table, the
//! second emits codes. Between them the tree and code table are derived and
//! the magic number plus tree header are written, so the output stream is
//! fully self-describing.

use tracing::debug;

use stolas_core::Result;

use crate::bitstream::{BitReader, BitWriter};
use crate::code::{Code, CodeTable};
use crate::header;
use crate::histogram::FrequencyTable;
use crate::tree::HuffTree;
use crate::{BYTE_BITS, EOS, HUFF_MAGIC};

/// Compress `input` into a self-describing stream.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(input);
    let freq = FrequencyTable::scan(&mut reader);
    let tree = HuffTree::from_frequencies(&freq)?;
    let table = CodeTable::from_tree(&tree)?;

    let mut out = BitWriter::with_capacity(input.len() / 2 + 64);
    out.write_bits(32, HUFF_MAGIC);
    header::write_tree(&tree, &mut out);

    reader.rewind();
    while let Some(byte) = reader.read_bits(BYTE_BITS) {
        write_code(&mut out, table.code(byte as u16));
    }
    // Terminator the decoder can detect unambiguously despite padding.
    write_code(&mut out, table.code(EOS));

    debug!(
        input_bytes = input.len(),
        distinct_symbols = freq.distinct_symbols(),
        bits_read = reader.bits_read(),
        bits_written = out.bits_written(),
        "compressed stream"
    );
    Ok(out.finish())
}

/// Emit one code, splitting it when it exceeds the writer's 32-bit field
/// width.
#[inline]
fn write_code(out: &mut BitWriter, code: Code) {
    let len = usize::from(code.len);
    if len > 32 {
        out.write_bits(len - 32, (code.bits >> 32) as u32);
        out.write_bits(32, code.bits as u32);
    } else {
        out.write_bits(len, code.bits as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aaab_compressed_layout() {
        // 32-bit magic + 32-bit tree header + 7 payload bits, padded to
        // 9 bytes.
        let compressed = compress(b"aaab").expect("compresses");
        assert_eq!(compressed.len(), 9);
        assert_eq!(&compressed[..4], &HUFF_MAGIC.to_be_bytes());

        // Payload: a=1 a=1 a=1 b=00 EOS=01 -> 1110 0010, zero-padded.
        assert_eq!(compressed[8], 0b1110_0010);
    }

    #[test]
    fn test_empty_input_compresses() {
        let compressed = compress(&[]).expect("empty input compresses");
        // Magic + 21-bit degenerate tree + 1-bit EOS code still fits in
        // 7 bytes.
        assert_eq!(compressed.len(), 7);
        assert_eq!(&compressed[..4], &HUFF_MAGIC.to_be_bytes());
    }

    #[test]
    fn test_compression_is_deterministic() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let first = compress(data).unwrap();
        let second = compress(data).unwrap();
        assert_eq!(first, second, "same input must give identical bytes");
    }

    #[test]
    fn test_long_code_split_write() {
        // Exercise the two-part write path directly.
        let mut out = BitWriter::new();
        write_code(
            &mut out,
            Code {
                bits: 0xDEAD_BEEF_CAFE,
                len: 48,
            },
        );
        let bytes = out.finish();
        assert_eq!(bytes, 0xDEAD_BEEF_CAFEu64.to_be_bytes()[2..].to_vec());
    }
}

//! Decompression pipeline.
//!
//! The decoder is a small state machine whose state is "current position in
//! the tree": each payload bit steps left (0) or right (1), a byte leaf
//! emits its symbol and resets to the root, and the end-of-stream leaf
//! terminates the walk. Running out of bits before end-of-stream is reached
//! means the payload was truncated; there is no partial decode.

use tracing::debug;

use stolas_core::{Error, Result};

use crate::bitstream::{BitReader, BitWriter};
use crate::header;
use crate::tree::HuffNode;
use crate::{BYTE_BITS, EOS, HUFF_MAGIC};

/// Decompress a self-describing stream produced by
/// [`compress`](crate::compress).
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let mut bits = BitReader::new(input);

    let magic = bits
        .read_bits(32)
        .ok_or_else(|| Error::truncated_header(bits.bits_read()))?;
    if magic != HUFF_MAGIC {
        return Err(Error::bad_magic(HUFF_MAGIC, magic));
    }

    let tree = header::read_tree(&mut bits)?;
    if matches!(tree.node(tree.root()), HuffNode::Leaf { .. }) {
        return Err(Error::corrupted(
            "tree header is a single leaf; payload cannot be walked",
        ));
    }

    let mut out = BitWriter::with_capacity(input.len() * 2);
    let mut current = tree.root();

    loop {
        let bit = bits
            .read_bits(1)
            .ok_or_else(|| Error::truncated_payload(out.len()))?;

        let HuffNode::Internal { left, right } = tree.node(current) else {
            // The walk pauses only on internal nodes; the root was checked
            // above and every leaf resets to it.
            return Err(Error::corrupted("decoder walk stepped from a leaf"));
        };
        current = if bit == 0 { left } else { right };

        if let HuffNode::Leaf { symbol } = tree.node(current) {
            if symbol == EOS {
                break;
            }
            out.write_bits(BYTE_BITS, u32::from(symbol));
            current = tree.root();
        }
    }

    debug!(
        input_bytes = input.len(),
        bits_read = bits.bits_read(),
        output_bytes = out.len(),
        "decompressed stream"
    );
    Ok(out.finish())
}

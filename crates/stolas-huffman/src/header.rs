//! Tree header serialization.
//!
//! The tree travels at the front of the compressed stream in pre-order: an
//! internal node is a single `0` bit followed by its left then right
//! subtrees; a leaf is a `1` bit followed by a 9-bit symbol value (0-256).
//! The encoding is self-delimiting, so the reader knows exactly where the
//! payload begins.
//!
//! The read side never trusts its input: parsing carries a node budget of
//! [`MAX_TREE_NODES`] so a malformed header cannot recurse past depth 513
//! or allocate an oversized arena, and 9-bit symbol values above 256 are
//! rejected outright.

use stolas_core::{Error, Result};

use crate::bitstream::{BitReader, BitWriter};
use crate::tree::{HuffNode, HuffTree, NodeId, MAX_TREE_NODES};
use crate::{EOS, SYMBOL_BITS};

/// Serialize `tree` in pre-order onto `out`.
pub fn write_tree(tree: &HuffTree, out: &mut BitWriter) {
    write_node(tree, tree.root(), out);
}

fn write_node(tree: &HuffTree, id: NodeId, out: &mut BitWriter) {
    match tree.node(id) {
        HuffNode::Leaf { symbol } => {
            out.write_bits(1, 1);
            out.write_bits(SYMBOL_BITS, u32::from(symbol));
        }
        HuffNode::Internal { left, right } => {
            out.write_bits(1, 0);
            write_node(tree, left, out);
            write_node(tree, right, out);
        }
    }
}

/// Deserialize a tree from `input`, mirroring [`write_tree`].
///
/// Fails with a truncated-header error if the bit source runs dry before
/// the encoding completes, and with a corrupted-data error for structurally
/// invalid encodings (oversized tree, out-of-range symbol).
pub fn read_tree(input: &mut BitReader) -> Result<HuffTree> {
    let mut nodes = Vec::new();
    let mut budget = MAX_TREE_NODES;
    let root = read_node(input, &mut nodes, &mut budget)?;
    Ok(HuffTree::from_parts(nodes, root))
}

fn read_node(
    input: &mut BitReader,
    nodes: &mut Vec<HuffNode>,
    budget: &mut usize,
) -> Result<NodeId> {
    if *budget == 0 {
        return Err(Error::corrupted(format!(
            "encoded tree exceeds {MAX_TREE_NODES} nodes"
        )));
    }
    *budget -= 1;

    let flag = input
        .read_bits(1)
        .ok_or_else(|| Error::truncated_header(input.bits_read()))?;

    if flag == 1 {
        let symbol = input
            .read_bits(SYMBOL_BITS)
            .ok_or_else(|| Error::truncated_header(input.bits_read()))?;
        if symbol > u32::from(EOS) {
            return Err(Error::corrupted(format!(
                "leaf symbol {symbol} out of range"
            )));
        }

        let id = nodes.len();
        nodes.push(HuffNode::Leaf {
            symbol: symbol as u16,
        });
        Ok(id)
    } else {
        let left = read_node(input, nodes, budget)?;
        let right = read_node(input, nodes, budget)?;

        let id = nodes.len();
        nodes.push(HuffNode::Internal { left, right });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::CodeTable;
    use crate::histogram::FrequencyTable;

    fn build_tree(bytes: &[u8]) -> HuffTree {
        let mut input = BitReader::new(bytes);
        let freq = FrequencyTable::scan(&mut input);
        HuffTree::from_frequencies(&freq).expect("tree builds")
    }

    fn serialize(tree: &HuffTree) -> Vec<u8> {
        let mut out = BitWriter::new();
        write_tree(tree, &mut out);
        out.finish()
    }

    #[test]
    fn test_header_roundtrip_preserves_leaf_paths() {
        let tree = build_tree(b"hello world, this is a tree header test");
        let bytes = serialize(&tree);

        let mut input = BitReader::new(&bytes);
        let restored = read_tree(&mut input).expect("header parses");

        // Same symbols at the same root-to-leaf paths means identical
        // code tables.
        let original_codes = CodeTable::from_tree(&tree).unwrap();
        let restored_codes = CodeTable::from_tree(&restored).unwrap();
        assert_eq!(original_codes, restored_codes);
    }

    #[test]
    fn test_aaab_header_is_32_bits() {
        // 2 internal flag bits + 3 leaves at 10 bits each.
        let tree = build_tree(b"aaab");
        let mut out = BitWriter::new();
        write_tree(&tree, &mut out);
        assert_eq!(out.bits_written(), 32);
    }

    #[test]
    fn test_truncated_header_is_rejected() {
        let tree = build_tree(b"hello world");
        let bytes = serialize(&tree);

        let mut input = BitReader::new(&bytes[..bytes.len() - 1]);
        let err = read_tree(&mut input).unwrap_err();
        assert_eq!(err.category(), "truncated_header");
    }

    #[test]
    fn test_runaway_internal_chain_is_rejected() {
        // Every bit 0: an endless descent of internal nodes. The node
        // budget must trip before the reader runs out of zeros.
        let zeros = vec![0u8; 128];
        let mut input = BitReader::new(&zeros);
        let err = read_tree(&mut input).unwrap_err();
        assert_eq!(err.category(), "corrupted_data");
    }

    #[test]
    fn test_out_of_range_symbol_is_rejected() {
        // A lone leaf claiming symbol 300: valid flag, invalid 9-bit value.
        let mut out = BitWriter::new();
        out.write_bits(1, 1);
        out.write_bits(SYMBOL_BITS, 300);
        let bytes = out.finish();

        let mut input = BitReader::new(&bytes);
        let err = read_tree(&mut input).unwrap_err();
        assert_eq!(err.category(), "corrupted_data");
    }

    #[test]
    fn test_single_leaf_header_parses() {
        // Structurally valid even though the decoder refuses to walk it.
        let mut out = BitWriter::new();
        out.write_bits(1, 1);
        out.write_bits(SYMBOL_BITS, u32::from(EOS));
        let bytes = out.finish();

        let mut input = BitReader::new(&bytes);
        let tree = read_tree(&mut input).expect("single leaf parses");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(tree.root()), HuffNode::Leaf { symbol: EOS });
    }
}

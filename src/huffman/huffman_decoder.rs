use crate::{Symbol, bitstreams::BitSequence, error::{HuffmanError, Result}};

use super::{HuffmanTree, Node};

/// Decodes bit sequences produced against the same coding tree.
pub struct HuffmanDecoder<'a, S: Symbol> {
    tree: &'a HuffmanTree<S>,
}

impl<'a, S: Symbol> HuffmanDecoder<'a, S> {
    pub fn new(tree: &'a HuffmanTree<S>) -> Self {
        HuffmanDecoder { tree }
    }

    /// Walks the tree bit by bit, emitting a symbol and restarting from the
    /// root every time a leaf is reached.
    ///
    /// The sequence has to end exactly on a code boundary: a stream whose
    /// final walk stops between root and leaf fails with
    /// [`HuffmanError::MalformedBitStream`], carrying the offset of the last
    /// completed code.
    pub fn decode(&self, bits: &BitSequence) -> Result<Vec<S>> {
        let mut symbols = Vec::new();

        // A single-leaf tree has no edges to walk: every zero bit stands for
        // one occurrence of the lone symbol, and a set bit cannot have been
        // produced by the matching encoder.
        if let Node::Leaf { symbol, .. } = *self.tree.node(self.tree.root()) {
            for (position, bit) in bits.iter().enumerate() {
                if bit {
                    return Err(HuffmanError::MalformedBitStream {
                        valid_up_to: position,
                        len: bits.len(),
                    });
                }
                symbols.push(symbol);
            }

            return Ok(symbols);
        }

        let mut current = self.tree.root();
        let mut boundary = 0;

        for (position, bit) in bits.iter().enumerate() {
            current = match *self.tree.node(current) {
                Node::Internal { left, right, .. } => if bit { right } else { left },
                // The walk restarts from the root after every emitted symbol
                Node::Leaf { .. } => unreachable!(),
            };

            if let Node::Leaf { symbol, .. } = *self.tree.node(current) {
                symbols.push(symbol);
                current = self.tree.root();
                boundary = position + 1;
            }
        }

        if current != self.tree.root() {
            return Err(HuffmanError::MalformedBitStream {
                valid_up_to: boundary,
                len: bits.len(),
            });
        }

        Ok(symbols)
    }
}

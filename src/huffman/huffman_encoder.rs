use crate::{Symbol, bitstreams::BitSequence, error::{HuffmanError, Result}};

use super::HuffmanTree;

/// Encodes symbol sequences against a fixed coding tree.
///
/// The encoder only reads the tree's precomputed code table, so any number of
/// encoders can share one tree.
pub struct HuffmanEncoder<'a, S: Symbol> {
    tree: &'a HuffmanTree<S>,
}

impl<'a, S: Symbol> HuffmanEncoder<'a, S> {
    pub fn new(tree: &'a HuffmanTree<S>) -> Self {
        HuffmanEncoder { tree }
    }

    /// Appends the code of `symbol` to `bits`, returning the number of bits
    /// written.
    ///
    /// Fails with [`HuffmanError::UnknownSymbol`] if the symbol has no leaf in
    /// the tree.
    #[inline(always)]
    pub fn encode_symbol(&self, symbol: &S, bits: &mut BitSequence) -> Result<usize> {
        match self.tree.code_of(symbol) {
            Some(code) => {
                bits.extend_from(code);
                Ok(code.len())
            }
            None => Err(HuffmanError::unknown_symbol(symbol)),
        }
    }

    /// Concatenates the codes of `symbols` in input order.
    pub fn encode(&self, symbols: &[S]) -> Result<BitSequence> {
        let mut bits = BitSequence::new();

        for symbol in symbols {
            self.encode_symbol(symbol, &mut bits)?;
        }

        Ok(bits)
    }
}

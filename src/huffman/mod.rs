pub mod huffman_encoder;
pub mod huffman_decoder;

use std::{collections::{BinaryHeap, HashMap}, cmp::Reverse, fs};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Symbol, bitstreams::BitSequence, error::{HuffmanError, Result}};

/// Occurrence counts for the distinct symbols of an input.
///
/// The table remembers the first-occurrence order of its symbols; tree
/// construction seeds leaves in that order, which keeps rebuilding from the
/// same table fully deterministic.
#[derive(Clone, Debug)]
pub struct FrequencyTable<S: Symbol> {
    counts: HashMap<S, u64>,
    order: Vec<S>,
    total: u64,
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        FrequencyTable {
            counts: HashMap::new(),
            order: Vec::new(),
            total: 0,
        }
    }
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table by scanning `symbols` once.
    ///
    /// # Examples
    ///
    /// ```
    /// use huffman_rust::huffman::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_symbols(b"abracadabra");
    /// assert_eq!(table.count(&b'a'), 5);
    /// assert_eq!(table.num_distinct(), 5);
    /// ```
    pub fn from_symbols(symbols: &[S]) -> Self {
        let mut table = FrequencyTable::new();

        for &symbol in symbols {
            table.add(symbol);
        }

        table
    }

    /// Records one occurrence of `symbol`.
    pub fn add(&mut self, symbol: S) {
        if let Some(count) = self.counts.get_mut(&symbol) {
            *count += 1;
        } else {
            self.counts.insert(symbol, 1);
            self.order.push(symbol);
        }

        self.total += 1;
    }

    /// The number of occurrences recorded for `symbol`, zero if never seen.
    #[inline(always)]
    pub fn count(&self, symbol: &S) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    #[inline(always)]
    pub fn num_distinct(&self) -> usize {
        self.order.len()
    }

    /// Total number of occurrences across all symbols.
    #[inline(always)]
    pub fn num_symbols(&self) -> u64 {
        self.total
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over `(symbol, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.order.iter().map(move |&symbol| (symbol, self.counts[&symbol]))
    }

    /// Stores the table into `<basename>.freq.bin` as a vector of
    /// `(symbol, count)` pairs in first-occurrence order.
    ///
    /// # Arguments
    ///
    /// * `basename` - The name (with or without path) the saved file will have
    pub fn store(&self, basename: &str) -> Result<()>
    where
        S: Serialize,
    {
        assert_ne!(basename, "");

        let pairs: Vec<(S, u64)> = self.iter().collect();
        fs::write(format!("{}.freq.bin", basename), bincode::serialize(&pairs)?)?;

        Ok(())
    }

    /// Loads a table previously written by [`store`](Self::store).
    ///
    /// # Arguments
    ///
    /// * `basename` - The basename of the frequency table file
    pub fn load(basename: &str) -> Result<Self>
    where
        S: DeserializeOwned,
    {
        let file = fs::read(format!("{}.freq.bin", basename))?;
        let pairs: Vec<(S, u64)> = bincode::deserialize(&file)?;

        let mut table = FrequencyTable::new();
        for &(symbol, count) in pairs.iter() {
            table.counts.insert(symbol, count);
            table.order.push(symbol);
            table.total += count;
        }

        Ok(table)
    }
}

/// A node of the coding tree.
///
/// `left` and `right` are indices into the owning tree's node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node<S: Symbol> {
    Leaf { symbol: S, frequency: u64 },
    Internal { frequency: u64, left: usize, right: usize },
}

impl<S: Symbol> Node<S> {
    #[inline(always)]
    pub fn frequency(&self) -> u64 {
        match *self {
            Node::Leaf { frequency, .. } => frequency,
            Node::Internal { frequency, .. } => frequency,
        }
    }
}

#[derive(PartialEq, Eq)]
struct HeapEntry {
    frequency: u64,
    seq: u64,
    node: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.frequency == other.frequency {
            // First-in-first-out among equal frequencies
            return self.seq.cmp(&other.seq);
        }
        self.frequency.cmp(&other.frequency)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A Huffman coding tree over symbols of type `S`.
///
/// Nodes live in a flat arena and reference their children by index, so no
/// walk ever recurses. The symbol-to-code table is derived once at
/// construction time; encoding never traverses the tree again.
#[derive(Clone, Debug)]
pub struct HuffmanTree<S: Symbol> {
    nodes: Vec<Node<S>>,
    root: usize,
    codes: CodeTable<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Counts the frequencies of `symbols` and builds their coding tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use huffman_rust::huffman::HuffmanTree;
    ///
    /// let tree = HuffmanTree::build(b"abracadabra").unwrap();
    /// assert_eq!(tree.num_leaves(), 5);
    /// assert!(tree.code_of(&b'a').is_some());
    /// ```
    pub fn build(symbols: &[S]) -> Result<Self> {
        HuffmanTree::from_frequencies(&FrequencyTable::from_symbols(symbols))
    }

    /// Builds the coding tree for a frequency table.
    ///
    /// One leaf is seeded per distinct symbol, in table order; the two
    /// lowest-frequency subtrees are then repeatedly merged (first popped
    /// becomes the left child) until a single root remains. Ties on frequency
    /// are resolved first-in-first-out, so the same table always produces the
    /// identical tree.
    ///
    /// Fails with [`HuffmanError::EmptyInput`] if the table has no symbols.
    pub fn from_frequencies(table: &FrequencyTable<S>) -> Result<Self> {
        if table.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let num_leaves = table.num_distinct();
        let mut nodes = Vec::with_capacity(2 * num_leaves - 1);
        let mut candidates = BinaryHeap::with_capacity(num_leaves);
        let mut seq = 0;

        for (symbol, frequency) in table.iter() {
            nodes.push(Node::Leaf { symbol, frequency });
            candidates.push(Reverse(HeapEntry { frequency, seq, node: nodes.len() - 1 }));
            seq += 1;
        }

        while candidates.len() > 1 {
            let first = candidates.pop().unwrap().0;
            let second = candidates.pop().unwrap().0;

            let frequency = first.frequency + second.frequency;
            nodes.push(Node::Internal { frequency, left: first.node, right: second.node });

            candidates.push(Reverse(HeapEntry { frequency, seq, node: nodes.len() - 1 }));
            seq += 1;
        }

        let root = candidates.pop().unwrap().0.node;
        let codes = CodeTable::from_arena(&nodes, root, num_leaves);

        Ok(HuffmanTree { nodes, root, codes })
    }

    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    pub fn num_leaves(&self) -> usize {
        self.codes.len()
    }

    #[inline(always)]
    pub fn root(&self) -> usize {
        self.root
    }

    #[inline(always)]
    pub fn node(&self, index: usize) -> &Node<S> {
        &self.nodes[index]
    }

    /// The code assigned to `symbol`, if the symbol has a leaf in the tree.
    #[inline(always)]
    pub fn code_of(&self, symbol: &S) -> Option<&BitSequence> {
        self.codes.get(symbol)
    }

    #[inline(always)]
    pub fn code_table(&self) -> &CodeTable<S> {
        &self.codes
    }
}

/// The symbol-to-code mapping derived from a coding tree.
#[derive(Clone, Debug)]
pub struct CodeTable<S: Symbol> {
    codes: HashMap<S, BitSequence>,
}

impl<S: Symbol> CodeTable<S> {
    /// Walks the arena once, recording the root-to-leaf path of every symbol:
    /// `false` on left edges, `true` on right edges.
    ///
    /// A tree made of a single leaf has no edges; its symbol gets the one-bit
    /// code `false` so that every occurrence still consumes one bit when
    /// decoding.
    fn from_arena(nodes: &[Node<S>], root: usize, num_leaves: usize) -> Self {
        let mut codes = HashMap::with_capacity(num_leaves);

        if let Node::Leaf { symbol, .. } = nodes[root] {
            let mut code = BitSequence::new();
            code.push(false);
            codes.insert(symbol, code);

            return CodeTable { codes };
        }

        let mut stack = vec![(root, BitSequence::new())];

        while let Some((index, path)) = stack.pop() {
            match nodes[index] {
                Node::Leaf { symbol, .. } => {
                    codes.insert(symbol, path);
                }
                Node::Internal { left, right, .. } => {
                    let mut left_path = path.clone();
                    left_path.push(false);
                    let mut right_path = path;
                    right_path.push(true);

                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
            }
        }

        CodeTable { codes }
    }

    /// The code assigned to `symbol`.
    #[inline(always)]
    pub fn get(&self, symbol: &S) -> Option<&BitSequence> {
        self.codes.get(symbol)
    }

    /// Number of coded symbols.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over `(symbol, code)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitSequence)> {
        self.codes.iter()
    }
}

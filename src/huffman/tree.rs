//! Greedy prefix-tree construction and code-table derivation
//!
//! The tree is an arena of tagged nodes addressed by index, built fresh per
//! call and never mutated afterwards. Construction is deterministic: leaves
//! enter the priority queue in ascending symbol order and frequency ties are
//! broken by node creation order, so independent encoder and decoder runs
//! reconstruct byte-identical trees from the same frequency table.

use super::FrequencyTable;
use crate::{BitString, PipError, Result, ALPHABET_SIZE};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// One node of the prefix tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TreeNode {
    /// Terminal node carrying a symbol
    Leaf { symbol: u8, freq: u64 },
    /// Combined node owning exactly two children by arena index
    Internal { freq: u64, left: usize, right: usize },
}

/// Binary prefix-code tree over a frequency table
#[derive(Debug, Clone)]
pub struct PrefixTree {
    nodes: Vec<TreeNode>,
    root: usize,
}

impl PrefixTree {
    /// Build the tree by repeatedly merging the two lowest-frequency nodes
    ///
    /// An empty table is rejected; callers handle empty input before getting
    /// here.
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        if table.is_empty() {
            return Err(PipError::EmptyInput);
        }

        let mut nodes = Vec::with_capacity(table.len() * 2 - 1);

        // Seed one leaf per entry in ascending symbol order, so that equal
        // frequencies resolve by symbol value.
        let mut leaves: Vec<_> = table.entries().to_vec();
        leaves.sort_by_key(|e| e.symbol);

        // Heap entries are (frequency, arena index); nodes are appended in
        // creation order, so the index doubles as the documented tie-break.
        let mut heap = BinaryHeap::with_capacity(leaves.len());
        for entry in &leaves {
            let index = nodes.len();
            nodes.push(TreeNode::Leaf {
                symbol: entry.symbol,
                freq: entry.count,
            });
            heap.push(Reverse((entry.count, index)));
        }

        while heap.len() > 1 {
            if let (Some(Reverse((lo_freq, lo))), Some(Reverse((hi_freq, hi)))) =
                (heap.pop(), heap.pop())
            {
                let index = nodes.len();
                nodes.push(TreeNode::Internal {
                    freq: lo_freq + hi_freq,
                    left: lo,
                    right: hi,
                });
                heap.push(Reverse((lo_freq + hi_freq, index)));
            }
        }

        match heap.pop() {
            Some(Reverse((_, root))) => Ok(Self { nodes, root }),
            None => Err(PipError::EmptyInput),
        }
    }

    /// Derive the symbol-to-codeword table by walking the tree
    ///
    /// Codewords are the path of left=0/right=1 edges from the root to each
    /// leaf. A tree consisting of a single leaf gets the one-bit codeword
    /// `0` so that every symbol still occupies output bits.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::new();

        if let TreeNode::Leaf { symbol, .. } = self.nodes[self.root] {
            let mut code = BitString::new();
            code.push(false);
            table.set(symbol, code);
            return table;
        }

        let mut stack = vec![(self.root, BitString::new())];
        while let Some((index, path)) = stack.pop() {
            match self.nodes[index] {
                TreeNode::Leaf { symbol, .. } => {
                    table.set(symbol, path);
                }
                TreeNode::Internal { left, right, .. } => {
                    let mut left_path = path.clone();
                    left_path.push(false);
                    stack.push((left, left_path));

                    let mut right_path = path;
                    right_path.push(true);
                    stack.push((right, right_path));
                }
            }
        }
        table
    }

    /// Total frequency at the root
    pub fn total_frequency(&self) -> u64 {
        match self.nodes[self.root] {
            TreeNode::Leaf { freq, .. } | TreeNode::Internal { freq, .. } => freq,
        }
    }
}

/// Mapping from symbol to prefix-free codeword
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<BitString>>,
}

impl CodeTable {
    fn new() -> Self {
        Self {
            codes: vec![None; ALPHABET_SIZE],
        }
    }

    fn set(&mut self, symbol: u8, code: BitString) {
        self.codes[symbol as usize] = Some(code);
    }

    /// Codeword for `symbol`, if the symbol is part of the alphabet
    pub fn get(&self, symbol: u8) -> Option<&BitString> {
        self.codes[symbol as usize].as_ref()
    }

    /// Iterate over (symbol, codeword) pairs in symbol order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitString)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|c| (symbol as u8, c)))
    }

    /// Number of symbols with a codeword
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// True if no symbol has a codeword
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }
}

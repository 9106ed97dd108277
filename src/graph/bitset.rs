use super::*;
use bitvec::prelude::*;
use std::fmt::{self, Debug, Formatter};
use std::ops::Index;

/// Fixed-size set of nodes that tracks its cardinality
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSet {
    cardinality: NumNodes,
    bit_vec: BitVec,
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let values: Vec<_> = self.iter_set_bits().map(|i| i.to_string()).collect();
        write!(
            f,
            "BitSet {{ cardinality: {}, bit_vec: [{}]}}",
            self.cardinality,
            values.join(", "),
        )
    }
}

impl BitSet {
    pub fn new(size: NumNodes) -> Self {
        Self {
            cardinality: 0,
            bit_vec: bitvec![0; size as usize],
        }
    }

    pub fn new_with_bits_set(size: NumNodes, bits: impl IntoIterator<Item = Node>) -> Self {
        let mut bs = Self::new(size);
        bs.set_bits(bits);
        bs
    }

    /// Sets the bit and returns its previous value
    pub fn set_bit(&mut self, idx: Node) -> bool {
        let prev = self.bit_vec.replace(idx as usize, true);
        self.cardinality += !prev as NumNodes;
        prev
    }

    pub fn set_bits(&mut self, bits: impl IntoIterator<Item = Node>) {
        for u in bits {
            self.set_bit(u);
        }
    }

    #[inline]
    pub fn get_bit(&self, idx: Node) -> bool {
        self.bit_vec[idx as usize]
    }

    #[inline]
    pub fn cardinality(&self) -> NumNodes {
        self.cardinality
    }

    #[inline]
    pub fn len(&self) -> NumNodes {
        self.bit_vec.len() as NumNodes
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bit_vec.is_empty()
    }

    pub fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.bit_vec.iter_ones().map(|i| i as Node)
    }
}

impl Index<Node> for BitSet {
    type Output = bool;

    fn index(&self, index: Node) -> &Self::Output {
        if self.get_bit(index) { &true } else { &false }
    }
}

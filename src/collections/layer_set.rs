//! Bitset over layer slot indices

use crate::layers::NUM_LAYERS;

/// Set of active layer indices, one bit per slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerSet {
    bits: u16,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `index` active. Indices outside `0..NUM_LAYERS` are ignored.
    pub fn insert(&mut self, index: usize) {
        if index < NUM_LAYERS {
            self.bits |= 1 << index;
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < NUM_LAYERS {
            self.bits &= !(1 << index);
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        index < NUM_LAYERS && self.bits & (1 << index) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Active indices in increasing order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..NUM_LAYERS).filter(move |&i| self.contains(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut set = LayerSet::new();
        assert!(set.is_empty());
        set.insert(0);
        set.insert(8);
        assert!(set.contains(0));
        assert!(set.contains(8));
        assert!(!set.contains(4));
        assert_eq!(set.len(), 2);
        set.remove(0);
        assert!(!set.contains(0));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![8]);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut set = LayerSet::new();
        set.insert(NUM_LAYERS);
        assert!(set.is_empty());
        assert!(!set.contains(NUM_LAYERS));
    }
}

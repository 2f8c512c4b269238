use alloc::vec::Vec;

use super::handle::Handle;

/// A tree node holding a contiguous run of items.
///
/// In-order, a block's subtree reads `left`, then `data`, then `right`.
#[derive(Clone)]
pub(crate) struct Block<T> {
    data: Vec<T>,
    left: Option<Handle>,
    right: Option<Handle>,
}

/// Which way the new half of a split is attached.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    /// The lower half moves into a new left child.
    Left,
    /// The upper half moves into a new right child.
    Right,
}

impl<T> Block<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self::from_data(Vec::with_capacity(capacity))
    }

    pub(crate) const fn from_data(data: Vec<T>) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    /// Returns the number of items held directly by this block.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub(crate) fn item(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.right
    }

    pub(crate) fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    pub(crate) fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    /// Appends past the last local item.
    pub(crate) fn push(&mut self, item: T) {
        self.data.push(item);
    }

    /// Places `item` at `index`, shifting the tail one slot right.
    pub(crate) fn shift_insert(&mut self, index: usize, item: T) {
        self.data.insert(index, item);
    }

    /// Cuts the local run at its midpoint and returns the half that leaves
    /// this block for a new sibling.
    ///
    /// For [`Side::Left`] the lower half leaves and the upper half stays; for
    /// [`Side::Right`] it is the other way round. With an odd item count the
    /// upper half carries the extra item.
    pub(crate) fn take_half(&mut self, side: Side) -> Vec<T> {
        let mid = self.data.len() / 2;
        let upper = self.data.split_off(mid);
        match side {
            Side::Left => core::mem::replace(&mut self.data, upper),
            Side::Right => upper,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn shift_insert_moves_tail() {
        let mut block = Block::from_data(vec![1, 2, 4]);
        block.shift_insert(2, 3);
        block.shift_insert(0, 0);
        assert_eq!(block.items(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn take_half_left_keeps_upper() {
        let mut block = Block::from_data(vec![1, 2, 3, 4, 5]);
        let lower = block.take_half(Side::Left);
        assert_eq!(lower, vec![1, 2]);
        assert_eq!(block.items(), &[3, 4, 5]);
    }

    #[test]
    fn take_half_right_keeps_lower() {
        let mut block = Block::from_data(vec![1, 2, 3, 4, 5]);
        let upper = block.take_half(Side::Right);
        assert_eq!(upper, vec![3, 4, 5]);
        assert_eq!(block.items(), &[1, 2]);
    }

    #[test]
    fn fresh_block_has_no_children() {
        let block: Block<u8> = Block::with_capacity(4);
        assert_eq!(block.len(), 0);
        assert!(block.left().is_none());
        assert!(block.right().is_none());
    }
}

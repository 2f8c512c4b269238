use core::ops::Index;

use super::OrderedIndex;
use crate::Rank;

/// Indexes into the ordered index by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds. Use
/// [`get_at`](OrderedIndex::get_at) for a non-panicking read.
///
/// # Examples
///
/// ```
/// use block_tree::{OrderedIndex, Rank};
///
/// let index: OrderedIndex<_> = [30, 10, 20].into_iter().collect();
/// assert_eq!(index[Rank(1)], 20);
/// ```
impl<T, F> Index<Rank> for OrderedIndex<T, F> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_at(rank.0).expect("index out of bounds")
    }
}

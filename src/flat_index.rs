//! A single sorted vector with the same surface as [`OrderedIndex`].
//!
//! Every add shifts all items after the insertion point, so cost grows with
//! the number of items. It serves as the baseline the block tree is measured
//! against and as a reference model in tests.
//!
//! [`OrderedIndex`]: crate::OrderedIndex

use alloc::vec::Vec;
use core::fmt;

/// A sorted sequence held in one contiguous vector.
///
/// Uses the same lower-bound placement as [`OrderedIndex`](crate::OrderedIndex):
/// a new item goes in front of any equal items already present.
///
/// # Examples
///
/// ```
/// use block_tree::FlatIndex;
///
/// let mut index = FlatIndex::new(|a: &i32, b: &i32| a < b);
/// index.add(3);
/// index.add(1);
/// assert_eq!(index.get_at(0), Some(&1));
/// assert_eq!(index.as_slice(), &[1, 3]);
/// ```
#[derive(Clone)]
pub struct FlatIndex<T, F = fn(&T, &T) -> bool> {
    items: Vec<T>,
    less: F,
}

fn natural_less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

impl<T: Ord> FlatIndex<T> {
    /// Creates an empty index ordered by `T`'s [`Ord`] implementation.
    #[must_use]
    pub fn ordered() -> Self {
        Self::new(natural_less::<T>)
    }
}

impl<T, F> FlatIndex<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(less: F) -> Self {
        FlatIndex { items: Vec::new(), less }
    }

    /// Adds `item` at its sorted position, in front of any equal items.
    ///
    /// # Complexity
    ///
    /// O(log n) comparisons plus an O(n) shift.
    pub fn add(&mut self, item: T) {
        let rank = self.items.partition_point(|existing| (self.less)(existing, &item));
        self.items.insert(rank, item);
    }
}

impl<T, F> FlatIndex<T, F> {
    #[must_use]
    pub fn get_at(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Debug, F> fmt::Debug for FlatIndex<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: Ord> Default for FlatIndex<T> {
    fn default() -> Self {
        FlatIndex::ordered()
    }
}

impl<T, F> Extend<T> for FlatIndex<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T, F> IntoIterator for &'a FlatIndex<T, F> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

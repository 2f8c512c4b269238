use core::fmt;
use core::iter::FusedIterator;

use crate::Config;
use crate::raw::{self, RawBlockTree};

mod order_statistic;
mod stats;

pub use stats::InsertStats;

/// A sorted sequence addressed by rank, stored as a binary tree of
/// contiguous blocks.
///
/// Items are ordered by a comparator `less(a, b)` supplied once at
/// construction, which must be a strict total order. Every [`add`] places
/// the item at its sorted position; [`get_at`] reads by zero-based position.
///
/// Each block holds up to [`Config::block_size`] items in one contiguous
/// run, so the cost of making room for an insert is bounded by the block
/// capacity instead of by the number of items in the index. Blocks split in
/// half when they are full and an insert lands inside them.
///
/// Items the comparator considers equal are kept in reverse order of
/// addition: a new item goes in front of any equal items already present.
///
/// There is no removal and no internal synchronization; wrap the index in a
/// lock to share it between threads.
///
/// [`add`]: OrderedIndex::add
/// [`get_at`]: OrderedIndex::get_at
///
/// # Examples
///
/// ```
/// use block_tree::OrderedIndex;
///
/// let mut words = OrderedIndex::new(|a: &&str, b: &&str| a < b);
/// words.add("pear");
/// words.add("apple");
/// words.add("fig");
///
/// assert_eq!(words.len(), 3);
/// assert_eq!(words.get_at(0), Some(&"apple"));
/// assert_eq!(words.get_at(2), Some(&"pear"));
/// assert_eq!(words.get_at(3), None);
///
/// let sorted: Vec<_> = words.iter().copied().collect();
/// assert_eq!(sorted, ["apple", "fig", "pear"]);
/// ```
pub struct OrderedIndex<T, F = fn(&T, &T) -> bool> {
    raw: RawBlockTree<T>,
    len: usize,
    less: F,
    config: Config,
}

/// An iterator over the items of an `OrderedIndex` in rank order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedIndex`].
///
/// [`iter`]: OrderedIndex::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    inner: raw::Iter<'a, T>,
}

fn natural_less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

impl<T: Ord> OrderedIndex<T> {
    /// Creates an empty index ordered by `T`'s [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_tree::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::ordered();
    /// index.extend([3, 1, 2]);
    /// assert_eq!(index.get_at(0), Some(&1));
    /// ```
    #[must_use]
    pub fn ordered() -> Self {
        Self::new(natural_less::<T>)
    }
}

impl<T, F> OrderedIndex<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty index ordered by `less`, with the default [`Config`].
    pub fn new(less: F) -> Self {
        OrderedIndex::with_config(less, Config::new())
    }

    /// Creates an empty index ordered by `less`.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_tree::{BlockSize, Config, OrderedIndex};
    ///
    /// let config = Config::new().with_block_size(BlockSize::new(2).unwrap());
    /// let mut index = OrderedIndex::with_config(|a: &char, b: &char| a < b, config);
    /// for c in ['c', 'a', 'e', 'b', 'd'] {
    ///     index.add(c);
    /// }
    /// assert_eq!(index.iter().collect::<String>(), "abcde");
    /// assert!(index.stats().splits() > 0);
    /// ```
    pub fn with_config(less: F, config: Config) -> Self {
        log::debug!(
            "new ordered index: block size {}, placement {:?}, initial capacity {}",
            config.block_size().get(),
            config.placement(),
            config.initial_capacity()
        );
        OrderedIndex {
            raw: RawBlockTree::new(&config),
            len: 0,
            less,
            config,
        }
    }

    /// Adds `item` at its sorted position.
    ///
    /// The position is the first rank whose item is not ordered strictly
    /// before `item`, so the new item lands in front of any equal items.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_tree::OrderedIndex;
    ///
    /// // Order by the key only; the tag records arrival.
    /// let mut index = OrderedIndex::new(|a: &(u8, char), b: &(u8, char)| a.0 < b.0);
    /// index.add((1, 'x'));
    /// index.add((1, 'y'));
    /// assert_eq!(index.get_at(0), Some(&(1, 'y')));
    /// assert_eq!(index.get_at(1), Some(&(1, 'x')));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) comparisons, each preceded by a rank lookup, plus a shift of
    /// at most one block's items.
    pub fn add(&mut self, item: T) {
        let rank = self.insertion_rank(&item);
        self.raw.insert_at(rank, item);
        self.len += 1;
    }

    /// Returns the rank [`add`](Self::add) would give `item` right now.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_tree::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::ordered();
    /// index.extend([10, 20, 20, 30]);
    /// assert_eq!(index.insertion_rank(&5), 0);
    /// assert_eq!(index.insertion_rank(&20), 1);
    /// assert_eq!(index.insertion_rank(&99), 4);
    /// ```
    #[must_use]
    pub fn insertion_rank(&self, item: &T) -> usize {
        let (mut low, mut high) = (0, self.len);
        while low < high {
            let mid = low + (high - low) / 2;
            if self.raw.get_at(mid).is_some_and(|existing| (self.less)(existing, item)) {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }
}

impl<T, F> OrderedIndex<T, F> {
    /// Returns the item at zero-based `position`, or `None` if `position` is
    /// not below [`len`](Self::len).
    ///
    /// Out-of-range reads never panic.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_tree::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::ordered();
    /// assert_eq!(index.get_at(0), None);
    ///
    /// index.add("b");
    /// assert_eq!(index.get_at(0), Some(&"b"));
    /// assert_eq!(index.get_at(usize::MAX), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// Proportional to the number of items in the left subtrees counted on
    /// the way down; subtree sizes are not cached.
    #[must_use]
    pub fn get_at(&self, position: usize) -> Option<&T> {
        if position >= self.len {
            return None;
        }
        self.raw.get_at(position)
    }

    /// Returns the number of items in the index.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the index holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets an iterator that visits the items in rank order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.raw.iter(self.len),
        }
    }

    /// Returns the configuration the index was built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns counters describing how past inserts were carried out.
    #[must_use]
    pub fn stats(&self) -> InsertStats {
        self.raw.stats()
    }

    /// Returns the number of blocks in the tree, root included.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.raw.block_count()
    }

    /// Returns the number of blocks on the longest path from the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.raw.depth()
    }

    /// Counts the items by walking the whole tree rather than reading the
    /// cached length. Always equal to [`len`](Self::len).
    #[must_use]
    pub fn count_items(&self) -> usize {
        self.raw.root_count()
    }
}

impl<T: Clone, F: Clone> Clone for OrderedIndex<T, F> {
    fn clone(&self) -> Self {
        OrderedIndex {
            raw: self.raw.clone(),
            len: self.len,
            less: self.less.clone(),
            config: self.config,
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for OrderedIndex<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> Default for OrderedIndex<T> {
    fn default() -> Self {
        OrderedIndex::ordered()
    }
}

impl<T, F> Extend<T> for OrderedIndex<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedIndex<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut index = OrderedIndex::ordered();
        index.extend(iter);
        index
    }
}

impl<'a, T, F> IntoIterator for &'a OrderedIndex<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

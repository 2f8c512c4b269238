/// A zero-based position in the sorted order of an index.
///
/// # Examples
///
/// ```
/// use block_tree::{OrderedIndex, Rank};
///
/// let mut index = OrderedIndex::ordered();
/// index.add("b");
/// index.add("a");
///
/// assert_eq!(index[Rank(0)], "a");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);

/// Counters describing how an index carried out its inserts.
///
/// Every insert ends either as an append past the last item of a block or as
/// a shifted insert inside one, so `appends + shifts` always equals the
/// number of items added. Splits happen on the way to a shifted insert.
///
/// # Examples
///
/// ```
/// use block_tree::OrderedIndex;
///
/// let mut index = OrderedIndex::ordered();
/// index.extend(0..100);
///
/// let stats = index.stats();
/// assert_eq!(stats.appends(), 100);
/// assert_eq!(stats.shifts(), 0);
/// assert_eq!(stats.splits(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct InsertStats {
    appends: usize,
    shifts: usize,
    splits: usize,
}

impl InsertStats {
    /// Inserts that landed past the last item of a block.
    #[must_use]
    pub const fn appends(&self) -> usize {
        self.appends
    }

    /// Inserts that moved existing items of a block one slot right.
    #[must_use]
    pub const fn shifts(&self) -> usize {
        self.shifts
    }

    /// Blocks split in half.
    #[must_use]
    pub const fn splits(&self) -> usize {
        self.splits
    }

    pub(crate) fn record_append(&mut self) {
        self.appends += 1;
    }

    pub(crate) fn record_shift(&mut self) {
        self.shifts += 1;
    }

    pub(crate) fn record_split(&mut self) {
        self.splits += 1;
    }
}

use smallvec::SmallVec;

use super::arena::Arena;
use super::block::{Block, Side};
use super::handle::Handle;
use super::placement::{Placer, SplitSite};
use crate::{BlockSize, Config, InsertStats};

/// The rank-addressed block tree backing `OrderedIndex`.
///
/// The tree knows nothing about item order: callers decide the rank of every
/// insert, and the tree only guarantees that in-order traversal reproduces
/// the ranks it was given.
#[derive(Clone)]
pub(crate) struct RawBlockTree<T> {
    /// Every block ever created, root included.
    blocks: Arena<Block<T>>,
    root: Handle,
    block_size: BlockSize,
    placer: Placer,
    stats: InsertStats,
}

impl<T> RawBlockTree<T> {
    pub(crate) fn new(config: &Config) -> Self {
        let mut blocks = Arena::new();
        let root = blocks.alloc(Block::with_capacity(config.initial_capacity()));
        Self {
            blocks,
            root,
            block_size: config.block_size(),
            placer: Placer::new(config.placement()),
            stats: InsertStats::default(),
        }
    }

    pub(crate) fn stats(&self) -> InsertStats {
        self.stats
    }

    pub(crate) fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the number of blocks on the longest root-to-leaf path.
    pub(crate) fn depth(&self) -> usize {
        self.depth_of(Some(self.root))
    }

    fn depth_of(&self, handle: Option<Handle>) -> usize {
        handle.map_or(0, |handle| {
            let block = self.blocks.get(handle);
            1 + self.depth_of(block.left()).max(self.depth_of(block.right()))
        })
    }

    /// Counts the items in the subtree rooted at `handle`.
    ///
    /// Nothing is cached; every call walks the whole subtree.
    pub(crate) fn count(&self, handle: Handle) -> usize {
        let block = self.blocks.get(handle);
        self.count_of(block.left()) + block.len() + self.count_of(block.right())
    }

    fn count_of(&self, handle: Option<Handle>) -> usize {
        handle.map_or(0, |handle| self.count(handle))
    }

    pub(crate) fn root_count(&self) -> usize {
        self.count(self.root)
    }

    /// Returns the item at in-order position `rank`, or `None` past the end.
    pub(crate) fn get_at(&self, rank: usize) -> Option<&T> {
        let mut current = self.root;
        let mut rank = rank;

        loop {
            let block = self.blocks.get(current);
            let left_count = self.count_of(block.left());
            if rank < left_count {
                current = block.left()?;
                continue;
            }

            let local = rank - left_count;
            if local < block.len() {
                return block.item(local);
            }

            // Off the end when there is no right subtree.
            current = block.right()?;
            rank = local - block.len();
        }
    }

    /// Inserts `item` so that it ends up at in-order position `rank`.
    ///
    /// A rank in or past the local run of a block without a right child is
    /// absorbed by that block, so append-only workloads keep growing the
    /// rightmost block instead of the tree.
    pub(crate) fn insert_at(&mut self, rank: usize, item: T) {
        let mut current = self.root;
        let mut rank = rank;

        loop {
            let block = self.blocks.get(current);
            let left_count = self.count_of(block.left());
            if let Some(left) = block.left()
                && rank < left_count
            {
                current = left;
                continue;
            }

            let local = rank - left_count;
            let len = block.len();
            if let Some(right) = block.right()
                && local >= len
            {
                current = right;
                rank = local - len;
                continue;
            }

            if local >= len {
                self.blocks.get_mut(current).push(item);
                self.stats.record_append();
                return;
            }

            // A single item cannot be halved, so such a block absorbs one more.
            if len >= self.block_size.get() && len >= 2 {
                self.split(current);
                // Same block, same rank: the retry lands in whichever half
                // now holds the position.
                continue;
            }

            self.blocks.get_mut(current).shift_insert(local, item);
            self.stats.record_shift();
            return;
        }
    }

    /// Halves the local run of `handle` and hangs the departing half below it
    /// on the side the placer picks, preserving the in-order sequence.
    pub(crate) fn split(&mut self, handle: Handle) {
        let block = self.blocks.get(handle);
        let (left, right) = (block.left(), block.right());
        let (left_count, right_count) = if self.placer.needs_counts() {
            (self.count_of(left), self.count_of(right))
        } else {
            (0, 0)
        };

        let side = self.placer.choose(SplitSite {
            has_left: left.is_some(),
            has_right: right.is_some(),
            left_count,
            right_count,
        });

        let block = self.blocks.get_mut(handle);
        let len = block.len();
        let mut sibling = Block::from_data(block.take_half(side));
        match side {
            Side::Left => sibling.set_left(left),
            Side::Right => sibling.set_right(right),
        }

        let sibling = self.blocks.alloc(sibling);
        let block = self.blocks.get_mut(handle);
        match side {
            Side::Left => block.set_left(Some(sibling)),
            Side::Right => block.set_right(Some(sibling)),
        }

        self.stats.record_split();
        log::trace!("split block {handle:?} of {len} items into {sibling:?} on the {side:?}");
    }

    pub(crate) fn iter(&self, len: usize) -> Iter<'_, T> {
        let mut iter = Iter {
            tree: self,
            stack: SmallVec::new(),
            items: [].iter(),
            remaining: len,
        };
        iter.descend_left(Some(self.root));
        iter
    }
}

/// In-order walk over every block's items.
pub(crate) struct Iter<'a, T> {
    tree: &'a RawBlockTree<T>,
    /// Blocks whose left subtree is done but whose own items are not.
    stack: SmallVec<[Handle; 16]>,
    items: core::slice::Iter<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn descend_left(&mut self, mut handle: Option<Handle>) {
        while let Some(current) = handle {
            self.stack.push(current);
            handle = self.tree.blocks.get(current).left();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(item) = self.items.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(item);
            }

            let handle = self.stack.pop()?;
            let block = self.tree.blocks.get(handle);
            self.items = block.items().iter();
            self.descend_left(block.right());
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
            items: self.items.clone(),
            remaining: self.remaining,
        }
    }
}

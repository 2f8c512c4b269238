mod arena;
mod block;
mod handle;
mod placement;
mod raw_block_tree;

pub(crate) use raw_block_tree::{Iter, RawBlockTree};

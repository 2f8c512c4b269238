//! Rank-addressable ordered index built as a binary tree of contiguous blocks.
//!
//! A single sorted vector slows down as it grows because every insert shifts
//! all later items. [`OrderedIndex`] bounds that shift by storing items in
//! blocks of at most [`BlockSize`] items and arranging the blocks in a binary
//! tree, so a sorted insert only moves items within one block.
//!
//! - [`add`](OrderedIndex::add) - Insert an item at its sorted position
//! - [`get_at`](OrderedIndex::get_at) - Read the item at a zero-based rank
//! - Indexing by [`Rank`] - e.g., `index[Rank(0)]` for the first item
//!
//! # Example
//!
//! ```
//! use block_tree::{BlockSize, Config, OrderedIndex, Rank};
//!
//! let config = Config::new().with_block_size(BlockSize::new(1_000).unwrap());
//! let mut index = OrderedIndex::with_config(|a: &String, b: &String| a < b, config);
//!
//! for n in 0..10_000 {
//!     index.add(n.to_string());
//! }
//!
//! // Lexicographic, not numeric.
//! assert_eq!(index[Rank(0)], "0");
//! assert_eq!(index[Rank(1)], "1");
//! assert_eq!(index[Rank(2)], "10");
//! assert_eq!(index.len(), 10_000);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **Caller-supplied ordering** - Any strict total order `less(a, b)`, not just [`Ord`]
//! - **Tunable block capacity** - Trade tree depth against shift length per [`Config`]
//! - **Flat baseline** - [`FlatIndex`] offers the same surface on a single vector
//!
//! # Implementation
//!
//! Each block owns a contiguous run of items plus optional left and right
//! child blocks; an in-order walk yields the sorted sequence. Blocks live in
//! an append-only arena and refer to their children by handle. Subtree sizes
//! are recounted on every descent rather than cached, which keeps inserts
//! simple at the cost of extra work per lookup in deep trees.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod config;
mod order_statistic;
mod raw;

pub mod flat_index;
pub mod ordered_index;

pub use config::{BlockSize, Config, ConfigError, SplitPlacement};
pub use flat_index::FlatIndex;
pub use order_statistic::Rank;
pub use ordered_index::{InsertStats, OrderedIndex};

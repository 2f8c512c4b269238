//! Construction-time tuning for [`OrderedIndex`](crate::OrderedIndex).

use core::num::NonZero;

use thiserror::Error;

/// Errors produced while validating a [`Config`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A block must be able to hold at least one item.
    #[error("block size must be at least 1")]
    ZeroBlockSize,
}

/// The maximum number of items a single block holds before it is split.
///
/// Small capacities keep every shifted insert cheap but grow a deep tree;
/// large capacities keep the tree shallow but make each shift longer.
///
/// # Examples
///
/// ```
/// use block_tree::{BlockSize, ConfigError};
///
/// assert_eq!(BlockSize::new(5_000).unwrap().get(), 5_000);
/// assert_eq!(BlockSize::new(0), Err(ConfigError::ZeroBlockSize));
/// assert_eq!(BlockSize::DEFAULT.get(), 15_000);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct BlockSize(NonZero<usize>);

impl BlockSize {
    /// 15 000 items per block kept insert cost close to logarithmic for
    /// indexes of up to roughly 200 000 items when measured.
    pub const DEFAULT: Self = match NonZero::new(15_000) {
        Some(size) => Self(size),
        None => unreachable!(),
    };

    /// Validates `size` as a block capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroBlockSize`] if `size` is zero.
    pub const fn new(size: usize) -> Result<Self, ConfigError> {
        match NonZero::new(size) {
            Some(size) => Ok(Self(size)),
            None => Err(ConfigError::ZeroBlockSize),
        }
    }

    /// Returns the capacity as a plain `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for BlockSize {
    type Error = ConfigError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<NonZero<usize>> for BlockSize {
    fn from(size: NonZero<usize>) -> Self {
        Self(size)
    }
}

/// Where the newly created half of a split block is attached.
///
/// The choice only changes the shape of the tree; the in-order sequence and
/// the item count are identical under every policy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SplitPlacement {
    /// The lower half becomes the block's left child while the block has no
    /// left child; afterwards the upper half always becomes its right child.
    #[default]
    LeftWhenVacant,
    /// The new half goes to whichever side currently holds fewer items, ties
    /// going left.
    Balanced,
    /// Like [`LeftWhenVacant`](Self::LeftWhenVacant) while the left side is
    /// vacant, then a seeded coin flip once both children exist.
    Randomized {
        /// Seed for the coin; equal seeds give equal tree shapes.
        seed: u64,
    },
}

/// Tuning knobs for an [`OrderedIndex`](crate::OrderedIndex).
///
/// # Examples
///
/// ```
/// use block_tree::{BlockSize, Config, OrderedIndex, SplitPlacement};
///
/// let config = Config::new()
///     .with_block_size(BlockSize::new(64).unwrap())
///     .with_placement(SplitPlacement::Balanced);
///
/// let mut index = OrderedIndex::with_config(|a: &u32, b: &u32| a < b, config);
/// index.add(3);
/// assert_eq!(index.config().block_size().get(), 64);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Config {
    block_size: BlockSize,
    placement: SplitPlacement,
    initial_capacity: usize,
}

impl Config {
    /// Pre-allocated capacity of the root block of a fresh index.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 32;

    /// Returns the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            block_size: BlockSize::DEFAULT,
            placement: SplitPlacement::LeftWhenVacant,
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// Sets the block capacity.
    #[must_use]
    pub const fn with_block_size(mut self, block_size: BlockSize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Sets the split placement policy.
    #[must_use]
    pub const fn with_placement(mut self, placement: SplitPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the capacity reserved up front for the root block.
    ///
    /// This is an allocation hint only; it never limits how many items the
    /// root block may hold.
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    #[must_use]
    pub const fn block_size(&self) -> BlockSize {
        self.block_size
    }

    #[must_use]
    pub const fn placement(&self) -> SplitPlacement {
        self.placement
    }

    #[must_use]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

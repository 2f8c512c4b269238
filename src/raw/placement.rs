use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::block::Side;
use crate::SplitPlacement;

/// What a placer may look at when a block splits.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SplitSite {
    pub(crate) has_left: bool,
    pub(crate) has_right: bool,
    pub(crate) left_count: usize,
    pub(crate) right_count: usize,
}

/// Stateful form of a [`SplitPlacement`] policy.
#[derive(Clone)]
pub(crate) enum Placer {
    LeftWhenVacant,
    Balanced,
    Randomized(SmallRng),
}

impl Placer {
    pub(crate) fn new(policy: SplitPlacement) -> Self {
        match policy {
            SplitPlacement::LeftWhenVacant => Placer::LeftWhenVacant,
            SplitPlacement::Balanced => Placer::Balanced,
            SplitPlacement::Randomized { seed } => Placer::Randomized(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Whether the split needs subtree counts, which cost a traversal.
    pub(crate) fn needs_counts(&self) -> bool {
        matches!(self, Placer::Balanced)
    }

    pub(crate) fn choose(&mut self, site: SplitSite) -> Side {
        match self {
            Placer::LeftWhenVacant => {
                if site.has_left {
                    Side::Right
                } else {
                    Side::Left
                }
            }
            Placer::Balanced => {
                if site.left_count <= site.right_count {
                    Side::Left
                } else {
                    Side::Right
                }
            }
            Placer::Randomized(rng) => {
                if !site.has_left || (site.has_right && rng.gen_bool(0.5)) {
                    Side::Left
                } else {
                    Side::Right
                }
            }
        }
    }
}

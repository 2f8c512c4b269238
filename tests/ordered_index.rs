use block_tree::{BlockSize, Config, FlatIndex, OrderedIndex, Rank, SplitPlacement};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of adds to perform in each proptest case.
const TEST_SIZE: usize = 1_000;

fn config(block_size: usize, placement: SplitPlacement) -> Config {
    Config::new()
        .with_block_size(BlockSize::new(block_size).unwrap())
        .with_placement(placement)
}

#[allow(clippy::ptr_arg)]
fn lexicographic(a: &String, b: &String) -> bool {
    a < b
}

/// Compares keys only, so items sharing a key expose the tie-break.
fn by_key(a: &(i16, usize), b: &(i16, usize)) -> bool {
    a.0 < b.0
}

fn placement_strategy() -> impl Strategy<Value = SplitPlacement> {
    prop_oneof![
        Just(SplitPlacement::LeftWhenVacant),
        Just(SplitPlacement::Balanced),
        any::<u64>().prop_map(|seed| SplitPlacement::Randomized { seed }),
    ]
}

/// Keys in a narrow range so that equal keys are common.
fn key_strategy() -> impl Strategy<Value = i16> {
    -200i16..200i16
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn decimal_strings_round_trip() {
    const N: usize = 100_000;

    let mut index = OrderedIndex::with_config(lexicographic, config(15_000, SplitPlacement::LeftWhenVacant));
    for n in 0..N {
        index.add(n.to_string());
    }

    let mut expected: Vec<String> = (0..N).map(|n| n.to_string()).collect();
    expected.sort();

    assert_eq!(index.len(), N);
    for (position, item) in expected.iter().enumerate() {
        assert_eq!(index.get_at(position), Some(item), "get_at({position})");
    }
    assert_eq!(index.get_at(N), None);
    assert!(index.iter().eq(expected.iter()));
}

#[test]
fn small_blocks_split() {
    let mut index = OrderedIndex::with_config(lexicographic, config(2, SplitPlacement::LeftWhenVacant));
    for item in ["c", "a", "e", "b", "d"] {
        index.add(item.to_string());
    }

    let items: Vec<&str> = (0..5).filter_map(|n| index.get_at(n)).map(String::as_str).collect();
    assert_eq!(items, ["a", "b", "c", "d", "e"]);
    assert!(index.stats().splits() >= 1);
    assert!(index.block_count() > 1);
    assert!(index.depth() > 1);
}

#[test]
fn empty_index_reads_nothing() {
    let index: OrderedIndex<String> = OrderedIndex::ordered();
    assert_eq!(index.get_at(0), None);
    // The two's-complement image of -1.
    assert_eq!(index.get_at(usize::MAX), None);
    assert_eq!(index.len(), 0);
    assert!(index.is_empty());
    assert_eq!(index.iter().next(), None);
}

#[test]
fn equal_items_are_added_in_front() {
    let mut index = OrderedIndex::with_config(by_key, config(2, SplitPlacement::LeftWhenVacant));
    for (seq, key) in [5, 3, 5, 5, 1, 3, 5].into_iter().enumerate() {
        index.add((key, seq));
    }

    let items: Vec<(i16, usize)> = index.iter().copied().collect();
    assert_eq!(items, [(1, 4), (3, 5), (3, 1), (5, 6), (5, 3), (5, 2), (5, 0)]);
}

#[test]
fn index_by_rank() {
    let index: OrderedIndex<u32> = [40, 10, 30, 20].into_iter().collect();
    assert_eq!(index[Rank(0)], 10);
    assert_eq!(index[Rank(3)], 40);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_by_rank_out_of_bounds() {
    let index: OrderedIndex<u32> = [1, 2, 3].into_iter().collect();
    let _ = index[Rank(3)];
}

#[test]
fn config_is_retained() {
    let expected = config(64, SplitPlacement::Balanced).with_initial_capacity(0);
    let index = OrderedIndex::with_config(|a: &u8, b: &u8| a < b, expected);
    assert_eq!(index.config(), &expected);
}

#[test]
fn debug_lists_items_in_order() {
    let index: OrderedIndex<i32> = [3, -1, 2].into_iter().collect();
    assert_eq!(format!("{index:?}"), "[-1, 2, 3]");
    assert_eq!(format!("{:?}", index.iter()), "[-1, 2, 3]");
}

// ─── Randomized properties ───────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays random adds on both an `OrderedIndex` and a `FlatIndex` and
    /// asserts identical contents, tie-break included.
    #[test]
    fn matches_flat_index(
        block_size in 1..64usize,
        placement in placement_strategy(),
        keys in proptest::collection::vec(key_strategy(), TEST_SIZE),
    ) {
        let mut index = OrderedIndex::with_config(by_key, config(block_size, placement));
        let mut model = FlatIndex::new(by_key);

        for (seq, &key) in keys.iter().enumerate() {
            prop_assert_eq!(index.insertion_rank(&(key, seq)), model.as_slice().partition_point(|e| e.0 < key));
            index.add((key, seq));
            model.add((key, seq));
        }

        prop_assert_eq!(index.len(), model.len());
        prop_assert_eq!(index.count_items(), keys.len());
        for position in 0..model.len() {
            prop_assert_eq!(index.get_at(position), model.get_at(position), "get_at({})", position);
        }
        prop_assert_eq!(index.get_at(model.len()), None);
        prop_assert!(index.iter().eq(model.iter()));
    }

    /// Every adjacent pair is ordered, and equal keys appear latest-first.
    #[test]
    fn sorted_with_lower_bound_ties(
        block_size in 1..32usize,
        placement in placement_strategy(),
        keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE),
    ) {
        let mut index = OrderedIndex::with_config(by_key, config(block_size, placement));
        index.extend(keys.iter().enumerate().map(|(seq, &key)| (key, seq)));

        let items: Vec<_> = index.iter().copied().collect();
        for pair in items.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.0 < b.0 || (a.0 == b.0 && a.1 > b.1), "{:?} then {:?}", a, b);
        }
    }

    /// Adds in strictly increasing order only ever append.
    #[test]
    fn increasing_adds_never_shift(
        block_size in 1..16usize,
        placement in placement_strategy(),
        len in 0..TEST_SIZE,
    ) {
        let mut index = OrderedIndex::with_config(|a: &usize, b: &usize| a < b, config(block_size, placement));
        index.extend(0..len);

        let stats = index.stats();
        prop_assert_eq!(stats.shifts(), 0);
        prop_assert_eq!(stats.appends(), len);
        prop_assert_eq!(index.len(), len);
        prop_assert_eq!(index.count_items(), len);
    }

    /// Placement changes the shape but never the contents.
    #[test]
    fn placement_does_not_change_contents(
        block_size in 1..16usize,
        keys in proptest::collection::vec(any::<u32>(), 0..500),
        seed in any::<u64>(),
    ) {
        let build = |placement| {
            let mut index = OrderedIndex::with_config(|a: &u32, b: &u32| a < b, config(block_size, placement));
            index.extend(keys.iter().copied());
            index.iter().copied().collect::<Vec<_>>()
        };

        let reference = build(SplitPlacement::LeftWhenVacant);
        prop_assert_eq!(&build(SplitPlacement::Balanced), &reference);
        prop_assert_eq!(&build(SplitPlacement::Randomized { seed }), &reference);
    }
}

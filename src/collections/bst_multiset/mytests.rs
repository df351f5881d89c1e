use crate::collections::bst_multiset::*;

// Fixture from the reference suite: duplicates must all be kept.
const ITEMS: [i32; 21] = [
    8, 20, -14, -18, 1, -18, -8, -20, -14, -12, -9, 15, -19, -17, -3, 7, 4, -12, -17, -14, -20,
];

fn sorted_model(items: &[i32]) -> Vec<i32> {
    let mut v = items.to_vec();
    v.sort();
    v
}

fn eq_multiset(set: &BstMultiset<i32>, model: &[i32]) {
    assert_eq!(set.len(), model.len());
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), model);
    let mut bwd: Vec<i32> = set.iter().rev().copied().collect();
    bwd.reverse();
    assert_eq!(bwd, model);
}

#[test]
fn default_constructor_empty() {
    let set: BstMultiset<i32> = BstMultiset::default();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.count(&0), 0);
}

#[test]
fn from_items_keeps_duplicates() {
    let set = BstMultiset::from(ITEMS);
    set.check();
    eq_multiset(&set, &sorted_model(&ITEMS));
}

#[test]
fn insert_returns_reference_and_grows() {
    let mut set = BstMultiset::new();
    assert_eq!(set.insert(3), &3);
    assert_eq!(set.insert(3), &3);
    assert_eq!(set.len(), 2);
    set.check();
    eq_multiset(&set, &[3, 3]);
}

#[test]
fn count_and_bounds() {
    let set = BstMultiset::from(ITEMS);
    assert_eq!(set.count(&-14), 3);
    assert_eq!(set.count(&-18), 2);
    assert_eq!(set.count(&8), 1);
    assert_eq!(set.count(&10), 0);

    assert_eq!(set.equal_range(&-14).copied().collect::<Vec<_>>(), [-14, -14, -14]);
    assert!(set.equal_range(&10).next().is_none());

    // lower_bound starts at the first occurrence, upper_bound just past the
    // last one; both are empty for an absent value.
    assert_eq!(set.lower_bound(&-14).next(), Some(&-14));
    assert_eq!(set.upper_bound(&-14).next(), Some(&-12));
    assert_eq!(set.lower_bound(&20).count(), 1);
    assert_eq!(set.upper_bound(&20).count(), 0);
    assert!(set.lower_bound(&10).next().is_none());
    assert!(set.upper_bound(&10).next().is_none());
}

#[test]
fn remove_one_occurrence_at_a_time() {
    let mut set = BstMultiset::from([5, 5, 5]);
    assert!(set.remove(&5));
    set.check();
    assert_eq!(set.count(&5), 2);
    assert!(set.remove(&5));
    assert!(set.remove(&5));
    assert!(!set.remove(&5));
    assert!(set.is_empty());
}

#[test]
fn count_survives_removing_the_maximum_above_duplicates() {
    let mut set = BstMultiset::from([10, 5, 5]);
    assert!(set.remove(&10));
    set.check();
    assert_eq!(set.count(&5), 2);
    assert_eq!(set.equal_range(&5).copied().collect::<Vec<_>>(), [5, 5]);
    assert_eq!(set.lower_bound(&5).next(), Some(&5));
    assert_eq!(set.upper_bound(&5).count(), 0);
}

#[test]
fn erase_at_both_ends() {
    let mut set = BstMultiset::from(ITEMS);
    let mut model = sorted_model(&ITEMS);
    assert_eq!(set.pop_first(), Some(model.remove(0)));
    assert_eq!(set.pop_last(), model.pop());
    set.check();
    eq_multiset(&set, &model);
}

#[test]
fn merge_both_directions() {
    let extra = [14, 8, 13, 15, 6, 7, 13, 9, 16, 8];
    let mut a = BstMultiset::from(ITEMS);
    let mut b = BstMultiset::from(extra);
    let total = ITEMS.len() + extra.len();

    a.merge(&mut b);
    a.check();
    assert!(b.is_empty());
    assert_eq!(a.len(), total);
    let mut model = ITEMS.to_vec();
    model.extend_from_slice(&extra);
    model.sort();
    eq_multiset(&a, &model);

    // Merging back into the emptied donor swaps the trees wholesale.
    b.merge(&mut a);
    b.check();
    assert!(a.is_empty());
    eq_multiset(&b, &model);
}

#[test]
fn first_last_contains() {
    let set = BstMultiset::from(ITEMS);
    assert_eq!(set.first(), Some(&-20));
    assert_eq!(set.last(), Some(&20));
    assert!(set.contains(&-19));
    assert!(!set.contains(&19));
}

#[test]
fn duplicates_stay_adjacent_under_churn() {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(5);
    let mut set = BstMultiset::new();
    let mut model: Vec<i32> = Vec::new();
    for _ in 0..500 {
        let x: i32 = rng.gen_range(-10..10);
        if rng.gen_bool(0.65) {
            set.insert(x);
            let pos = model.binary_search(&x).unwrap_or_else(|p| p);
            model.insert(pos, x);
        } else if set.remove(&x) {
            let pos = model.binary_search(&x).expect("model out of sync");
            model.remove(pos);
        }
        set.check();
        assert_eq!(set.count(&x), model.iter().filter(|&&y| y == x).count());
    }
    eq_multiset(&set, &model);
}

#[test]
fn into_iter_sorted() {
    let set = BstMultiset::from([3, 1, 2, 1]);
    assert_eq!(set.into_iter().collect::<Vec<_>>(), [1, 1, 2, 3]);
}

#[test]
fn debug_and_eq() {
    let a = BstMultiset::from([2, 1, 2]);
    assert_eq!(format!("{a:?}"), "{1, 2, 2}");
    assert_eq!(a, BstMultiset::from([2, 2, 1]));
    assert_ne!(a, BstMultiset::from([1, 2]));
}

#[test]
#[cfg(feature = "serde")]
fn serde_round_trip() {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(6);
    let mut set = BstMultiset::new();
    for _ in 0..1000 {
        set.insert(rng.gen_range(0..100u32));
    }
    let ser = bincode::serialize(&set).unwrap();
    let de: BstMultiset<u32> = bincode::deserialize(&ser).unwrap();
    assert_eq!(de, set);
}

use crate::collections::bst_set::*;

// Fixture from the reference suite: note the repeated values, which a set
// must collapse.
const ITEMS: [i32; 21] = [
    8, 20, -14, -18, 1, -18, -8, -20, -14, -12, -9, 15, -19, -17, -3, 7, 4, -12, -17, -14, -20,
];

fn std_set() -> std::collections::BTreeSet<i32> {
    ITEMS.iter().copied().collect()
}

fn eq_set(set: &BstSet<i32>, std_set: &std::collections::BTreeSet<i32>) {
    assert_eq!(set.len(), std_set.len());
    for (a, b) in set.iter().zip(std_set.iter()) {
        assert_eq!(a, b);
    }
    for (a, b) in set.iter().rev().zip(std_set.iter().rev()) {
        assert_eq!(a, b);
    }
}

#[test]
fn default_constructor_empty() {
    let set: BstSet<i32> = BstSet::default();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.iter().next(), None);
}

#[test]
fn from_items_matches_std() {
    let set = BstSet::from(ITEMS);
    set.check();
    eq_set(&set, &std_set());
}

#[test]
fn insert_find_erase_round_trip() {
    let mut set = BstSet::new();
    for x in [5, 3, 8, 1, 4] {
        assert!(set.insert(x));
        set.check();
    }
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);

    assert!(set.remove(&3));
    set.check();
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 4, 5, 8]);
    assert_eq!(set.len(), 4);
    assert_eq!(set.get(&3), None);

    assert!(set.insert(3));
    assert!(!set.insert(3));
    set.check();
    assert_eq!(set.len(), 5);
}

#[test]
fn duplicate_insert_leaves_set_unchanged() {
    let mut set = BstSet::from(ITEMS);
    let before: Vec<i32> = set.iter().copied().collect();
    assert!(!set.insert(-14));
    set.check();
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), before);
}

#[test]
fn clone_is_independent() {
    let set = BstSet::from(ITEMS);
    let mut copy = set.clone();
    copy.check();
    eq_set(&copy, &std_set());
    copy.clear();
    assert!(copy.is_empty());
    eq_set(&set, &std_set());
}

#[test]
fn erase_at_both_ends() {
    let mut set = BstSet::from(ITEMS);
    let mut model = std_set();

    assert_eq!(set.pop_first(), model.pop_first());
    let second = *model.iter().next().unwrap();
    assert!(set.remove(&second));
    model.remove(&second);
    assert_eq!(set.pop_last(), model.pop_last());
    set.check();
    eq_set(&set, &model);
}

#[test]
fn get_contains_first_last() {
    let set = BstSet::from(ITEMS);
    assert!(set.contains(&-14));
    assert!(!set.contains(&-15));
    assert_eq!(set.get(&15), Some(&15));
    assert_eq!(set.get(&16), None);
    assert_eq!(set.first(), Some(&-20));
    assert_eq!(set.last(), Some(&20));
}

#[test]
fn get_or_insert_replace_take() {
    let mut set = BstSet::from([1, 2, 3]);
    assert_eq!(set.get_or_insert(2), &2);
    assert_eq!(set.get_or_insert(100), &100);
    assert_eq!(set.len(), 4);
    assert_eq!(set.replace(100), Some(100));
    assert_eq!(set.replace(200), None);
    assert_eq!(set.take(&200), Some(200));
    assert_eq!(set.take(&200), None);
    set.check();
}

#[test]
fn merge_keeps_collisions_in_donor() {
    let mut a = BstSet::from([1, 2, 5, 9]);
    let mut b = BstSet::from([2, 3, 9, 11]);
    a.merge(&mut b);
    a.check();
    b.check();
    assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 9, 11]);
    assert_eq!(b.iter().copied().collect::<Vec<_>>(), [2, 9]);

    // Merging into an empty set takes the donor's tree wholesale.
    let mut c = BstSet::new();
    c.merge(&mut b);
    c.check();
    assert_eq!(c.iter().copied().collect::<Vec<_>>(), [2, 9]);
    assert!(b.is_empty());
}

#[test]
fn traversal_symmetry() {
    let set = BstSet::from(ITEMS);
    let n = set.len();
    assert_eq!(set.iter().count(), n);
    assert_eq!(set.iter().rev().count(), n);
    let fwd: Vec<i32> = set.iter().copied().collect();
    let mut bwd: Vec<i32> = set.iter().rev().copied().collect();
    bwd.reverse();
    assert_eq!(fwd, bwd);
}

#[test]
fn retain_keeps_matching() {
    let mut set = BstSet::from(ITEMS);
    let mut model = std_set();
    set.retain(|x| x % 2 == 0);
    model.retain(|x| x % 2 == 0);
    set.check();
    eq_set(&set, &model);
}

#[test]
fn append_drains_donor() {
    let mut a = BstSet::from([1, 2, 3]);
    let mut b = BstSet::from([3, 4]);
    a.append(&mut b);
    assert!(b.is_empty());
    assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
}

#[test]
fn into_iter_both_ends() {
    let set = BstSet::from([2, 1, 3]);
    let mut it = set.into_iter();
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.next_back(), Some(3));
    assert_eq!(it.next(), Some(2));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);
}

#[test]
fn random_differential() {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(1);
    let mut set = BstSet::new();
    let mut model = std::collections::BTreeSet::new();
    for _ in 0..500 {
        let x: i32 = rng.gen_range(-40..40);
        if rng.gen_bool(0.6) {
            assert_eq!(set.insert(x), model.insert(x));
        } else {
            assert_eq!(set.remove(&x), model.remove(&x));
        }
        set.check();
    }
    eq_set(&set, &model);
}

#[test]
fn sorted_insertion_is_degenerate_but_correct() {
    let mut set = BstSet::new();
    for x in 0..500 {
        set.insert(x);
    }
    set.check();
    assert_eq!(set.len(), 500);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), (0..500).collect::<Vec<_>>());
}

#[test]
fn debug_and_ordering() {
    let set = BstSet::from([2, 1]);
    assert_eq!(format!("{set:?}"), "{1, 2}");
    let a = BstSet::from([1, 2]);
    let b = BstSet::from([1, 3]);
    assert!(a < b);
    assert_eq!(a, BstSet::from([2, 1]));
}

#[test]
#[cfg(feature = "serde")]
fn serde_round_trip() {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(2);
    let mut set = BstSet::new();
    for _ in 0..1000 {
        set.insert(rng.gen::<u32>());
    }
    let ser = bincode::serialize(&set).unwrap();
    let de: BstSet<u32> = bincode::deserialize(&ser).unwrap();
    assert_eq!(de, set);
}

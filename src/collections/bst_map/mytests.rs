use crate::collections::bst_map::*;

fn fruit_map() -> BstMap<i32, String> {
    BstMap::from([
        (15, "apples".to_string()),
        (-20, "pears".to_string()),
        (10, "bread".to_string()),
        (0, "milk".to_string()),
        (-5, "cheese".to_string()),
    ])
}

fn std_fruit_map() -> std::collections::BTreeMap<i32, String> {
    fruit_map().into_iter().collect()
}

fn eq_map(map: &BstMap<i32, String>, std_map: &std::collections::BTreeMap<i32, String>) {
    assert_eq!(map.len(), std_map.len());
    for (a, b) in map.iter().zip(std_map.iter()) {
        assert_eq!(a.0, b.0);
        assert_eq!(a.1, b.1);
    }
    for (a, b) in map.iter().rev().zip(std_map.iter().rev()) {
        assert_eq!(a.0, b.0);
    }
}

#[test]
fn default_constructor_empty() {
    let map: BstMap<i32, i32> = BstMap::default();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.first_key_value(), None);
    assert_eq!(map.last_key_value(), None);
}

#[test]
fn insert_get_round_trip() {
    let mut map = fruit_map();
    map.check();
    eq_map(&map, &std_fruit_map());
    assert_eq!(map.get(&10).map(String::as_str), Some("bread"));
    assert_eq!(map.get(&11), None);
    assert!(map.contains_key(&-20));
    assert!(!map.contains_key(&-21));
    assert_eq!(map.get_key_value(&0), Some((&0, &"milk".to_string())));
}

#[test]
fn missing_key_access() {
    let mut map = BstMap::from([(3, "a".to_string()), (1, "b".to_string())]);
    // Absent key inserts a default value through the entry API.
    let v = map.entry(50).or_default();
    assert_eq!(v, "");
    assert_eq!(map.get(&50).map(String::as_str), Some(""));
    assert_eq!(map.get(&99), None);
    map.check();
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_panics_on_missing_key() {
    let map = BstMap::from([(1, 1)]);
    let _ = map[&2];
}

#[test]
fn insert_overwrites_in_place() {
    let mut map = fruit_map();
    let ids_before: Vec<i32> = map.keys().copied().collect();
    assert_eq!(map.insert(10, "rye bread".to_string()), Some("bread".to_string()));
    map.check();
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), ids_before);
    assert_eq!(map[&10], "rye bread");
}

#[test]
fn try_insert_rejects_present_key() {
    let mut map = BstMap::new();
    assert_eq!(*map.try_insert(37, "a").unwrap(), "a");
    let err = map.try_insert(37, "b").unwrap_err();
    assert_eq!(err.entry.key(), &37);
    assert_eq!(err.entry.get(), &"a");
    assert_eq!(err.value, "b");
    assert_eq!(
        err.to_string(),
        "failed to insert \"b\", key 37 already exists with value \"a\""
    );
    assert_eq!(map.len(), 1);
}

#[test]
fn entry_api() {
    let mut map: BstMap<&str, u32> = BstMap::new();
    map.entry("poneyland").or_insert(3);
    assert_eq!(map["poneyland"], 3);
    map.entry("poneyland").and_modify(|e| *e += 1).or_insert(0);
    assert_eq!(map["poneyland"], 4);
    *map.entry("horseland").or_insert_with(|| 10) += 1;
    assert_eq!(map["horseland"], 11);
    let v = map.entry("muleland").or_insert_with_key(|k| k.len() as u32);
    assert_eq!(*v, 8);

    match map.entry("poneyland") {
        Entry::Occupied(mut e) => {
            assert_eq!(e.key(), &"poneyland");
            assert_eq!(e.insert(7), 4);
            assert_eq!(e.remove(), 7);
        }
        Entry::Vacant(_) => unreachable!(),
    }
    assert!(!map.contains_key("poneyland"));
    match map.entry("donkeyland") {
        Entry::Vacant(e) => {
            assert_eq!(e.into_key(), "donkeyland");
        }
        Entry::Occupied(_) => unreachable!(),
    }
    map.check();
}

#[test]
fn remove_and_pop() {
    let mut map = fruit_map();
    let mut model = std_fruit_map();
    assert_eq!(map.remove(&10), model.remove(&10));
    assert_eq!(map.remove(&10), None);
    assert_eq!(map.remove_entry(&0), model.remove_entry(&0));
    assert_eq!(map.pop_first(), model.pop_first());
    assert_eq!(map.pop_last(), model.pop_last());
    map.check();
    eq_map(&map, &model);
}

#[test]
fn merge_keeps_recipient_values() {
    let mut a = BstMap::from([(1, "a"), (2, "a"), (5, "a")]);
    let mut b = BstMap::from([(2, "b"), (3, "b"), (5, "b"), (7, "b")]);
    a.merge(&mut b);
    a.check();
    b.check();
    assert_eq!(
        a.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
        [(1, "a"), (2, "a"), (3, "b"), (5, "a"), (7, "b")]
    );
    // Colliding entries stayed in the donor.
    assert_eq!(
        b.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
        [(2, "b"), (5, "b")]
    );

    let mut c = BstMap::new();
    c.merge(&mut b);
    c.check();
    assert!(b.is_empty());
    assert_eq!(c.len(), 2);
}

#[test]
fn append_overwrites_recipient_values() {
    let mut a = BstMap::from([(1, "a"), (2, "a")]);
    let mut b = BstMap::from([(2, "b"), (3, "b")]);
    a.append(&mut b);
    assert!(b.is_empty());
    assert_eq!(a[&2], "b");
    assert_eq!(a.len(), 3);
}

#[test]
fn iterators() {
    let map = fruit_map();
    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, [-20, -5, 0, 10, 15]);
    let back: Vec<i32> = map.keys().rev().copied().collect();
    assert_eq!(back, [15, 10, 0, -5, -20]);
    let values: Vec<&String> = map.values().collect();
    assert_eq!(values[0], "pears");

    let map2 = map.clone();
    let pairs: Vec<(i32, String)> = map2.into_iter().collect();
    assert_eq!(pairs.len(), 5);
    assert_eq!(pairs[0].0, -20);

    assert_eq!(map.clone().into_keys().collect::<Vec<_>>(), keys);
    assert_eq!(map.clone().into_values().count(), 5);
}

#[test]
fn mutable_iteration() {
    let mut map = BstMap::from([(1, 10), (2, 20), (3, 30)]);
    for (k, v) in map.iter_mut() {
        *v += *k;
    }
    assert_eq!(map[&3], 33);
    for v in map.values_mut() {
        *v *= 2;
    }
    assert_eq!(map[&1], 22);
    map.check();

    // All mutable borrows may be held at once.
    let refs: Vec<(&i32, &mut i32)> = map.iter_mut().collect();
    assert_eq!(refs.len(), 3);
    for (_k, v) in refs {
        *v += 1;
    }
    assert_eq!(map[&2], 45);
}

#[test]
fn retain_and_extract_if() {
    let mut map: BstMap<i32, i32> = (0..10).map(|i| (i, i * 10)).collect();
    map.retain(|k, _v| k % 2 == 0);
    map.check();
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [0, 2, 4, 6, 8]);

    let drained: Vec<(i32, i32)> = map.extract_if(|k, _v| *k > 4).collect();
    assert_eq!(drained, [(6, 60), (8, 80)]);
    map.check();
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [0, 2, 4]);
}

#[test]
fn random_differential() {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(3);
    let mut map = BstMap::new();
    let mut model = std::collections::BTreeMap::new();
    for _ in 0..500 {
        let k: i32 = rng.gen_range(-40..40);
        match rng.gen_range(0..3) {
            0 | 1 => {
                let v: i32 = rng.gen_range(0..1000);
                assert_eq!(map.insert(k, v), model.insert(k, v));
            }
            _ => {
                assert_eq!(map.remove(&k), model.remove(&k));
            }
        }
        map.check();
        assert_eq!(map.len(), model.len());
    }
    let got: Vec<(i32, i32)> = map.into_iter().collect();
    let want: Vec<(i32, i32)> = model.into_iter().collect();
    assert_eq!(got, want);
}

#[test]
fn comparisons_and_hash() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    let a = BstMap::from([(1, "x"), (2, "y")]);
    let b = BstMap::from([(2, "y"), (1, "x")]);
    assert_eq!(a, b);
    let mut ha = DefaultHasher::new();
    let mut hb = DefaultHasher::new();
    a.hash(&mut ha);
    b.hash(&mut hb);
    assert_eq!(ha.finish(), hb.finish());
    let c = BstMap::from([(1, "x"), (3, "y")]);
    assert!(a < c);
    assert_eq!(format!("{a:?}"), "{1: \"x\", 2: \"y\"}");
}

#[test]
#[cfg(feature = "serde")]
fn serde_round_trip() {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(4);
    let mut map = BstMap::new();
    for _ in 0..1000 {
        map.insert(rng.gen::<u32>(), rng.gen::<u8>());
    }
    let ser = bincode::serialize(&map).unwrap();
    let de: BstMap<u32, u8> = bincode::deserialize(&ser).unwrap();
    assert_eq!(de, map);
}

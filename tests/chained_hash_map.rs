// ChainedHashMap integration suite.
//
// Each test states the behavior under check and the invariants it leans on.
// Core invariants exercised:
// - Round-trip: set(k, v) then get(k) yields v.
// - Uniqueness: a second set on the same key overwrites without growing len.
// - Absence: get on a missing key is None, never a default value.
// - Chain integrity: removing any member of a chain keeps the others.
// - Growth: doubling preserves every pair and the count.
// - Load bound: len / capacity < load_factor after every set.
use chained_hashmap::{ChainedHashMap, Error, HashSeed, TableConfig};

fn single_bucket<K: chained_hashmap::CanonicalKey, V>() -> ChainedHashMap<K, V> {
    // One bucket and a load factor no test reaches: every key shares a chain.
    TableConfig::new()
        .initial_capacity(1)
        .load_factor(1_000.0)
        .build()
        .expect("valid config")
}

// Test: round-trip across every supported key kind.
// Verifies: set followed by get returns the stored value.
#[test]
fn round_trip_for_each_key_kind() {
    let mut s: ChainedHashMap<String, i32> = ChainedHashMap::new(8);
    s.set("alpha".to_string(), 1);
    assert_eq!(s.get("alpha"), Some(&1));

    let mut i8m: ChainedHashMap<i8, &str> = ChainedHashMap::new(8);
    i8m.set(-128, "min");
    i8m.set(127, "max");
    assert_eq!(i8m.get(&-128), Some(&"min"));
    assert_eq!(i8m.get(&127), Some(&"max"));

    let mut u: ChainedHashMap<u128, u8> = ChainedHashMap::new(8);
    u.set(u128::MAX, 9);
    assert_eq!(u.get(&u128::MAX), Some(&9));

    let mut f: ChainedHashMap<f32, &str> = ChainedHashMap::new(8);
    f.set(1.5, "x");
    assert_eq!(f.get(&1.5), Some(&"x"));

    let mut unit: ChainedHashMap<(), Vec<u8>> = ChainedHashMap::new(1);
    unit.set((), vec![1, 2, 3]);
    assert_eq!(unit.get(&()), Some(&vec![1, 2, 3]));

    let mut c: ChainedHashMap<char, bool> = ChainedHashMap::new(8);
    c.set('λ', true);
    assert_eq!(c.get(&'λ'), Some(&true));
}

// Test: overwrite semantics.
// Verifies: the second set wins and len is unchanged by it.
#[test]
fn overwrite_keeps_len() {
    let mut m: ChainedHashMap<String, &str> = ChainedHashMap::new(4);
    assert_eq!(m.set("k".to_string(), "v1"), None);
    assert_eq!(m.len(), 1);
    assert_eq!(m.set("k".to_string(), "v2"), Some("v1"));
    assert_eq!(m.get("k"), Some(&"v2"));
    assert_eq!(m.len(), 1);
}

// Test: absence is distinguishable from a stored zero value.
// Verifies: a stored 0 is Some(&0); an unseen key is None.
#[test]
fn absent_differs_from_stored_default() {
    let mut m: ChainedHashMap<u32, u32> = ChainedHashMap::new(4);
    m.set(1, 0);
    assert_eq!(m.get(&1), Some(&0));
    assert_eq!(m.get(&2), None);
    assert!(m.contains_key(&1));
    assert!(!m.contains_key(&2));
}

// Test: removal.
// Verifies: remove returns true exactly once per live key; afterwards get is None.
#[test]
fn remove_is_true_once() {
    let mut m: ChainedHashMap<String, i32> = ChainedHashMap::new(10);
    m.set("testing".to_string(), 1);
    assert!(m.remove("testing"));
    assert_eq!(m.get("testing"), None);
    assert!(!m.remove("testing"));
    assert!(!m.remove("never-inserted"));
    assert_eq!(m.len(), 0);
}

// Test: chain integrity when removing head, interior and tail members.
// Assumes: a single bucket forces every key into one chain.
// Verifies: the survivors stay retrievable after each removal.
#[test]
fn chain_integrity_under_removal() {
    let mut m = single_bucket::<&str, i32>();
    m.set("k1", 1);
    m.set("k2", 2);
    m.set("k3", 3);
    assert_eq!(m.chain_stats().longest_chain, 3);

    assert!(m.remove(&"k2"));
    assert_eq!(m.get(&"k1"), Some(&1));
    assert_eq!(m.get(&"k3"), Some(&3));

    let mut m = single_bucket::<u64, u64>();
    for k in 0..10 {
        m.set(k, k * k);
    }
    // head, tail, then interior
    assert!(m.remove(&0));
    assert!(m.remove(&9));
    assert!(m.remove(&5));
    for k in [1u64, 2, 3, 4, 6, 7, 8] {
        assert_eq!(m.get(&k), Some(&(k * k)), "key {k} lost");
    }
    assert_eq!(m.len(), 7);
    assert_eq!(m.chain_stats().entries, 7);
}

// Test: growth from a tiny table.
// Verifies: capacity strictly increases and every key keeps its value.
#[test]
fn growth_preserves_data() {
    let mut m: ChainedHashMap<String, usize> = ChainedHashMap::new(2);
    let start = m.capacity();
    for i in 0..500 {
        m.set(format!("key-{i}"), i);
    }
    assert!(m.capacity() > start);
    assert!(m.capacity().is_power_of_two());
    assert_eq!(m.len(), 500);
    for i in 0..500 {
        assert_eq!(m.get(format!("key-{i}").as_str()), Some(&i));
    }
}

// Test: load bound after every insert.
// Verifies: len / capacity < load_factor holds after each set, for the
// default factor and a custom one.
#[test]
fn load_factor_bound_holds() {
    for lf in [0.6, 0.25, 0.9, 2.0] {
        let mut m: ChainedHashMap<u32, u32> = TableConfig::new()
            .initial_capacity(1)
            .load_factor(lf)
            .build()
            .unwrap();
        let mut last_cap = m.capacity();
        for i in 0..300 {
            m.set(i, i);
            let ratio = m.len() as f64 / m.capacity() as f64;
            assert!(ratio < m.load_factor(), "lf {lf}: {ratio} after {i}");
            assert!(m.capacity() >= last_cap, "capacity never shrinks");
            last_cap = m.capacity();
        }
        for i in 0..300 {
            m.remove(&i);
        }
        assert_eq!(m.capacity(), last_cap);
    }
}

// Test: bulk constructor parity.
// Verifies: every pair is retrievable; mismatched lengths yield LengthMismatch.
#[test]
fn bulk_constructor_parity() {
    let keys: Vec<String> = (0..40).map(|i| i.to_string()).collect();
    let values: Vec<i64> = (0..40).map(|i| i * -3).collect();
    let m = ChainedHashMap::from_slices(&keys, &values).unwrap();
    assert_eq!(m.len(), 40);
    for (k, v) in keys.iter().zip(&values) {
        assert_eq!(m.get(k), Some(v));
    }

    let moved = ChainedHashMap::from_vecs(keys.clone(), values.clone()).unwrap();
    assert_eq!(moved, m);

    match ChainedHashMap::from_slices(&keys[..3], &values[..2]) {
        Err(Error::LengthMismatch { keys: 3, values: 2 }) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

// Test: bulk constructor with repeated keys.
// Verifies: later pairs overwrite earlier ones and len counts unique keys.
#[test]
fn bulk_constructor_last_value_wins() {
    let m = ChainedHashMap::from_slices(&[1, 2, 1], &["a", "b", "c"]).unwrap();
    assert_eq!(m.len(), 2);
    assert_eq!(m.get(&1), Some(&"c"));
}

// Test: repeated manual growth.
// Verifies: every pair and the count survive any number of grow() calls.
#[test]
fn manual_growth_is_idempotent_on_contents() {
    let mut m: ChainedHashMap<i32, String> = ChainedHashMap::new(3);
    for i in -20..20 {
        m.set(i, format!("v{i}"));
    }
    let before: Vec<(i32, String)> = {
        let mut v: Vec<_> = m.iter().map(|(k, v)| (*k, v.clone())).collect();
        v.sort();
        v
    };
    for _ in 0..5 {
        let cap = m.capacity();
        m.grow();
        assert_eq!(m.capacity(), cap * 2);
        assert_eq!(m.len(), before.len());
        let mut after: Vec<_> = m.iter().map(|(k, v)| (*k, v.clone())).collect();
        after.sort();
        assert_eq!(after, before);
    }
}

// Test: fixed seeds.
// Verifies: two tables sharing an explicit seed lay out keys identically,
// and a table with a different seed still finds every key.
#[test]
fn explicit_seed_is_reproducible() {
    let seed = HashSeed::new(0xdead, 0xbeef);
    let build = |seed: HashSeed| -> ChainedHashMap<u64, u64> {
        let mut m = TableConfig::new()
            .initial_capacity(8)
            .seed(seed)
            .build()
            .unwrap();
        for i in 0..100 {
            m.set(i, i);
        }
        m
    };
    let a = build(seed);
    let b = build(seed);
    let ka: Vec<u64> = a.keys().copied().collect();
    let kb: Vec<u64> = b.keys().copied().collect();
    assert_eq!(ka, kb);

    let c = build(HashSeed::new(1, 2));
    assert_eq!(a, c);
}

// Test: invalid configuration.
// Verifies: zero capacity and non-positive load factors are rejected.
#[test]
fn invalid_config_is_rejected() {
    let zero = TableConfig::new().initial_capacity(0).build::<u8, u8>();
    assert!(matches!(zero, Err(Error::ZeroCapacity)));
    let lf = TableConfig::new().load_factor(0.0).build::<u8, u8>();
    assert!(matches!(lf, Err(Error::InvalidLoadFactor(_))));
}

// Test: std-style conveniences.
// Verifies: collect/extend/into_iter agree with set/get.
#[test]
fn collect_extend_and_into_iter() {
    let mut m: ChainedHashMap<String, usize> =
        ["a", "bb", "ccc"].iter().map(|s| (s.to_string(), s.len())).collect();
    m.extend([("dddd".to_string(), 4), ("a".to_string(), 10)]);
    assert_eq!(m.len(), 4);
    assert_eq!(m["a"], 10);

    let mut pairs: Vec<(String, usize)> = m.into_iter().collect();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            ("a".to_string(), 10),
            ("bb".to_string(), 2),
            ("ccc".to_string(), 3),
            ("dddd".to_string(), 4),
        ]
    );
}

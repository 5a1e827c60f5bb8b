use treemap::{OrderedMap, TreemapError};

use std::collections::{BTreeMap, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to an `OrderedMap` and a `BTreeMap`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of entries in both.
fn do_ops<K, V>(ops: &[Op<K, V>], map: &mut OrderedMap<K, V>, model: &mut BTreeMap<K, V>)
where
    K: Clone + Ord,
    V: Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                if map.insert(k.clone(), v.clone()).is_ok() {
                    model.insert(k.clone(), v.clone());
                }
            }
            Op::Remove(k) => {
                // Removing from an empty map is an error, which the model doesn't mind.
                let _ = map.remove(k);
                model.remove(k);
            }
        }
    }
}

fn build(ops: &[Op<i8, i8>]) -> (OrderedMap<i8, i8>, BTreeMap<i8, i8>) {
    let mut map = OrderedMap::new();
    let mut model = BTreeMap::new();
    do_ops(ops, &mut map, &mut model);
    (map, model)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let (map, model) = build(&ops);

    map.len() == model.len()
        && model.iter().all(|(key, value)| map.get(key) == Ok(value))
        && map.iter().eq(model.iter())
}

#[quickcheck]
fn keys_strictly_ascending(ops: Vec<Op<i8, i8>>) -> bool {
    let (map, _) = build(&ops);
    let keys: Vec<_> = map.keys().collect();

    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn first_insert_wins(xs: Vec<(i8, i8)>) -> bool {
    let mut map = OrderedMap::new();
    let mut first = BTreeMap::new();
    for (key, value) in &xs {
        let result = map.insert(*key, *value);
        let was_new = !first.contains_key(key);
        first.entry(*key).or_insert(*value);
        if result.is_ok() != was_new {
            return false;
        }
        if !was_new && result != Err(TreemapError::DuplicateKey) {
            return false;
        }
    }

    map.len() == first.len() && first.iter().all(|(key, value)| map.get(key) == Ok(value))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut map = OrderedMap::new();
    for x in &xs {
        let _ = map.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !map.contains_key(x) && !map.contains_value(x))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut map = OrderedMap::new();
    for x in &xs {
        let _ = map.insert(*x, x.wrapping_neg());
    }
    for remove in &removes {
        let _ = map.remove(remove);
    }

    let mut still_present = xs;
    still_present.retain(|x| !removes.contains(x));

    removes
        .iter()
        .all(|x| !map.contains_key(x) && !map.contains_value(&x.wrapping_neg()))
        && still_present
            .iter()
            .all(|x| map.contains_key(x) && map.contains_value(&x.wrapping_neg()))
}

#[quickcheck]
fn floor_matches_model(ops: Vec<Op<i8, i8>>, query: i8) -> bool {
    let (map, model) = build(&ops);

    match model.range(..=query).next_back() {
        Some((floor, _)) => map.floor_key(&query) == Ok(floor),
        None if model.is_empty() => map.floor_key(&query) == Err(TreemapError::EmptyContainer),
        None => map.floor_key(&query) == Err(TreemapError::KeyOutOfRange),
    }
}

#[quickcheck]
fn ceil_matches_model(ops: Vec<Op<i8, i8>>, query: i8) -> bool {
    let (map, model) = build(&ops);

    match model.range(query..).next() {
        Some((ceil, _)) => map.ceil_key(&query) == Ok(ceil),
        None if model.is_empty() => map.ceil_key(&query) == Err(TreemapError::EmptyContainer),
        None => map.ceil_key(&query) == Err(TreemapError::KeyOutOfRange),
    }
}

#[quickcheck]
fn min_and_max_match_model(ops: Vec<Op<i8, i8>>) -> bool {
    let (map, model) = build(&ops);

    match (model.keys().next(), model.keys().next_back()) {
        (Some(min), Some(max)) => map.min_key() == Ok(min) && map.max_key() == Ok(max),
        _ => {
            map.min_key() == Err(TreemapError::EmptyContainer)
                && map.max_key() == Err(TreemapError::EmptyContainer)
        }
    }
}

#[quickcheck]
fn failed_queries_do_not_mutate(ops: Vec<Op<i8, i8>>, query: i8) -> bool {
    let (map, model) = build(&ops);
    let _ = map.get(&query);
    let _ = map.floor_key(&query);
    let _ = map.ceil_key(&query);

    map.len() == model.len() && map.iter().eq(model.iter())
}

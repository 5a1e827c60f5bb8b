//! Property tests against the public `OrderedMap` API, using `std`'s `BTreeMap` as the model.

use quickcheck::{Arbitrary, Gen};

mod ordered_map;

/// An enum for the various kinds of "things" to do to
/// an `OrderedMap` in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K, V> {
    /// Insert the K, V into the map
    Insert(K, V),
    /// Remove the K from the map
    Remove(K),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g), V::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}

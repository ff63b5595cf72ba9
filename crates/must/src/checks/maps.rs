use crate::failure::abort;

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// Key/value container with a known entry count.
pub trait Mapping {
    fn entry_count(&self) -> usize;
}

/// Key lookup by any borrowed form `Q` of the map's key type.
pub trait ContainsKey<Q: ?Sized>: Mapping {
    fn contains(&self, key: &Q) -> bool;
}

impl<K, V, S> Mapping for HashMap<K, V, S> {
    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S, Q> ContainsKey<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn contains(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

impl<K, V> Mapping for BTreeMap<K, V> {
    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, Q> ContainsKey<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    #[inline]
    fn contains(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

impl Mapping for serde_json::Map<String, serde_json::Value> {
    #[inline]
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<Q> ContainsKey<Q> for serde_json::Map<String, serde_json::Value>
where
    String: Borrow<Q>,
    Q: Ord + Eq + Hash + ?Sized,
{
    #[inline]
    fn contains(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

#[track_caller]
pub fn map_has<M, Q>(map: &M, key: &Q, message: &str)
where
    M: ContainsKey<Q> + ?Sized,
    Q: Debug + ?Sized,
{
    if !map.contains(key) {
        abort(
            message,
            &format!("expected map to have key {key:?}, but it does not"),
        );
    }
}

#[track_caller]
pub fn map_not_has<M, Q>(map: &M, key: &Q, message: &str)
where
    M: ContainsKey<Q> + ?Sized,
    Q: Debug + ?Sized,
{
    if map.contains(key) {
        abort(
            message,
            &format!("expected map to not have key {key:?}, but it does"),
        );
    }
}

#[track_caller]
pub fn map_not_empty<M: Mapping + ?Sized>(map: &M, message: &str) {
    if map.entry_count() == 0 {
        abort(message, "expected map to be non-empty, but it is empty");
    }
}

#[track_caller]
pub fn map_empty<M: Mapping + ?Sized>(map: &M, message: &str) {
    if map.entry_count() != 0 {
        abort(message, "expected map to be empty, but it is not");
    }
}

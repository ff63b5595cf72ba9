//! Emptiness and membership checks over sequences, maps and strings.

use crate::failure::abort;

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;

/// Container kind and length, as seen by [`not_empty`] / [`empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Map(usize),
    Sequence(usize),
    String(usize),
    /// Not a container; the payload names the kind for diagnostics.
    Unsupported(&'static str),
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> &'static str {
        match *self {
            Shape::Map(_) => "map",
            Shape::Sequence(_) => "slice",
            Shape::String(_) => "string",
            Shape::Unsupported(kind) => kind,
        }
    }

    /// `None` for unsupported kinds.
    #[inline]
    pub fn len(&self) -> Option<usize> {
        match *self {
            Shape::Map(n) | Shape::Sequence(n) | Shape::String(n) => Some(n),
            Shape::Unsupported(_) => None,
        }
    }
}

pub trait Collection {
    fn shape(&self) -> Shape;
}

impl<C: Collection + ?Sized> Collection for &C {
    #[inline]
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<C: Collection + ?Sized> Collection for Box<C> {
    #[inline]
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl Collection for str {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::String(self.len())
    }
}

impl Collection for String {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::String(self.len())
    }
}

impl Collection for Cow<'_, str> {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::String(self.len())
    }
}

impl<T> Collection for [T] {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Sequence(self.len())
    }
}

impl<T, const N: usize> Collection for [T; N] {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Sequence(N)
    }
}

impl<T> Collection for Vec<T> {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Sequence(self.len())
    }
}

impl<T> Collection for VecDeque<T> {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Sequence(self.len())
    }
}

impl<T, S> Collection for HashSet<T, S> {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Sequence(self.len())
    }
}

impl<T> Collection for BTreeSet<T> {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Sequence(self.len())
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Map(self.len())
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Map(self.len())
    }
}

impl Collection for serde_json::Map<String, serde_json::Value> {
    #[inline]
    fn shape(&self) -> Shape {
        Shape::Map(self.len())
    }
}

/// Dynamic values: only objects, arrays and strings are containers.
impl Collection for serde_json::Value {
    fn shape(&self) -> Shape {
        use serde_json::Value;
        match self {
            Value::Object(m) => Shape::Map(m.len()),
            Value::Array(a) => Shape::Sequence(a.len()),
            Value::String(s) => Shape::String(s.len()),
            Value::Null => Shape::Unsupported("null"),
            Value::Bool(_) => Shape::Unsupported("bool"),
            Value::Number(_) => Shape::Unsupported("number"),
        }
    }
}

#[inline]
fn unsupported(kind: &str) -> String {
    format!("expected a map, slice or string, got {kind}")
}

/// Fails on an empty map, sequence or string, and on any unsupported kind.
#[track_caller]
pub fn not_empty<C: Collection + ?Sized>(value: &C, message: &str) {
    let shape = value.shape();
    match shape.len() {
        None => abort(message, &unsupported(shape.kind())),
        Some(0) => abort(
            message,
            &format!("expected a non-empty {}, got empty", shape.kind()),
        ),
        Some(_) => {}
    }
}

/// Fails on a non-empty map, sequence or string, and on any unsupported kind.
#[track_caller]
pub fn empty<C: Collection + ?Sized>(value: &C, message: &str) {
    let shape = value.shape();
    match shape.len() {
        None => abort(message, &unsupported(shape.kind())),
        Some(0) => {}
        Some(_) => abort(
            message,
            &format!("expected an empty {}, got non-empty", shape.kind()),
        ),
    }
}

#[track_caller]
pub fn contains<T: PartialEq + Debug>(slice: &[T], value: &T, message: &str) {
    if !slice.contains(value) {
        abort(
            message,
            &format!("expected slice to contain {value:?}, but it does not"),
        );
    }
}

#[track_caller]
pub fn not_contains<T: PartialEq + Debug>(slice: &[T], value: &T, message: &str) {
    if slice.contains(value) {
        abort(
            message,
            &format!("expected slice to not contain {value:?}, but it does"),
        );
    }
}

#[track_caller]
pub fn slice_has<T: PartialEq + Debug>(slice: &[T], value: &T, message: &str) {
    if !slice.contains(value) {
        abort(
            message,
            &format!("expected slice to have {value:?}, but it does not"),
        );
    }
}

#[track_caller]
pub fn slice_not_has<T: PartialEq + Debug>(slice: &[T], value: &T, message: &str) {
    if slice.contains(value) {
        abort(
            message,
            &format!("expected slice to not have {value:?}, but it does"),
        );
    }
}

#[track_caller]
pub fn is_empty<T>(slice: &[T], message: &str) {
    if !slice.is_empty() {
        abort(message, "expected slice to be empty, but it is not");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::{details_of, passes};
    use serde_json::json;

    #[test]
    fn not_empty_supported_kinds() {
        let map: HashMap<&str, i32> = HashMap::from([("a", 1)]);
        passes(|| not_empty(&map, "m"));
        passes(|| not_empty(&vec![1], "m"));
        passes(|| not_empty("x", "m"));

        assert_eq!(
            details_of(|| not_empty(&HashMap::<u8, u8>::new(), "m")),
            "expected a non-empty map, got empty"
        );
        assert_eq!(
            details_of(|| not_empty(&Vec::<u8>::new(), "m")),
            "expected a non-empty slice, got empty"
        );
        assert_eq!(
            details_of(|| not_empty("", "m")),
            "expected a non-empty string, got empty"
        );
    }

    #[test]
    fn empty_supported_kinds() {
        passes(|| empty(&BTreeMap::<u8, u8>::new(), "m"));
        passes(|| empty(&[0_u8; 0], "m"));
        passes(|| empty(&String::new(), "m"));

        assert_eq!(
            details_of(|| empty(&BTreeMap::from([(1, 2)]), "m")),
            "expected an empty map, got non-empty"
        );
        assert_eq!(
            details_of(|| empty(&VecDeque::from([1]), "m")),
            "expected an empty slice, got non-empty"
        );
        assert_eq!(
            details_of(|| empty("abc", "m")),
            "expected an empty string, got non-empty"
        );
    }

    #[test]
    fn unsupported_kind_fails_both_ways() {
        for value in [json!(null), json!(true), json!(0), json!(42)] {
            let kind = value.shape().kind();
            let expected = format!("expected a map, slice or string, got {kind}");
            assert_eq!(details_of(|| not_empty(&value, "m")), expected);
            assert_eq!(details_of(|| empty(&value, "m")), expected);
        }
    }

    #[test]
    fn json_containers_are_supported() {
        passes(|| not_empty(&json!({"a": 1}), "m"));
        passes(|| not_empty(&json!([1]), "m"));
        passes(|| empty(&json!(""), "m"));
        passes(|| empty(&json!([]), "m"));
    }

    #[test]
    fn contains_and_not_contains() {
        let items = vec![1, 2, 3];
        passes(|| contains(&items, &2, "m"));
        passes(|| not_contains(&items, &4, "m"));

        assert_eq!(
            details_of(|| contains(&items, &9, "m")),
            "expected slice to contain 9, but it does not"
        );
        assert_eq!(
            details_of(|| not_contains(&items, &1, "m")),
            "expected slice to not contain 1, but it does"
        );
    }

    #[test]
    fn slice_has_and_slice_not_has() {
        let names = ["a".to_owned(), "b".to_owned()];
        passes(|| slice_has(&names, &"a".to_owned(), "m"));
        passes(|| slice_not_has(&names, &"z".to_owned(), "m"));

        assert_eq!(
            details_of(|| slice_has(&names, &"z".to_owned(), "m")),
            r#"expected slice to have "z", but it does not"#
        );
        assert_eq!(
            details_of(|| slice_not_has(&names, &"b".to_owned(), "m")),
            r#"expected slice to not have "b", but it does"#
        );
    }

    #[test]
    fn is_empty_slice() {
        passes(|| is_empty::<u8>(&[], "m"));
        assert_eq!(
            details_of(|| is_empty(&[1], "m")),
            "expected slice to be empty, but it is not"
        );
    }
}

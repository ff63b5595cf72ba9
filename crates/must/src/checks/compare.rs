use crate::failure::abort;

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Ordered numeric types with a zero value.
pub trait Numeric: Copy + PartialOrd + Display {
    const ZERO: Self;
}

macro_rules! numeric {
    (int: $($t:ty),*) => {
        $(impl Numeric for $t { const ZERO: Self = 0; })*
    };
    (float: $($t:ty),*) => {
        $(impl Numeric for $t { const ZERO: Self = 0.0; })*
    };
}

numeric!(int: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric!(float: f32, f64);

#[track_caller]
pub fn equal<A, B>(expected: A, value: B, message: &str)
where
    A: PartialEq<B> + Debug,
    B: Debug,
{
    if expected != value {
        abort(
            message,
            &format!("expected {expected:?} to be equal to {value:?}"),
        );
    }
}

#[track_caller]
pub fn not_equal<A, B>(expected: A, value: B, message: &str)
where
    A: PartialEq<B> + Debug,
    B: Debug,
{
    if expected == value {
        abort(
            message,
            &format!("expected {expected:?} to not be equal to {value:?}"),
        );
    }
}

#[track_caller]
pub fn is_true(value: bool, message: &str) {
    if !value {
        abort(message, "expected true, got false");
    }
}

#[track_caller]
pub fn is_false(value: bool, message: &str) {
    if value {
        abort(message, "expected false, got true");
    }
}

#[track_caller]
pub fn not_zero<T: Numeric>(value: T, message: &str) {
    if value == T::ZERO {
        abort(message, "expected non-zero value, got zero");
    }
}

// The comparators pass only when the named relation holds, so an unordered pair (NaN) fails.

#[track_caller]
pub fn greater_than<T: Numeric>(value: T, threshold: T, message: &str) {
    if value.partial_cmp(&threshold) != Some(Ordering::Greater) {
        abort(
            message,
            &format!("expected {value} to be greater than {threshold}"),
        );
    }
}

#[track_caller]
pub fn less_than<T: Numeric>(value: T, threshold: T, message: &str) {
    if value.partial_cmp(&threshold) != Some(Ordering::Less) {
        abort(
            message,
            &format!("expected {value} to be less than {threshold}"),
        );
    }
}

#[track_caller]
pub fn greater_or_equal<T: Numeric>(value: T, threshold: T, message: &str) {
    if !matches!(
        value.partial_cmp(&threshold),
        Some(Ordering::Greater | Ordering::Equal)
    ) {
        abort(
            message,
            &format!("expected {value} to be greater than or equal to {threshold}"),
        );
    }
}

#[track_caller]
pub fn less_or_equal<T: Numeric>(value: T, threshold: T, message: &str) {
    if !matches!(
        value.partial_cmp(&threshold),
        Some(Ordering::Less | Ordering::Equal)
    ) {
        abort(
            message,
            &format!("expected {value} to be less than or equal to {threshold}"),
        );
    }
}

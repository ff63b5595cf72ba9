//! Nilness checks.
//!
//! `Option<T>` is the "may be absent" container. An `Option` that is present but whose
//! inner value is itself absent (`Some(None)`, `Some(null_ptr)`) is a typed pointer with no
//! target: it looks non-nil at the container level, so [`not_nil`] unwraps down to the pointee.

use crate::failure::abort;

use std::any::type_name;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NilState {
    /// No value at all.
    Absent,
    /// A value of the named pointer-like type that refers to nothing.
    NilPointer(&'static str),
    Present,
}

pub trait Nilable {
    fn nil_state(&self) -> NilState;
}

impl<T: Nilable> Nilable for Option<T> {
    fn nil_state(&self) -> NilState {
        match self {
            None => NilState::Absent,
            Some(inner) => match inner.nil_state() {
                NilState::Absent => NilState::NilPointer(type_name::<T>()),
                state => state,
            },
        }
    }
}

impl<T: ?Sized> Nilable for *const T {
    #[inline]
    fn nil_state(&self) -> NilState {
        if self.is_null() {
            NilState::NilPointer(type_name::<Self>())
        } else {
            NilState::Present
        }
    }
}

impl<T: ?Sized> Nilable for *mut T {
    #[inline]
    fn nil_state(&self) -> NilState {
        if self.is_null() {
            NilState::NilPointer(type_name::<Self>())
        } else {
            NilState::Present
        }
    }
}

impl<T: ?Sized> Nilable for NonNull<T> {
    #[inline]
    fn nil_state(&self) -> NilState {
        NilState::Present
    }
}

// Borrows are transparent.
impl<T: Nilable + ?Sized> Nilable for &T {
    #[inline]
    fn nil_state(&self) -> NilState {
        (**self).nil_state()
    }
}

impl<T: Nilable + ?Sized> Nilable for &mut T {
    #[inline]
    fn nil_state(&self) -> NilState {
        (**self).nil_state()
    }
}

macro_rules! owning_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Nilable + ?Sized> Nilable for $ptr<T> {
                fn nil_state(&self) -> NilState {
                    match (**self).nil_state() {
                        NilState::Absent => NilState::NilPointer(type_name::<Self>()),
                        state => state,
                    }
                }
            }
        )*
    };
}

owning_pointer!(Box, Rc, Arc);

macro_rules! always_present {
    ($($t:ty),* $(,)?) => {
        $(
            impl Nilable for $t {
                #[inline]
                fn nil_state(&self) -> NilState {
                    NilState::Present
                }
            }
        )*
    };
}

always_present!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String, OsStr, OsString, Path, PathBuf,
);

impl<T> Nilable for [T] {
    #[inline]
    fn nil_state(&self) -> NilState {
        NilState::Present
    }
}

impl<T, const N: usize> Nilable for [T; N] {
    #[inline]
    fn nil_state(&self) -> NilState {
        NilState::Present
    }
}

impl<T> Nilable for Vec<T> {
    #[inline]
    fn nil_state(&self) -> NilState {
        NilState::Present
    }
}

impl<T> Nilable for VecDeque<T> {
    #[inline]
    fn nil_state(&self) -> NilState {
        NilState::Present
    }
}

impl<T, S> Nilable for HashSet<T, S> {
    #[inline]
    fn nil_state(&self) -> NilState {
        NilState::Present
    }
}

impl<T> Nilable for BTreeSet<T> {
    #[inline]
    fn nil_state(&self) -> NilState {
        NilState::Present
    }
}

impl<K, V, S> Nilable for HashMap<K, V, S> {
    #[inline]
    fn nil_state(&self) -> NilState {
        NilState::Present
    }
}

impl<K, V> Nilable for BTreeMap<K, V> {
    #[inline]
    fn nil_state(&self) -> NilState {
        NilState::Present
    }
}

impl<B: ToOwned + ?Sized> Nilable for Cow<'_, B> {
    #[inline]
    fn nil_state(&self) -> NilState {
        NilState::Present
    }
}

/// JSON `null` is an absent value.
impl Nilable for serde_json::Value {
    #[inline]
    fn nil_state(&self) -> NilState {
        if self.is_null() {
            NilState::Absent
        } else {
            NilState::Present
        }
    }
}

/// Fails for an absent value and for a typed pointer with no target.
#[track_caller]
pub fn not_nil<T: Nilable + ?Sized>(value: &T, message: &str) {
    match value.nil_state() {
        NilState::Present => {}
        NilState::Absent => abort(message, "expected a non-nil value, got nil"),
        NilState::NilPointer(ty) => abort(
            message,
            &format!("expected a non-nil value, got nil pointer of type {ty}"),
        ),
    }
}

/// Fails when `value` is `Some`. No unwrapping of the inner value.
#[track_caller]
pub fn is_nil<T>(value: &Option<T>, message: &str) {
    if value.is_some() {
        abort(message, "expected nil, got non-nil");
    }
}

/// Fails when `value` is `None`. No unwrapping of the inner value.
#[track_caller]
pub fn is_not_nil<T>(value: &Option<T>, message: &str) {
    if value.is_none() {
        abort(message, "expected non-nil, got nil");
    }
}

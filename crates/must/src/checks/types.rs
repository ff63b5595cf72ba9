use crate::failure::abort;

use std::any::{type_name, Any};

/// A value that can report its concrete type at runtime.
///
/// Blanket-implemented for every `'static` type, so any `&value` coerces to `&dyn TypedValue`.
/// Pass `&*boxed` rather than `&boxed` for a `Box<dyn TypedValue>`, or the box itself is checked.
pub trait TypedValue: Any {
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> TypedValue for T {
    #[inline]
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[track_caller]
pub fn type_of<T: Any>(value: &dyn TypedValue, message: &str) {
    if !value.as_any().is::<T>() {
        abort(
            message,
            &format!(
                "expected value of type {}, got {}",
                type_name::<T>(),
                value.type_name()
            ),
        );
    }
}

#[track_caller]
pub fn type_of_not<T: Any>(value: &dyn TypedValue, message: &str) {
    if value.as_any().is::<T>() {
        abort(
            message,
            &format!(
                "expected value not of type {}, got {}",
                type_name::<T>(),
                value.type_name()
            ),
        );
    }
}

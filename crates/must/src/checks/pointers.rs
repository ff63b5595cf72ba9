use crate::failure::abort;

use std::fmt::Debug;

// A missing reference fails both checks, whatever outcome was asked for.

#[track_caller]
pub fn points_to_same<T: PartialEq + Debug + ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    message: &str,
) {
    let (Some(a), Some(b)) = (a, b) else {
        abort(message, "expected non-nil pointers, got nil")
    };
    if a != b {
        abort(
            message,
            &format!("expected pointers to point to the same value, got {a:?} and {b:?}"),
        );
    }
}

#[track_caller]
pub fn points_to_not_same<T: PartialEq + Debug + ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    message: &str,
) {
    let (Some(a), Some(b)) = (a, b) else {
        abort(message, "expected non-nil pointers, got nil")
    };
    if a == b {
        abort(
            message,
            &format!("expected pointers to point to different values, got {a:?} and {b:?}"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::{details_of, passes};

    #[test]
    fn same_compares_pointees() {
        let (x, y, z) = (1, 1, 2);
        passes(|| points_to_same(Some(&x), Some(&y), "m"));
        assert_eq!(
            details_of(|| points_to_same(Some(&x), Some(&z), "m")),
            "expected pointers to point to the same value, got 1 and 2"
        );
    }

    #[test]
    fn not_same_compares_pointees() {
        let (x, y, z) = ("a", "a", "b");
        passes(|| points_to_not_same(Some(x), Some(z), "m"));
        assert_eq!(
            details_of(|| points_to_not_same(Some(x), Some(y), "m")),
            r#"expected pointers to point to different values, got "a" and "a""#
        );
    }

    #[test]
    fn missing_reference_always_fails() {
        let x = 1;
        for (a, b) in [(None, Some(&x)), (Some(&x), None), (None, None)] {
            assert_eq!(
                details_of(|| points_to_same(a, b, "m")),
                "expected non-nil pointers, got nil"
            );
            assert_eq!(
                details_of(|| points_to_not_same(a, b, "m")),
                "expected non-nil pointers, got nil"
            );
        }
    }
}

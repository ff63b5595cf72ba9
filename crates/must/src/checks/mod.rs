//! Check functions. Each evaluates one condition and calls [`abort`](crate::failure::abort)
//! on violation; on success it returns with no effect.

pub mod collections;
pub mod compare;
pub mod fs;
pub mod maps;
pub mod nil;
pub mod outcome;
pub mod pointers;
pub mod types;

pub use collections::{
    contains, empty, is_empty, not_contains, not_empty, slice_has, slice_not_has, Collection,
    Shape,
};
pub use compare::{
    equal, greater_or_equal, greater_than, is_false, is_true, less_or_equal, less_than,
    not_equal, not_zero, Numeric,
};
pub use fs::{dir_exists, file_exists};
pub use maps::{map_empty, map_has, map_not_empty, map_not_has, ContainsKey, Mapping};
pub use nil::{is_nil, is_not_nil, not_nil, NilState, Nilable};
pub use outcome::{error, no_error};
pub use pointers::{points_to_not_same, points_to_same};
pub use types::{type_of, type_of_not, TypedValue};

#[cfg(test)]
pub(crate) mod testing {
    use crate::failure::{catch_violation, Violation};

    #[track_caller]
    pub(crate) fn violation_of<F: FnOnce()>(f: F) -> Violation {
        match catch_violation(f) {
            Ok(()) => panic!("expected a violation, check passed"),
            Err(v) => v,
        }
    }

    #[track_caller]
    pub(crate) fn details_of<F: FnOnce()>(f: F) -> String {
        violation_of(f).details().to_owned()
    }

    #[track_caller]
    pub(crate) fn passes<F: FnOnce()>(f: F) {
        if let Err(v) = catch_violation(f) {
            panic!("expected the check to pass, got violation: {v}");
        }
    }
}

use crate::failure::abort;

use std::fmt::Display;

#[track_caller]
pub fn no_error<T, E: Display>(result: &Result<T, E>, message: &str) {
    if let Err(err) = result {
        abort(message, &format!("expected no error, got: {err}"));
    }
}

#[track_caller]
pub fn error<T, E>(result: &Result<T, E>, message: &str) {
    if result.is_ok() {
        abort(message, "expected an error, got nil");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::{details_of, passes};
    use std::io;

    #[test]
    fn no_error_reports_error_text() {
        passes(|| no_error(&Ok::<u8, io::Error>(1), "m"));

        let failed: Result<(), io::Error> = Err(io::Error::other("disk on fire"));
        assert_eq!(
            details_of(|| no_error(&failed, "m")),
            "expected no error, got: disk on fire"
        );
    }

    #[test]
    fn error_requires_err() {
        passes(|| error(&Err::<(), _>("bad"), "m"));
        assert_eq!(
            details_of(|| error(&Ok::<_, String>(()), "m")),
            "expected an error, got nil"
        );
    }
}

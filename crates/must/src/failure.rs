//! Failure registry and the fatal path shared by every check.
//!
//! Notes:
//! - Registration is append-only for the lifetime of the registry.
//! - Dispatch works on a snapshot: the read lock is held only while the handler list is
//!   cloned, never while a handler runs. A handler registered mid-dispatch is seen by the
//!   next violation, not the current one, and handlers may register handlers.
//! - A panicking handler is not isolated; its panic replaces the violation panic.

use crate::config::{self, FatalMode};

use parking_lot::RwLock;
use std::cell::RefCell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, OnceLock};

/// Callback notified with `(message, details)` before the current path aborts.
pub type FailureHandler = Arc<dyn Fn(&str, &str) + Send + Sync + 'static>;

/// A violated invariant: the caller's message plus the generated diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}: {details}")]
pub struct Violation {
    message: String,
    details: String,
}

impl Violation {
    #[inline]
    pub fn new(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: details.into(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// The panic payload carried by the fatal signal.
    #[inline]
    pub fn payload(&self) -> String {
        self.to_string()
    }
}

static GLOBAL: OnceLock<FailureRegistry> = OnceLock::new();

thread_local! {
    static LAST_VIOLATION: RefCell<Option<Violation>> = const { RefCell::new(None) };
}

/// Ordered, append-only set of failure handlers.
pub struct FailureRegistry {
    handlers: RwLock<Vec<FailureHandler>>,
}

impl Default for FailureRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FailureRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureRegistry")
            .field("handlers", &self.len())
            .finish()
    }
}

impl FailureRegistry {
    #[inline]
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Process-wide registry used by the check functions. Empty until the first registration.
    #[inline]
    pub fn global() -> &'static FailureRegistry {
        GLOBAL.get_or_init(FailureRegistry::new)
    }

    pub fn register<F>(&self, handler: F)
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        self.register_shared(Arc::new(handler));
    }

    pub fn register_shared(&self, handler: FailureHandler) {
        let total = {
            let mut g = self.handlers.write();
            g.push(handler);
            g.len()
        };
        log::trace!("failure handler registered; total={total}");
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }

    /// Copy of the current handler list, in registration order.
    #[inline]
    pub fn snapshot(&self) -> Vec<FailureHandler> {
        self.handlers.read().clone()
    }

    /// Runs every handler once, in registration order, without aborting.
    pub fn dispatch(&self, message: &str, details: &str) {
        let handlers = self.snapshot();
        log::debug!(
            "dispatching violation to {} failure handler(s)",
            handlers.len()
        );
        for handler in &handlers {
            handler(message, details);
        }
    }

    /// Notifies every handler, then raises the fatal signal. Never returns.
    #[cold]
    #[inline(never)]
    #[track_caller]
    pub fn abort(&self, message: &str, details: &str) -> ! {
        self.dispatch(message, details);
        fatal(Violation::new(message, details))
    }
}

/// Appends `handler` to the process-wide registry.
#[inline]
pub fn register_failure_handler<F>(handler: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    FailureRegistry::global().register(handler);
}

/// The single choke point for violations reported by check functions.
#[cold]
#[inline(never)]
#[track_caller]
pub fn abort(message: &str, details: &str) -> ! {
    FailureRegistry::global().abort(message, details)
}

#[cold]
#[inline(never)]
#[track_caller]
fn fatal(violation: Violation) -> ! {
    let cfg = config::config();
    if cfg.log_violations {
        log::error!(target: "must::violation", "{violation}");
    }

    match cfg.fatal {
        FatalMode::Panic => {
            let payload = violation.payload();
            LAST_VIOLATION.with(|slot| *slot.borrow_mut() = Some(violation));
            panic::panic_any(payload)
        }
        FatalMode::Abort => {
            eprintln!("{violation}");
            std::process::abort()
        }
    }
}

/// Runs `f`, turning a violation raised on this thread into `Err`.
///
/// Panics that are not violations (including panics raised by failure handlers) are resumed.
/// Under [`FatalMode::Abort`] there is nothing to catch: the process is already gone.
pub fn catch_violation<T, F>(f: F) -> Result<T, Violation>
where
    F: FnOnce() -> T,
{
    LAST_VIOLATION.with(|slot| slot.borrow_mut().take());

    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            let caught = LAST_VIOLATION.with(|slot| slot.borrow_mut().take());
            match caught {
                Some(violation)
                    if payload
                        .downcast_ref::<String>()
                        .is_some_and(|p| *p == violation.payload()) =>
                {
                    Err(violation)
                }
                _ => panic::resume_unwind(payload),
            }
        }
    }
}

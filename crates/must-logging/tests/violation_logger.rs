use log::Level;
use must::{catch_violation, FailureRegistry};
use must_logging::{
    init_console_logger, register_violation_logger, violation_logger, ConsoleLoggerConfig,
    VIOLATION_TARGET,
};

#[test]
fn registered_logger_sees_violations() {
    let cfg = ConsoleLoggerConfig {
        level: log::LevelFilter::Error,
        colors: false,
        include_module: true,
    };
    init_console_logger(&cfg).expect("only logger installed in this test binary");
    assert!(log::log_enabled!(target: VIOLATION_TARGET, Level::Error));

    // Logs through a local registry without raising the fatal signal.
    let local = FailureRegistry::new();
    local.register(violation_logger());
    local.dispatch("pool drained", "expected a non-empty slice, got empty");
    assert_eq!(local.len(), 1);

    let before = FailureRegistry::global().len();
    register_violation_logger();
    assert_eq!(FailureRegistry::global().len(), before + 1);

    let v = catch_violation(|| must::not_empty(&Vec::<u8>::new(), "pool drained"))
        .expect_err("empty pool");
    assert_eq!(v.payload(), "pool drained: expected a non-empty slice, got empty");
}

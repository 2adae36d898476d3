//! Tests for derived loggers.

use routelog::{Destination, Emitter, Logger, SharedBuffer, Verbosity};
use std::cell::RefCell;

fn verbose_logger() -> (Logger, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let logger = Logger::new(None, Verbosity::Verbose);
    logger.setup_stream_logger(
        Some(Destination::new(out.clone())),
        Some(Destination::new(err.clone())),
        false,
    );
    (logger, out, err)
}

#[test]
fn override_replaces_one_method() {
    let (logger, out, err) = verbose_logger();
    let derived = logger
        .make_derived()
        .debug(|base, message, once| base.debug(&format!("[sub] {message}"), once))
        .build();

    derived.debug("probing", false);
    derived.warning("untouched", false);
    derived.info("plain", true, None, false);

    assert_eq!(err.contents(), "[sub] probing\nWARNING: untouched\n");
    assert_eq!(out.contents(), "plain\n");
}

#[test]
fn handle_error_override_can_downgrade() {
    let (logger, _, err) = verbose_logger();
    let derived = logger
        .make_derived()
        .handle_error(|base, message, trace, is_error, prefix| {
            if is_error {
                base.handle_error(message, trace, is_error, prefix);
            } else {
                base.warning(message, false);
            }
        })
        .build();

    derived.handle_error("recoverable", None, false, true);
    derived.handle_error("fatal", Some("trace"), true, true);

    assert_eq!(err.contents(), "WARNING: recoverable\nERROR: fatal\ntrace\n");
}

#[test]
fn derived_sees_later_base_changes() {
    let (logger, first, _) = verbose_logger();
    let derived = logger.make_derived().build();
    derived.info("one", true, None, false);

    let second = SharedBuffer::new();
    logger.setup_stream_logger(Some(Destination::new(second.clone())), None, false);
    derived.info("two", true, None, false);

    assert_eq!(first.contents(), "one\n");
    assert_eq!(second.contents(), "two\n");
}

#[test]
fn derived_shares_dedup_cache() {
    let (logger, out, _) = verbose_logger();
    let derived = logger.make_derived().build();
    logger.info("once", true, None, true);
    derived.info("once", true, None, true);
    assert_eq!(out.contents(), "once\n");
    assert_eq!(derived.verbosity(), Verbosity::Verbose);
}

#[test]
fn derived_of_derived_stacks_overrides() {
    let (logger, _, err) = verbose_logger();
    let outer = logger
        .make_derived()
        .warning(|base, message, once| base.warning(&format!("outer: {message}"), once))
        .build();
    let inner = outer
        .make_derived()
        .warning(|base, message, once| base.warning(&format!("inner: {message}"), once))
        .build();

    inner.warning("x", false);
    assert_eq!(err.contents(), "WARNING: outer: inner: x\n");
}

#[test]
fn overrides_may_capture_state() {
    let (logger, _, _) = verbose_logger();
    let seen = RefCell::new(Vec::new());
    let derived = logger
        .make_derived()
        .screen(|_, message, _| seen.borrow_mut().push(message.to_string()))
        .build();

    derived.screen("a", true);
    derived.screen("b", false);
    drop(derived);
    assert_eq!(seen.into_inner(), vec!["a", "b"]);
}

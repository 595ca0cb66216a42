//! The innermost of the three error tiers: violations of an invariant
//! the walker itself is supposed to guarantee -- a jog reached
//! without a jogging ancestor, a jogging shape whose gap count the catalog
//! should never have allowed. These are bugs in this crate, not malformed
//! input, so they panic with the caller's file:line rather than degrading
//! or being reported as a lint finding.

/// Panic with `message`, naming the call site via `#[track_caller]` so the
/// message reads like a normal Rust panic location rather than pointing
/// into this module.
#[track_caller]
pub fn bug(message: impl std::fmt::Display) -> ! {
    panic!("hoonlint internal error: {message}");
}

/// `bug()` if `value` is `None`, otherwise unwrap it.
#[track_caller]
pub fn expect<T>(value: Option<T>, message: impl std::fmt::Display) -> T {
    match value {
        Some(v) => v,
        None => bug(message),
    }
}

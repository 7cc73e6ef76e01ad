//! Stack growth for recursive tree walks.
//!
//! Boolean trees typed by hand are shallow, but trees produced by scripts
//! (long chains of `a u (b u (c u ...))`) can be tens of thousands of nodes
//! deep. Every recursive walk in the workspace (parsing, rewriting,
//! duplication, printing) wraps its recursive step in
//! [`ensure_sufficient_stack`] so depth is limited by memory, not by the
//! thread's stack size.
//!
//! On native targets the stack is grown on demand with `stacker`. On WASM
//! the closure is called directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

//! Stack growth for deep trees.
//!
//! Evaluation recurses once per tree level, and a long postfix program can
//! nest thousands of levels deep (`1 1 + 1 + 1 + ...`). Each recursive step
//! goes through [`ensure_sufficient_stack`], which grows the native stack
//! with `stacker` when it runs low.

/// Keep at least this much stack free before recursing (128KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
#[cfg(not(target_arch = "wasm32"))]
const GROWTH: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

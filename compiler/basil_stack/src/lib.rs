//! Stack growth guard for deep recursion.
//!
//! The parser descends once per nesting level and the interpreter once per
//! nested node or user-level call, so `((((1))))` or a recursive Basil
//! function can exhaust the host stack long before it exhausts memory.
//! Both passes wrap their recursive entry points in
//! [`ensure_sufficient_stack`], which switches to a freshly allocated
//! segment when the remaining stack drops below the red zone.
//!
//! On `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn eval(&mut self, node: &Node) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(node))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Space that must remain on the stack before a recursive step runs.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first moving to a freshly allocated stack segment if less than
/// [`RED_ZONE`] bytes remain on the current one.
///
/// Every recursive path over user input (nested blocks, parentheses,
/// procedure calls, deep trees) goes through this, so its depth is bounded by
/// memory instead of by the size of the calling thread's stack.
///
/// # Example
/// ```
/// use turtle_logo::util::stack::ensure_sufficient_stack;
///
/// fn depth(n: u64) -> u64 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
/// }
///
/// assert_eq!(depth(200_000), 200_000);
/// ```
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

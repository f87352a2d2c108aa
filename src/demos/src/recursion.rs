use std::io::Write;

pub const RECURSION_INPUT: i32 = 5;

/// Sums `n + (n - 1) + ... + 1`, or 0 for `n <= 0`.
///
/// Overflow wraps the way a two's complement `int` would. Depth is bounded
/// only by the stack.
pub fn recurse(n: i32) -> i32 {
    if n <= 0 {
        return 0;
    }
    n.wrapping_add(recurse(n - 1))
}

pub fn run(out: &mut impl Write) -> std::io::Result<()> {
    let result = recurse(RECURSION_INPUT);
    writeln!(out, "Result of recursive_function({RECURSION_INPUT}): {result}")
}

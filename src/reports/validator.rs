// src/reports/validator.rs

//! Safety rules for a report.
//!
//! A report is safe when every adjacent step moves in one direction by 1 to 3.
//! [`is_safe_bruteforce`] and [`is_safe`] additionally tolerate dropping one
//! level; they must agree on every input.

/// Largest allowed absolute step between adjacent levels.
pub const MAX_STEP: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    /// Direction of the step `a -> b`. A flat step counts as decreasing; it is
    /// rejected by the step bound anyway.
    pub fn of(a: i64, b: i64) -> Self {
        if a < b {
            Direction::Increasing
        } else {
            Direction::Decreasing
        }
    }
}

fn step_ok(a: i64, b: i64) -> bool {
    (1..=MAX_STEP).contains(&a.abs_diff(b))
}

fn pair_ok(a: i64, b: i64, dir: Direction) -> bool {
    step_ok(a, b) && Direction::of(a, b) == dir
}

/// Safe with no removal allowed. Direction comes from the first pair.
pub fn is_strictly_safe(levels: &[i64]) -> bool {
    let [first, second, ..] = levels else {
        return true;
    };
    let dir = Direction::of(*first, *second);
    levels.windows(2).all(|w| pair_ok(w[0], w[1], dir))
}

/// Reference strategy: try every single removal (and none). O(n^2).
pub fn is_safe_bruteforce(levels: &[i64]) -> bool {
    if is_strictly_safe(levels) {
        return true;
    }

    (0..levels.len()).any(|removed| {
        let reduced: Vec<i64> = levels
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != removed)
            .map(|(_, level)| *level)
            .collect();
        is_strictly_safe(&reduced)
    })
}

/// Single-pass strategy. O(n).
///
/// - up to 2 levels: always safe (dropping one leaves a single level).
/// - 3 levels: safe iff some pair (after dropping the third) has a valid step.
/// - otherwise the direction is the majority over the first three steps; any
///   safe report must move that way once repaired.
pub fn is_safe(levels: &[i64]) -> bool {
    match levels {
        [] | [_] | [_, _] => true,
        [a, b, c] => step_ok(*a, *b) || step_ok(*b, *c) || step_ok(*a, *c),
        _ => is_safe_in_direction(levels, majority_direction(levels)),
    }
}

/// Majority vote over the first three steps. Requires at least 4 levels.
fn majority_direction(levels: &[i64]) -> Direction {
    let rising = levels[..4].windows(2).filter(|w| w[0] < w[1]).count();
    if rising >= 2 {
        Direction::Increasing
    } else {
        Direction::Decreasing
    }
}

/// Scan for the first bad step `(i, i + 1)`. Only `i` or `i + 1` can be the
/// dropped level; each option needs one bridging step plus the rest of the
/// scan, which is shared. A bad step past the repair window fails outright.
fn is_safe_in_direction(levels: &[i64], dir: Direction) -> bool {
    let n = levels.len();
    let ok = |a: usize, b: usize| pair_ok(levels[a], levels[b], dir);

    let Some(i) = (0..n - 1).find(|&i| !ok(i, i + 1)) else {
        return true;
    };

    if !(i + 2..n - 1).all(|j| ok(j, j + 1)) {
        return false;
    }

    let at_end = i + 2 >= n;
    let drop_left = (i == 0 || ok(i - 1, i + 1)) && (at_end || ok(i + 1, i + 2));
    let drop_right = at_end || ok(i, i + 2);

    drop_left || drop_right
}

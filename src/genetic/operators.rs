//! Permutation operators for the genetic engine.
//!
//! Both operators take their random choices as arguments so they can be
//! checked against hand-computed children.

use crate::geometry::Tour;

/// Order-preserving segment crossover.
///
/// The child keeps `parent1[a..b]` at the same positions. The remaining slots
/// are filled left to right with the cities of `parent2` that are not in the
/// segment, in the order `parent2` visits them.
///
/// Both parents must be permutations of the same `n` cities and `a < b <= n`.
///
/// ```rust
/// use tspalg::genetic::operators::order_crossover;
///
/// let child = order_crossover(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], 1, 3);
/// assert_eq!(child, vec![4, 1, 2, 3, 0]);
/// ```
pub fn order_crossover(parent1: &[usize], parent2: &[usize], a: usize, b: usize) -> Tour {
    let n = parent1.len();
    debug_assert_eq!(n, parent2.len());
    debug_assert!(a < b && b <= n);

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut in_segment = vec![false; n];
    for i in a..b {
        child[i] = Some(parent1[i]);
        in_segment[parent1[i]] = true;
    }

    let mut slot = 0;
    for &city in parent2 {
        if in_segment[city] {
            continue;
        }
        while child[slot].is_some() {
            slot += 1;
        }
        child[slot] = Some(city);
    }

    // Segment and remainder are disjoint and cover all n cities.
    child.into_iter().flatten().collect()
}

/// Swaps the cities at positions `i` and `j`.
pub fn swap_mutation(tour: &mut [usize], i: usize, j: usize) {
    tour.swap(i, j);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::is_permutation;

    #[test]
    fn test_crossover_keeps_segment_positions() {
        let p1 = [3, 7, 1, 0, 5, 2, 6, 4];
        let p2 = [0, 1, 2, 3, 4, 5, 6, 7];
        let child = order_crossover(&p1, &p2, 2, 5);

        assert_eq!(&child[2..5], &[1, 0, 5]);
        // Remaining cities from p2 in order: 2, 3, 4, 6, 7
        assert_eq!(child, vec![2, 3, 1, 0, 5, 4, 6, 7]);
        assert!(is_permutation(&child, 8));
    }

    #[test]
    fn test_crossover_full_segment_copies_parent1() {
        let p1 = [2, 0, 3, 1];
        let p2 = [0, 1, 2, 3];
        assert_eq!(order_crossover(&p1, &p2, 0, 4), vec![2, 0, 3, 1]);
    }

    #[test]
    fn test_crossover_two_cities() {
        let child = order_crossover(&[1, 0], &[0, 1], 0, 1);
        assert_eq!(child, vec![1, 0]);
    }

    #[test]
    fn test_crossover_segment_at_end() {
        let p1 = [0, 1, 2, 3, 4];
        let p2 = [4, 2, 0, 3, 1];
        let child = order_crossover(&p1, &p2, 3, 5);
        assert_eq!(child, vec![2, 0, 1, 3, 4]);
    }

    #[test]
    fn test_swap_mutation() {
        let mut tour = vec![0, 1, 2, 3];
        swap_mutation(&mut tour, 0, 3);
        assert_eq!(tour, vec![3, 1, 2, 0]);
    }
}

//! Slice helpers: chunking, shuffling, and n-ary symmetric difference.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::thread_rng;

/// Error type for the slice helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Argument has the right type but an out-of-bounds value.
    OutOfRange {
        field: &'static str,
        constraint: &'static str,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { field, constraint } => {
                write!(f, "`{field}` must be {constraint}")
            }
        }
    }
}

impl std::error::Error for ArrayError {}

/// Split a slice into groups of `size`; the last group may be shorter.
///
/// # Errors
///
/// Returns [`ArrayError::OutOfRange`] when `size` is zero.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, ArrayError> {
    if size == 0 {
        return Err(ArrayError::OutOfRange {
            field: "size",
            constraint: "greater than 0",
        });
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// A shuffled copy of the slice. The input is left untouched.
#[must_use]
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(&mut thread_rng());
    shuffled
}

/// N-ary symmetric difference: elements present in an odd number of the
/// given slices, deduplicated within each slice, in first-seen order.
#[must_use]
pub fn symmetric_diff<T: Clone + Eq + Hash>(arrays: &[&[T]]) -> Vec<T> {
    let mut order: Vec<T> = Vec::new();
    let mut included: HashSet<T> = HashSet::new();

    for array in arrays {
        let mut seen: HashSet<&T> = HashSet::new();
        for item in *array {
            if !seen.insert(item) {
                continue;
            }
            if included.contains(item) {
                included.remove(item);
            } else {
                if !order.contains(item) {
                    order.push(item.clone());
                }
                included.insert(item.clone());
            }
        }
    }

    order.retain(|item| included.contains(item));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_even_split() {
        let chunks = chunk(&[1, 2, 3, 4], 2).unwrap();
        assert_eq!(chunks, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_chunk_short_tail() {
        let chunks = chunk(&[1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_chunk_empty_input() {
        let chunks: Vec<Vec<i32>> = chunk(&[], 3).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_chunk_rejects_zero_size() {
        assert!(matches!(
            chunk(&[1, 2, 3], 0),
            Err(ArrayError::OutOfRange { field: "size", .. })
        ));
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let items = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let shuffled = shuffle(&items);

        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, items);
        // Original untouched.
        assert_eq!(items, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_symmetric_diff_pairwise() {
        let diff = symmetric_diff(&[&[1, 2, 3][..], &[2, 3, 4][..]]);
        assert_eq!(diff, vec![1, 4]);
    }

    #[test]
    fn test_symmetric_diff_dedups_within_each_slice() {
        let diff = symmetric_diff(&[&[1, 1, 2][..], &[2, 2, 3][..]]);
        assert_eq!(diff, vec![1, 3]);
    }

    #[test]
    fn test_symmetric_diff_three_way() {
        // 1 appears in all three slices (odd count), 2 in two (even).
        let diff = symmetric_diff(&[&[1, 2][..], &[1, 2, 3][..], &[1, 4][..]]);
        assert_eq!(diff, vec![1, 3, 4]);
    }

    #[test]
    fn test_symmetric_diff_empty() {
        let diff: Vec<i32> = symmetric_diff(&[]);
        assert!(diff.is_empty());
    }
}

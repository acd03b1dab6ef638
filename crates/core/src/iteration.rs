//! Traversal comparators.
//!
//! Each routine visits every element of its source once and writes the visited
//! value into `sink`. Nothing else happens per element, so the measured cost is
//! the traversal itself. The write goes through [`black_box`] so the loop body
//! cannot be collapsed into a single final assignment.

use std::collections::HashMap;
use std::hint::black_box;

/// Visits every value of `map` in the map's own (unspecified) order.
///
/// Returns the number of values visited. The value left in `sink` is whichever
/// one the map yields last.
pub fn traverse_map_values<'a, K, V>(map: &'a HashMap<K, V>, sink: &mut Option<&'a V>) -> usize {
    let mut visited = 0;
    for v in map.values() {
        *sink = black_box(Some(v));
        visited += 1;
    }
    visited
}

/// Visits every element of `slice` through its iterator.
///
/// Leaves the final element in `sink`.
pub fn traverse_slice_values<'a, V>(slice: &'a [V], sink: &mut Option<&'a V>) -> usize {
    let mut visited = 0;
    for v in slice {
        *sink = black_box(Some(v));
        visited += 1;
    }
    visited
}

/// Visits every element of `slice` by integer index.
#[allow(clippy::needless_range_loop)]
pub fn traverse_slice_indexed<'a, V>(slice: &'a [V], sink: &mut Option<&'a V>) -> usize {
    for idx in 0..slice.len() {
        *sink = black_box(Some(&slice[idx]));
    }
    slice.len()
}

#[cfg(test)]
mod iteration_tests {
    use super::*;

    fn strings(n: usize) -> Vec<String> {
        (0..n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_slice_values_leaves_last() {
        let data = strings(5);
        let mut sink = None;
        assert_eq!(traverse_slice_values(&data, &mut sink), 5);
        assert_eq!(sink.map(String::as_str), Some("4"));
    }

    #[test]
    fn test_slice_indexed_leaves_last() {
        let data = strings(5);
        let mut sink = None;
        assert_eq!(traverse_slice_indexed(&data, &mut sink), 5);
        assert_eq!(sink.map(String::as_str), Some("4"));
    }

    /// Only the visit count is checked; map order is unspecified.
    #[test]
    fn test_map_visits_every_value() {
        let map: HashMap<usize, String> = (0..100).map(|i| (i, i.to_string())).collect();
        let mut sink = None;
        assert_eq!(traverse_map_values(&map, &mut sink), 100);
        assert!(sink.is_some_and(|v| map.values().any(|m| m == v)));
    }

    #[test]
    fn test_empty_sources_leave_sink_untouched() {
        let keep = "keep".to_string();
        let empty_map: HashMap<u8, String> = HashMap::new();
        let mut sink = Some(&keep);
        assert_eq!(traverse_slice_values(&[], &mut sink), 0);
        assert_eq!(traverse_slice_indexed(&[], &mut sink), 0);
        assert_eq!(traverse_map_values(&empty_map, &mut sink), 0);
        assert_eq!(sink, Some(&keep));
    }
}

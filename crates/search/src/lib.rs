//! # tsalign-search
//!
//! Lower-bound binary search over ascending `f64` slices.
//!
//! The search accepts a `start` hint so that a caller issuing non-decreasing
//! queries can resume from where the previous query landed, turning `n`
//! searches over `m` elements into amortised `O(n + m)` work.
//!
//! ```
//! use tsalign_search::find_lower_bound;
//!
//! let haystack = [1.0, 3.0, 8.0, 9.0, 10.0, 15.0];
//! assert_eq!(find_lower_bound(9.5, &haystack, 0), 4);
//! assert_eq!(find_lower_bound(16.0, &haystack, 0), 6);
//! ```

/// Index of the first element of `haystack[start..]` that is not less than
/// `query`, or `haystack.len()` if there is none.
///
/// **Expects ascending input** (caller's responsibility). Every element in
/// `haystack[start..index]` is `< query`, and `haystack[index] >= query`
/// whenever `index < haystack.len()`.
///
/// `start` only narrows the search range. It is valid when the caller knows
/// every element before `start` is `< query`, which holds when successive
/// queries are non-decreasing and each `start` is the previous result. A
/// `start` past the end is clamped to `haystack.len()`.
///
/// A NaN `query` compares false against everything and returns `start`.
pub fn find_lower_bound(query: f64, haystack: &[f64], start: usize) -> usize {
    let mut first = start.min(haystack.len());
    let mut count = haystack.len() - first;

    while count > 0 {
        let step = count / 2;
        if haystack[first + step] < query {
            first += step + 1;
            count -= step + 1;
        } else {
            count = step;
        }
    }

    first
}

/// [`find_lower_bound`] over the whole slice.
pub fn lower_bound(query: f64, haystack: &[f64]) -> usize {
    find_lower_bound(query, haystack, 0)
}

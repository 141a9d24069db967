use log::debug;

/// Top-down merge sort. The input is left untouched and a freshly allocated
/// vector is returned.
///
/// When the heads of both halves compare equal the right head is taken
/// first, so equal elements from the right half end up ahead of those from
/// the left half. The result is therefore not stable.
///
/// Time O(n log n), space O(n) plus O(log n) stack.
pub fn merge_sort<T: PartialOrd + Clone>(array: &[T]) -> Vec<T> {
    let sorted = merge_sort_rec(array);
    debug!("merge sort: {} elements", sorted.len());
    sorted
}

fn merge_sort_rec<T: PartialOrd + Clone>(array: &[T]) -> Vec<T> {
    if array.len() <= 1 {
        return array.to_vec();
    }

    let middle = array.len() / 2;
    let left = merge_sort_rec(&array[..middle]);
    let right = merge_sort_rec(&array[middle..]);
    merge(left, right)
}

fn merge<T: PartialOrd>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if l < r { left.next() } else { right.next() };
        merged.extend(next);
    }
    // at most one of these is non-empty
    merged.extend(left);
    merged.extend(right);
    merged
}

use log::{debug, trace};

/// Sorts `array` in place with recursive quicksort, pivoting on the last
/// element (Lomuto partition). Returns the same storage.
///
/// Average O(n log n). Already sorted or reverse sorted input is the O(n^2)
/// worst case, and recursion then goes O(n) frames deep.
pub fn quick_sort<T: PartialOrd>(array: &mut [T]) -> &mut [T] {
    let depth = quick_sort_rec(array, 0);
    debug!("quick sort: {} elements, max depth {}", array.len(), depth);
    array
}

fn quick_sort_rec<T: PartialOrd>(arr: &mut [T], depth: usize) -> usize {
    if arr.len() < 2 {
        return depth;
    }

    let pivot_index = partition(arr);
    trace!("depth {}: pivot settled at {} of {}", depth, pivot_index, arr.len());

    let (left, right) = arr.split_at_mut(pivot_index);
    let left_depth = quick_sort_rec(left, depth + 1);
    let right_depth = quick_sort_rec(&mut right[1..], depth + 1);
    left_depth.max(right_depth)
}

/// Moves every element smaller than the last one to the front, then places
/// the pivot right after them and returns its final index.
fn partition<T: PartialOrd>(arr: &mut [T]) -> usize {
    let pivot = arr.len() - 1;
    // boundary: everything in arr[..store] is smaller than the pivot
    let mut store = 0;
    for j in 0..pivot {
        if arr[j] < arr[pivot] {
            arr.swap(j, store);
            store += 1;
        }
    }
    arr.swap(pivot, store);
    store
}

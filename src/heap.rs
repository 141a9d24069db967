use log::debug;

/// In-place heapsort on a binary max-heap. Returns the same storage.
///
/// The whole slice is heapified once, then the root is repeatedly swapped
/// behind the shrinking heap and sifted back down.
///
/// Time O(n log n). Space O(1) apart from the O(log n) recursion in
/// `heapify`.
pub fn heap_sort<T: PartialOrd>(array: &mut [T]) -> &mut [T] {
    heapify_complete_array(array);
    for index in (0..array.len()).rev() {
        array.swap(0, index);
        heapify(&mut array[..index], 0);
    }
    debug!("heap sort: {} elements", array.len());
    array
}

/// Establishes the max-heap property over the whole slice, sifting every
/// non-leaf node from the last one up to the root.
fn heapify_complete_array<T: PartialOrd>(arr: &mut [T]) {
    for node in (0..arr.len() / 2).rev() {
        heapify(arr, node);
    }
}

/// Sinks `node` below its larger child until both children are no larger.
fn heapify<T: PartialOrd>(arr: &mut [T], node: usize) {
    let left = 2 * node + 1;
    let right = 2 * node + 2;

    let mut largest = node;
    if left < arr.len() && arr[left] > arr[largest] {
        largest = left;
    }
    if right < arr.len() && arr[right] > arr[largest] {
        largest = right;
    }

    if largest != node {
        arr.swap(node, largest);
        heapify(arr, largest);
    }
}

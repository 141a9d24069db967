use log::debug;

/// Sorts `array` in place by repeatedly swapping adjacent pairs that are out
/// of order, stopping after the first pass that performs no swap.
///
/// Returns the same storage it was given. Stable.
///
/// Time: O(n^2) worst and average, O(n) on already sorted input.
/// Space: O(1).
pub fn bubble_sort<T: PartialOrd>(array: &mut [T]) -> &mut [T] {
    let mut passes = 0;
    let mut clean_pass = false;
    while !clean_pass {
        clean_pass = true;
        passes += 1;
        for i in 1..array.len() {
            if array[i - 1] > array[i] {
                array.swap(i - 1, i);
                clean_pass = false;
            }
        }
    }
    debug!("bubble sort: {} elements, {} passes", array.len(), passes);
    array
}

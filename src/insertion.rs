use log::debug;

/// Sorts `array` in place. Every element that is smaller than its
/// predecessor is walked to the left through adjacent swaps until it meets a
/// predecessor that is not greater.
///
/// O(n^2) for descending input, O(n) for sorted input, O(1) space.
pub fn insertion_sort<T: PartialOrd>(array: &mut [T]) -> &mut [T] {
    let mut swaps = 0usize;
    for index in 1..array.len() {
        if array[index - 1] > array[index] {
            let mut pin = index;
            while pin > 0 && array[pin] < array[pin - 1] {
                array.swap(pin, pin - 1);
                pin -= 1;
                swaps += 1;
            }
        }
    }
    debug!("insertion sort: {} elements, {} swaps", array.len(), swaps);
    array
}

use log::{debug, trace};
use crate::error::{SortError, SortResult};

/// Stable sort of `array` by the base-`k` digit at `position`, counted from
/// the least significant digit (position 0 is the ones place for `k = 10`).
///
/// Elements with fewer than `position + 1` digits count as having digit 0
/// there. A new vector is returned.
///
/// T = O(n + k). S = O(n + k): one histogram of `k` counters and one output
/// array of `n` elements.
pub fn counting_sort(array: &[u64], position: u32, k: usize) -> SortResult<Vec<u64>> {
    if k < 2 {
        return Err(SortError::InvalidRadix { k });
    }
    let k = k as u64;

    let sorted = match k.checked_pow(position) {
        Some(divisor) => digit_pass(array, divisor, k),
        // k^position does not fit in a u64, so no element reaches that digit
        None => array.to_vec(),
    };
    debug!("counting sort: {} elements, position {}, radix {}", array.len(), position, k);
    Ok(sorted)
}

/// One stable counting pass over the digit `(x / divisor) % k`.
pub(crate) fn digit_pass(array: &[u64], divisor: u64, k: u64) -> Vec<u64> {
    let digit = |x: u64| ((x / divisor) % k) as usize;

    let mut freq = vec![0usize; k as usize];
    for &element in array {
        freq[digit(element)] += 1;
    }
    trace!("divisor {}: histogram {:?}", divisor, freq);

    // cumulative counts: freq[d] is one past the last slot for digit d
    for d in 1..freq.len() {
        freq[d] += freq[d - 1];
    }

    let mut sorted = vec![0u64; array.len()];
    for &element in array.iter().rev() {
        let d = digit(element);
        freq[d] -= 1;
        sorted[freq[d]] = element;
    }
    sorted
}

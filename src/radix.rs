use log::{debug, trace};
use crate::config::RADIX;
use crate::counting::digit_pass;
use crate::error::{SortError, SortResult};

/// LSD radix sort in base 10, built from one stable counting pass per digit.
///
/// T = O(d*n) where d is the number of decimal digits of the largest element.
/// S = O(n): each pass reads the previous pass's output.
pub fn radix_sort(array: &[u64]) -> Vec<u64> {
    lsd_radix_sort(array, RADIX as u64)
}

/// Same as [`radix_sort`] in an arbitrary radix `k >= 2`.
pub fn radix_sort_with_radix(array: &[u64], k: usize) -> SortResult<Vec<u64>> {
    if k < 2 {
        return Err(SortError::InvalidRadix { k });
    }
    Ok(lsd_radix_sort(array, k as u64))
}

fn lsd_radix_sort(array: &[u64], k: u64) -> Vec<u64> {
    let mut sorted = array.to_vec();
    let mut base = Some(1u64);
    let mut position = 0;

    while let Some(divisor) = base {
        if sorted.iter().all(|&x| x / divisor == 0) {
            break;
        }
        sorted = digit_pass(&sorted, divisor, k);
        trace!("after position {}: {:?}", position, sorted);
        position += 1;
        // once k^position overflows every u64 has run out of digits
        base = divisor.checked_mul(k);
    }

    debug!("radix sort: {} elements, {} passes in radix {}", sorted.len(), position, k);
    sorted
}

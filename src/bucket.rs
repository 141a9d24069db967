use log::debug;
use num_traits::ToPrimitive;
use crate::error::{SortError, SortResult};
use crate::merge::merge_sort;

/// Scatters `array` over `num_buckets` equal-width buckets spanning
/// `[low, high]`, merge sorts every bucket and concatenates them in order.
/// A new vector is returned.
///
/// A value lands in bucket `floor((value - low) / (high - low) * num_buckets)`;
/// a value equal to `high` goes into the last bucket. Values outside the
/// range are rejected, nothing is returned for them.
///
/// T = O(n) when values are spread uniformly, degrading to the cost of merge
/// sorting all n elements when they crowd into a single bucket.
/// S = O(n) for the buckets plus the merge sort of the largest bucket.
pub fn bucket_sort<T>(array: &[T], num_buckets: usize, low: f64, high: f64) -> SortResult<Vec<T>>
where
    T: PartialOrd + Clone + ToPrimitive,
{
    if num_buckets == 0 {
        return Err(SortError::NoBuckets);
    }
    if !(low.is_finite() && high.is_finite() && high > low) {
        return Err(SortError::EmptyRange { low, high });
    }

    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); num_buckets];
    for (index, element) in array.iter().enumerate() {
        let value = element
            .to_f64()
            .filter(|v| !v.is_nan())
            .ok_or(SortError::NonFinite { index })?;
        let bucket = bucket_index(value, num_buckets, low, high)?;
        buckets[bucket].push(element.clone());
    }

    let occupied = buckets.iter().filter(|b| !b.is_empty()).count();
    let largest = buckets.iter().map(Vec::len).max().unwrap_or(0);
    debug!(
        "bucket sort: {} elements over {} buckets, {} occupied, largest holds {}",
        array.len(), num_buckets, occupied, largest
    );

    let mut sorted = Vec::with_capacity(array.len());
    for bucket in &buckets {
        sorted.extend(merge_sort(bucket));
    }
    Ok(sorted)
}

fn bucket_index(value: f64, num_buckets: usize, low: f64, high: f64) -> SortResult<usize> {
    if value < low {
        return Err(SortError::BelowRange { value, low });
    }
    if value > high {
        return Err(SortError::AboveRange { value, high });
    }
    let scaled = ((value - low) / (high - low)) * num_buckets as f64;
    Ok((scaled.floor() as usize).min(num_buckets - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_interval() {
        let sorted = bucket_sort(&[0.1, 0.9, 0.3, 0.5], 4, 0.0, 1.0).unwrap();
        assert_eq!(sorted, vec![0.1, 0.3, 0.5, 0.9]);
    }

    #[test]
    fn crowded_bucket() {
        let input = [0.42, 0.41, 0.49, 0.40, 0.45];
        let sorted = bucket_sort(&input, 10, 0.0, 1.0).unwrap();
        assert_eq!(sorted, vec![0.40, 0.41, 0.42, 0.45, 0.49]);
    }

    #[test]
    fn integers_and_shifted_range() {
        let input: [i32; 6] = [-5, 17, 3, -20, 0, 17];
        let sorted = bucket_sort(&input, 3, -20.0, 20.0).unwrap();
        assert_eq!(sorted, vec![-20, -5, 0, 3, 17, 17]);
    }

    #[test]
    fn upper_bound_goes_to_last_bucket() {
        assert_eq!(bucket_index(1.0, 4, 0.0, 1.0), Ok(3));
        assert_eq!(bucket_index(0.0, 4, 0.0, 1.0), Ok(0));
        assert_eq!(bucket_index(0.5, 4, 0.0, 1.0), Ok(2));
        let sorted = bucket_sort(&[1.0, 0.0, 0.75], 4, 0.0, 1.0).unwrap();
        assert_eq!(sorted, vec![0.0, 0.75, 1.0]);
    }

    #[test]
    fn empty_input() {
        assert!(bucket_sort::<f64>(&[], 5, 0.0, 1.0).unwrap().is_empty());
    }

    #[test]
    fn rejects_value_below_low() {
        let err = bucket_sort(&[0.5, -0.1], 4, 0.0, 1.0).unwrap_err();
        assert_eq!(err, SortError::BelowRange { value: -0.1, low: 0.0 });
    }

    #[test]
    fn rejects_value_above_high() {
        let err = bucket_sort(&[0.5, 1.5], 4, 0.0, 1.0).unwrap_err();
        assert_eq!(err, SortError::AboveRange { value: 1.5, high: 1.0 });
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(bucket_sort(&[0.5], 0, 0.0, 1.0), Err(SortError::NoBuckets));
        assert_eq!(
            bucket_sort(&[0.5], 4, 1.0, 1.0),
            Err(SortError::EmptyRange { low: 1.0, high: 1.0 })
        );
        assert!(matches!(
            bucket_sort(&[0.5], 4, 0.0, f64::INFINITY),
            Err(SortError::EmptyRange { .. })
        ));
    }

    #[test]
    fn rejects_nan() {
        let err = bucket_sort(&[0.5, f64::NAN], 4, 0.0, 1.0).unwrap_err();
        assert_eq!(err, SortError::NonFinite { index: 1 });
    }
}

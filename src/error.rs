use thiserror::Error;

pub type SortResult<T> = Result<T, SortError>;

/// Contract violations reported by the sorts that take extra parameters.
///
/// The comparison sorts never fail; only `counting_sort`, the radix sorts and
/// `bucket_sort` validate their arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SortError {
    #[error("radix must be at least 2, got {k}")]
    InvalidRadix { k: usize },

    #[error("bucket sort needs at least one bucket")]
    NoBuckets,

    #[error("bucket range [{low}, {high}] is empty or not finite")]
    EmptyRange { low: f64, high: f64 },

    #[error("value {value} is below the lower bound {low}")]
    BelowRange { value: f64, low: f64 },

    #[error("value {value} is above the upper bound {high}")]
    AboveRange { value: f64, high: f64 },

    #[error("element at index {index} cannot be mapped to a bucket")]
    NonFinite { index: usize },
}

//! Classic in-memory sorting algorithms over numeric slices.
//!
//! `bubble_sort`, `insertion_sort`, `quick_sort` and `heap_sort` reorder the
//! caller's slice and hand the same slice back. `merge_sort`,
//! `counting_sort`, `radix_sort` and `bucket_sort` leave their input alone
//! and return a new `Vec`.

pub mod bubble;
pub mod bucket;
pub mod config;
pub mod counting;
pub mod error;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;

pub use bubble::bubble_sort;
pub use bucket::bucket_sort;
pub use config::{DEFAULT_BUCKETS, RADIX};
pub use counting::counting_sort;
pub use error::{SortError, SortResult};
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use radix::{radix_sort, radix_sort_with_radix};

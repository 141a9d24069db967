use std::env;
use std::error::Error;
use std::time::Instant;

use lazy_static::lazy_static;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use classic_sorts::config::{env_flag, env_or, DEFAULT_BUCKETS, DEFAULT_LEN, DEFAULT_SEED};
use classic_sorts::*;

lazy_static! {
    static ref SEED: u64 = initialize_seed();
}

fn initialize_seed() -> u64 {
    if env_flag("RANDOMIZE_SEED") {
        thread_rng().gen()
    } else {
        env_or("SEED", DEFAULT_SEED)
    }
}

fn verify_sorted<T: PartialOrd>(name: &str, arr: &[T]) {
    for i in 1..arr.len() {
        assert!(arr[i - 1] <= arr[i], "{name}: not sorted at index {i}. Seed: {}", *SEED);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let mut sample = [5, 4, 3, 2, 1, 1000];
    println!("{:?}", quick_sort(&mut sample));

    let len = match env::args().nth(1) {
        Some(arg) => arg.parse::<usize>()?,
        None => DEFAULT_LEN,
    };
    info!("Sorting {} elements, seed {}", len, *SEED);

    let mut rng = StdRng::seed_from_u64(*SEED);
    let data: Vec<u64> = (0..len).map(|_| rng.gen_range(0..(len as u64 * 10).max(1))).collect();

    let mut arr = data.clone();
    let start = Instant::now();
    bubble_sort(&mut arr);
    println!("Bubble sort: {:?}", start.elapsed());
    verify_sorted("bubble", &arr);

    let mut arr = data.clone();
    let start = Instant::now();
    insertion_sort(&mut arr);
    println!("Insertion sort: {:?}", start.elapsed());
    verify_sorted("insertion", &arr);

    let mut arr = data.clone();
    let start = Instant::now();
    quick_sort(&mut arr);
    println!("Quick sort: {:?}", start.elapsed());
    verify_sorted("quick", &arr);

    let mut arr = data.clone();
    let start = Instant::now();
    heap_sort(&mut arr);
    println!("Heap sort: {:?}", start.elapsed());
    verify_sorted("heap", &arr);

    let start = Instant::now();
    let arr = merge_sort(&data);
    println!("Merge sort: {:?}", start.elapsed());
    verify_sorted("merge", &arr);

    let start = Instant::now();
    let arr = radix_sort(&data);
    println!("Radix sort: {:?}", start.elapsed());
    verify_sorted("radix", &arr);

    let high = data.iter().copied().max().unwrap_or(0) as f64 + 1.0;
    let start = Instant::now();
    let arr = bucket_sort(&data, DEFAULT_BUCKETS, 0.0, high)?;
    println!("Bucket sort: {:?}", start.elapsed());
    verify_sorted("bucket", &arr);

    let start = Instant::now();
    let mut arr = data;
    arr.sort_unstable();
    println!("sort_unstable(): {:?}", start.elapsed());

    Ok(())
}

use std::env;
use std::error::Error;

use log::LevelFilter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use classic_sorts::bucket_sort;
use classic_sorts::config::{env_or, DEFAULT_BUCKETS, DEFAULT_SEED};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .init();

    let mut args = env::args();
    args.next();

    let num_buckets = match args.next() {
        Some(arg) => arg.parse::<usize>()?,
        None => {
            eprintln!("Usage: cargo run --example bucket_demo <buckets?>\nNo bucket count provided. Using {}.", DEFAULT_BUCKETS);
            DEFAULT_BUCKETS
        }
    };

    let mut rng = StdRng::seed_from_u64(env_or("SEED", DEFAULT_SEED));
    let values: Vec<f64> = (0..20).map(|_| (rng.gen_range(0.0..1.0f64) * 100.0).round() / 100.0).collect();
    println!("input:  {:?}", values);
    println!("sorted: {:?}", bucket_sort(&values, num_buckets, 0.0, 1.0)?);

    // values outside [low, high] are reported instead of indexing past the last bucket
    match bucket_sort(&[0.5, 1.25], num_buckets, 0.0, 1.0) {
        Ok(sorted) => println!("unexpected: {:?}", sorted),
        Err(err) => println!("rejected: {}", err),
    }

    Ok(())
}

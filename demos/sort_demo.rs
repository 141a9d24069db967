use std::env;
use std::error::Error;

use log::LevelFilter;
use classic_sorts::{counting_sort, heap_sort, merge_sort, quick_sort, radix_sort, RADIX};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .init();

    let mut args = env::args();
    args.next();

    let input: Vec<u64> = match args.next() {
        Some(arg) => arg
            .trim_matches(|c| c == '[' || c == ']')
            .split(',')
            .map(|s| s.trim().parse::<u64>())
            .collect::<Result<_, _>>()?,
        None => {
            eprintln!("Usage: cargo run --example sort_demo <array?>\nNo array provided. Using [170, 45, 75, 90, 802, 24, 2, 66].");
            vec![170, 45, 75, 90, 802, 24, 2, 66]
        }
    };

    println!("input:          {:?}", input);
    println!("by last digit:  {:?}", counting_sort(&input, 0, RADIX)?);
    println!("radix sort:     {:?}", radix_sort(&input));
    println!("merge sort:     {:?}", merge_sort(&input));
    println!("quick sort:     {:?}", quick_sort(&mut input.clone()));
    println!("heap sort:      {:?}", heap_sort(&mut input.clone()));

    Ok(())
}

use std::env;
use std::str::FromStr;

pub const RADIX: usize = 10;
pub const DEFAULT_BUCKETS: usize = 10;

pub const DEFAULT_SEED: u64 = 12345;
pub const DEFAULT_LEN: usize = 2048;
pub const DEFAULT_NUM_RUNS: usize = 4;

const _: () = {
    assert!(RADIX >= 2, "RADIX must be at least 2");
    assert!(DEFAULT_BUCKETS > 0, "DEFAULT_BUCKETS must be positive");
};

/// Reads `key` from the environment, falling back to `default` when it is
/// unset or does not parse.
pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// True only when `key` is set to the literal string `true`.
pub fn env_flag(key: &str) -> bool {
    env::var(key).map(|val| val == "true").unwrap_or(false)
}

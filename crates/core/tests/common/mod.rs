//! Shared builders for tests.

use idxsim_core::common::Address;
use idxsim_core::config::CacheParams;
use idxsim_core::trace::Trace;

/// Parses `digits` as an address of its own width.
pub fn addr(digits: &str) -> Address {
    Address::parse(digits, digits.len()).unwrap()
}

/// Parses a list of digit strings.
pub fn addrs(list: &[&str]) -> Vec<Address> {
    list.iter().map(|d| addr(d)).collect()
}

/// Builds a trace named `test` from digit strings, all of the same width.
pub fn trace(list: &[&str]) -> Trace {
    Trace::new("test", addrs(list)).unwrap()
}

/// Builds parameters in file order: address bits, block size, sets, associativity.
pub fn params(address_bits: u64, block_size: u64, cache_sets: u64, associativity: u64) -> CacheParams {
    CacheParams {
        address_bits,
        block_size,
        cache_sets,
        associativity,
    }
}

/// Asserts two floats are equal within `1e-12`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

/// Routes `tracing` output through the test harness at trace level.
///
/// Safe to call from several tests; only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("idxsim_core=trace")
        .with_test_writer()
        .try_init();
}

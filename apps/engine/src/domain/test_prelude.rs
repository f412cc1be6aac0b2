//! Shared configuration for property tests.

use proptest::test_runner::Config;

/// Keep property runs fast and deterministic-ish in CI.
pub fn proptest_config() -> Config {
    Config {
        cases: 64,
        max_shrink_iters: 1024,
        ..Config::default()
    }
}

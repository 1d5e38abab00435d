/// Shared proptest config for unit tests.
///
/// `PROPTEST_CASES` sets the case count (default 16).
pub fn proptest_config() -> proptest::prelude::ProptestConfig {
    let base = proptest::prelude::ProptestConfig::default();
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(16)
        .max(1);
    proptest::prelude::ProptestConfig {
        failure_persistence: None,
        cases,
        ..base
    }
}

//! Shared test helpers for creating NewsAggregator instances in tests.

use crate::aggregator::NewsAggregator;
use crate::config::Config;
use tempfile::tempdir;

/// Helper to create a test NewsAggregator from the given config, with the
/// database placed in a fresh temp dir. Returns the aggregator and the
/// tempdir (which must be kept alive).
pub(crate) async fn create_test_aggregator_with(
    mut config: Config,
) -> (NewsAggregator, tempfile::TempDir) {
    let temp_dir = tempdir().unwrap();
    config.persistence.database_path = temp_dir.path().join("test.db");

    let aggregator = NewsAggregator::new(config).await.unwrap();

    (aggregator, temp_dir)
}

/// Helper to create a test NewsAggregator with default configuration.
pub(crate) async fn create_test_aggregator() -> (NewsAggregator, tempfile::TempDir) {
    create_test_aggregator_with(Config::default()).await
}

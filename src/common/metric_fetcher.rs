// MetricFetcher trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::BucketSummary;

/// `MetricFetcher` represents something that can find the storage used by a
/// bucket.
#[async_trait]
pub trait MetricFetcher {
    /// Returns the `BucketSummary` for the named bucket.
    async fn fetch_bucket_metrics(
        &self,
        bucket_name: &str,
    ) -> Result<BucketSummary>;
}

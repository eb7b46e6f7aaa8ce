// Implement the BucketLister trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use crate::common::{
    BucketLister,
    BucketNames,
};
use super::client::Client;
use tracing::debug;

#[async_trait]
impl BucketLister for Client {
    /// Return the names of all buckets discovered in S3.
    async fn list_bucket_names(&self) -> Result<BucketNames> {
        debug!("list_bucket_names: Listing...");

        let bucket_names = self.list_buckets().await?;

        debug!(
            "list_bucket_names: Found {} buckets",
            bucket_names.len(),
        );

        Ok(bucket_names)
    }
}

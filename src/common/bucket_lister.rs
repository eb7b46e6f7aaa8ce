// BucketLister trait
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::BucketNames;

/// `BucketLister` represents something that can discover the S3 buckets in
/// an account.
#[async_trait]
pub trait BucketLister {
    /// Returns the names of every bucket visible to the account, in the
    /// order the service returned them.
    async fn list_bucket_names(&self) -> Result<BucketNames>;
}

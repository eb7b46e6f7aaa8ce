// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use aws_sdk_s3::client::Client as S3Client;
use aws_types::SdkConfig;
use crate::common::BucketNames;
use tracing::debug;

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,
}

impl Client {
    /// Return a new S3 `Client` from the shared `SdkConfig`.
    pub fn new(config: &SdkConfig) -> Self {
        debug!(
            "new: Creating S3Client in region '{:?}'",
            config.region(),
        );

        let client = S3Client::new(config);

        Self {
            client,
        }
    }

    /// Returns a list of bucket names.
    ///
    /// Buckets are returned in the order that S3 lists them.
    pub async fn list_buckets(&self) -> Result<BucketNames> {
        let output = self.client.list_buckets()
            .send()
            .await?;

        debug!("list_buckets: API returned: {:#?}", output);

        let bucket_names = match output.buckets() {
            Some(buckets) => {
                buckets.iter()
                    .filter_map(|b| b.name().map(|n| n.to_owned()))
                    .collect()
            },
            None => Vec::new(),
        };

        Ok(bucket_names)
    }
}

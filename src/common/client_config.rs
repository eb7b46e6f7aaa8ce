// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::meta::region::RegionProviderChain;
use aws_types::SdkConfig;
use super::Region;
use tracing::debug;

/// Client configuration.
#[derive(Debug, Default)]
pub struct ClientConfig {
    /// The region that our AWS clients should be created in.
    ///
    /// When this has no region set, the SDK's default region chain is used.
    pub region: Region,

    /// Whether bucket names should be sorted before they're fetched and
    /// written to the report.
    ///
    /// When `false` buckets are reported in the order S3 lists them.
    pub sort: bool,
}

impl ClientConfig {
    /// Load the shared AWS SDK configuration.
    ///
    /// This is done once and handed to both the S3 and CloudWatch clients.
    /// Credentials are resolved by the SDK's default provider chain.
    pub async fn load_sdk_config(&self) -> SdkConfig {
        debug!("load_sdk_config: Requested region '{}'", self.region.name());

        let region = RegionProviderChain::first_try(self.region.clone())
            .or_default_provider();

        aws_config::from_env()
            .region(region)
            .load()
            .await
    }
}

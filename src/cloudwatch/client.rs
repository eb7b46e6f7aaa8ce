// Implement the CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use aws_sdk_cloudwatch::client::Client as CloudWatchClient;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{
    DimensionFilter,
    Metric,
    MetricDataQuery,
    MetricDataResult,
};
use aws_smithy_types_convert::date_time::DateTimeExt;
use aws_types::SdkConfig;
use chrono::{
    DateTime as ChronoDateTime,
    Duration,
    Utc,
};
use super::metric_queries::{
    S3_BUCKET_SIZE_BYTES,
    S3_NAMESPACE,
};
use tracing::debug;

/// How far back `get_metric_data` looks for datapoints.
const LOOKBACK_DAYS: i64 = 14;

/// Returns the `(start, end)` of the `GetMetricData` window ending at `now`.
pub fn metric_data_window(now: ChronoDateTime<Utc>)
    -> (ChronoDateTime<Utc>, ChronoDateTime<Utc>)
{
    (now - Duration::days(LOOKBACK_DAYS), now)
}

/// A `CloudWatch` `Client`
pub struct Client {
    /// The AWS SDK `CloudWatchClient`.
    pub client: CloudWatchClient,
}

impl Client {
    /// Return a new `Client` from the shared `SdkConfig`.
    pub fn new(config: &SdkConfig) -> Self {
        debug!(
            "new: Creating CloudWatchClient in region '{:?}'",
            config.region(),
        );

        let client = CloudWatchClient::new(config);

        Self {
            client,
        }
    }

    /// Returns the `BucketSizeBytes` metrics for the given bucket.
    ///
    /// There is one metric per storage class in use by the bucket. An
    /// individual metric resembles the following:
    /// ```rust
    /// Metric {
    ///   metric_name: Some("BucketSizeBytes"),
    ///   namespace:   Some("AWS/S3")
    ///   dimensions:  Some([
    ///     Dimension {
    ///       name:  "StorageType",
    ///       value: "StandardStorage"
    ///     },
    ///     Dimension {
    ///       name:  "BucketName",
    ///       value: "some-bucket-name"
    ///     }
    ///   ]),
    /// }
    /// ```
    pub async fn list_metrics(&self, bucket_name: &str) -> Result<Vec<Metric>> {
        debug!("list_metrics: Listing for '{}'", bucket_name);

        let mut metrics    = Vec::new();
        let mut next_token = None;

        let filter = DimensionFilter::builder()
            .name("BucketName")
            .value(bucket_name)
            .build();

        // We loop until we've processed everything.
        loop {
            let output = self.client.list_metrics()
                .namespace(S3_NAMESPACE)
                .metric_name(S3_BUCKET_SIZE_BYTES)
                .dimensions(filter.clone())
                .set_next_token(next_token)
                .send()
                .await?;

            debug!("list_metrics: API returned: {:#?}", output);

            // If we get any metrics, append them to our vec
            if let Some(m) = output.metrics() {
                metrics.extend_from_slice(m);
            }

            // If there was a next token, use it, otherwise the loop is done.
            match output.next_token() {
                Some(t) => next_token = Some(t.to_string()),
                None    => break,
            }
        }

        Ok(metrics)
    }

    /// Perform a single `GetMetricData` call for the given `queries` over the
    /// last 14 days.
    pub async fn get_metric_data(
        &self,
        queries: Vec<MetricDataQuery>,
    ) -> Result<Vec<MetricDataResult>> {
        let (start_time, end_time) = metric_data_window(Utc::now());

        debug!(
            "get_metric_data: {} queries from {} to {}",
            queries.len(),
            start_time,
            end_time,
        );

        let output = self.client.get_metric_data()
            .set_metric_data_queries(Some(queries))
            .start_time(DateTime::from_chrono_utc(start_time))
            .end_time(DateTime::from_chrono_utc(end_time))
            .send()
            .await
            .context("GetMetricData")?;

        debug!("get_metric_data: API returned: {:#?}", output);

        let results = output.metric_data_results()
            .map(|r| r.to_vec())
            .unwrap_or_default();

        Ok(results)
    }
}

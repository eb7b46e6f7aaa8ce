// Implements the MetricFetcher trait for CloudWatch Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    anyhow,
    Context,
    Result,
};
use async_trait::async_trait;
use aws_sdk_cloudwatch::types::{
    MetricDataQuery,
    MetricDataResult,
};
use aws_smithy_types_convert::date_time::DateTimeExt;
use crate::common::{
    BucketSummary,
    MetricFetcher,
};
use super::client::Client;
use super::metric_queries::{
    number_of_objects_query,
    storage_class_query,
    NUMBER_OF_OBJECTS_ID,
};
use super::storage_class_dimensions::StorageClassDimensions;
use tracing::debug;

#[async_trait]
impl MetricFetcher for Client {
    /// Fetch the size of each storage class in use by the bucket, and the
    /// number of objects in it.
    ///
    /// Storage classes without a datapoint in the lookback window are left
    /// out of the summary. The number of objects is 0 if it has no datapoint.
    async fn fetch_bucket_metrics(
        &self,
        bucket_name: &str,
    ) -> Result<BucketSummary> {
        debug!("fetch_bucket_metrics: Fetching for '{}'", bucket_name);

        // Find out which storage classes are in use in this bucket.
        let storage_classes: StorageClassDimensions = self
            .list_metrics(bucket_name)
            .await?
            .into();

        if storage_classes.is_empty() {
            debug!(
                "fetch_bucket_metrics: No size metrics recorded for '{}'",
                bucket_name,
            );
        }
        else {
            debug!(
                "fetch_bucket_metrics: Found storage classes '{:?}' for '{}'",
                storage_classes.storage_classes(),
                bucket_name,
            );
        }

        let mut queries: Vec<MetricDataQuery> = storage_classes
            .iter()
            .map(|(name, dimensions)| storage_class_query(name, dimensions))
            .collect();

        queries.push(number_of_objects_query(bucket_name));

        let results = self.get_metric_data(queries).await?;

        let mut summary = BucketSummary::new(bucket_name);

        for result in &results {
            let id = result.id()
                .ok_or_else(|| anyhow!("GetMetricData result without an ID"))?;

            let value = latest_value(result)
                .with_context(|| format!("Reading values for '{}'", id))?;

            if id == NUMBER_OF_OBJECTS_ID {
                summary.number_of_objects = value.map_or(0, |v| v as u64);

                continue;
            }

            let storage_class = storage_classes.storage_class_for_id(id)
                .ok_or_else(|| {
                    anyhow!("GetMetricData returned unexpected ID '{}'", id)
                })?;

            match value {
                Some(bytes) => {
                    summary.storage_classes
                        .insert(storage_class.to_string(), bytes as u64);
                },
                None => {
                    debug!(
                        "fetch_bucket_metrics: No datapoints for '{}' in '{}'",
                        storage_class,
                        bucket_name,
                    );
                },
            }
        }

        debug!("fetch_bucket_metrics: Summary: {:?}", summary);

        Ok(summary)
    }
}

// Returns the most recent value in the result, if any.
//
// We don't rely on the order that CloudWatch returns values in. If the
// timestamps don't line up with the values we fall back to the last value.
fn latest_value(result: &MetricDataResult) -> Result<Option<f64>> {
    let values     = result.values().unwrap_or_default();
    let timestamps = result.timestamps().unwrap_or_default();

    if timestamps.len() != values.len() {
        return Ok(values.last().copied());
    }

    let mut latest = None;

    for (timestamp, value) in timestamps.iter().zip(values) {
        let timestamp = timestamp.to_chrono_utc()?;

        match latest {
            Some((newest, _)) if newest >= timestamp => {},
            _ => latest = Some((timestamp, *value)),
        }
    }

    Ok(latest.map(|(_, value)| value))
}

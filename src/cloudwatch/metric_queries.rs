// Builds the GetMetricData queries for a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_cloudwatch::types::{
    Dimension,
    Metric,
    MetricDataQuery,
    MetricStat,
};
use super::storage_class_dimensions::{
    query_id,
    Dimensions,
};

/// CloudWatch namespace that S3 publishes storage metrics in.
pub const S3_NAMESPACE: &str = "AWS/S3";

/// Metric holding the bytes stored, one series per storage class.
pub const S3_BUCKET_SIZE_BYTES: &str = "BucketSizeBytes";

/// Metric holding the number of objects stored.
pub const S3_NUMBER_OF_OBJECTS: &str = "NumberOfObjects";

/// Query ID used for the number of objects query.
pub const NUMBER_OF_OBJECTS_ID: &str = "number_of_objects";

// S3 storage metrics are only published about once a day, so fairly long
// periods are needed to be sure of catching a datapoint.
const BUCKET_SIZE_PERIOD: i32 = 3 * 24 * 60 * 60;
const NUMBER_OF_OBJECTS_PERIOD: i32 = 7 * 24 * 60 * 60;

// BucketSizeBytes and NumberOfObjects only support the Average statistic.
const STATISTIC: &str = "Average";

/// Returns the query for the size of a single storage class.
pub fn storage_class_query(
    storage_class: &str,
    dimensions: &Dimensions,
) -> MetricDataQuery {
    let metric = Metric::builder()
        .namespace(S3_NAMESPACE)
        .metric_name(S3_BUCKET_SIZE_BYTES)
        .set_dimensions(Some(dimensions.clone()))
        .build();

    let metric_stat = MetricStat::builder()
        .metric(metric)
        .period(BUCKET_SIZE_PERIOD)
        .stat(STATISTIC)
        .build();

    MetricDataQuery::builder()
        .id(query_id(storage_class))
        .metric_stat(metric_stat)
        .build()
}

/// Returns the query for the number of objects in a bucket, across all
/// storage types.
pub fn number_of_objects_query(bucket_name: &str) -> MetricDataQuery {
    let dimensions = vec![
        Dimension::builder()
            .name("BucketName")
            .value(bucket_name)
            .build(),
        Dimension::builder()
            .name("StorageType")
            .value("AllStorageTypes")
            .build(),
    ];

    let metric = Metric::builder()
        .namespace(S3_NAMESPACE)
        .metric_name(S3_NUMBER_OF_OBJECTS)
        .set_dimensions(Some(dimensions))
        .build();

    let metric_stat = MetricStat::builder()
        .metric(metric)
        .period(NUMBER_OF_OBJECTS_PERIOD)
        .stat(STATISTIC)
        .build();

    MetricDataQuery::builder()
        .id(NUMBER_OF_OBJECTS_ID)
        .metric_stat(metric_stat)
        .build()
}

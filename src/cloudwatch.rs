// Imports all of the components needed for cloudwatch::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// CloudWatch `Client`.
mod client;

/// Implementation of the `MetricFetcher` trait for our CloudWatch `Client`.
mod metric_fetcher;

/// `GetMetricData` query construction.
mod metric_queries;

/// `StorageClassDimensions` maps the storage classes discovered for a bucket
/// to the CloudWatch dimensions that select them.
mod storage_class_dimensions;

pub use client::*;

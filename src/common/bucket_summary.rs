// Definition of a bucket summary
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::collections::BTreeMap;

/// Storage class name to size in bytes.
pub type StorageClassSizes = BTreeMap<String, u64>;

/// The storage used by a single S3 bucket.
///
/// `storage_classes` only contains the classes that CloudWatch had a recent
/// datapoint for, so it varies from bucket to bucket.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BucketSummary {
    /// Name of the bucket.
    pub bucket_name: String,

    /// Number of objects across all storage classes.
    pub number_of_objects: u64,

    /// Bytes stored in each storage class.
    pub storage_classes: StorageClassSizes,
}

impl BucketSummary {
    /// Return an empty `BucketSummary` for the named bucket.
    pub fn new(bucket_name: &str) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            ..Default::default()
        }
    }
}

/// Convenience type for a list of `BucketSummary`.
pub type BucketSummaries = Vec<BucketSummary>;

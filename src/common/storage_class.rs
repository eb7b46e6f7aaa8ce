// Storage classes reported in the summary spreadsheet
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Every S3 storage class that gets a pair of columns in the report, in
/// column order.
///
/// These are the `StorageType` dimension values that CloudWatch publishes
/// `BucketSizeBytes` under.
pub const STORAGE_CLASSES: &[&str] = &[
    "StandardStorage",
    "StandardIAStorage",
    "StandardIASizeOverhead",
    "ReducedRedundancyStorage",
    "GlacierStorage",
    "GlacierObjectOverhead",
    "GlacierS3ObjectOverhead",
    "DeepArchiveStorage",
    "DeepArchiveObjectOverhead",
    "DeepArchiveS3ObjectOverhead",
    "DeepArchiveStagingStorage",
];

/// Returns the position of `name` in `STORAGE_CLASSES`, or `None` if it's
/// not a storage class that we report on.
pub fn storage_class_index(name: &str) -> Option<usize> {
    STORAGE_CLASSES.iter().position(|class| *class == name)
}

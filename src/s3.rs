// Imports all of the components needed for s3::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Implementation of the `BucketLister` trait for our S3 `Client`.
mod bucket_lister;

/// S3 `Client`.
mod client;

pub use client::*;

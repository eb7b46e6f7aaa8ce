// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket_lister;
mod bucket_summary;
mod client_config;
mod metric_fetcher;
mod natural_size;
mod region;
mod storage_class;

pub use bucket_lister::*;
pub use bucket_summary::*;
pub use client_config::*;
pub use metric_fetcher::*;
pub use natural_size::*;
pub use region::*;
pub use storage_class::*;

// These are used by the S3 and CloudWatch clients.
pub type BucketNames = Vec<String>;

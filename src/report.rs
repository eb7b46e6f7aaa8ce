// Imports all of the components needed to produce the report
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Collects a `BucketSummary` for each bucket.
mod summary;

/// Writes `BucketSummaries` out as a CSV spreadsheet.
mod writer;

pub use summary::*;
pub use writer::*;

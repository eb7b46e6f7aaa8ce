// Writes the summary spreadsheet
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use chrono::{
    DateTime,
    Local,
};
use crate::common::{
    storage_class_index,
    BucketSummary,
    NaturalSize,
    STORAGE_CLASSES,
};
use once_cell::sync::Lazy;
use std::path::{
    Path,
    PathBuf,
};
use tracing::{
    debug,
    warn,
};

const BUCKET_NAME_COLUMN: &str = "bucket name";
const NUMBER_OF_OBJECTS_COLUMN: &str = "number of objects";

/// Columns before the storage class columns.
const FIXED_COLUMNS: usize = 2;

/// The CSV header.
///
/// Every storage class gets a column for the raw bytes and another for the
/// human readable size.
static HEADER: Lazy<Vec<String>> = Lazy::new(|| {
    let mut header = vec![
        BUCKET_NAME_COLUMN.to_string(),
        NUMBER_OF_OBJECTS_COLUMN.to_string(),
    ];

    for storage_class in STORAGE_CLASSES {
        header.push(format!("{} (bytes)", storage_class));
        header.push(format!("{} (human-readable)", storage_class));
    }

    header
});

/// Returns the file name for a report written at `now`.
pub fn report_file_name(now: &DateTime<Local>) -> String {
    format!(
        "s3_summary_spreadsheet_{}.csv",
        now.format("%Y-%m-%d_%H-%M-%S"),
    )
}

// Returns the CSV record for a single bucket. Storage classes that the bucket
// doesn't use are left blank.
fn report_row(summary: &BucketSummary) -> Vec<String> {
    let mut row = vec![String::new(); HEADER.len()];

    row[0] = summary.bucket_name.clone();
    row[1] = summary.number_of_objects.to_string();

    for (storage_class, bytes) in &summary.storage_classes {
        let index = match storage_class_index(storage_class) {
            Some(i) => FIXED_COLUMNS + (i * 2),
            None    => {
                warn!(
                    "Bucket '{}' has unreported storage class '{}'",
                    summary.bucket_name,
                    storage_class,
                );

                continue;
            },
        };

        row[index]     = bytes.to_string();
        row[index + 1] = bytes.natural_size();
    }

    row
}

/// Writes `summaries` to a timestamped CSV file in `directory`, returning
/// the path of the written file.
///
/// The directory must already exist. An existing file of the same name is
/// overwritten.
pub fn write_report(
    directory: &Path,
    summaries: &[BucketSummary],
) -> Result<PathBuf> {
    let path = directory.join(report_file_name(&Local::now()));

    debug!(
        "write_report: Writing {} rows to {}",
        summaries.len(),
        path.display(),
    );

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(HEADER.iter())?;

    for summary in summaries {
        writer.write_record(report_row(summary))?;
    }

    writer.flush()?;

    Ok(path)
}

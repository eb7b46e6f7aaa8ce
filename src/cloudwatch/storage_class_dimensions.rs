// StorageClassDimensions and query ID mapping
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_cloudwatch::types::{
    Dimension,
    Metric,
};
use std::collections::BTreeMap;
use tracing::debug;

/// The dimensions needed to select a single storage class' metrics.
pub type Dimensions = Vec<Dimension>;

// Keyed by storage class name, eg. "StandardStorage", containing the full set
// of dimensions that CloudWatch listed for that storage class.
#[derive(Debug, Default, PartialEq)]
pub struct StorageClassDimensions(pub BTreeMap<String, Dimensions>);

impl StorageClassDimensions {
    /// Returns `true` if no storage classes were discovered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the storage class names and their dimensions.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Dimensions)> {
        self.0.iter()
    }

    /// Returns the storage class names.
    pub fn storage_classes(&self) -> Vec<&str> {
        self.0.keys().map(|k| k.as_str()).collect()
    }

    /// Find the storage class that a `GetMetricData` query ID was generated
    /// from.
    pub fn storage_class_for_id(&self, id: &str) -> Option<&str> {
        self.0.keys()
            .find(|name| query_id(name) == id)
            .map(|name| name.as_str())
    }
}

/// Returns the `GetMetricData` query ID for a storage class.
///
/// Query IDs must start with a lowercase letter, so the storage class name is
/// lowercased.
pub fn query_id(storage_class: &str) -> String {
    storage_class.to_lowercase()
}

// Conversion from a Vec<Metric> as returned by AWS to our
// StorageClassDimensions
impl From<Vec<Metric>> for StorageClassDimensions {
    fn from(metrics: Vec<Metric>) -> Self {
        let mut storage_classes = BTreeMap::new();

        for metric in metrics {
            // Get the dimensions if any, otherwise skip to next iteration
            let dimensions = match metric.dimensions() {
                Some(d) => d,
                None    => continue,
            };

            let storage_type = dimensions
                .iter()
                .find(|d| d.name() == Some("StorageType"))
                .and_then(|d| d.value());

            // Without a storage type we can't tell which column the metric
            // belongs in.
            let storage_type = match storage_type {
                Some(st) => st.to_string(),
                None     => {
                    debug!("Skipping metric without StorageType: {:?}", metric);

                    continue;
                },
            };

            storage_classes.insert(storage_type, dimensions.to_vec());
        }

        StorageClassDimensions(storage_classes)
    }
}

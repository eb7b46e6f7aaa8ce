// Gathers bucket summaries
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use crate::common::{
    BucketLister,
    BucketSummaries,
    MetricFetcher,
};
use tracing::{
    debug,
    info,
};

/// Lists every bucket with `lister` and fetches a `BucketSummary` for each of
/// them with `fetcher`, one bucket at a time.
///
/// Buckets are kept in the order `lister` returned them unless `sort` is
/// `true`. The first failure stops the run.
pub async fn collect_summaries<L, F>(
    lister: &L,
    fetcher: &F,
    sort: bool,
) -> Result<BucketSummaries>
where
    L: BucketLister + Sync,
    F: MetricFetcher + Sync,
{
    let mut bucket_names = lister.list_bucket_names()
        .await
        .context("Failed to list buckets")?;

    if sort {
        debug!("collect_summaries: Sorting bucket names");

        bucket_names.sort();
    }

    info!("Found {} buckets", bucket_names.len());

    let mut summaries = BucketSummaries::new();

    for bucket_name in &bucket_names {
        info!("Fetching metrics for '{}'", bucket_name);

        let summary = fetcher.fetch_bucket_metrics(bucket_name)
            .await
            .with_context(|| {
                format!("Failed to fetch metrics for '{}'", bucket_name)
            })?;

        summaries.push(summary);
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use crate::common::{
        BucketNames,
        BucketSummary,
    };
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    struct FakeLister(BucketNames);

    #[async_trait]
    impl BucketLister for FakeLister {
        async fn list_bucket_names(&self) -> Result<BucketNames> {
            Ok(self.0.clone())
        }
    }

    struct FailingLister;

    #[async_trait]
    impl BucketLister for FailingLister {
        async fn list_bucket_names(&self) -> Result<BucketNames> {
            Err(anyhow!("access denied"))
        }
    }

    // Returns the number of objects from the map, or an error for buckets
    // that aren't in it.
    struct FakeFetcher(HashMap<String, u64>);

    #[async_trait]
    impl MetricFetcher for FakeFetcher {
        async fn fetch_bucket_metrics(
            &self,
            bucket_name: &str,
        ) -> Result<BucketSummary> {
            let objects = self.0.get(bucket_name)
                .ok_or_else(|| anyhow!("no metrics for {}", bucket_name))?;

            let mut summary = BucketSummary::new(bucket_name);
            summary.number_of_objects = *objects;

            Ok(summary)
        }
    }

    fn fetcher() -> FakeFetcher {
        let mut objects = HashMap::new();
        objects.insert("zebra".to_string(), 1);
        objects.insert("apple".to_string(), 2);
        objects.insert("mango".to_string(), 3);

        FakeFetcher(objects)
    }

    fn lister() -> FakeLister {
        FakeLister(vec![
            "zebra".into(),
            "apple".into(),
            "mango".into(),
        ])
    }

    #[tokio::test]
    async fn test_collect_summaries_service_order() {
        let ret = collect_summaries(&lister(), &fetcher(), false)
            .await
            .unwrap();

        let ret: Vec<(&str, u64)> = ret.iter()
            .map(|s| (s.bucket_name.as_str(), s.number_of_objects))
            .collect();

        let expected = vec![
            ("zebra", 1),
            ("apple", 2),
            ("mango", 3),
        ];

        assert_eq!(ret, expected);
    }

    #[tokio::test]
    async fn test_collect_summaries_sorted() {
        let ret = collect_summaries(&lister(), &fetcher(), true)
            .await
            .unwrap();

        let ret: Vec<&str> = ret.iter()
            .map(|s| s.bucket_name.as_str())
            .collect();

        let expected = vec![
            "apple",
            "mango",
            "zebra",
        ];

        assert_eq!(ret, expected);
    }

    #[tokio::test]
    async fn test_collect_summaries_no_buckets() {
        let lister = FakeLister(Vec::new());

        let ret = collect_summaries(&lister, &fetcher(), false)
            .await
            .unwrap();

        assert!(ret.is_empty());
    }

    #[tokio::test]
    async fn test_collect_summaries_fetch_failure() {
        let lister = FakeLister(vec![
            "apple".into(),
            "unknown".into(),
        ]);

        let ret = collect_summaries(&lister, &fetcher(), false).await;

        let err = ret.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch metrics for 'unknown'");
    }

    #[tokio::test]
    async fn test_collect_summaries_list_failure() {
        let ret = collect_summaries(&FailingLister, &fetcher(), false).await;

        let err = ret.unwrap_err();
        assert_eq!(err.to_string(), "Failed to list buckets");
    }
}

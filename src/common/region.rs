// Handles region things
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::meta::region::future;
use aws_config::meta::region::ProvideRegion;
use aws_types::region;
use tracing::debug;

/// The region that was requested on the command line, if any.
///
/// When no region was requested, this provides nothing and the SDK's default
/// region chain (environment, profile, IMDS) gets a chance instead.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    region: Option<region::Region>,
}

impl Region {
    /// Return a new `Region` without any region set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the region name
    pub fn name(&self) -> &str {
        match &self.region {
            Some(region) => region.as_ref(),
            None         => "default",
        }
    }

    /// Set the region name.
    pub fn set_region(mut self, region: &str) -> Self {
        debug!("Region set to: {:?}", region);

        let region = region::Region::new(region.to_string());
        self.region = Some(region);
        self
    }
}

impl ProvideRegion for Region {
    // Takes our region string and returns a proper AWS Region, this should
    // allow us to pass our Region into AWS SDK functions expecting an AWS
    // Region.
    fn region(&self) -> future::ProvideRegion<'_> {
        future::ProvideRegion::ready(self.region.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_region_name() {
        let region = Region::new();
        assert_eq!(region.name(), "default");

        let region = region.set_region("eu-west-1");
        assert_eq!(region.name(), "eu-west-1");
    }

    #[tokio::test]
    async fn test_provide_region() {
        let region = Region::new().set_region("ap-southeast-2");
        let ret = region.region().await;

        let expected = Some(region::Region::new("ap-southeast-2"));

        assert_eq!(ret, expected);
    }

    #[tokio::test]
    async fn test_provide_region_unset() {
        let ret = Region::new().region().await;

        assert_eq!(ret, None);
    }
}

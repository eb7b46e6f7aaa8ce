// s3summary: A tool for summarising the used space in AWS S3.
#![forbid(unsafe_code)]
use anyhow::{
    Context,
    Result,
};
use std::env;
use tracing::{
    debug,
    info,
};

mod cli;
mod cloudwatch;
mod common;
mod report;
mod s3;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::parse_args();

    tracing_subscriber::fmt()
        .with_max_level(cli::log_level(&matches))
        .with_writer(std::io::stderr)
        .init();

    let config = cli::client_config(&matches);

    debug!("main: Client config: {:?}", config);

    let sdk_config = config.load_sdk_config().await;

    let s3_client         = s3::Client::new(&sdk_config);
    let cloudwatch_client = cloudwatch::Client::new(&sdk_config);

    let summaries = report::collect_summaries(
        &s3_client,
        &cloudwatch_client,
        config.sort,
    ).await?;

    let directory = env::current_dir()
        .context("Failed to get current directory")?;

    let path = report::write_report(&directory, &summaries)
        .context("Failed to write report")?;

    info!("Wrote {} buckets to {}", summaries.len(), path.display());

    println!(
        "Written a summary of your S3 stats to {}",
        path.display(),
    );

    Ok(())
}

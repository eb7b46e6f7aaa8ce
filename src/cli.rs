// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    Arg,
    ArgAction,
    ArgMatches,
    Command,
};
use crate::common::{
    ClientConfig,
    Region,
};
use tracing::Level;

// Create the clap app
fn create_app() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("REGION")
                .env("AWS_REGION")
                .hide_env_values(true)
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("Set the AWS region to create the clients in")
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("SORT")
                .long("sort")
                .short('s')
                .help("Sort buckets by name in the report")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("VERBOSE")
                .long("verbose")
                .short('v')
                .help("Increase logging verbosity, may be repeated")
                .action(ArgAction::Count)
        )
}

/// Parse the command line arguments.
pub fn parse_args() -> ArgMatches {
    create_app().get_matches()
}

/// Build a `ClientConfig` from the parsed arguments.
pub fn client_config(matches: &ArgMatches) -> ClientConfig {
    let region = match matches.get_one::<String>("REGION") {
        Some(region) => Region::new().set_region(region),
        None         => Region::new(),
    };

    ClientConfig {
        region,
        sort: matches.get_flag("SORT"),
    }
}

/// Returns the maximum log level requested with `--verbose`.
pub fn log_level(matches: &ArgMatches) -> Level {
    match matches.get_count("VERBOSE") {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["s3summary"];
        argv.extend_from_slice(args);

        create_app().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_app() {
        create_app().debug_assert();
    }

    #[test]
    fn test_client_config() {
        let config = client_config(&matches(&[
            "--region", "eu-west-2",
            "--sort",
        ]));

        assert_eq!(config.region.name(), "eu-west-2");
        assert!(config.sort);
    }

    #[test]
    fn test_client_config_short() {
        let config = client_config(&matches(&["-r", "us-east-1"]));

        assert_eq!(config.region.name(), "us-east-1");
        assert!(!config.sort);
    }

    #[test]
    fn test_log_level() {
        let tests = vec![
            (vec![],                     Level::WARN),
            (vec!["-v"],                 Level::INFO),
            (vec!["-vv"],                Level::DEBUG),
            (vec!["-v", "-v", "-v"],     Level::TRACE),
            (vec!["--verbose", "-vvvv"], Level::TRACE),
        ];

        for test in tests {
            let args     = test.0;
            let expected = test.1;

            assert_eq!(log_level(&matches(&args)), expected);
        }
    }

    #[test]
    fn test_unknown_argument() {
        let ret = create_app().try_get_matches_from(vec![
            "s3summary",
            "--bucket",
            "a-bucket-name",
        ]);

        assert!(ret.is_err());
    }
}

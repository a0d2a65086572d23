//! Configuration resolution from CLI args

use crate::cli::{Args, Command};
use crate::error::CliError;
use crate::output::OutputMode;
use std::time::Duration;
use uma_http_client::UmaClient;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// API root override (None = public API)
    pub base_url: Option<String>,
    /// Per-request timeout (None = wait indefinitely)
    pub timeout: Option<Duration>,
    /// How to print the fetched record
    pub output: OutputMode,
    /// Default log directive when `RUST_LOG` is unset
    pub log_level: &'static str,
    /// What to fetch
    pub command: Command,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let base_url = args.base_url.map(validate_base_url).transpose()?;

        let timeout = match args.timeout {
            Some(0) => {
                return Err(CliError::Config(
                    "Timeout must be at least one second".to_string(),
                ));
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        let output = if args.json {
            OutputMode::Json
        } else if args.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Full
        };

        Ok(Config {
            base_url,
            timeout,
            output,
            log_level: log_level(args.verbose),
            command: args.command,
        })
    }

    /// Build the API client described by this config
    pub fn build_client(&self) -> Result<UmaClient, CliError> {
        let mut builder = UmaClient::builder();
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.as_str())?;
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

/// Reject base URLs the client could not issue requests against
fn validate_base_url(url: String) -> Result<String, CliError> {
    let trimmed = url.trim();
    let scheme_ok = trimmed.split_once("://").is_some_and(|(scheme, _)| {
        scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
    });
    if scheme_ok {
        Ok(trimmed.to_string())
    } else {
        Err(CliError::Config(format!(
            "Base URL must start with http:// or https://, got '{}'",
            url
        )))
    }
}

/// Map the `-v` count to a log directive for this binary and the client
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "uma=debug,uma_http_client=debug",
        _ => "uma=trace,uma_http_client=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn args(base_url: Option<&str>, timeout: Option<u64>) -> Args {
        Args {
            base_url: base_url.map(str::to_string),
            timeout,
            json: false,
            quiet: false,
            verbose: 0,
            command: Command::War { tier: 1 },
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(args(None, None)).unwrap();

        assert_eq!(config.base_url, None);
        assert_eq!(config.timeout, None);
        assert_eq!(config.output, OutputMode::Full);
        assert_eq!(config.log_level, "warn");

        let client = config.build_client().unwrap();
        assert_eq!(client.base_url(), uma_http_client::DEFAULT_BASE_URL);
        client.close();
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Config::from_args(args(None, Some(0)));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_base_url_scheme_required() {
        let result = Config::from_args(args(Some("api.rexians.tk"), None));
        assert!(matches!(result, Err(CliError::Config(_))));

        let result = Config::from_args(args(Some("ftp://api.rexians.tk"), None));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_base_url_scheme_is_case_insensitive() {
        let config = Config::from_args(args(Some("HTTPS://Api.Rexians.tk"), None)).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("HTTPS://Api.Rexians.tk"));

        let client = config.build_client().unwrap();
        assert_eq!(client.base_url(), "https://api.rexians.tk/");
        client.close();
    }

    #[test]
    fn test_output_mode_selection() {
        let mut a = args(None, None);
        a.quiet = true;
        assert_eq!(Config::from_args(a).unwrap().output, OutputMode::Quiet);

        let mut a = args(None, None);
        a.json = true;
        assert_eq!(Config::from_args(a).unwrap().output, OutputMode::Json);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_config_builds_client(
            host in "[a-z]{3,10}",
            port in 1000u16..10000u16,
            timeout in prop::option::of(1u64..300),
            verbose in 0u8..5,
        ) {
            let base_url = format!("http://{}:{}", host, port);
            let mut a = args(Some(&base_url), timeout);
            a.verbose = verbose;

            let config = Config::from_args(a).unwrap();
            prop_assert_eq!(config.timeout, timeout.map(Duration::from_secs));

            let client = config.build_client().unwrap();
            let expected = format!("{}/", base_url);
            prop_assert_eq!(client.base_url(), expected.as_str());
            client.close();
        }
    }
}

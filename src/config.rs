use std::path::PathBuf;

use clap::Parser;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LOG_FILE: &str = "quiz_client.log";

/// Terminal client for the quiz scoring backend.
#[derive(Parser, Debug, Clone)]
#[clap(name = "quiz-client", version)]
pub struct Config {
    /// Origin of the scoring backend.
    #[clap(
        long,
        env = "QUIZ_API_BASE_URL",
        value_parser,
        value_name = "URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: Url,

    #[clap(
        long,
        env = "QUIZ_CLIENT_LOG",
        value_parser,
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE
    )]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["quiz-client"]).unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:5000/");
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_base_url_flag() {
        let config =
            Config::try_parse_from(["quiz-client", "--base-url", "http://quiz.local:8080"])
                .unwrap();
        assert_eq!(config.base_url.host_str(), Some("quiz.local"));
        assert_eq!(config.base_url.port(), Some(8080));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(Config::try_parse_from(["quiz-client", "--base-url", "not a url"]).is_err());
    }
}

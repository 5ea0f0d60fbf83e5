use std::{net::SocketAddr, time::Duration};

use clap::Parser;

use crate::core::pipeline::polling::PollPolicy;

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Relays code execution requests to a Judge0 instance")]
pub struct Config {
    /// Base URL of the Judge0 API
    #[arg(long, env = "JUDGE0_API_URL")]
    pub judge0_url: String,

    /// Address the HTTP API listens on
    #[arg(long, env = "CODERELAY_LISTEN", default_value = "127.0.0.1:8080")]
    pub listen: SocketAddr,

    /// Delay between two result polls
    #[arg(long, env = "CODERELAY_POLL_INTERVAL_MS", default_value_t = 1000)]
    pub poll_interval_ms: u64,

    /// Polls before giving up on a pending submission, 0 for no limit
    #[arg(long, env = "CODERELAY_MAX_POLL_ATTEMPTS", default_value_t = 60)]
    pub max_poll_attempts: u32,

    /// Timeout of a single request to Judge0
    #[arg(long, env = "CODERELAY_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy::new(
            Duration::from_millis(self.poll_interval_ms),
            self.max_poll_attempts,
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config =
            Config::try_parse_from(["coderelay", "--judge0-url", "http://judge:2358"]).unwrap();

        assert_eq!(config.judge0_url, "http://judge:2358");
        assert_eq!(config.listen, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(
            config.poll_policy(),
            PollPolicy {
                interval: Duration::from_secs(1),
                max_attempts: Some(60),
            }
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_unbounded_polling() {
        let config = Config::try_parse_from([
            "coderelay",
            "--judge0-url",
            "http://judge:2358",
            "--max-poll-attempts",
            "0",
            "--poll-interval-ms",
            "250",
        ])
        .unwrap();

        assert_eq!(config.poll_policy().max_attempts, None);
        assert_eq!(config.poll_policy().interval, Duration::from_millis(250));
    }
}

use serde::{Deserialize, Serialize};

/// Which public resolver preset the live adapter talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Upstream {
    #[default]
    Google,
    Cloudflare,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default)]
    pub upstream: Upstream,

    /// Per-query timeout in seconds, forwarded to the provider.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            upstream: Upstream::default(),
            query_timeout: default_query_timeout(),
            attempts: default_attempts(),
        }
    }
}

fn default_query_timeout() -> u64 {
    5
}

fn default_attempts() -> usize {
    2
}

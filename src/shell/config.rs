// Server settings read from the environment (a `.env` file is loaded first by the binary).
//
// EMPLOYEES_HOST  bind address, default 0.0.0.0
// EMPLOYEES_PORT  bind port, default 5160
// EMPLOYEES_SEED  start with the sample records, default true

use anyhow::{Context, bail};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5160;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup("EMPLOYEES_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("EMPLOYEES_PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("EMPLOYEES_PORT is not a valid port: {port:?}"))?;
        }
        if let Some(seed) = lookup("EMPLOYEES_SEED") {
            config.seed = parse_flag(&seed).context("EMPLOYEES_SEED")?;
        }
        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}

use serde::Deserialize;

/// Attribution string stamped on every response envelope.
pub const SOURCE_BY: &str = "@OsintUchihaProBot";

pub const DEFAULT_API_KEY: &str = "demo123";
pub const DEFAULT_UPSTREAM_BASE_URL: &str =
    "https://vehicle-api-isuzu3-8895-nexusxnikhils-projects.vercel.app";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub upstream_base_url: String,
    pub api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the environment (and `.env` if present).
    ///
    /// Every variable is optional; an empty environment yields [`Config::default`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|name| std::env::var(name).ok())?;

        // Never log the API key
        tracing::debug!("Upstream Base URL: {}", config.upstream_base_url);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    /// Builds and validates a configuration from a variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            upstream_base_url: lookup("UPSTREAM_BASE_URL")
                .filter(|s| !s.trim().is_empty())
                .map_or_else(
                    || Ok(DEFAULT_UPSTREAM_BASE_URL.to_string()),
                    |url| {
                        if !url.starts_with("http://") && !url.starts_with("https://") {
                            anyhow::bail!("UPSTREAM_BASE_URL must start with http:// or https://");
                        }
                        Ok(url.trim_end_matches('/').to_string())
                    },
                )?,
            api_key: match lookup("UPSTREAM_API_KEY") {
                Some(key) if key.trim().is_empty() => {
                    anyhow::bail!("UPSTREAM_API_KEY cannot be empty")
                }
                Some(key) => key,
                None => DEFAULT_API_KEY.to_string(),
            },
        })
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Connection parameters for the hosted data store. Both are required at
/// startup; the application refuses to run without them.
#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env_string("SUPABASE_URL"), env_string("SUPABASE_ANON_KEY"))
    }

    fn from_values(
        supabase_url: Option<String>,
        supabase_anon_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let supabase_url = supabase_url.ok_or(ConfigError::MissingVar("SUPABASE_URL"))?;
        let supabase_anon_key =
            supabase_anon_key.ok_or(ConfigError::MissingVar("SUPABASE_ANON_KEY"))?;
        Ok(Self {
            supabase_url,
            supabase_anon_key,
        })
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

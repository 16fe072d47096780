use crate::error::CommandError;

/// Default pool size. Commands run sequentially and need few connections.
const DEFAULT_MAX_CONNECTIONS: u32 = 2;

/// Command configuration loaded from environment variables.
///
/// | Env Var                    | Default    |
/// |----------------------------|------------|
/// | `DATABASE_URL`             | (required) |
/// | `DATABASE_MAX_CONNECTIONS` | `2`        |
#[derive(Debug, Clone)]
pub struct ManageConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl ManageConfig {
    /// Load configuration from the process environment. A `--database-url`
    /// flag, when given, wins over `DATABASE_URL`.
    pub fn from_env(database_url: Option<&str>) -> Result<Self, CommandError> {
        Self::from_lookup(database_url, |key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(database_url: Option<&str>, lookup: F) -> Result<Self, CommandError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = database_url
            .map(str::to_string)
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| CommandError::Config("DATABASE_URL must be set".into()))?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                CommandError::Config(format!(
                    "DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                ))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

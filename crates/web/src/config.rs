use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Server configuration, read from the environment (a `.env` file is loaded
/// first). `DATABASE_URL` is a SQLite URL such as `sqlite://festival.db`;
/// `API_KEYS` is a comma-separated list of accepted admin keys and may be
/// empty, which locks out every admin route.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match var("PORT") {
            Some(value) => value.parse().context("PORT must be a number")?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: var("API_KEYS").unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_host_and_port_default_when_unset() {
        let config =
            Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite://festival.db")])).unwrap();

        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.api_keys, "");
    }

    #[test]
    fn test_explicit_values_are_used() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("API_KEYS", "alpha,beta"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.api_keys, "alpha,beta");
    }

    #[test]
    fn test_unparseable_port_is_an_error() {
        let result = Config::from_lookup(lookup(&[
            ("PORT", "not-a-port"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]));

        assert!(result.unwrap_err().to_string().contains("PORT"));
    }

    #[test]
    fn test_missing_database_url_is_an_error() {
        let result = Config::from_lookup(lookup(&[]));

        assert!(result.unwrap_err().to_string().contains("DATABASE_URL"));
    }
}

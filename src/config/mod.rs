use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "savora.toml";

const ENV_NAME_TABLE_URL: &str = "SAVORA_TABLE_URL";
const ENV_NAME_TABLE_KEY: &str = "SAVORA_TABLE_KEY";

#[derive(Debug)]
pub struct Config {
    pub table: Table,
}

/// Connection to the remote restaurant table.
#[derive(Debug)]
pub struct Table {
    /// Base URL of the PostgREST endpoint.
    pub url: String,
    pub api_key: String,
    /// Name of the table.
    pub name: String,
    pub timeout: Duration,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        Self::try_from_raw_with_env(raw_config, |name| env::var(name).ok())
    }

    fn try_from_raw_with_env<F>(raw_config: raw::Config, env_var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut raw_table = raw_config.table.unwrap_or_default();
        if let Some(url) = env_var(ENV_NAME_TABLE_URL) {
            raw_table.url = Some(url);
        }
        if let Some(api_key) = env_var(ENV_NAME_TABLE_KEY) {
            raw_table.api_key = Some(api_key);
        }
        let table = Table::try_from(raw_table.or_default())?;
        Ok(Self { table })
    }
}

impl TryFrom<raw::Table> for Table {
    type Error = anyhow::Error;
    fn try_from(from: raw::Table) -> Result<Self> {
        let raw::Table {
            url,
            api_key,
            name,
            timeout,
        } = from;

        let url = url
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| anyhow!("Missing table URL"))?;
        let name = name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| anyhow!("Missing table name"))?;
        let timeout = timeout
            .filter(|t| !t.is_zero())
            .ok_or_else(|| anyhow!("Invalid table request timeout"))?;
        let api_key = api_key.unwrap_or_default();
        if api_key.is_empty() {
            log::warn!("No table API key configured (set {ENV_NAME_TABLE_KEY})");
        }

        Ok(Self {
            url,
            api_key,
            name,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = Some(Path::new("does-not-exist.toml"));
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(cfg.table.name, "restaurants");
        assert_eq!(cfg.table.timeout, Duration::from_secs(10));
    }

    #[test]
    fn env_overrides_file() {
        let raw: raw::Config = toml::from_str(
            r#"
            [table]
            url = "https://from-file.supabase.co"
            api-key = "file-key"
            "#,
        )
        .unwrap();
        let cfg = Config::try_from_raw_with_env(raw, |name| match name {
            ENV_NAME_TABLE_URL => Some("https://from-env.supabase.co".to_owned()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.table.url, "https://from-env.supabase.co");
        assert_eq!(cfg.table.api_key, "file-key");
    }

    #[test]
    fn reject_empty_url() {
        let raw: raw::Config = toml::from_str("[table]\nurl = \"  \"").unwrap();
        assert!(Config::try_from_raw_with_env(raw, no_env).is_err());
    }

    #[test]
    fn reject_zero_timeout() {
        let raw: raw::Config = toml::from_str("[table]\ntimeout = \"0s\"").unwrap();
        assert!(Config::try_from_raw_with_env(raw, no_env).is_err());
    }

    #[test]
    fn missing_table_section_uses_defaults() {
        let raw: raw::Config = toml::from_str("").unwrap();
        let cfg = Config::try_from_raw_with_env(raw, no_env).unwrap();
        assert_eq!(cfg.table.url, "http://localhost:54321");
        assert_eq!(cfg.table.api_key, "");
    }
}

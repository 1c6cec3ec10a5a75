use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("savora.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub table: Option<Table>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Table {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

impl Table {
    /// Fill the missing values from the default configuration.
    pub fn or_default(self) -> Self {
        let Self {
            url,
            api_key,
            name,
            timeout,
        } = Config::default().table.unwrap_or_default();
        Self {
            url: self.url.or(url),
            api_key: self.api_key.or(api_key),
            name: self.name.or(name),
            timeout: self.timeout.or(timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_file() {
        let Table {
            url,
            api_key,
            name,
            timeout,
        } = Config::default().table.unwrap();
        assert_eq!(url.as_deref(), Some("http://localhost:54321"));
        assert_eq!(api_key, None);
        assert_eq!(name.as_deref(), Some("restaurants"));
        assert_eq!(timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn fill_missing_table_values() {
        let cfg: Config = toml::from_str(
            r#"
            [table]
            url = "https://abc.supabase.co"
            timeout = "2s"
            "#,
        )
        .unwrap();
        let table = cfg.table.unwrap().or_default();
        assert_eq!(table.url.as_deref(), Some("https://abc.supabase.co"));
        assert_eq!(table.name.as_deref(), Some("restaurants"));
        assert_eq!(table.timeout, Some(Duration::from_secs(2)));
    }
}

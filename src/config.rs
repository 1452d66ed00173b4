use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`; `DATABASE_URL` wins over the `DB_*` parts.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => {
                let db_port = parse_port(&lookup, "DB_PORT", 5432)?;
                DatabaseSettings {
                    host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                    port: db_port,
                    name: lookup("DB_NAME").unwrap_or_else(|| "shop".to_string()),
                    user: lookup("DB_USER").unwrap_or_else(|| "postgres".to_string()),
                    password: lookup("DB_PASSWORD").unwrap_or_default(),
                }
                .url()
            }
        };
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_port(&lookup, "APP_PORT", 8080)?;
        Ok(Self {
            port,
            database_url,
            host,
        })
    }
}

fn parse_port<F>(lookup: &F, key: &str, default: u16) -> anyhow::Result<u16>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|err| anyhow::anyhow!("invalid {key} {raw:?}: {err}")),
        None => Ok(default),
    }
}

struct DatabaseSettings {
    host: String,
    port: u16,
    name: String,
    user: String,
    password: String,
}

impl DatabaseSettings {
    fn url(&self) -> String {
        if self.password.is_empty() {
            format!(
                "postgres://{}@{}:{}/{}",
                self.user, self.host, self.port, self.name
            )
        } else {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::AppConfig;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_shop_database() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, "postgres://postgres@localhost:5432/shop");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn database_url_overrides_parts() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://app:secret@db:6543/store"),
            ("DB_HOST", "ignored"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://app:secret@db:6543/store");
    }

    #[test]
    fn parts_compose_url_with_password() {
        let config = config_from(&[
            ("DB_HOST", "pg"),
            ("DB_PORT", "5433"),
            ("DB_NAME", "shop_test"),
            ("DB_USER", "shop"),
            ("DB_PASSWORD", "12345"),
            ("APP_PORT", "9000"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://shop:12345@pg:5433/shop_test");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn invalid_db_port_is_rejected() {
        assert!(config_from(&[("DB_PORT", "not-a-port")]).is_err());
    }

    #[test]
    fn invalid_app_port_is_rejected() {
        let err = config_from(&[("APP_PORT", "80808")]).unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));
    }
}

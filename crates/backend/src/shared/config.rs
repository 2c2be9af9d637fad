use contracts::domain::a001_employee::CreateEmployeeRequest;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub roster: RosterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Каталог для backend.log
    #[serde(default = "default_log_dir")]
    pub dir: String,
    /// Фильтр tracing, если не задан RUST_LOG
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            filter: default_log_filter(),
        }
    }
}

fn default_log_dir() -> String {
    "target/logs".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl LoggingConfig {
    /// RUST_LOG важнее значения из конфига
    pub fn effective_filter(&self, rust_log: Option<String>) -> String {
        rust_log
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.filter.clone())
    }
}

/// Откуда взята конфигурация
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Embedded => write!(f, "default embedded configuration"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RosterConfig {
    /// Загружать ли демонстрационных сотрудников при старте
    #[serde(default = "default_seed_sample")]
    pub seed_sample: bool,
    /// Дополнительные сотрудники, добавляются через ту же проверку, что и форма
    #[serde(default)]
    pub extra: Vec<CreateEmployeeRequest>,
}

fn default_seed_sample() -> bool {
    true
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[roster]
seed_sample = true

[logging]
dir = "target/logs"
filter = "info"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Called before logging is initialised, so the source is returned for the caller to log.
pub fn load_config() -> anyhow::Result<(Config, ConfigSource)> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                return Ok((parse_config(&contents)?, ConfigSource::File(config_path)));
            }
        }
    }

    Ok((parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert!(config.roster.seed_sample);
        assert!(config.roster.extra.is_empty());
        assert_eq!(config.logging.dir, "target/logs");
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_logging_section_is_optional() {
        let config = parse_config("[roster]\n").unwrap();
        assert_eq!(config.logging.dir, "target/logs");
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_logging_section() {
        let config = parse_config(
            r#"
            [roster]

            [logging]
            dir = "/var/log/sales"
            filter = "backend=debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.dir, "/var/log/sales");
        assert_eq!(config.logging.filter, "backend=debug");
    }

    #[test]
    fn test_effective_filter() {
        let logging = LoggingConfig {
            dir: default_log_dir(),
            filter: "warn".into(),
        };
        assert_eq!(logging.effective_filter(None), "warn");
        assert_eq!(logging.effective_filter(Some("  ".into())), "warn");
        assert_eq!(logging.effective_filter(Some("debug".into())), "debug");
    }

    #[test]
    fn test_extra_employees() {
        let config = parse_config(
            r#"
            [roster]
            seed_sample = false

            [[roster.extra]]
            name = "Кузнецова Мария"
            plan = "50000"
            fact = "41000"
            "#,
        )
        .unwrap();
        assert!(!config.roster.seed_sample);
        assert_eq!(config.roster.extra.len(), 1);
        assert_eq!(config.roster.extra[0].name, "Кузнецова Мария");
        assert_eq!(config.roster.extra[0].plan, "50000");
    }

    #[test]
    fn test_missing_roster_section_fails() {
        assert!(parse_config("").is_err());
    }
}

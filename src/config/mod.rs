use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

// Главная структура конфигурации
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("unknown log format '{}'", other),
        }
    }
}

// Настройки базы данных
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Full connection string. When present it takes precedence over the discrete fields.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub db: String,
    pub pool_size: u32,
}

impl Config {
    /// Reads the configuration from the process environment.
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            app: AppConfig {
                host: var_or("HOST", "0.0.0.0"),
                port: parse_var("PORT", 8080)?,
                rust_log: var_or("RUST_LOG", "movie_booking=debug,tower_http=debug"),
                log_format: parse_var("LOG_FORMAT", LogFormat::Pretty)?,
            },
            database: DatabaseConfig {
                url: optional_var("DATABASE_URL"),
                host: var_or("POSTGRES_HOST", "localhost"),
                port: parse_var("POSTGRES_PORT", 5432)?,
                user: var_or("POSTGRES_USER", "postgres"),
                password: var_or("POSTGRES_PASSWORD", ""),
                db: var_or("POSTGRES_DB", "postgres"),
                pool_size: parse_var("DB_POOL_SIZE", 20)?,
            },
        })
    }
}

// Пустое значение считаем отсутствующим
fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("{} has an invalid value '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

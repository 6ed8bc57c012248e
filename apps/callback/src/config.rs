//! Environment configuration for the callback service.

use anyhow::{Context, Result};

pub const DEFAULT_TALK_API_BASE: &str = "https://api.a3rt.recruit.co.jp/talk/v1";
pub const DEFAULT_LINE_API_BASE: &str = "https://api.line.me";

/// Read once at startup; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub channel_access_token: String,
    pub channel_secret: String,
    pub talk_api_key: String,
    pub talk_api_base: String,
    pub line_api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let channel_access_token = std::env::var("LINE_CHANNEL_ACCESS_TOKEN")
            .context("LINE_CHANNEL_ACCESS_TOKEN required")?;
        let channel_secret =
            std::env::var("LINE_CHANNEL_SECRET").context("LINE_CHANNEL_SECRET required")?;
        let talk_api_key = std::env::var("TALK_API_KEY").context("TALK_API_KEY required")?;
        let talk_api_base =
            std::env::var("TALK_API_BASE").unwrap_or_else(|_| DEFAULT_TALK_API_BASE.into());
        let line_api_base =
            std::env::var("LINE_API_BASE").unwrap_or_else(|_| DEFAULT_LINE_API_BASE.into());
        let bind = std::env::var("BIND").unwrap_or_else(|_| "0.0.0.0:8080".into());

        Ok(Self {
            bind,
            channel_access_token,
            channel_secret,
            talk_api_key,
            talk_api_base,
            line_api_base,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn set_required() {
        unsafe {
            std::env::set_var("LINE_CHANNEL_ACCESS_TOKEN", "token");
            std::env::set_var("LINE_CHANNEL_SECRET", "secret");
            std::env::set_var("TALK_API_KEY", "talk-key");
        }
    }

    #[test]
    fn defaults_are_applied() {
        let _guard = env_lock().lock().unwrap();
        set_required();
        unsafe {
            std::env::remove_var("TALK_API_BASE");
            std::env::remove_var("LINE_API_BASE");
            std::env::remove_var("BIND");
        }

        let config = Config::from_env().expect("load config");
        assert_eq!(config.channel_access_token, "token");
        assert_eq!(config.channel_secret, "secret");
        assert_eq!(config.talk_api_key, "talk-key");
        assert_eq!(config.talk_api_base, DEFAULT_TALK_API_BASE);
        assert_eq!(config.line_api_base, DEFAULT_LINE_API_BASE);
        assert_eq!(config.bind, "0.0.0.0:8080");
    }

    #[test]
    fn overrides_take_precedence() {
        let _guard = env_lock().lock().unwrap();
        set_required();
        unsafe {
            std::env::set_var("TALK_API_BASE", "http://localhost:9092");
            std::env::set_var("LINE_API_BASE", "http://localhost:9091");
            std::env::set_var("BIND", "127.0.0.1:3000");
        }

        let config = Config::from_env().expect("load config");
        assert_eq!(config.talk_api_base, "http://localhost:9092");
        assert_eq!(config.line_api_base, "http://localhost:9091");
        assert_eq!(config.bind, "127.0.0.1:3000");

        unsafe {
            std::env::remove_var("TALK_API_BASE");
            std::env::remove_var("LINE_API_BASE");
            std::env::remove_var("BIND");
        }
    }

    #[test]
    fn missing_secret_is_an_error() {
        let _guard = env_lock().lock().unwrap();
        set_required();
        unsafe {
            std::env::remove_var("LINE_CHANNEL_SECRET");
        }

        let err = Config::from_env().expect_err("secret is required");
        assert!(err.to_string().contains("LINE_CHANNEL_SECRET"));
    }
}

use anyhow::{anyhow, Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Connection details for the chat-completion provider.
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_backoff: Duration,
}

/// Process-wide settings, read once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Settings {
    pub completion: CompletionSettings,
    pub bind_address: String,
    pub port: u16,
    pub templates_glob: String,
    pub static_dir: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("COMPLETION_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow!("COMPLETION_API_KEY must be set"))?;

        let completion = CompletionSettings {
            api_url: lookup("COMPLETION_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_key,
            model: lookup("COMPLETION_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(parse_or(&lookup, "COMPLETION_TIMEOUT_SECS", 60)?),
            max_retries: parse_or(&lookup, "COMPLETION_MAX_RETRIES", 1)?,
            retry_backoff: Duration::from_millis(parse_or(&lookup, "COMPLETION_RETRY_BACKOFF_MS", 500)?),
        };

        Ok(Self {
            completion,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8000)?,
            templates_glob: lookup("TEMPLATES_GLOB").unwrap_or_else(|| "templates/**/*".to_string()),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "./static".to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = Settings::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("COMPLETION_API_KEY"));
    }

    #[test]
    fn blank_api_key_is_an_error() {
        assert!(Settings::from_lookup(lookup_from(&[("COMPLETION_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let settings = Settings::from_lookup(lookup_from(&[("COMPLETION_API_KEY", "secret")])).unwrap();
        assert_eq!(settings.completion.api_key, "secret");
        assert_eq!(settings.completion.api_url, DEFAULT_API_URL);
        assert_eq!(settings.completion.model, DEFAULT_MODEL);
        assert_eq!(settings.completion.timeout, Duration::from_secs(60));
        assert_eq!(settings.completion.max_retries, 1);
        assert_eq!(settings.completion.retry_backoff, Duration::from_millis(500));
        assert_eq!(settings.bind_address, "0.0.0.0");
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.templates_glob, "templates/**/*");
        assert_eq!(settings.static_dir, "./static");
    }

    #[test]
    fn overrides_are_read() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("COMPLETION_API_KEY", "secret"),
            ("COMPLETION_API_URL", "http://localhost:9999/v1/chat/completions"),
            ("COMPLETION_MODEL", "llama3-8b-8192"),
            ("COMPLETION_TIMEOUT_SECS", "5"),
            ("COMPLETION_MAX_RETRIES", "0"),
            ("PORT", "3000"),
        ]))
        .unwrap();
        assert_eq!(settings.completion.api_url, "http://localhost:9999/v1/chat/completions");
        assert_eq!(settings.completion.model, "llama3-8b-8192");
        assert_eq!(settings.completion.timeout, Duration::from_secs(5));
        assert_eq!(settings.completion.max_retries, 0);
        assert_eq!(settings.port, 3000);
    }

    #[test]
    fn invalid_number_names_the_variable() {
        let err = Settings::from_lookup(lookup_from(&[
            ("COMPLETION_API_KEY", "secret"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}

use std::{net::SocketAddr, str::FromStr, time::Duration};

use thiserror::Error;

use crate::{classifier::ClassifierConfig, generator::GeneratorConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "No API key set for the completion service. Set the OPENAI_API_KEY environment variable."
    )]
    MissingApiKey,

    #[error("Invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
}

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Process-wide configuration, read once at startup.
///
/// A missing credential is fatal: the process refuses to start without it.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_key: String,
    pub api_base: String,
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
    pub classifier: ClassifierConfig,
    pub generator: GeneratorConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let api_base = lookup("OPENAI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_owned());

        let bind_addr = parse_or(
            &lookup,
            "TESTGEN_ADDR",
            SocketAddr::from(([127, 0, 0, 1], 8080)),
        )?;
        let request_timeout =
            Duration::from_secs(parse_or(&lookup, "TESTGEN_TIMEOUT_SECS", 120u64)?);

        let mut classifier = ClassifierConfig::default();
        if let Some(model) = lookup("TESTGEN_CLASSIFIER_MODEL") {
            classifier.model = model;
        }

        let mut generator = GeneratorConfig::default();
        if let Some(model) = lookup("TESTGEN_GENERATOR_MODEL") {
            generator.model = model;
        }
        generator.temperature = parse_or(&lookup, "TESTGEN_TEMPERATURE", generator.temperature)?;
        generator.max_tokens = parse_or(&lookup, "TESTGEN_MAX_TOKENS", generator.max_tokens)?;
        generator.include_examples = parse_or(
            &lookup,
            "TESTGEN_INCLUDE_EXAMPLES",
            generator.include_examples,
        )?;

        Ok(Self {
            api_key,
            api_base,
            bind_addr,
            request_timeout,
            classifier,
            generator,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match lookup(var) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |var| map.get(var).map(|value| (*value).to_owned())
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = ServiceConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn blank_api_key_is_fatal() {
        let err = ServiceConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn defaults_apply() {
        let config = ServiceConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.request_timeout, Duration::from_secs(120));
        assert_eq!(config.classifier.model, "gpt-4o");
        assert!(config.generator.include_examples);
    }

    #[test]
    fn overrides_apply() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_API_BASE", "http://localhost:11434/v1"),
            ("TESTGEN_ADDR", "0.0.0.0:9090"),
            ("TESTGEN_TIMEOUT_SECS", "30"),
            ("TESTGEN_GENERATOR_MODEL", "gpt-4"),
            ("TESTGEN_TEMPERATURE", "0.7"),
            ("TESTGEN_MAX_TOKENS", "500"),
            ("TESTGEN_INCLUDE_EXAMPLES", "false"),
        ]))
        .unwrap();
        assert_eq!(config.api_base, "http://localhost:11434/v1");
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 9090)));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.generator.model, "gpt-4");
        assert_eq!(config.generator.max_tokens, 500);
        assert!(!config.generator.include_examples);
    }

    #[test]
    fn unparseable_value_is_rejected() {
        let err = ServiceConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("TESTGEN_MAX_TOKENS", "lots"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                var: "TESTGEN_MAX_TOKENS",
                ..
            }
        ));
    }
}

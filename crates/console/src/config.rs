//! Console configuration from environment variables.

use stockroom_observability::LogFormat;

pub const DEMO_DATA_VAR: &str = "STOCKROOM_DEMO_DATA";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const PROMPT_VAR: &str = "STOCKROOM_PROMPT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Seed the registry with sample parts and products.
    pub demo_data: bool,
    pub log_format: LogFormat,
    pub prompt: String,
    /// Problems found while reading the environment. Logging is not set up
    /// yet at that point, so the caller reports these after `init`.
    pub warnings: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            demo_data: true,
            log_format: LogFormat::default(),
            prompt: "stockroom> ".to_string(),
            warnings: Vec::new(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unusable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(DEMO_DATA_VAR) {
            match parse_bool(&raw) {
                Some(value) => config.demo_data = value,
                None => config.warnings.push(format!(
                    "{DEMO_DATA_VAR}={raw:?} is not a boolean; using {}",
                    config.demo_data
                )),
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(err) => config
                    .warnings
                    .push(format!("{LOG_FORMAT_VAR}: {err}; using pretty")),
            }
        }

        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

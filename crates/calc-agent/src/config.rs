use std::env;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};
use std::str::FromStr;
use std::time::Duration;

use calc_agent_schema::Issue;

const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 300;
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_MODEL: &str = "openai/gpt-4o";
const FALLBACK_MODEL: &str = "openai/gpt-4o-mini";

/// Process configuration, read from the environment once at startup.
///
/// A missing or out-of-range value fails startup immediately; there is
/// no ambient configuration state anywhere else in the program, the
/// loaded struct is passed along explicitly.
#[derive(Clone)]
pub struct Config {
    /// The authentication token sent to the inference endpoint.
    pub auth_token: String,
    /// The deployment environment tag.
    pub environment: AppEnvironment,
    /// Default log verbosity, used when `RUST_LOG` is not set.
    pub log_level: LogLevel,
    /// Sampling temperature, within `0..=2`.
    pub temperature: f32,
    /// Reply token budget, within `1..=8000`.
    pub max_tokens: u32,
    /// Per-round-trip deadline, at least one second.
    pub timeout: Duration,
    /// Identifier of the model to use.
    pub default_model: String,
    /// Identifier of the model to suggest when the default is
    /// unavailable.
    pub fallback_model: String,
}

impl Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("auth_token", &"<deducted>")
            .field("environment", &self.environment)
            .field("log_level", &self.log_level)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .field("default_model", &self.default_model)
            .field("fallback_model", &self.fallback_model)
            .finish()
    }
}

/// The deployment environment tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AppEnvironment {
    /// Local development.
    #[default]
    Development,
    /// Production deployment.
    Production,
    /// Automated test runs.
    Test,
}

impl FromStr for AppEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            _ => Err("must be one of: development, production, test".into()),
        }
    }
}

/// Log verbosity level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Everything, including per-request traces.
    Debug,
    /// Normal operational messages.
    #[default]
    Info,
    /// Suspicious but recoverable conditions.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// Returns the level as an env-filter directive.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err("must be one of: debug, info, warn, error".into()),
        }
    }
}

/// A fatal startup configuration problem.
#[derive(Clone, Debug)]
pub struct ConfigError {
    issues: Vec<Issue>,
}

impl ConfigError {
    /// Returns the per-variable issues.
    #[inline]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration")?;
        let mut sep = ": ";
        for issue in &self.issues {
            write!(f, "{sep}{}: {}", issue.path, issue.reason)?;
            sep = "; ";
        }
        Ok(())
    }
}

impl StdError for ConfigError {}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Every violation found is reported at once, so a misconfigured
    /// deployment doesn't have to be fixed one variable at a time.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut issues = vec![];

        let auth_token = match env::var("GITHUB_TOKEN") {
            Ok(token) if !token.trim().is_empty() => token,
            _ => {
                issues.push(Issue::new("GITHUB_TOKEN", "is required"));
                String::new()
            }
        };

        let environment =
            parse_var("APP_ENV", AppEnvironment::default(), &mut issues);
        let log_level =
            parse_var("LOG_LEVEL", LogLevel::default(), &mut issues);

        let temperature =
            parse_var("AI_TEMPERATURE", DEFAULT_TEMPERATURE, &mut issues);
        if !(0.0..=2.0).contains(&temperature) {
            issues.push(Issue::new(
                "AI_TEMPERATURE",
                "must be between 0 and 2",
            ));
        }

        let max_tokens =
            parse_var("AI_MAX_TOKENS", DEFAULT_MAX_TOKENS, &mut issues);
        if !(1..=8000).contains(&max_tokens) {
            issues.push(Issue::new(
                "AI_MAX_TOKENS",
                "must be between 1 and 8000",
            ));
        }

        let timeout_ms =
            parse_var("AI_TIMEOUT_MS", DEFAULT_TIMEOUT_MS, &mut issues);
        if timeout_ms < 1000 {
            issues.push(Issue::new(
                "AI_TIMEOUT_MS",
                "must be at least 1000",
            ));
        }

        let default_model = env::var("DEFAULT_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_owned());
        let fallback_model = env::var("FALLBACK_MODEL")
            .unwrap_or_else(|_| FALLBACK_MODEL.to_owned());

        if !issues.is_empty() {
            return Err(ConfigError { issues });
        }
        Ok(Self {
            auth_token,
            environment,
            log_level,
            temperature,
            max_tokens,
            timeout: Duration::from_millis(timeout_ms),
            default_model,
            fallback_model,
        })
    }
}

fn parse_var<T>(name: &str, default: T, issues: &mut Vec<Issue>) -> T
where
    T: FromStr,
    T::Err: Display,
{
    let Ok(raw) = env::var(name) else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(err) => {
            issues.push(Issue::new(name, format!("{err}")));
            default
        }
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::advice::{default_jokes, default_rules, SubstitutionRule, DEFAULT_ADVICE_URL};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

/// Which provider to fetch from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Http,
    File,
}

/// What the widget shows before the first trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartupPolicy {
    /// Show the instruction and wait for a trigger.
    #[default]
    Idle,
    /// Fetch once immediately, without a joke draw.
    Eager,
}

/// Advice provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    /// Endpoint for `kind = "http"`.
    #[serde(default = "default_url")]
    pub url: String,
    /// JSON file for `kind = "file"`.
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Whole-request timeout in seconds. Unset waits indefinitely.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

/// Controller behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub startup: StartupPolicy,
    /// Share of triggers answered with a joke (default: 0.1).
    #[serde(default = "default_joke_probability")]
    pub joke_probability: f64,
    /// Appended to every shown advice or joke.
    #[serde(default = "default_attribution")]
    pub attribution: String,
    /// Wrap shown text in double quotes.
    #[serde(default = "default_quote_advice")]
    pub quote_advice: bool,
}

/// Static lists handed to the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_jokes")]
    pub jokes: Vec<String>,
    #[serde(default = "default_rules")]
    pub rules: Vec<SubstitutionRule>,
}

fn default_url() -> String {
    DEFAULT_ADVICE_URL.to_string()
}

fn default_path() -> PathBuf {
    PathBuf::from("advice.json")
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_joke_probability() -> f64 {
    crate::advice::DEFAULT_JOKE_PROBABILITY
}

fn default_attribution() -> String {
    " - The Big Cheese".to_string()
}

fn default_quote_advice() -> bool {
    true
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            url: default_url(),
            path: default_path(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            startup: StartupPolicy::default(),
            joke_probability: default_joke_probability(),
            attribution: default_attribution(),
            quote_advice: default_quote_advice(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            jokes: default_jokes(),
            rules: default_rules(),
        }
    }
}

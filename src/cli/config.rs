use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::gemini::client::{DEFAULT_MAX_RETRIES, GeminiClient, INITIAL_BACKOFF};
use crate::snippet::snippet_model::{Framework, SnippetAction};
use crate::testdata::generator::DataKind;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "qa-toolkit",
    version,
    about = "Command-line toolkit for QA engineers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Gemini API endpoint base URL
    #[arg(long, global = true)]
    pub gemini_endpoint: Option<String>,

    /// Gemini model name
    #[arg(long, global = true)]
    pub gemini_model: Option<String>,

    /// Gemini API key (falls back to the config file, then $GEMINI_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Path to config file (default: qa-toolkit.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate test cases for a feature description via the Gemini API
    Testcases {
        /// Feature description to generate test cases for
        #[arg(long)]
        feature: String,
    },

    /// Build CSS and XPath selectors, manually or AI-suggested
    Selector {
        /// Element description for AI-suggested selectors (uses the API)
        #[arg(long)]
        describe: Option<String>,

        /// Tag name (e.g., input, button, div)
        #[arg(long)]
        tag: Option<String>,

        /// Element id
        #[arg(long)]
        id: Option<String>,

        /// Space-separated class names (e.g., "btn btn-primary")
        #[arg(long)]
        classes: Option<String>,

        /// Attribute name (e.g., type, name, data-testid)
        #[arg(long)]
        attribute: Option<String>,

        /// Attribute value
        #[arg(long)]
        attr_value: Option<String>,
    },

    /// Generate an automation code snippet for a testing framework
    Snippet {
        /// CSS or XPath selector to act on
        #[arg(long)]
        selector: String,

        /// Action to perform on the element
        #[arg(long, value_enum, default_value = "click")]
        action: SnippetAction,

        /// Text to type, or attribute name, for actions that need it
        #[arg(long, default_value = "")]
        text: String,

        /// Target framework
        #[arg(long, value_enum, default_value = "selenium-python")]
        framework: Framework,
    },

    /// Apply a string transform to input text
    Transform {
        /// Transform id (e.g., base64-encode, snake-case, count-chars)
        #[arg(long)]
        op: String,

        /// Input text
        #[arg(long)]
        input: String,
    },

    /// Generate random test data
    Testdata {
        /// Kind of data to generate
        #[arg(long, value_enum)]
        kind: DataKind,

        /// Number of values to generate
        #[arg(long)]
        count: Option<usize>,

        /// Length for random strings
        #[arg(long)]
        length: Option<usize>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `qa-toolkit.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub testdata: TestdataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,

    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Optional ceiling on the doubling retry delay, in milliseconds.
    /// Unset means the delay grows unbounded.
    pub backoff_cap_ms: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            model: None,
            api_key: None,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_cap_ms: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestdataConfig {
    #[serde(default = "default_one")]
    pub count: usize,

    #[serde(default = "default_ten")]
    pub string_length: usize,
}

impl Default for TestdataConfig {
    fn default() -> Self {
        Self {
            count: 1,
            string_length: 10,
        }
    }
}

// Serde default helpers
fn default_retries() -> u32 { DEFAULT_MAX_RETRIES }
fn default_one() -> usize { 1 }
fn default_ten() -> usize { 10 }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("qa-toolkit.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Builders (merge CLI args with config file)
// ============================================================================

/// Build a GeminiClient from resolved CLI/config values.
pub fn build_gemini_client(
    endpoint: Option<&str>,
    model: Option<&str>,
    config: &GeminiConfig,
    verbose: u8,
) -> GeminiClient {
    let defaults = GeminiClient::default();
    let endpoint = endpoint
        .or(config.endpoint.as_deref())
        .unwrap_or(&defaults.endpoint);
    let model = model.or(config.model.as_deref()).unwrap_or(&defaults.model);

    let mut client = GeminiClient::new(endpoint, model)
        .with_max_retries(config.max_retries)
        .with_verbose(verbose);

    if let Some(cap_ms) = config.backoff_cap_ms {
        client = client.with_backoff(INITIAL_BACKOFF, Some(Duration::from_millis(cap_ms)));
    }
    client
}

/// Resolve the API key: CLI > config > env.
pub fn resolve_api_key(cli_key: Option<&str>, config: &GeminiConfig) -> Option<String> {
    cli_key
        .map(str::to_string)
        .or_else(|| config.api_key.clone())
        .or_else(|| std::env::var("GEMINI_API_KEY").ok())
}

use clap::Parser;
use qa_toolkit::cli::config::{
    AppConfig, Cli, Commands, GeminiConfig, build_gemini_client, load_config, resolve_api_key,
};
use qa_toolkit::snippet::snippet_model::{Framework, SnippetAction};
use qa_toolkit::testdata::generator::DataKind;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_testcases() {
    let cli = Cli::parse_from([
        "qa-toolkit",
        "testcases",
        "--feature",
        "Login form with remember-me",
    ]);
    match cli.command {
        Commands::Testcases { feature } => {
            assert_eq!(feature, "Login form with remember-me");
        }
        _ => panic!("Expected Testcases command"),
    }
}

#[test]
fn cli_parse_selector_manual_fields() {
    let cli = Cli::parse_from([
        "qa-toolkit",
        "selector",
        "--tag",
        "button",
        "--classes",
        "btn btn-primary",
        "--attribute",
        "type",
        "--attr-value",
        "submit",
    ]);
    match cli.command {
        Commands::Selector {
            describe,
            tag,
            id,
            classes,
            attribute,
            attr_value,
        } => {
            assert!(describe.is_none());
            assert_eq!(tag.as_deref(), Some("button"));
            assert!(id.is_none());
            assert_eq!(classes.as_deref(), Some("btn btn-primary"));
            assert_eq!(attribute.as_deref(), Some("type"));
            assert_eq!(attr_value.as_deref(), Some("submit"));
        }
        _ => panic!("Expected Selector command"),
    }
}

#[test]
fn cli_parse_selector_describe_mode() {
    let cli = Cli::parse_from([
        "qa-toolkit",
        "selector",
        "--describe",
        "the blue submit button",
        "--api-key",
        "k-123",
    ]);
    assert_eq!(cli.api_key.as_deref(), Some("k-123"));
    match cli.command {
        Commands::Selector { describe, .. } => {
            assert_eq!(describe.as_deref(), Some("the blue submit button"));
        }
        _ => panic!("Expected Selector command"),
    }
}

#[test]
fn cli_parse_snippet_defaults() {
    let cli = Cli::parse_from(["qa-toolkit", "snippet", "--selector", "#login"]);
    match cli.command {
        Commands::Snippet {
            selector,
            action,
            text,
            framework,
        } => {
            assert_eq!(selector, "#login");
            assert_eq!(action, SnippetAction::Click);
            assert_eq!(text, "");
            assert_eq!(framework, Framework::SeleniumPython);
        }
        _ => panic!("Expected Snippet command"),
    }
}

#[test]
fn cli_parse_snippet_all_args() {
    let cli = Cli::parse_from([
        "qa-toolkit",
        "snippet",
        "--selector",
        "//input[@name='q']",
        "--action",
        "get-attribute",
        "--text",
        "value",
        "--framework",
        "playwright-js",
    ]);
    match cli.command {
        Commands::Snippet {
            selector,
            action,
            text,
            framework,
        } => {
            assert_eq!(selector, "//input[@name='q']");
            assert_eq!(action, SnippetAction::GetAttribute);
            assert_eq!(text, "value");
            assert_eq!(framework, Framework::PlaywrightJs);
        }
        _ => panic!("Expected Snippet command"),
    }
}

#[test]
fn cli_parse_snippet_accepts_camel_case_action_alias() {
    let cli = Cli::parse_from([
        "qa-toolkit",
        "snippet",
        "--selector",
        "#x",
        "--action",
        "getText",
    ]);
    match cli.command {
        Commands::Snippet { action, .. } => assert_eq!(action, SnippetAction::GetText),
        _ => panic!("Expected Snippet command"),
    }
}

#[test]
fn cli_parse_transform() {
    let cli = Cli::parse_from([
        "qa-toolkit",
        "transform",
        "--op",
        "snake-case",
        "--input",
        "Hello World",
    ]);
    match cli.command {
        Commands::Transform { op, input } => {
            assert_eq!(op, "snake-case");
            assert_eq!(input, "Hello World");
        }
        _ => panic!("Expected Transform command"),
    }
}

#[test]
fn cli_parse_testdata_defaults_to_config_resolution() {
    let cli = Cli::parse_from(["qa-toolkit", "testdata", "--kind", "email"]);
    match cli.command {
        Commands::Testdata { kind, count, length } => {
            assert_eq!(kind, DataKind::Email);
            assert!(count.is_none());
            assert!(length.is_none());
        }
        _ => panic!("Expected Testdata command"),
    }
}

#[test]
fn cli_global_gemini_overrides_parse() {
    let cli = Cli::parse_from([
        "qa-toolkit",
        "testcases",
        "--feature",
        "x",
        "--gemini-endpoint",
        "http://localhost:9999",
        "--gemini-model",
        "test-model",
        "-vv",
    ]);
    assert_eq!(cli.gemini_endpoint.as_deref(), Some("http://localhost:9999"));
    assert_eq!(cli.gemini_model.as_deref(), Some("test-model"));
    assert_eq!(cli.verbose, 2);
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn load_config_defaults_when_file_missing() {
    let config = load_config(Some("does-not-exist.yaml"));
    assert!(config.gemini.endpoint.is_none());
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.max_retries, 3);
    assert!(config.gemini.backoff_cap_ms.is_none());
    assert_eq!(config.testdata.count, 1);
    assert_eq!(config.testdata.string_length, 10);
}

#[test]
fn config_yaml_roundtrip_with_partial_sections() {
    let yaml = "gemini:\n  api_key: sk-test\n  max_retries: 5\n";
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.gemini.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.gemini.max_retries, 5);
    // Untouched sections keep their defaults
    assert_eq!(config.testdata.count, 1);
    assert_eq!(config.testdata.string_length, 10);
}

#[test]
fn build_gemini_client_prefers_cli_values() {
    let config = GeminiConfig {
        endpoint: Some("http://config-endpoint".to_string()),
        model: Some("config-model".to_string()),
        ..GeminiConfig::default()
    };
    let client = build_gemini_client(Some("http://cli-endpoint"), None, &config, 0);
    assert_eq!(client.endpoint, "http://cli-endpoint");
    assert_eq!(client.model, "config-model");
}

#[test]
fn build_gemini_client_falls_back_to_defaults() {
    let client = build_gemini_client(None, None, &GeminiConfig::default(), 0);
    assert_eq!(client.endpoint, "https://generativelanguage.googleapis.com");
    assert_eq!(client.model, "gemini-2.5-flash-preview-09-2025");
    assert_eq!(client.max_retries, 3);
}

#[test]
fn resolve_api_key_prefers_cli_over_config() {
    let config = GeminiConfig {
        api_key: Some("from-config".to_string()),
        ..GeminiConfig::default()
    };
    assert_eq!(resolve_api_key(Some("from-cli"), &config).as_deref(), Some("from-cli"));
    assert_eq!(resolve_api_key(None, &config).as_deref(), Some("from-config"));
}

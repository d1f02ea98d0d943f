use rand::thread_rng;

use crate::gemini::client::GeminiClient;
use crate::gemini::prompt::{parse_selector_response, selector_prompt, test_case_prompt};
use crate::selector::builder::build_selectors;
use crate::selector::selector_model::{SelectorPair, SelectorSpec};
use crate::snippet::generator::generate_snippet;
use crate::snippet::snippet_model::{Framework, SnippetAction, SnippetSpec};
use crate::testdata::generator::{DataKind, generate_many};
use crate::transform::catalog;

// ============================================================================
// testcases subcommand
// ============================================================================

/// Generate test cases via the API. Returns whether generation succeeded.
pub fn cmd_testcases(
    feature: &str,
    client: &GeminiClient,
    api_key: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let Some(api_key) = api_key else {
        eprintln!("No API key provided (use --api-key, the config file, or $GEMINI_API_KEY)");
        return Ok(false);
    };

    if verbose > 0 {
        eprintln!("Generating test cases with {}...", client.model);
    }

    match client.generate(&test_case_prompt(feature), api_key) {
        Ok(text) => {
            println!("{}", text);
            Ok(true)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(false)
        }
    }
}

// ============================================================================
// selector subcommand
// ============================================================================

/// Build selectors manually, or ask the API when a description is given.
pub fn cmd_selector(
    describe: Option<&str>,
    spec: &SelectorSpec,
    client: &GeminiClient,
    api_key: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let pair = match describe {
        Some(description) => {
            let Some(api_key) = api_key else {
                eprintln!("No API key provided (use --api-key, the config file, or $GEMINI_API_KEY)");
                return Ok(false);
            };

            if verbose > 0 {
                eprintln!("Requesting selector suggestions from {}...", client.model);
            }

            match client.generate(&selector_prompt(description), api_key) {
                Ok(text) => parse_selector_response(&text),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return Ok(false);
                }
            }
        }
        None => build_selectors(spec),
    };

    print_selector_pair(&pair);
    Ok(true)
}

fn print_selector_pair(pair: &SelectorPair) {
    println!("CSS:   {}", pair.css);
    println!("XPath: {}", pair.xpath);
}

// ============================================================================
// snippet subcommand
// ============================================================================

pub fn cmd_snippet(
    selector: &str,
    action: SnippetAction,
    text: &str,
    framework: Framework,
) -> Result<(), Box<dyn std::error::Error>> {
    let spec = SnippetSpec {
        selector: selector.to_string(),
        action,
        text: text.to_string(),
        framework,
    };

    println!("{}", generate_snippet(&spec));
    Ok(())
}

// ============================================================================
// transform subcommand
// ============================================================================

/// Apply a named transform. Returns false for an unknown transform id.
pub fn cmd_transform(op: &str, input: &str) -> Result<bool, Box<dyn std::error::Error>> {
    match catalog::apply(op, input) {
        Some(output) => {
            println!("{}", output);
            Ok(true)
        }
        None => {
            eprintln!("Unknown transform: {}", op);
            eprintln!("Available transforms: {}", catalog::OPS.join(", "));
            Ok(false)
        }
    }
}

// ============================================================================
// testdata subcommand
// ============================================================================

pub fn cmd_testdata(
    kind: DataKind,
    count: usize,
    string_length: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = thread_rng();
    println!("{}", generate_many(kind, count, string_length, &mut rng));
    Ok(())
}

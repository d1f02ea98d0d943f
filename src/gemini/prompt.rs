use crate::selector::selector_model::SelectorPair;

/// Build the prompt for generating test cases from a feature description.
pub fn test_case_prompt(feature: &str) -> String {
    format!(
        r#"Generate comprehensive test cases for the following feature. Include positive tests, negative tests, edge cases, and boundary tests. Format the output clearly with test case numbers, descriptions, steps, and expected results.

Feature Description:
{}"#,
        feature
    )
}

/// Build the prompt asking for a CSS/XPath selector pair for a described element.
pub fn selector_prompt(description: &str) -> String {
    format!(
        r#"Given this description of a web element, provide ONLY two lines as output:
1. A CSS selector
2. An XPath selector

Element description: {}

Format your response EXACTLY as:
CSS: [selector]
XPath: [selector]"#,
        description
    )
}

/// Parse the model's selector answer back into a pair.
///
/// Scans for the first line containing `css:` and the first containing
/// `xpath:` (case-insensitive) and takes everything after the first colon.
/// A missing line leaves that field empty.
pub fn parse_selector_response(text: &str) -> SelectorPair {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

    let css = lines
        .iter()
        .find(|line| line.to_lowercase().contains("css:"))
        .map(|line| value_after_colon(line))
        .unwrap_or_default();

    let xpath = lines
        .iter()
        .find(|line| line.to_lowercase().contains("xpath:"))
        .map(|line| value_after_colon(line))
        .unwrap_or_default();

    SelectorPair { css, xpath }
}

fn value_after_colon(line: &str) -> String {
    match line.split_once(':') {
        Some((_, rest)) => rest.trim().to_string(),
        None => String::new(),
    }
}

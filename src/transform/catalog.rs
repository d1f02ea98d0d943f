use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Transform ids accepted by `apply`, in display order.
pub const OPS: [&str; 16] = [
    "base64-encode",
    "base64-decode",
    "url-encode",
    "url-decode",
    "uppercase",
    "lowercase",
    "title-case",
    "camel-case",
    "snake-case",
    "kebab-case",
    "reverse",
    "trim",
    "remove-spaces",
    "count-chars",
    "escape-html",
    "unescape-html",
];

/// Apply the named transform to `input`. Returns `None` for an unknown id.
///
/// Every transform yields a string for any input; malformed input (bad
/// Base64, undecodable percent-sequences) comes back as a human-readable
/// error string rather than a failure.
pub fn apply(op: &str, input: &str) -> Option<String> {
    let output = match op {
        "base64-encode" => base64_encode(input),
        "base64-decode" => base64_decode(input),
        "url-encode" => url_encode(input),
        "url-decode" => url_decode(input),
        "uppercase" => input.to_uppercase(),
        "lowercase" => input.to_lowercase(),
        "title-case" => title_case(input),
        "camel-case" => camel_case(input),
        "snake-case" => delimited_case(input, '_'),
        "kebab-case" => delimited_case(input, '-'),
        "reverse" => input.chars().rev().collect(),
        "trim" => input.trim().to_string(),
        "remove-spaces" => remove_spaces(input),
        "count-chars" => count_chars(input),
        "escape-html" => escape_html(input),
        "unescape-html" => unescape_html(input),
        _ => return None,
    };
    Some(output)
}

pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input)
}

pub fn base64_decode(input: &str) -> String {
    STANDARD
        .decode(input)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_else(|| "Error: Invalid Base64 string".to_string())
}

pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

pub fn url_decode(input: &str) -> String {
    match urlencoding::decode(input) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => "Error: Invalid URL encoded string".to_string(),
    }
}

/// Capitalize the first letter of each whitespace-delimited word and
/// lowercase the rest, preserving the original whitespace.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// First word lowercased, later words capitalized, all whitespace removed.
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (i, word) in input.split_whitespace().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    out
}

/// Shared body of snake-case and kebab-case: whitespace runs and uppercase
/// boundaries become the separator, everything lowercased, no leading or
/// doubled separator.
fn delimited_case(input: &str, sep: char) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        if c.is_whitespace() {
            if !out.is_empty() && !out.ends_with(sep) {
                out.push(sep);
            }
        } else if c.is_uppercase() {
            if !out.is_empty() && !out.ends_with(sep) {
                out.push(sep);
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn remove_spaces(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Three-line report: total chars, chars excluding whitespace, word count.
pub fn count_chars(input: &str) -> String {
    let total = input.chars().count();
    let without_spaces = input.chars().filter(|c| !c.is_whitespace()).count();
    let words = input.split_whitespace().count();

    format!(
        "Total: {}\nWithout spaces: {}\nWords: {}",
        total, without_spaces, words
    )
}

/// Ampersand first, so the ampersands introduced by the entities below are
/// not escaped again.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

pub fn unescape_html(input: &str) -> String {
    input
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
}

use crate::selector::selector_model::{SelectorPair, SelectorSpec};

/// Build a CSS/XPath selector pair from structured field input.
///
/// Fields are applied as a series of overrides: tag, then id, then classes,
/// then attribute. A final rule recombines tag + classes when neither id nor
/// attribute is present, and that rule keeps the tag name in the XPath while
/// the classes-only rule addresses `*`. Both outputs are empty when no field
/// is set.
pub fn build_selectors(spec: &SelectorSpec) -> SelectorPair {
    let tag = present(&spec.tag);
    let id = present(&spec.id);
    let attribute = present(&spec.attribute);
    let attr_value = present(&spec.attr_value);
    let classes: Vec<&str> = spec
        .classes
        .iter()
        .map(String::as_str)
        .filter(|c| !c.trim().is_empty())
        .collect();

    let mut css = String::new();
    let mut xpath = String::new();

    if let Some(tag) = tag {
        css = tag.to_string();
        xpath = format!("//{}", tag);
    }

    if let Some(id) = id {
        css = format!("#{}", id);
        xpath = format!("//*[@id=\"{}\"]", id);
    }

    if !classes.is_empty() {
        css = match tag {
            Some(tag) => format!("{}.{}", tag, classes.join(".")),
            None => format!(".{}", classes.join(".")),
        };
        xpath = if classes.len() == 1 {
            format!("//*[contains(@class, \"{}\")]", classes[0])
        } else {
            format!("//*[{}]", class_conditions(&classes))
        };
    }

    if let (Some(attribute), Some(value)) = (attribute, attr_value) {
        match tag {
            Some(tag) => {
                css = format!("{}[{}=\"{}\"]", tag, attribute, value);
                xpath = format!("//{}[@{}=\"{}\"]", tag, attribute, value);
            }
            None => {
                css = format!("[{}=\"{}\"]", attribute, value);
                xpath = format!("//*[@{}=\"{}\"]", attribute, value);
            }
        }
    } else if let Some(attribute) = attribute {
        match tag {
            Some(tag) => {
                css = format!("{}[{}]", tag, attribute);
                xpath = format!("//{}[@{}]", tag, attribute);
            }
            None => {
                css = format!("[{}]", attribute);
                xpath = format!("//*[@{}]", attribute);
            }
        }
    }

    // Tag + classes alone combine with the tag kept in the XPath
    if let Some(tag) = tag {
        if !classes.is_empty() && id.is_none() && attribute.is_none() {
            css = format!("{}.{}", tag, classes.join("."));
            xpath = format!("//{}[{}]", tag, class_conditions(&classes));
        }
    }

    SelectorPair { css, xpath }
}

fn class_conditions(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|c| format!("contains(@class, \"{}\")", c))
        .collect::<Vec<_>>()
        .join(" and ")
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

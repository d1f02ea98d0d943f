use crate::snippet::snippet_model::{Framework, SnippetAction, SnippetSpec};

/// Generate an automation code snippet for the requested framework and action.
///
/// Returns an empty string when the selector is empty. The selector is
/// treated as XPath when it starts with `//` or `(//`, otherwise as CSS;
/// only the Selenium bindings spell the locator strategy out, the remaining
/// frameworks accept either syntax in a single locator call.
pub fn generate_snippet(spec: &SnippetSpec) -> String {
    if spec.selector.is_empty() {
        return String::new();
    }

    let is_css = !spec.selector.starts_with("//") && !spec.selector.starts_with("(//");

    match spec.framework {
        Framework::SeleniumPython => selenium_python(&spec.selector, spec.action, &spec.text, is_css),
        Framework::SeleniumJava => selenium_java(&spec.selector, spec.action, &spec.text, is_css),
        Framework::PlaywrightJs => playwright_js(&spec.selector, spec.action, &spec.text),
        Framework::PlaywrightPython => playwright_python(&spec.selector, spec.action, &spec.text),
        Framework::Cypress => cypress(&spec.selector, spec.action, &spec.text),
        Framework::Webdriverio => webdriverio(&spec.selector, spec.action, &spec.text),
    }
}

fn selenium_python(sel: &str, action: SnippetAction, text: &str, is_css: bool) -> String {
    let locator = if is_css {
        format!("By.CSS_SELECTOR, \"{}\"", sel)
    } else {
        format!("By.XPATH, \"{}\"", sel)
    };

    match action {
        SnippetAction::Click => {
            format!("element = driver.find_element({})\nelement.click()", locator)
        }
        SnippetAction::Type => format!(
            "element = driver.find_element({})\nelement.send_keys(\"{}\")",
            locator, text
        ),
        SnippetAction::Clear => {
            format!("element = driver.find_element({})\nelement.clear()", locator)
        }
        SnippetAction::GetText => {
            format!("element = driver.find_element({})\ntext = element.text", locator)
        }
        SnippetAction::GetAttribute => format!(
            "element = driver.find_element({})\nvalue = element.get_attribute(\"{}\")",
            locator, text
        ),
        SnippetAction::IsVisible => format!(
            "element = driver.find_element({})\nis_visible = element.is_displayed()",
            locator
        ),
        SnippetAction::IsEnabled => format!(
            "element = driver.find_element({})\nis_enabled = element.is_enabled()",
            locator
        ),
    }
}

fn selenium_java(sel: &str, action: SnippetAction, text: &str, is_css: bool) -> String {
    let locator = if is_css {
        format!("By.cssSelector(\"{}\")", sel)
    } else {
        format!("By.xpath(\"{}\")", sel)
    };

    match action {
        SnippetAction::Click => format!(
            "WebElement element = driver.findElement({});\nelement.click();",
            locator
        ),
        SnippetAction::Type => format!(
            "WebElement element = driver.findElement({});\nelement.sendKeys(\"{}\");",
            locator, text
        ),
        SnippetAction::Clear => format!(
            "WebElement element = driver.findElement({});\nelement.clear();",
            locator
        ),
        SnippetAction::GetText => format!(
            "WebElement element = driver.findElement({});\nString text = element.getText();",
            locator
        ),
        SnippetAction::GetAttribute => format!(
            "WebElement element = driver.findElement({});\nString value = element.getAttribute(\"{}\");",
            locator, text
        ),
        SnippetAction::IsVisible => format!(
            "WebElement element = driver.findElement({});\nboolean isVisible = element.isDisplayed();",
            locator
        ),
        SnippetAction::IsEnabled => format!(
            "WebElement element = driver.findElement({});\nboolean isEnabled = element.isEnabled();",
            locator
        ),
    }
}

fn playwright_js(sel: &str, action: SnippetAction, text: &str) -> String {
    match action {
        SnippetAction::Click => format!("await page.locator('{}').click();", sel),
        SnippetAction::Type => format!("await page.locator('{}').fill('{}');", sel, text),
        SnippetAction::Clear => format!("await page.locator('{}').clear();", sel),
        SnippetAction::GetText => {
            format!("const text = await page.locator('{}').textContent();", sel)
        }
        SnippetAction::GetAttribute => format!(
            "const value = await page.locator('{}').getAttribute('{}');",
            sel, text
        ),
        SnippetAction::IsVisible => {
            format!("const isVisible = await page.locator('{}').isVisible();", sel)
        }
        SnippetAction::IsEnabled => {
            format!("const isEnabled = await page.locator('{}').isEnabled();", sel)
        }
    }
}

fn playwright_python(sel: &str, action: SnippetAction, text: &str) -> String {
    match action {
        SnippetAction::Click => format!("page.locator(\"{}\").click()", sel),
        SnippetAction::Type => format!("page.locator(\"{}\").fill(\"{}\")", sel, text),
        SnippetAction::Clear => format!("page.locator(\"{}\").clear()", sel),
        SnippetAction::GetText => format!("text = page.locator(\"{}\").text_content()", sel),
        SnippetAction::GetAttribute => format!(
            "value = page.locator(\"{}\").get_attribute(\"{}\")",
            sel, text
        ),
        SnippetAction::IsVisible => {
            format!("is_visible = page.locator(\"{}\").is_visible()", sel)
        }
        SnippetAction::IsEnabled => {
            format!("is_enabled = page.locator(\"{}\").is_enabled()", sel)
        }
    }
}

fn cypress(sel: &str, action: SnippetAction, text: &str) -> String {
    match action {
        SnippetAction::Click => format!("cy.get('{}').click();", sel),
        SnippetAction::Type => format!("cy.get('{}').type('{}');", sel, text),
        SnippetAction::Clear => format!("cy.get('{}').clear();", sel),
        SnippetAction::GetText => format!(
            "cy.get('{}').invoke('text').then((text) => {{\n  // Use text here\n}});",
            sel
        ),
        SnippetAction::GetAttribute => format!(
            "cy.get('{}').invoke('attr', '{}').then((value) => {{\n  // Use value here\n}});",
            sel, text
        ),
        SnippetAction::IsVisible => format!("cy.get('{}').should('be.visible');", sel),
        SnippetAction::IsEnabled => format!("cy.get('{}').should('be.enabled');", sel),
    }
}

fn webdriverio(sel: &str, action: SnippetAction, text: &str) -> String {
    let loc = format!("$('{}')", sel);

    match action {
        SnippetAction::Click => format!("await {}.click();", loc),
        SnippetAction::Type => format!("await {}.setValue('{}');", loc, text),
        SnippetAction::Clear => format!("await {}.clearValue();", loc),
        SnippetAction::GetText => format!("const text = await {}.getText();", loc),
        SnippetAction::GetAttribute => {
            format!("const value = await {}.getAttribute('{}');", loc, text)
        }
        SnippetAction::IsVisible => format!("const isVisible = await {}.isDisplayed();", loc),
        SnippetAction::IsEnabled => format!("const isEnabled = await {}.isEnabled();", loc),
    }
}

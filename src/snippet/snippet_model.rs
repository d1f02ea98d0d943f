use clap::ValueEnum;

/// Target automation framework for generated snippets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Framework {
    SeleniumPython,
    SeleniumJava,
    PlaywrightJs,
    PlaywrightPython,
    Cypress,
    Webdriverio,
}

impl Framework {
    pub const ALL: [Framework; 6] = [
        Framework::SeleniumPython,
        Framework::SeleniumJava,
        Framework::PlaywrightJs,
        Framework::PlaywrightPython,
        Framework::Cypress,
        Framework::Webdriverio,
    ];
}

/// Single UI action a snippet performs against a located element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnippetAction {
    Click,
    /// Type text into the element (uses the auxiliary text)
    #[value(alias = "type-text")]
    Type,
    Clear,
    #[value(alias = "getText")]
    GetText,
    /// Read an attribute (the auxiliary text names the attribute)
    #[value(alias = "getAttribute")]
    GetAttribute,
    #[value(alias = "isVisible")]
    IsVisible,
    #[value(alias = "isEnabled")]
    IsEnabled,
}

impl SnippetAction {
    pub const ALL: [SnippetAction; 7] = [
        SnippetAction::Click,
        SnippetAction::Type,
        SnippetAction::Clear,
        SnippetAction::GetText,
        SnippetAction::GetAttribute,
        SnippetAction::IsVisible,
        SnippetAction::IsEnabled,
    ];

    /// Actions that consume the auxiliary text field.
    pub fn needs_text(self) -> bool {
        matches!(self, SnippetAction::Type | SnippetAction::GetAttribute)
    }
}

/// Input tuple for snippet generation.
#[derive(Debug, Clone)]
pub struct SnippetSpec {
    pub selector: String,
    pub action: SnippetAction,
    /// Text to type or attribute name, depending on the action.
    pub text: String,
    pub framework: Framework,
}

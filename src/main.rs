use clap::Parser;
use qa_toolkit::cli::commands::{cmd_selector, cmd_snippet, cmd_testcases, cmd_testdata, cmd_transform};
use qa_toolkit::cli::config::{Cli, Commands, build_gemini_client, load_config, resolve_api_key};
use qa_toolkit::selector::selector_model::SelectorSpec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve Gemini settings: CLI > config > env > defaults
    let client = build_gemini_client(
        cli.gemini_endpoint.as_deref(),
        cli.gemini_model.as_deref(),
        &config.gemini,
        cli.verbose,
    );
    let api_key = resolve_api_key(cli.api_key.as_deref(), &config.gemini);

    match cli.command {
        Commands::Testcases { feature } => {
            let ok = cmd_testcases(&feature, &client, api_key.as_deref(), cli.verbose)?;
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Selector {
            describe,
            tag,
            id,
            classes,
            attribute,
            attr_value,
        } => {
            let spec = SelectorSpec {
                tag,
                id,
                classes: classes
                    .as_deref()
                    .map(SelectorSpec::split_classes)
                    .unwrap_or_default(),
                attribute,
                attr_value,
            };
            let ok = cmd_selector(
                describe.as_deref(),
                &spec,
                &client,
                api_key.as_deref(),
                cli.verbose,
            )?;
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Snippet {
            selector,
            action,
            text,
            framework,
        } => {
            cmd_snippet(&selector, action, &text, framework)?;
        }
        Commands::Transform { op, input } => {
            let ok = cmd_transform(&op, &input)?;
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Testdata {
            kind,
            count,
            length,
        } => {
            let count = count.unwrap_or(config.testdata.count);
            let length = length.unwrap_or(config.testdata.string_length);
            cmd_testdata(kind, count, length)?;
        }
    }

    Ok(())
}

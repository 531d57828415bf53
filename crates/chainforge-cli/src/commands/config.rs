//! `chainforge config`: print the active configuration.

use crate::{
    cli::{ConfigArgs, ConfigFormat},
    config::ToolConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ConfigArgs, config: &ToolConfig, output: &OutputManager) -> CliResult<()> {
    let rendered = render(config, args.format)?;
    output.data(rendered.trim_end())?;
    Ok(())
}

fn render(config: &ToolConfig, format: ConfigFormat) -> CliResult<String> {
    match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| {
            CliError::ConfigSerialization {
                source: Box::new(e),
            }
        }),
        ConfigFormat::Toml => {
            toml::to_string_pretty(config).map_err(|e| CliError::ConfigSerialization {
                source: Box::new(e),
            })
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

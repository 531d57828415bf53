//! Implementation of the `chainforge import` command.
//!
//! Translates CLI arguments into a [`ProjectRequest`] and hands it to the
//! shared project flow. No business logic lives here.

use tracing::instrument;

use chainforge_core::{application::ProjectRequest, domain::ProjectIntent};

use crate::{
    cli::{GlobalArgs, ImportArgs},
    config::ToolConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `chainforge import` command.
#[instrument(skip_all, fields(solidity = ?args.solidity_path))]
pub fn execute(
    args: ImportArgs,
    global: &GlobalArgs,
    config: &ToolConfig,
    output: &OutputManager,
) -> CliResult<()> {
    output.header("Importing Solidity contracts")?;
    super::create_project(request(args, config), global, output)?;
    Ok(())
}

fn request(args: ImportArgs, config: &ToolConfig) -> ProjectRequest {
    ProjectRequest {
        intent: ProjectIntent::Import,
        languages: args.project.languages(),
        project_name: args.project.project_name,
        package_name: args.project.package_name,
        output_dir: args.project.output_dir,
        solidity_path: args.solidity_path,
        generate_tests: args.generate_tests,
        default_wallet: config.default_wallet(),
    }
}

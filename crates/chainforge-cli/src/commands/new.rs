//! Implementation of the `chainforge new` command.

use tracing::instrument;

use chainforge_core::{application::ProjectRequest, domain::ProjectIntent};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::ToolConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `chainforge new` command.
///
/// Always builds around the bundled sample contract and always generates
/// tests.
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: &GlobalArgs,
    config: &ToolConfig,
    output: &OutputManager,
) -> CliResult<()> {
    output.header("Creating a new project")?;
    super::create_project(request(args, config), global, output)?;
    Ok(())
}

fn request(args: NewArgs, config: &ToolConfig) -> ProjectRequest {
    ProjectRequest {
        intent: ProjectIntent::New,
        languages: args.project.languages(),
        project_name: args.project.project_name,
        package_name: args.project.package_name,
        output_dir: args.project.output_dir,
        solidity_path: None,
        generate_tests: true,
        default_wallet: config.default_wallet(),
    }
}
